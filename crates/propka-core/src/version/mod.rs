//! # Version Module
//!
//! A [`Version`] is the single object a calculation driver talks to for every
//! model-dependent step of a pKa run. It is built once from a [`VersionKind`],
//! a shared [`ParameterSet`] and the driver's [`InteractionModels`], and then
//! answers the same fixed set of operations whichever kind was chosen:
//!
//! - **Model forwarding** - desolvation, pair weights, side-chain and backbone
//!   hydrogen-bond energies, electrostatics, Coulomb energies, backbone
//!   reorganization, exceptions and structure preparation are forwarded to the
//!   function the kind bound at construction.
//! - **Parameter resolution** - [`Version::get_hydrogen_bond_parameters`] and
//!   [`Version::get_backbone_hydrogen_bond_parameters`] apply the kind's
//!   [`HydrogenBondPolicy`].
//!
//! Steps a kind never bound (for example backbone hydrogen bonds in
//! [`VersionKind::Propka30`]) fail with [`VersionError::UnboundOperation`].
//! A missing table entry is not an error: it resolves to `None` and the
//! driver decides what that pair contributes.

pub(crate) mod bindings;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod interactions;
pub mod kind;
pub mod policy;

#[cfg(test)]
pub(crate) mod test_support;

use crate::core::models::model::MolecularModel;
use crate::core::parameters::{Cutoff, HydrogenBondParameters, ParameterSet};
use bindings::Bindings;
use diagnostics::Diagnostics;
use error::{Operation, VersionError};
use interactions::InteractionModels;
use kind::VersionKind;
use policy::HydrogenBondPolicy;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

pub struct Version<M: MolecularModel> {
    kind: VersionKind,
    parameters: Arc<ParameterSet>,
    bindings: Bindings<M>,
    sidechain_policy: HydrogenBondPolicy,
    backbone_policy: Option<HydrogenBondPolicy>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl<M: MolecularModel> Version<M> {
    /// Binds `kind`'s implementation functions and hydrogen-bond policies.
    pub fn new(
        kind: VersionKind,
        parameters: Arc<ParameterSet>,
        models: &InteractionModels<M>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        let (sidechain_policy, backbone_policy) = match kind {
            VersionKind::Standard => (
                HydrogenBondPolicy::Standard,
                Some(HydrogenBondPolicy::Standard),
            ),
            VersionKind::SimpleHb => {
                diagnostics.info("Using simple hb model");
                (
                    HydrogenBondPolicy::SimpleElement,
                    Some(HydrogenBondPolicy::SimpleElement),
                )
            }
            VersionKind::LigandAware => {
                diagnostics.info("Using detailed SC model!");
                (
                    HydrogenBondPolicy::LigandAware,
                    Some(HydrogenBondPolicy::LigandAware),
                )
            }
            VersionKind::Propka30 => (HydrogenBondPolicy::Standard, None),
        };
        debug!(
            version = %kind,
            ?sidechain_policy,
            ?backbone_policy,
            "Bound calculation version"
        );

        Self {
            kind,
            parameters,
            bindings: Bindings::for_kind(kind, models),
            sidechain_policy,
            backbone_policy,
            diagnostics,
        }
    }

    pub fn kind(&self) -> VersionKind {
        self.kind
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    // desolvation

    pub fn calculate_desolvation(&self, group: &M::Group) -> f64 {
        (self.bindings.desolvation)(&self.parameters, group)
    }

    pub fn calculate_pair_weight(&self, num_volume1: usize, num_volume2: usize) -> f64 {
        (self.bindings.pair_weight)(&self.parameters, num_volume1, num_volume2)
    }

    // side chains

    pub fn hydrogen_bond_interaction(
        &self,
        group1: &M::Group,
        group2: &M::Group,
    ) -> Result<Option<f64>, VersionError> {
        let model = self.bound(
            self.bindings.hydrogen_bond_interaction,
            Operation::HydrogenBondInteraction,
        )?;
        Ok(model(group1, group2, self))
    }

    /// Side-chain hydrogen-bond energy. `weight` is accepted for interface
    /// stability and ignored by every current model.
    pub fn calculate_side_chain_energy(
        &self,
        distance: f64,
        dpka_max: f64,
        cutoff: Cutoff,
        _weight: f64,
        f_angle: f64,
    ) -> f64 {
        (self.bindings.sidechain_interaction)(distance, dpka_max, cutoff, f_angle)
    }

    pub fn get_hydrogen_bond_parameters(
        &self,
        atom1: &M::Atom,
        atom2: &M::Atom,
    ) -> Option<HydrogenBondParameters> {
        self.sidechain_policy
            .sidechain(&self.parameters, atom1, atom2, self.diagnostics.as_ref())
    }

    // backbone hydrogen bonds

    pub fn calculate_backbone_energy(
        &self,
        distance: f64,
        dpka_max: f64,
        cutoff: Cutoff,
        f_angle: f64,
    ) -> Result<f64, VersionError> {
        let model = self.bound(
            self.bindings.backbone_interaction,
            Operation::BackboneEnergy,
        )?;
        Ok(model(distance, dpka_max, cutoff, f_angle))
    }

    /// `Ok(None)` when the tables hold nothing for the pair; `Err` when this
    /// version does not model backbone hydrogen bonds at all.
    pub fn get_backbone_hydrogen_bond_parameters(
        &self,
        backbone_atom: &M::Atom,
        atom: &M::Atom,
    ) -> Result<Option<HydrogenBondParameters>, VersionError> {
        let policy = self.bound(
            self.backbone_policy,
            Operation::BackboneHydrogenBondParameters,
        )?;
        Ok(policy.backbone(
            &self.parameters,
            backbone_atom,
            atom,
            self.diagnostics.as_ref(),
        ))
    }

    // coulomb

    pub fn electrostatic_interaction(
        &self,
        group1: &M::Group,
        group2: &M::Group,
        distance: f64,
    ) -> Result<Option<f64>, VersionError> {
        let model = self.bound(
            self.bindings.electrostatic_interaction,
            Operation::ElectrostaticInteraction,
        )?;
        Ok(model(group1, group2, distance, self))
    }

    pub fn calculate_coulomb_energy(&self, distance: f64, weight: f64) -> f64 {
        (self.bindings.coulomb_interaction)(distance, weight, &self.parameters)
    }

    pub fn check_coulomb_pair(&self, group1: &M::Group, group2: &M::Group, distance: f64) -> bool {
        (self.bindings.check_coulomb_pair)(&self.parameters, group1, group2, distance)
    }

    // backbone re-organisation

    pub fn calculate_backbone_reorganization(&self, conformation: &M::Conformation) -> f64 {
        (self.bindings.backbone_reorganization)(&self.parameters, conformation)
    }

    // exceptions

    pub fn check_exceptions(&self, group1: &M::Group, group2: &M::Group) -> Option<f64> {
        (self.bindings.exception_check)(self, group1, group2)
    }

    // structure preparation

    pub fn setup_bonding_and_protonation(&self, container: &mut M::Container) {
        (self.bindings.molecular_preparation)(&self.parameters, container)
    }

    pub fn setup_bonding(&self, container: &mut M::Container) -> Result<(), VersionError> {
        let prepare = self.bound(self.bindings.prepare_bonds, Operation::SetupBonding)?;
        prepare(&self.parameters, container);
        Ok(())
    }

    fn bound<T>(&self, binding: Option<T>, operation: Operation) -> Result<T, VersionError> {
        binding.ok_or_else(|| {
            error!(
                version = %self.kind,
                %operation,
                "Requested an operation this calculation version does not bind"
            );
            VersionError::UnboundOperation {
                version: self.kind,
                operation,
            }
        })
    }
}

impl<M: MolecularModel> Clone for Version<M> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            parameters: Arc::clone(&self.parameters),
            bindings: self.bindings,
            sidechain_policy: self.sidechain_policy,
            backbone_policy: self.backbone_policy,
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }
}

impl<M: MolecularModel> fmt::Debug for Version<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Version")
            .field("kind", &self.kind)
            .field("sidechain_policy", &self.sidechain_policy)
            .field("backbone_policy", &self.backbone_policy)
            .finish_non_exhaustive()
    }
}
