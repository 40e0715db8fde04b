//! The catalog of interaction-model functions a version can bind.
//!
//! The numeric models themselves (radial-volume desolvation, Coulomb's law,
//! the hydrogen-bond energy curve, ...) belong to the calculation driver. It
//! hands them over as plain function pointers in an [`InteractionModels`]
//! value, and each [`Version`] picks the subset its algorithm uses.

use super::Version;
use crate::core::models::model::MolecularModel;
use crate::core::parameters::{Cutoff, ParameterSet};

type Group<M> = <M as MolecularModel>::Group;

/// Desolvation pKa shift of a group.
pub type DesolvationFn<M> = fn(&ParameterSet, &Group<M>) -> f64;

/// Combined weight of two buried-volume counts.
pub type PairWeightFn = fn(&ParameterSet, usize, usize) -> f64;

/// Hydrogen-bond energy at `distance` given `dpka_max`, the cutoff bounds and
/// an angular factor.
pub type HydrogenBondEnergyFn = fn(f64, f64, Cutoff, f64) -> f64;

/// Side-chain hydrogen-bond interaction between two groups. The version is
/// passed along so the model can resolve parameters through it.
pub type HydrogenBondInteractionFn<M> = fn(&Group<M>, &Group<M>, &Version<M>) -> Option<f64>;

/// Electrostatic interaction between two groups at a distance.
pub type ElectrostaticInteractionFn<M> = fn(&Group<M>, &Group<M>, f64, &Version<M>) -> Option<f64>;

/// Coulomb energy for a distance and pair weight.
pub type CoulombEnergyFn = fn(f64, f64, &ParameterSet) -> f64;

/// Whether two groups at a distance should interact electrostatically.
pub type CoulombPairCheckFn<M> = fn(&ParameterSet, &Group<M>, &Group<M>, f64) -> bool;

/// Backbone reorganization energy for a conformation.
pub type BackboneReorganizationFn<M> =
    fn(&ParameterSet, &<M as MolecularModel>::Conformation) -> f64;

/// Exception value for a group pair, or `None` when no exception applies.
pub type ExceptionCheckFn<M> = fn(&Version<M>, &Group<M>, &Group<M>) -> Option<f64>;

/// Bonding and protonation setup applied to a whole structure.
pub type MolecularPreparationFn<M> = fn(&ParameterSet, &mut <M as MolecularModel>::Container);

/// Every implementation function a version may choose from.
pub struct InteractionModels<M: MolecularModel> {
    pub radial_volume_desolvation: DesolvationFn<M>,
    pub calculate_pair_weight: PairWeightFn,
    pub hydrogen_bond_energy: HydrogenBondEnergyFn,
    pub hydrogen_bond_interaction: HydrogenBondInteractionFn<M>,
    pub electrostatic_interaction: ElectrostaticInteractionFn<M>,
    pub check_coulomb_pair: CoulombPairCheckFn<M>,
    pub coulomb_energy: CoulombEnergyFn,
    pub backbone_reorganization: BackboneReorganizationFn<M>,
    pub check_exceptions: ExceptionCheckFn<M>,
    pub setup_bonding_and_protonation: MolecularPreparationFn<M>,
    pub setup_bonding_and_protonation_30_style: MolecularPreparationFn<M>,
    pub setup_bonding: MolecularPreparationFn<M>,
}

impl<M: MolecularModel> Clone for InteractionModels<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MolecularModel> Copy for InteractionModels<M> {}
