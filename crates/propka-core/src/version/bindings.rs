use super::interactions::{
    BackboneReorganizationFn, CoulombEnergyFn, CoulombPairCheckFn, DesolvationFn,
    ElectrostaticInteractionFn, ExceptionCheckFn, HydrogenBondEnergyFn, HydrogenBondInteractionFn,
    InteractionModels, MolecularPreparationFn, PairWeightFn,
};
use super::kind::VersionKind;
use crate::core::models::model::MolecularModel;

/// The implementation functions one version calls, fixed at construction.
/// `None` marks a calculation step the version does not implement.
pub(crate) struct Bindings<M: MolecularModel> {
    pub molecular_preparation: MolecularPreparationFn<M>,
    pub prepare_bonds: Option<MolecularPreparationFn<M>>,
    pub desolvation: DesolvationFn<M>,
    pub pair_weight: PairWeightFn,
    pub sidechain_interaction: HydrogenBondEnergyFn,
    pub hydrogen_bond_interaction: Option<HydrogenBondInteractionFn<M>>,
    pub electrostatic_interaction: Option<ElectrostaticInteractionFn<M>>,
    pub check_coulomb_pair: CoulombPairCheckFn<M>,
    pub coulomb_interaction: CoulombEnergyFn,
    pub backbone_interaction: Option<HydrogenBondEnergyFn>,
    pub backbone_reorganization: BackboneReorganizationFn<M>,
    pub exception_check: ExceptionCheckFn<M>,
}

impl<M: MolecularModel> Bindings<M> {
    pub fn for_kind(kind: VersionKind, models: &InteractionModels<M>) -> Self {
        match kind {
            VersionKind::Standard | VersionKind::SimpleHb | VersionKind::LigandAware => {
                Self::general(models)
            }
            VersionKind::Propka30 => Self::propka30(models),
        }
    }

    /// The binding shared by the standard version and its refinements.
    fn general(models: &InteractionModels<M>) -> Self {
        Self {
            molecular_preparation: models.setup_bonding_and_protonation,
            prepare_bonds: Some(models.setup_bonding),
            desolvation: models.radial_volume_desolvation,
            pair_weight: models.calculate_pair_weight,
            sidechain_interaction: models.hydrogen_bond_energy,
            hydrogen_bond_interaction: Some(models.hydrogen_bond_interaction),
            electrostatic_interaction: Some(models.electrostatic_interaction),
            check_coulomb_pair: models.check_coulomb_pair,
            coulomb_interaction: models.coulomb_energy,
            backbone_interaction: Some(models.hydrogen_bond_energy),
            backbone_reorganization: models.backbone_reorganization,
            exception_check: models.check_exceptions,
        }
    }

    fn propka30(models: &InteractionModels<M>) -> Self {
        Self {
            molecular_preparation: models.setup_bonding_and_protonation_30_style,
            prepare_bonds: None,
            desolvation: models.radial_volume_desolvation,
            pair_weight: models.calculate_pair_weight,
            sidechain_interaction: models.hydrogen_bond_energy,
            hydrogen_bond_interaction: None,
            electrostatic_interaction: None,
            check_coulomb_pair: models.check_coulomb_pair,
            coulomb_interaction: models.coulomb_energy,
            backbone_interaction: None,
            backbone_reorganization: models.backbone_reorganization,
            exception_check: models.check_exceptions,
        }
    }
}

impl<M: MolecularModel> Clone for Bindings<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MolecularModel> Copy for Bindings<M> {}
