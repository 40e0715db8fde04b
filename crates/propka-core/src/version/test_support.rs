//! A minimal molecular model and interaction catalog for exercising versions.

use super::Version;
use super::interactions::InteractionModels;
use crate::core::models::atom::Atom;
use crate::core::models::model::MolecularModel;
use crate::core::parameters::{Cutoff, ParameterSet, ParameterSetBuilder};
use std::sync::Arc;

pub(crate) struct StubModel;

#[derive(Debug, Clone)]
pub(crate) struct StubGroup {
    pub atom: Arc<Atom>,
    pub charge: f64,
    pub buried_volume: usize,
}

impl StubGroup {
    pub fn new(atom: Atom, charge: f64, buried_volume: usize) -> Self {
        Self {
            atom: Arc::new(atom),
            charge,
            buried_volume,
        }
    }
}

pub(crate) struct StubConformation {
    pub groups: Vec<StubGroup>,
}

#[derive(Debug, Default)]
pub(crate) struct StubContainer {
    pub steps: Vec<&'static str>,
}

impl MolecularModel for StubModel {
    type Atom = Atom;
    type Group = StubGroup;
    type Conformation = StubConformation;
    type Container = StubContainer;
}

fn desolvation(parameters: &ParameterSet, group: &StubGroup) -> f64 {
    parameters.scalar("desolvation_prefactor").unwrap_or(0.0) * group.buried_volume as f64
}

fn pair_weight(parameters: &ParameterSet, volume1: usize, volume2: usize) -> f64 {
    let max_volume = parameters.scalar("max_volume").unwrap_or(1000.0);
    ((volume1 + volume2) as f64 / max_volume).min(1.0)
}

fn hydrogen_bond_energy(distance: f64, dpka_max: f64, cutoff: Cutoff, f_angle: f64) -> f64 {
    let scale = if distance <= cutoff.low {
        1.0
    } else if distance >= cutoff.high {
        0.0
    } else {
        (cutoff.high - distance) / (cutoff.high - cutoff.low)
    };
    dpka_max * scale * f_angle
}

fn hydrogen_bond_interaction(
    group1: &StubGroup,
    group2: &StubGroup,
    version: &Version<StubModel>,
) -> Option<f64> {
    let parameters = version.get_hydrogen_bond_parameters(&group1.atom, &group2.atom)?;
    let distance = group1.atom.distance_to(&group2.atom);
    Some(version.calculate_side_chain_energy(
        distance,
        parameters.dpka_max,
        parameters.cutoff,
        1.0,
        1.0,
    ))
}

fn electrostatic_interaction(
    group1: &StubGroup,
    group2: &StubGroup,
    distance: f64,
    version: &Version<StubModel>,
) -> Option<f64> {
    if !version.check_coulomb_pair(group1, group2, distance) {
        return None;
    }
    let weight = version.calculate_pair_weight(group1.buried_volume, group2.buried_volume);
    Some(group1.charge * group2.charge * version.calculate_coulomb_energy(distance, weight))
}

fn check_coulomb_pair(
    parameters: &ParameterSet,
    group1: &StubGroup,
    group2: &StubGroup,
    distance: f64,
) -> bool {
    let max_distance = parameters.scalar("coulomb_cutoff").unwrap_or(10.0);
    group1.charge != 0.0 && group2.charge != 0.0 && distance < max_distance
}

fn coulomb_energy(distance: f64, weight: f64, parameters: &ParameterSet) -> f64 {
    let dielectric = parameters.scalar("dielectric").unwrap_or(80.0);
    244.12 * weight / (dielectric * distance)
}

fn backbone_reorganization(parameters: &ParameterSet, conformation: &StubConformation) -> f64 {
    parameters.scalar("backbone_reorganization").unwrap_or(0.0) * conformation.groups.len() as f64
}

fn check_exceptions(
    _version: &Version<StubModel>,
    group1: &StubGroup,
    group2: &StubGroup,
) -> Option<f64> {
    (group1.atom.group_type == "COO" && group2.atom.group_type == "COO").then_some(2.4)
}

fn setup_bonding_and_protonation(_parameters: &ParameterSet, container: &mut StubContainer) {
    container.steps.push("protonation");
}

fn setup_bonding_and_protonation_30_style(
    _parameters: &ParameterSet,
    container: &mut StubContainer,
) {
    container.steps.push("protonation-30");
}

fn setup_bonding(_parameters: &ParameterSet, container: &mut StubContainer) {
    container.steps.push("bonding");
}

pub(crate) fn stub_models() -> InteractionModels<StubModel> {
    InteractionModels {
        radial_volume_desolvation: desolvation,
        calculate_pair_weight: pair_weight,
        hydrogen_bond_energy,
        hydrogen_bond_interaction,
        electrostatic_interaction,
        check_coulomb_pair,
        coulomb_energy,
        backbone_reorganization,
        check_exceptions,
        setup_bonding_and_protonation,
        setup_bonding_and_protonation_30_style,
        setup_bonding,
    }
}

pub(crate) fn sample_parameters() -> Arc<ParameterSet> {
    Arc::new(
        ParameterSetBuilder::new()
            .sidechain_interaction("COO", "HIS", 0.85)
            .sidechain_cutoff("COO", "HIS", 2.0, 3.0)
            .sidechain_interaction("COO", "COO", 0.8)
            .sidechain_cutoff("COO", "COO", 2.5, 3.5)
            .hydrogen_bond("O", "N", 0.8, 2.5, 3.5)
            .hydrogen_bond("O", "O", 0.7, 2.4, 3.4)
            .backbone_co("ASN", 0.5, 2.0, 3.0)
            .backbone_nh("COO", 1.2, 2.2, 3.2)
            .scalar("desolvation_prefactor", -0.01)
            .scalar("dielectric", 80.0)
            .scalar("backbone_reorganization", 0.5)
            .build(),
    )
}
