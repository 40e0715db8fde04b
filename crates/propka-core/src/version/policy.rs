use super::diagnostics::Diagnostics;
use crate::core::models::atom::AtomView;
use crate::core::parameters::{HydrogenBondParameters, ParameterSet};
use crate::core::utils::elements::BackboneRole;
use tracing::trace;

/// How hydrogen-bond parameters are resolved for an atom pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HydrogenBondPolicy {
    /// Group-type lookups in the side-chain and backbone tables.
    Standard,
    /// Element-pair lookups in the `hydrogen_bonds` table only.
    SimpleElement,
    /// [`Standard`](Self::Standard) between protein atoms; element-pair
    /// lookups with hydrogens replaced by their heavy atom once a ligand
    /// atom takes part.
    LigandAware,
}

impl HydrogenBondPolicy {
    /// Resolves `(dpka_max, cutoff)` for a side-chain pair.
    pub fn sidechain<A: AtomView>(
        self,
        parameters: &ParameterSet,
        atom1: &A,
        atom2: &A,
        diagnostics: &dyn Diagnostics,
    ) -> Option<HydrogenBondParameters> {
        match self {
            Self::Standard => group_type_parameters(parameters, atom1, atom2),
            Self::SimpleElement => element_parameters(parameters, atom1.element(), atom2.element()),
            Self::LigandAware => {
                if !atom1.is_heteroatom() && !atom2.is_heteroatom() {
                    return group_type_parameters(parameters, atom1, atom2);
                }
                let (element1, element2) = heavy_atom_elements(atom1, atom2, diagnostics)?;
                element_parameters(parameters, element1, element2)
            }
        }
    }

    /// Resolves parameters between a backbone atom and a partner atom.
    pub fn backbone<A: AtomView>(
        self,
        parameters: &ParameterSet,
        backbone_atom: &A,
        atom: &A,
        diagnostics: &dyn Diagnostics,
    ) -> Option<HydrogenBondParameters> {
        match self {
            Self::Standard => backbone_table_parameters(parameters, backbone_atom, atom),
            Self::SimpleElement => {
                element_parameters(parameters, backbone_atom.element(), atom.element())
            }
            Self::LigandAware => {
                if !atom.is_heteroatom() {
                    return backbone_table_parameters(parameters, backbone_atom, atom);
                }
                // an orphaned hydrogen has already been reported
                let (element1, element2) = heavy_atom_elements(backbone_atom, atom, diagnostics)?;
                let resolved = element_parameters(parameters, element1, element2);
                if resolved.is_none() {
                    diagnostics.info(&format!(
                        "Could not determine backbone interaction parameters for: {} {}",
                        backbone_atom.describe(),
                        atom.describe()
                    ));
                }
                resolved
            }
        }
    }
}

/// The element used for table lookups: a hydrogen stands in for its first
/// bonded neighbour, every other atom for itself. `None` for a hydrogen with
/// no neighbours.
pub fn effective_element<A: AtomView>(atom: &A) -> Option<&str> {
    if atom.is_hydrogen() {
        atom.bonded_atoms().next().map(|heavy| heavy.element())
    } else {
        Some(atom.element())
    }
}

fn heavy_atom_elements<'a, A: AtomView>(
    atom1: &'a A,
    atom2: &'a A,
    diagnostics: &dyn Diagnostics,
) -> Option<(&'a str, &'a str)> {
    let resolve = |atom: &'a A| {
        let element = effective_element(atom);
        if element.is_none() {
            diagnostics.info(&format!(
                "Hydrogen {} has no bonded heavy atom; skipping hydrogen-bond parameters",
                atom.describe()
            ));
        }
        element
    };
    Some((resolve(atom1)?, resolve(atom2)?))
}

fn group_type_parameters<A: AtomView>(
    parameters: &ParameterSet,
    atom1: &A,
    atom2: &A,
) -> Option<HydrogenBondParameters> {
    let (group1, group2) = (atom1.group_type(), atom2.group_type());
    let dpka_max = parameters.sidechain_interaction.get(group1, group2);
    let cutoff = parameters.sidechain_cutoffs.get(group1, group2);
    match (dpka_max, cutoff) {
        (Some(&dpka_max), Some(&cutoff)) => Some(HydrogenBondParameters::new(dpka_max, cutoff)),
        _ => {
            trace!(group1, group2, "No side-chain hydrogen-bond parameters");
            None
        }
    }
}

fn element_parameters(
    parameters: &ParameterSet,
    element1: &str,
    element2: &str,
) -> Option<HydrogenBondParameters> {
    let found = parameters.hydrogen_bonds.get(element1, element2).copied();
    if found.is_none() {
        trace!(element1, element2, "No element hydrogen-bond parameters");
    }
    found
}

fn backbone_table_parameters<A: AtomView>(
    parameters: &ParameterSet,
    backbone_atom: &A,
    atom: &A,
) -> Option<HydrogenBondParameters> {
    let table = match BackboneRole::from_group_type(backbone_atom.group_type())? {
        BackboneRole::Carbonyl => &parameters.backbone_co_hydrogen_bond,
        BackboneRole::Amide => &parameters.backbone_nh_hydrogen_bond,
    };
    table.get(atom.group_type()).copied()
}
