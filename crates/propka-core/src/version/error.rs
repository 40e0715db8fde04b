use super::kind::VersionKind;
use std::fmt;
use thiserror::Error;

/// Facade operations that not every version binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    HydrogenBondInteraction,
    ElectrostaticInteraction,
    BackboneEnergy,
    BackboneHydrogenBondParameters,
    SetupBonding,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HydrogenBondInteraction => "hydrogen_bond_interaction",
            Self::ElectrostaticInteraction => "electrostatic_interaction",
            Self::BackboneEnergy => "calculate_backbone_energy",
            Self::BackboneHydrogenBondParameters => "get_backbone_hydrogen_bond_parameters",
            Self::SetupBonding => "setup_bonding",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The driver asked a version for a calculation step it does not implement.
    #[error("Operation '{operation}' is not bound in calculation version '{version}'")]
    UnboundOperation {
        version: VersionKind,
        operation: Operation,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_operation_message_names_version_and_operation() {
        let error = VersionError::UnboundOperation {
            version: VersionKind::Propka30,
            operation: Operation::BackboneHydrogenBondParameters,
        };
        assert_eq!(
            error.to_string(),
            "Operation 'get_backbone_hydrogen_bond_parameters' is not bound in calculation version 'propka30'"
        );
    }
}
