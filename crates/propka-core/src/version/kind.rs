use phf::{Map, phf_map};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The algorithm versions a calculation run can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum VersionKind {
    /// Group-type hydrogen-bond tables for side chains and backbone.
    #[default]
    Standard,
    /// A single element-pair hydrogen-bond table for every interaction.
    SimpleHb,
    /// Group-type tables between protein atoms, element tables (with
    /// hydrogens mapped to their heavy atom) once a ligand is involved.
    LigandAware,
    /// The 3.0-era binding: no backbone hydrogen bonds, no electrostatic or
    /// hydrogen-bond interaction models, 30-style protonation.
    Propka30,
}

static VERSION_NAMES: Map<&'static str, VersionKind> = phf_map! {
    "standard" => VersionKind::Standard,
    "version-a" => VersionKind::Standard,
    "versiona" => VersionKind::Standard,
    "simple-hb" => VersionKind::SimpleHb,
    "simple-element" => VersionKind::SimpleHb,
    "ligand-aware" => VersionKind::LigandAware,
    "element-based-ligand-interactions" => VersionKind::LigandAware,
    "propka30" => VersionKind::Propka30,
    "propka-30" => VersionKind::Propka30,
    "v30" => VersionKind::Propka30,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown calculation version: '{0}'")]
pub struct UnknownVersionError(pub String);

impl VersionKind {
    pub const ALL: [VersionKind; 4] = [
        Self::Standard,
        Self::SimpleHb,
        Self::LigandAware,
        Self::Propka30,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::SimpleHb => "simple-hb",
            Self::LigandAware => "ligand-aware",
            Self::Propka30 => "propka30",
        }
    }
}

impl FromStr for VersionKind {
    type Err = UnknownVersionError;

    /// Accepts the canonical names and their historical aliases, ignoring case
    /// and treating `_` and spaces like `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        VERSION_NAMES
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| UnknownVersionError(s.to_string()))
    }
}

impl TryFrom<String> for VersionKind {
    type Error = UnknownVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
