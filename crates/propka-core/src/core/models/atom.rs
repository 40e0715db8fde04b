use crate::core::utils::elements;
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Distinguishes protein atoms from atoms that belong to a ligand or other
/// non-protein entity.
///
/// Hydrogen-bond parameter resolution switches from group-type tables to
/// element tables as soon as one partner is a heteroatom, so this flag is
/// consulted on every atom pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    /// A protein atom (`ATOM` record).
    #[default]
    Atom,
    /// A ligand atom (`HETATM` record).
    Hetatm,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid atom record type: '{0}'")]
pub struct ParseRecordTypeError(pub String);

impl FromStr for RecordType {
    type Err = ParseRecordTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atom" => Ok(Self::Atom),
            "hetatm" => Ok(Self::Hetatm),
            _ => Err(ParseRecordTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Atom => "atom",
            Self::Hetatm => "hetatm",
        })
    }
}

/// Read-only view of an atom as seen by the parameter-resolution policies.
///
/// The structural model that owns the atoms lives outside this crate; any type
/// that can report its element, group type, record type and covalent
/// neighbours can take part in hydrogen-bond parameter resolution.
pub trait AtomView {
    /// Chemical element symbol (e.g. `"O"`, `"N"`, `"H"`).
    fn element(&self) -> &str;

    /// Categorical group label (a side-chain category, or `BBC`/`BBN` for
    /// backbone roles). Atoms outside any group report an empty label.
    fn group_type(&self) -> &str;

    fn record_type(&self) -> RecordType;

    /// Directly bonded neighbours in their stored order. For a hydrogen the
    /// first entry is its covalent heavy-atom partner.
    fn bonded_atoms(&self) -> impl Iterator<Item = &Self>;

    fn is_hydrogen(&self) -> bool {
        elements::is_hydrogen(self.element())
    }

    fn is_heteroatom(&self) -> bool {
        self.record_type() == RecordType::Hetatm
    }

    /// Short human-readable label used in diagnostics.
    fn describe(&self) -> String {
        format!(
            "{}[{}:{}]",
            self.record_type(),
            self.element(),
            self.group_type()
        )
    }
}

/// A self-contained atom record implementing [`AtomView`].
///
/// Neighbours are shared through [`Arc`] so that a hydrogen can point at its
/// heavy atom while the atoms stay `Send + Sync` for concurrent evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g. "OD1", "HD22").
    pub name: String,
    /// The chemical element symbol.
    pub element: String,
    /// The group type this atom belongs to, empty if none.
    pub group_type: String,
    /// Whether the atom is a protein atom or a heteroatom.
    pub record_type: RecordType,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Covalently bonded neighbours.
    pub bonded_atoms: Vec<Arc<Atom>>,
}

impl Atom {
    /// Creates a protein atom with no group type and no bonded neighbours.
    pub fn new(name: &str, element: &str, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            element: element.to_string(),
            group_type: String::new(),
            record_type: RecordType::default(),
            position,
            bonded_atoms: Vec::new(),
        }
    }

    pub fn with_group_type(mut self, group_type: &str) -> Self {
        self.group_type = group_type.to_string();
        self
    }

    pub fn with_record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    /// Appends `neighbor` to the end of the bonded-atom list.
    pub fn bonded_to(mut self, neighbor: Arc<Atom>) -> Self {
        self.bonded_atoms.push(neighbor);
        self
    }

    pub fn distance_to(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}

impl AtomView for Atom {
    fn element(&self) -> &str {
        &self.element
    }

    fn group_type(&self) -> &str {
        &self.group_type
    }

    fn record_type(&self) -> RecordType {
        self.record_type
    }

    fn bonded_atoms(&self) -> impl Iterator<Item = &Self> {
        self.bonded_atoms.iter().map(Arc::as_ref)
    }

    fn describe(&self) -> String {
        format!("{} {} ({})", self.record_type, self.name, self.group_type)
    }
}
