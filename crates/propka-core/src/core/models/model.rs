use super::atom::AtomView;

/// Names the structural types a calculation driver works with.
///
/// The version layer never looks inside groups, conformations or molecular
/// containers; it only hands them to the interaction functions bound at
/// construction. Atoms are the exception, since hydrogen-bond parameter
/// resolution reads their element, group type and bonding.
pub trait MolecularModel {
    type Atom: AtomView;
    /// A titratable or interacting chemical group.
    type Group;
    /// One alternate-location conformation of the structure.
    type Conformation;
    /// The whole molecular structure, mutated by bonding/protonation setup.
    type Container;
}
