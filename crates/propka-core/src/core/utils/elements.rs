use phf::{Map, phf_map};

pub const HYDROGEN: &str = "H";

/// The two backbone roles a group type can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackboneRole {
    /// Backbone carbonyl (`BBC`), a hydrogen-bond acceptor.
    Carbonyl,
    /// Backbone amide nitrogen (`BBN`), a hydrogen-bond donor.
    Amide,
}

static BACKBONE_GROUP_TYPES: Map<&'static str, BackboneRole> = phf_map! {
    "BBC" => BackboneRole::Carbonyl,
    "BBN" => BackboneRole::Amide,
};

impl BackboneRole {
    pub fn from_group_type(group_type: &str) -> Option<Self> {
        BACKBONE_GROUP_TYPES.get(group_type.trim()).copied()
    }
}

pub fn is_hydrogen(element: &str) -> bool {
    element.trim() == HYDROGEN
}
