use std::collections::HashMap;

/// Distance bounds over which a hydrogen-bond contribution is scaled from its
/// maximum down to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoff {
    pub low: f64,
    pub high: f64,
}

impl Cutoff {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Resolved hydrogen-bond parameters for one atom pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrogenBondParameters {
    /// Maximum pKa shift the interaction can contribute.
    pub dpka_max: f64,
    pub cutoff: Cutoff,
}

impl HydrogenBondParameters {
    pub fn new(dpka_max: f64, cutoff: Cutoff) -> Self {
        Self { dpka_max, cutoff }
    }
}

/// A table keyed by an unordered pair of labels (group types or elements).
///
/// Lookups try `(key1, key2)` first and fall back to `(key2, key1)`, so a
/// pair only has to be entered once.
#[derive(Debug, Clone, PartialEq)]
pub struct PairTable<V> {
    entries: HashMap<String, HashMap<String, V>>,
}

impl<V> Default for PairTable<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> PairTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for `(key1, key2)`, returning the value it replaced.
    pub fn insert(&mut self, key1: &str, key2: &str, value: V) -> Option<V> {
        self.entries
            .entry(key1.to_string())
            .or_default()
            .insert(key2.to_string(), value)
    }

    pub fn get(&self, key1: &str, key2: &str) -> Option<&V> {
        self.get_ordered(key1, key2)
            .or_else(|| self.get_ordered(key2, key1))
    }

    fn get_ordered(&self, key1: &str, key2: &str) -> Option<&V> {
        self.entries.get(key1).and_then(|row| row.get(key2))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Backbone hydrogen-bond table keyed by the partner's group type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackboneTable {
    entries: HashMap<String, HydrogenBondParameters>,
}

impl BackboneTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the `(dpka_max, cutoff_low, cutoff_high)` triple for a group type.
    pub fn insert(
        &mut self,
        group_type: &str,
        dpka_max: f64,
        cutoff_low: f64,
        cutoff_high: f64,
    ) -> Option<HydrogenBondParameters> {
        self.entries.insert(
            group_type.to_string(),
            HydrogenBondParameters::new(dpka_max, Cutoff::new(cutoff_low, cutoff_high)),
        )
    }

    pub fn get(&self, group_type: &str) -> Option<&HydrogenBondParameters> {
        self.entries.get(group_type)
    }

    pub fn contains(&self, group_type: &str) -> bool {
        self.entries.contains_key(group_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The parameter tables a calculation run reads from.
///
/// A set is assembled once (see [`ParameterSetBuilder`]) and then shared
/// read-only, usually behind an `Arc`, for the lifetime of the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    /// Group-type pair to maximum pKa shift.
    pub sidechain_interaction: PairTable<f64>,
    /// Group-type pair to cutoff bounds.
    pub sidechain_cutoffs: PairTable<Cutoff>,
    /// Element pair to maximum shift and cutoff.
    pub hydrogen_bonds: PairTable<HydrogenBondParameters>,
    /// Partner group type to parameters for backbone carbonyl (`BBC`) bonds.
    pub backbone_co_hydrogen_bond: BackboneTable,
    /// Partner group type to parameters for backbone amide (`BBN`) bonds.
    pub backbone_nh_hydrogen_bond: BackboneTable,
    /// Named scalar constants consulted by the interaction models.
    pub scalars: HashMap<String, f64>,
}

impl ParameterSet {
    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.scalars.get(name).copied()
    }
}

#[derive(Debug, Default)]
pub struct ParameterSetBuilder {
    parameters: ParameterSet,
}

impl ParameterSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sidechain_interaction(mut self, group1: &str, group2: &str, dpka_max: f64) -> Self {
        self.parameters
            .sidechain_interaction
            .insert(group1, group2, dpka_max);
        self
    }

    pub fn sidechain_cutoff(mut self, group1: &str, group2: &str, low: f64, high: f64) -> Self {
        self.parameters
            .sidechain_cutoffs
            .insert(group1, group2, Cutoff::new(low, high));
        self
    }

    pub fn hydrogen_bond(
        mut self,
        element1: &str,
        element2: &str,
        dpka_max: f64,
        low: f64,
        high: f64,
    ) -> Self {
        self.parameters.hydrogen_bonds.insert(
            element1,
            element2,
            HydrogenBondParameters::new(dpka_max, Cutoff::new(low, high)),
        );
        self
    }

    pub fn backbone_co(mut self, group_type: &str, dpka_max: f64, low: f64, high: f64) -> Self {
        self.parameters
            .backbone_co_hydrogen_bond
            .insert(group_type, dpka_max, low, high);
        self
    }

    pub fn backbone_nh(mut self, group_type: &str, dpka_max: f64, low: f64, high: f64) -> Self {
        self.parameters
            .backbone_nh_hydrogen_bond
            .insert(group_type, dpka_max, low, high);
        self
    }

    pub fn scalar(mut self, name: &str, value: f64) -> Self {
        self.parameters.scalars.insert(name.to_string(), value);
        self
    }

    pub fn build(self) -> ParameterSet {
        self.parameters
    }
}
