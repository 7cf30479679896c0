//! Monotonic variable registry shared by all encoder passes.
//!
//! Ids are allocated from a single counter starting at 1 so that option-slot
//! variables, property-slot variables, Tseitin auxiliaries, and coverage
//! variables/indicators all live in one contiguous DIMACS variable space.

use std::collections::HashMap;

use crate::ids::VarId;

/// The distinct namespaces a variable id can belong to. Purely informational —
/// it does not affect id allocation, only reporting and debugging.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VarCategory {
    /// `v(o,j)` — option `o` chosen in slot `j`.
    OptionSlot,
    /// `p(pi,j)` — property `pi` holds in slot `j`.
    PropertySlot,
    /// Internal Tseitin node of a guard-expression AST.
    TseitinAux,
    /// `a(tau,j)` — all options of tuple `tau` present in slot `j`.
    CoverageIndicator,
    /// `c(tau)` — tuple `tau` covered by some slot.
    CoverageVar,
}

/// Allocates and tracks propositional variable ids with injective labels.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    next_id: u32,
    label_to_id: HashMap<String, VarId>,
    id_to_label: Vec<String>, // index 0 == id 1
    id_to_category: Vec<VarCategory>,
    salt: u32,
}

impl VariableRegistry {
    pub fn new() -> Self {
        VariableRegistry {
            next_id: 1,
            label_to_id: HashMap::new(),
            id_to_label: Vec::new(),
            id_to_category: Vec::new(),
            salt: 0,
        }
    }

    /// Idempotent: returns the existing id for `label` if already interned,
    /// otherwise allocates the next id.
    pub fn intern(&mut self, label: &str, category: VarCategory) -> VarId {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }
        self.allocate(label.to_string(), category)
    }

    /// Allocates a fresh, anonymous id. The label is salted with the
    /// allocated id itself to guarantee injectivity without caller bookkeeping.
    pub fn fresh(&mut self, prefix: &str, category: VarCategory) -> VarId {
        self.salt += 1;
        let provisional = format!("{prefix}#{}", self.salt);
        debug_assert!(
            !self.label_to_id.contains_key(&provisional),
            "salted fresh label collided: {provisional}"
        );
        self.allocate(provisional, category)
    }

    fn allocate(&mut self, label: String, category: VarCategory) -> VarId {
        let id = VarId::from_raw(self.next_id);
        self.next_id += 1;
        self.label_to_id.insert(label.clone(), id);
        self.id_to_label.push(label);
        self.id_to_category.push(category);
        id
    }

    /// Next id that would be allocated; equivalently `1 + (count of allocated ids)`.
    pub fn next_id_peek(&self) -> u32 {
        self.next_id
    }

    /// Number of ids allocated so far.
    pub fn len(&self) -> usize {
        self.id_to_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_label.is_empty()
    }

    pub fn label_of(&self, id: VarId) -> &str {
        &self.id_to_label[(id.get() - 1) as usize]
    }

    pub fn category_of(&self, id: VarId) -> VarCategory {
        self.id_to_category[(id.get() - 1) as usize]
    }

    pub fn id_of(&self, label: &str) -> Option<VarId> {
        self.label_to_id.get(label).copied()
    }

    /// Deterministic `(id, label)` pairs in id order, for DIMACS sidecar output.
    pub fn iter_by_id(&self) -> impl Iterator<Item = (VarId, &str)> {
        self.id_to_label
            .iter()
            .enumerate()
            .map(|(idx, label)| (VarId::from_raw(idx as u32 + 1), label.as_str()))
    }

    /// Count of currently-allocated ids in each category, in a stable
    /// category order (for reporting).
    pub fn counts_by_category(&self) -> Vec<(VarCategory, usize)> {
        let order = [
            VarCategory::OptionSlot,
            VarCategory::PropertySlot,
            VarCategory::TseitinAux,
            VarCategory::CoverageIndicator,
            VarCategory::CoverageVar,
        ];
        order
            .into_iter()
            .map(|cat| (cat, self.id_to_category.iter().filter(|&&c| c == cat).count()))
            .collect()
    }
}
