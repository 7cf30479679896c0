//! Label conventions for the five variable namespaces (spec §3 "Variable
//! categories"). Every pass goes through these instead of building ad hoc
//! strings, so `(name, slot)` lookups stay consistent across passes — this is
//! the `(option_id, slot) -> var_id` table the design calls for, expressed as
//! registry labels rather than a separate cache.

use cit_core::{VarCategory, VarId, VariableRegistry};

pub fn option_var(registry: &mut VariableRegistry, option: &str, slot: u32) -> VarId {
    registry.intern(&format!("v({option},{slot})"), VarCategory::OptionSlot)
}

pub fn property_var(registry: &mut VariableRegistry, property: &str, slot: u32) -> VarId {
    registry.intern(&format!("p({property},{slot})"), VarCategory::PropertySlot)
}

pub fn coverage_var(registry: &mut VariableRegistry, tuple_label: &str) -> VarId {
    registry.intern(&format!("c({tuple_label})"), VarCategory::CoverageVar)
}

pub fn indicator_var(registry: &mut VariableRegistry, tuple_label: &str, slot: u32) -> VarId {
    registry.fresh(&format!("a({tuple_label},{slot})"), VarCategory::CoverageIndicator)
}
