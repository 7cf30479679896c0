//! Top-level encoder: runs the six passes in their fixed order over one IR
//! and hands back the finished formula plus the registry that names every
//! variable in it. Single-use by construction — there is no way to call this
//! twice against the same `VariableRegistry` and accumulate further state.

use cit_core::{CnfFormula, CoreError, Group, VariableRegistry};

use crate::condition_pass::emit_conditions;
use crate::config::{validate_config, RawEncoderConfig};
use crate::coverage::emit_coverage;
use crate::error::EncodeError;
use crate::groups::emit_group_constraints;
use crate::index::GroupIndex;
use crate::properties::emit_property_links;

/// Result of a single encoder run: the clause set and the registry that
/// assigned every variable id mentioned in it.
#[derive(Debug)]
pub struct EncodeOutput {
    pub registry: VariableRegistry,
    pub formula: CnfFormula,
}

/// Run all six passes in order: index, group constraints, property links,
/// conditions, coverage. Fails fast on the first structural problem; no
/// partial formula is ever handed back (spec §4.6 "Failure semantics").
pub fn encode(groups: &[Group], raw_config: RawEncoderConfig) -> Result<EncodeOutput, EncodeError> {
    if groups.is_empty() {
        return Err(EncodeError::Core(CoreError::NoOptions));
    }
    let config = validate_config(raw_config, groups.len())?;

    log::info!(
        "encoding {} group(s), t={}, k={}",
        groups.len(),
        config.t,
        config.k
    );

    let index = GroupIndex::build(groups);
    let mut registry = VariableRegistry::new();
    let mut formula = CnfFormula::new();

    emit_group_constraints(groups, &config, &mut registry, &mut formula);
    log::debug!(
        "group constraints: {} clause(s), {} variable(s) so far",
        formula.clauses().len(),
        registry.next_id_peek() - 1
    );

    emit_property_links(&index, &config, &mut registry, &mut formula);
    log::debug!(
        "property links: {} clause(s), {} variable(s) so far",
        formula.clauses().len(),
        registry.next_id_peek() - 1
    );

    emit_conditions(groups, &index, &config, &mut registry, &mut formula)?;
    log::debug!(
        "conditions: {} clause(s), {} variable(s) so far",
        formula.clauses().len(),
        registry.next_id_peek() - 1
    );

    emit_coverage(groups, &config, &mut registry, &mut formula);
    log::debug!(
        "coverage: {} clause(s), {} variable(s) total",
        formula.clauses().len(),
        registry.next_id_peek() - 1
    );

    log::info!(
        "encode finished: {} variable(s), {} clause(s)",
        registry.next_id_peek() - 1,
        formula.clauses().len()
    );

    Ok(EncodeOutput { registry, formula })
}
