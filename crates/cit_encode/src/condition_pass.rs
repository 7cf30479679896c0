//! Drives the condition compiler (`conditions` module) over every
//! guard-bearing option in every slot, resolving atoms against the set of
//! declared properties per the `strict_conditions` flag (spec §4.5).

use std::collections::HashSet;

use cit_core::{CnfFormula, EncoderConfig, Group, VariableRegistry};

use crate::conditions::link_condition;
use crate::error::{ConditionError, EncodeError};
use crate::index::GroupIndex;
use crate::vars::{option_var, property_var};

pub fn emit_conditions(
    groups: &[Group],
    index: &GroupIndex,
    config: &EncoderConfig,
    registry: &mut VariableRegistry,
    formula: &mut CnfFormula,
) -> Result<(), EncodeError> {
    let known_properties: HashSet<&str> = index.properties().map(|(p, _)| p).collect();
    let strict = config.strict_conditions;

    for slot in 1..=config.k {
        for group in groups {
            for opt in &group.options {
                let Some(condition) = &opt.condition else {
                    continue;
                };
                let o = option_var(registry, &opt.name, slot);
                link_condition(condition, o, registry, formula, |name, reg| {
                    if !known_properties.contains(name) && strict {
                        return Err(ConditionError::UnknownProperty(name.to_string()));
                    }
                    Ok(property_var(reg, name, slot))
                })?;
            }
        }
    }

    Ok(())
}
