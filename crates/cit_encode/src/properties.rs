//! Property linker (spec §4.4): binds each property-slot variable to the
//! disjunction of its asserting options by bi-implication, then emits
//! antonym exclusivity over the user-supplied symmetric relation.

use cit_core::{CnfFormula, EncoderConfig, VariableRegistry};

use crate::index::GroupIndex;
use crate::vars::{option_var, property_var};

pub fn emit_property_links(
    index: &GroupIndex,
    config: &EncoderConfig,
    registry: &mut VariableRegistry,
    formula: &mut CnfFormula,
) {
    for slot in 1..=config.k {
        for (property, asserters) in index.properties() {
            let p = property_var(registry, property, slot);
            let mut disjuncts = Vec::with_capacity(asserters.len());
            for &option in asserters {
                let o = option_var(registry, option, slot);
                formula.push(cit_core::Clause::from_literals([o.neg(), p.pos()]));
                disjuncts.push(o.pos());
            }
            let mut property_clause = vec![p.neg()];
            property_clause.extend(disjuncts);
            formula.push(cit_core::Clause::from_literals(property_clause));
        }

        for (a, b) in config.antonyms.canonicalize() {
            let pa = property_var(registry, &a, slot);
            let pb = property_var(registry, &b, slot);
            formula.push(cit_core::Clause::from_literals([pa.neg(), pb.neg()]));
        }
    }
}
