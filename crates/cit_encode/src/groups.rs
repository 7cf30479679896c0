//! Group constraint emitter (spec §4.3): per slot, per group, emits the
//! at-least-one clause when the resolved policy calls for it, pairwise
//! at-most-one always, and unit bans for error-flagged options.

use cit_core::{CnfFormula, EncoderConfig, Group, GroupPolicy, ResolvedPolicy, VariableRegistry};

use crate::vars::option_var;

pub fn emit_group_constraints(
    groups: &[Group],
    config: &EncoderConfig,
    registry: &mut VariableRegistry,
    formula: &mut CnfFormula,
) {
    for slot in 1..=config.k {
        for group in groups {
            emit_for_group_slot(group, slot, &config.group_policy, registry, formula);
        }
    }
}

fn emit_for_group_slot(
    group: &Group,
    slot: u32,
    policy: &GroupPolicy,
    registry: &mut VariableRegistry,
    formula: &mut CnfFormula,
) {
    let option_vars: Vec<_> = group
        .options
        .iter()
        .map(|o| option_var(registry, &o.name, slot))
        .collect();

    if let ResolvedPolicy::ExactlyOne = policy.resolve(&group.options) {
        formula.push(cit_core::Clause::from_literals(option_vars.iter().map(|v| v.pos())));
    }

    for i in 0..option_vars.len() {
        for j in (i + 1)..option_vars.len() {
            formula.push(cit_core::Clause::from_literals([
                option_vars[i].neg(),
                option_vars[j].neg(),
            ]));
        }
    }

    for (opt, &var) in group.options.iter().zip(option_vars.iter()) {
        if opt.error {
            formula.unit(var.neg());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cit_core::{GroupCategory, Option as CitOption, VarCategory};

    fn group_with(opts: Vec<CitOption>) -> Group {
        let mut g = Group::new("A", GroupCategory::Parameter);
        g.options = opts;
        g
    }

    #[test]
    fn auto_policy_with_single_emits_at_least_one() {
        let groups = vec![group_with(vec![CitOption::new("a1").single(), CitOption::new("a2")])];
        let config = EncoderConfig {
            k: 1,
            ..Default::default()
        };
        let mut reg = VariableRegistry::new();
        let mut f = CnfFormula::new();
        emit_group_constraints(&groups, &config, &mut reg, &mut f);

        // at-least-one + at-most-one pair = 2 clauses
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn error_flag_emits_unit_ban_per_slot() {
        let groups = vec![group_with(vec![CitOption::new("a1").error(), CitOption::new("a2")])];
        let config = EncoderConfig {
            k: 2,
            ..Default::default()
        };
        let mut reg = VariableRegistry::new();
        let mut f = CnfFormula::new();
        emit_group_constraints(&groups, &config, &mut reg, &mut f);

        let a1_slot1 = reg.id_of("v(a1,1)").unwrap();
        assert!(reg.category_of(a1_slot1) == VarCategory::OptionSlot);
        let unit_clauses = f
            .clauses()
            .iter()
            .filter(|c| c.literals().len() == 1 && !c.literals()[0].is_positive())
            .count();
        assert_eq!(unit_clauses, 2);
    }
}
