//! Coverage encoder (spec §4.6): enumerates every t-sized multi-group option
//! combination, allocates per-combination coverage variables and per-slot
//! indicator variables, and emits the bi-implicational link in its
//! per-slot form (never the single-clause compression — see the crate-level
//! design notes on the two historical encoder drafts).

use cit_core::{Clause, CnfFormula, CoverageKey, EncoderConfig, Group, VariableRegistry};

use crate::vars::{coverage_var, indicator_var, option_var};

/// Every size-`t` combination of groups, taken in group order, with the
/// Cartesian product of their option lists already expanded and canonicalized.
pub fn enumerate_coverage_keys(groups: &[Group], t: usize) -> Vec<CoverageKey> {
    let mut keys: Vec<CoverageKey> = Vec::new();
    for combo in group_combinations(groups.len(), t) {
        for tuple in cartesian_product(groups, &combo) {
            keys.push(CoverageKey::from_names(tuple.into_iter().map(str::to_string)));
        }
    }
    keys.sort();
    keys.dedup();
    keys
}

fn group_combinations(n: usize, t: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut combo = Vec::with_capacity(t);
    combinations_rec(0, n, t, &mut combo, &mut result);
    result
}

fn combinations_rec(start: usize, n: usize, t: usize, combo: &mut Vec<usize>, result: &mut Vec<Vec<usize>>) {
    if combo.len() == t {
        result.push(combo.clone());
        return;
    }
    for i in start..n {
        combo.push(i);
        combinations_rec(i + 1, n, t, combo, result);
        combo.pop();
    }
}

fn cartesian_product<'a>(groups: &'a [Group], combo: &[usize]) -> Vec<Vec<&'a str>> {
    let mut acc: Vec<Vec<&str>> = vec![Vec::new()];
    for &gi in combo {
        let mut next = Vec::with_capacity(acc.len() * groups[gi].options.len());
        for existing in &acc {
            for opt in &groups[gi].options {
                let mut tuple = existing.clone();
                tuple.push(opt.name.as_str());
                next.push(tuple);
            }
        }
        acc = next;
    }
    acc
}

/// Emit per-slot indicators and the coverage bi-implication for every
/// coverage key, in lexicographic key order (spec §9 determinism).
pub fn emit_coverage(
    groups: &[Group],
    config: &EncoderConfig,
    registry: &mut VariableRegistry,
    formula: &mut CnfFormula,
) {
    let keys = enumerate_coverage_keys(groups, config.t as usize);

    for key in &keys {
        let label = key.label();
        let c = coverage_var(registry, &label);

        let mut indicators = Vec::with_capacity(config.k as usize);
        for slot in 1..=config.k {
            let a = indicator_var(registry, &label, slot);
            indicators.push(a);

            let option_vars: Vec<_> = key
                .names()
                .iter()
                .map(|name| option_var(registry, name, slot))
                .collect();

            for &v in &option_vars {
                formula.push(Clause::from_literals([a.neg(), v.pos()]));
            }
            let mut all_present_implies_a: Vec<_> = option_vars.iter().map(|v| v.neg()).collect();
            all_present_implies_a.push(a.pos());
            formula.push(Clause::from_literals(all_present_implies_a));
        }

        let mut c_implies_some_a: Vec<_> = indicators.iter().map(|a| a.pos()).collect();
        c_implies_some_a.push(c.neg());
        formula.push(Clause::from_literals(c_implies_some_a));

        for &a in &indicators {
            formula.push(Clause::from_literals([a.neg(), c.pos()]));
        }

        if config.require_full_coverage {
            formula.unit(c.pos());
        }
    }
}
