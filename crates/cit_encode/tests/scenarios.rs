//! End-to-end scenarios run directly against `encode()`, checked by brute
//! force (these formulas are always small enough that enumerating every
//! assignment is cheaper than wiring in a real solver dependency just for
//! tests).

use cit_core::{CnfFormula, Group, GroupCategory, Option as CitOption, VarCategory, VarId};
use cit_encode::{encode, RawEncoderConfig};

/// All assignments (as a bitmask over `nvars` variables, bit `i` == var `i+1`
/// true) that satisfy every clause in `formula`.
fn satisfying_assignments(formula: &CnfFormula, nvars: u32) -> Vec<u64> {
    assert!(nvars <= 20, "brute force only scales to small scenarios");
    let mut models = Vec::new();
    for bits in 0u64..(1u64 << nvars) {
        let holds = |var: u32| (bits >> (var - 1)) & 1 == 1;
        let sat = formula.clauses().iter().all(|c| {
            c.literals().iter().any(|lit| {
                let v = lit.var().get();
                if lit.is_positive() {
                    holds(v)
                } else {
                    !holds(v)
                }
            })
        });
        if sat {
            models.push(bits);
        }
    }
    models
}

fn bit(models_mask: u64, var: u32) -> bool {
    (models_mask >> (var - 1)) & 1 == 1
}

fn group(name: &str, category: GroupCategory, options: Vec<CitOption>) -> Group {
    let mut g = Group::new(name, category);
    g.options = options;
    g
}

#[test]
fn s1_minimal_pairwise_is_satisfiable_and_covers_every_pair() {
    let groups = vec![
        group(
            "A",
            GroupCategory::Parameter,
            vec![CitOption::new("a1"), CitOption::new("a2")],
        ),
        group(
            "B",
            GroupCategory::Environment,
            vec![CitOption::new("b1"), CitOption::new("b2")],
        ),
    ];
    // `require_full_coverage` turns "every model covers all four pairs" from
    // an emergent property into a directly-asserted one: each coverage
    // variable gets a unit clause, which in turn forces its tuple's options
    // true in whichever slot the bi-implication picks.
    let out = encode(
        &groups,
        RawEncoderConfig {
            t: 2,
            k: 2,
            require_full_coverage: true,
            ..Default::default()
        },
    )
    .unwrap();

    let nvars = out.registry.next_id_peek() - 1;
    let models = satisfying_assignments(&out.formula, nvars);
    assert!(!models.is_empty(), "S1 formula must be satisfiable");

    // Every model must cover all four pairs: each c(...) coverage variable true.
    let coverage_ids: Vec<u32> = (1..=nvars)
        .filter(|&id| out.registry.category_of(VarId::from_raw(id)) == VarCategory::CoverageVar)
        .collect();
    assert_eq!(coverage_ids.len(), 4, "a1xb1, a1xb2, a2xb1, a2xb2");
    for &m in &models {
        for &cid in &coverage_ids {
            assert!(bit(m, cid), "coverage var {cid} must hold in every model");
        }
    }
}

#[test]
fn s2_error_option_is_never_chosen_in_any_model() {
    let groups = vec![group(
        "A",
        GroupCategory::Parameter,
        vec![CitOption::new("a1").error(), CitOption::new("a2")],
    )];
    let out = encode(
        &groups,
        RawEncoderConfig {
            t: 1,
            k: 2,
            ..Default::default()
        },
    )
    .unwrap();

    let nvars = out.registry.next_id_peek() - 1;
    let models = satisfying_assignments(&out.formula, nvars);
    assert!(!models.is_empty());

    for slot in 1..=2u32 {
        let id = out
            .registry
            .id_of(&format!("v(a1,{slot})"))
            .expect("a1 slot variable must be allocated")
            .get();
        for &m in &models {
            assert!(!bit(m, id), "a1 must be false in slot {slot} for every model");
        }
    }
}

#[test]
fn s3_single_option_forces_exactly_one_and_amo_pair_is_unsat_alone() {
    let groups = vec![group(
        "A",
        GroupCategory::Parameter,
        vec![CitOption::new("a1").single(), CitOption::new("a2")],
    )];
    let out = encode(
        &groups,
        RawEncoderConfig {
            t: 1,
            k: 1,
            ..Default::default()
        },
    )
    .unwrap();

    let nvars = out.registry.next_id_peek() - 1;
    let models = satisfying_assignments(&out.formula, nvars);
    assert!(!models.is_empty());

    let a1 = out.registry.id_of("v(a1,1)").unwrap().get();
    let a2 = out.registry.id_of("v(a2,1)").unwrap().get();
    for &m in &models {
        // exactly one of a1, a2 true
        assert_ne!(bit(m, a1), bit(m, a2));
    }
}

#[test]
fn s4_guarded_option_requires_its_property() {
    let groups = vec![
        group(
            "A",
            GroupCategory::Parameter,
            vec![
                CitOption::new("a1").with_property("P"),
                CitOption::new("a2"),
            ],
        ),
        group(
            "B",
            GroupCategory::Environment,
            vec![
                CitOption::new("b1").with_condition("P"),
                CitOption::new("b2"),
            ],
        ),
    ];
    let out = encode(
        &groups,
        RawEncoderConfig {
            t: 2,
            k: 1,
            ..Default::default()
        },
    )
    .unwrap();

    let nvars = out.registry.next_id_peek() - 1;
    let models = satisfying_assignments(&out.formula, nvars);
    assert!(!models.is_empty());

    let b1 = out.registry.id_of("v(b1,1)").unwrap().get();
    let p = out.registry.id_of("p(P,1)").unwrap().get();
    let a1 = out.registry.id_of("v(a1,1)").unwrap().get();
    for &m in &models {
        if bit(m, b1) {
            assert!(bit(m, p), "b1 chosen implies property P holds");
        }
        // p(P,1) is asserted iff a1 (its sole asserter) is chosen.
        assert_eq!(bit(m, p), bit(m, a1));
    }
}

#[test]
fn s5_tseitin_not_x_and_y_matches_truth_table() {
    let groups = vec![
        group(
            "A",
            GroupCategory::Parameter,
            vec![CitOption::new("o").with_condition("!X && Y")],
        ),
        group(
            "B",
            GroupCategory::Environment,
            vec![
                CitOption::new("x").with_property("X"),
                CitOption::new("y").with_property("Y"),
            ],
        ),
    ];
    let out = encode(
        &groups,
        RawEncoderConfig {
            t: 1,
            k: 1,
            strict_conditions: true,
            ..Default::default()
        },
    )
    .unwrap();

    let nvars = out.registry.next_id_peek() - 1;
    let models = satisfying_assignments(&out.formula, nvars);
    assert!(!models.is_empty());

    let o = out.registry.id_of("v(o,1)").unwrap().get();
    let px = out.registry.id_of("p(X,1)").unwrap().get();
    let py = out.registry.id_of("p(Y,1)").unwrap().get();

    for &m in &models {
        if bit(m, o) {
            assert!(!bit(m, px) && bit(m, py), "o true must force !X && Y");
        }
    }
}

#[test]
fn s6_antonym_pair_never_both_true_in_any_slot() {
    let groups = vec![group(
        "A",
        GroupCategory::Parameter,
        vec![
            CitOption::new("back_up").with_property("BackUp"),
            CitOption::new("no_back_up").with_property("NoBackUp"),
        ],
    )];
    let out = encode(
        &groups,
        RawEncoderConfig {
            t: 1,
            k: 2,
            antonyms: cit_core::AntonymPairs(vec![("BackUp".into(), "NoBackUp".into())]),
            ..Default::default()
        },
    )
    .unwrap();

    let nvars = out.registry.next_id_peek() - 1;
    let models = satisfying_assignments(&out.formula, nvars);
    assert!(!models.is_empty());

    for slot in 1..=2u32 {
        let backup = out.registry.id_of(&format!("p(BackUp,{slot})")).unwrap().get();
        let no_backup = out
            .registry
            .id_of(&format!("p(NoBackUp,{slot})"))
            .unwrap()
            .get();
        for &m in &models {
            assert!(!(bit(m, backup) && bit(m, no_backup)));
        }
    }
}

#[test]
fn coverage_indicator_is_sound_and_complete_without_full_coverage() {
    // No `require_full_coverage`, no `.single()` option, so `AtMostOne` is the
    // only group constraint and "every option false in a slot" is a valid
    // model — this is what lets a model exist where some tuple is *not*
    // covered by any slot, exercising the `c(tau) == false` side of the
    // bi-implication that `full_coverage_mode_asserts_every_tuple` (in
    // coverage.rs) and `s1_minimal_pairwise_...` (above) never reach.
    let groups = vec![
        group(
            "A",
            GroupCategory::Parameter,
            vec![CitOption::new("a1"), CitOption::new("a2")],
        ),
        group(
            "B",
            GroupCategory::Environment,
            vec![CitOption::new("b1"), CitOption::new("b2")],
        ),
    ];
    let out = encode(
        &groups,
        RawEncoderConfig {
            t: 2,
            k: 2,
            ..Default::default()
        },
    )
    .unwrap();

    let nvars = out.registry.next_id_peek() - 1;
    let models = satisfying_assignments(&out.formula, nvars);
    assert!(!models.is_empty());

    let tuples: [[&str; 2]; 4] = [["a1", "b1"], ["a1", "b2"], ["a2", "b1"], ["a2", "b2"]];
    let mut saw_covered = false;
    let mut saw_uncovered = false;

    for &m in &models {
        for tuple in &tuples {
            let label = format!("cov({},{})", tuple[0], tuple[1]);
            let c = out.registry.id_of(&format!("c({label})")).unwrap().get();
            let c_true = bit(m, c);

            let realized_in_some_slot = (1..=2u32).any(|slot| {
                tuple.iter().all(|name| {
                    let id = out.registry.id_of(&format!("v({name},{slot})")).unwrap().get();
                    bit(m, id)
                })
            });

            assert_eq!(
                c_true, realized_in_some_slot,
                "c({label}) must track realization in model {m:b} exactly"
            );

            if c_true {
                saw_covered = true;
            } else {
                saw_uncovered = true;
            }
        }
    }

    assert!(saw_covered, "at least one model/tuple pair should be covered");
    assert!(
        saw_uncovered,
        "without require_full_coverage, some model/tuple pair must be left uncovered"
    );
}

#[test]
fn universal_id_contiguity_and_header_agreement() {
    let groups = vec![group(
        "A",
        GroupCategory::Parameter,
        vec![CitOption::new("a1"), CitOption::new("a2")],
    )];
    let out = encode(
        &groups,
        RawEncoderConfig {
            t: 1,
            k: 2,
            ..Default::default()
        },
    )
    .unwrap();

    let nvars = out.registry.next_id_peek() - 1;
    assert_eq!(out.formula.max_var_mentioned(), nvars);
    for clause in out.formula.clauses() {
        assert!(!clause.literals().is_empty());
        for lit in clause.literals() {
            let v = lit.var().get();
            assert!(v >= 1 && v <= nvars);
        }
    }
}
