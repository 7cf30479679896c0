//! VALIDATE stage: non-fatal structural checks that run after load and before
//! encoding. Structural invariants that must hold for encoding to even start
//! (non-empty groups, unique option names) are already enforced by
//! `cit_io::ir::load_ir_file`; this stage looks for things that are legal but
//! suspicious — a declared antonym pair naming an option nobody defines, or a
//! property guard that nothing ever asserts.

use std::collections::HashSet;

use cit_core::{EncoderConfig, Group};
use cit_encode::GroupIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Run the non-fatal checks. Always returns `Ok`-shaped data — this stage
/// never blocks encoding, it only collects things worth surfacing to a human.
pub fn validate(groups: &[Group], config: &EncoderConfig) -> ValidationReport {
    let mut issues = Vec::new();
    let index = GroupIndex::build(groups);

    let asserted: HashSet<&str> = index.properties().map(|(p, _)| p).collect();
    let mut guarded: HashSet<&str> = HashSet::new();
    for group in groups {
        for opt in &group.options {
            if let Some(cond) = &opt.condition {
                for atom in cond.split(|c: char| !c.is_alphanumeric() && c != '_') {
                    if !atom.is_empty() {
                        guarded.insert(atom);
                    }
                }
            }
        }
    }
    for name in guarded.difference(&asserted) {
        issues.push(ValidationIssue {
            severity: Severity::Warning,
            code: "unasserted-guard-atom",
            message: format!(
                "condition references '{name}', which no option ever asserts as its property"
            ),
        });
    }

    for (left, right) in &config.antonyms.canonicalize() {
        let known = |name: &str| groups.iter().any(|g| g.options.iter().any(|o| &o.name == name));
        if !known(left) {
            issues.push(ValidationIssue {
                severity: Severity::Warning,
                code: "unknown-antonym-option",
                message: format!("antonym pair names '{left}', which is not an option in any group"),
            });
        }
        if !known(right) {
            issues.push(ValidationIssue {
                severity: Severity::Warning,
                code: "unknown-antonym-option",
                message: format!("antonym pair names '{right}', which is not an option in any group"),
            });
        }
    }

    for group in groups {
        if group.options.len() == 1 {
            issues.push(ValidationIssue {
                severity: Severity::Warning,
                code: "single-option-group",
                message: format!("group '{}' has only one option; it contributes no real choice", group.name),
            });
        }
    }

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cit_core::{GroupCategory, Option as CitOption};

    fn groups() -> Vec<Group> {
        let mut a = Group::new("A", GroupCategory::Parameter);
        a.options = vec![CitOption::new("a1")];
        let mut b = Group::new("B", GroupCategory::Environment);
        b.options = vec![
            CitOption::new("b1").with_condition("Ghost"),
            CitOption::new("b2"),
        ];
        vec![a, b]
    }

    #[test]
    fn flags_unasserted_guard_atoms() {
        let report = validate(&groups(), &EncoderConfig::default());
        assert!(report.issues.iter().any(|i| i.code == "unasserted-guard-atom"));
    }

    #[test]
    fn flags_single_option_groups() {
        let report = validate(&groups(), &EncoderConfig::default());
        assert!(report.issues.iter().any(|i| i.code == "single-option-group"));
    }

    #[test]
    fn clean_input_yields_no_issues() {
        let mut a = Group::new("A", GroupCategory::Parameter);
        a.options = vec![CitOption::new("a1"), CitOption::new("a2")];
        let mut b = Group::new("B", GroupCategory::Environment);
        b.options = vec![CitOption::new("b1"), CitOption::new("b2")];
        let report = validate(&[a, b], &EncoderConfig::default());
        assert!(report.is_clean());
    }
}
