//! Typed IR domain records: groups, options, and encoder configuration.
//!
//! These mirror the IR schema in the external spec exactly (`parameters` and
//! `environments`, each an ordered mapping of group name to group record) but
//! as tagged Rust structs rather than loosely-typed nested maps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two IR top-level sections a group came from. Both are treated
/// identically downstream; the category is retained only for reporting.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupCategory {
    Parameter,
    Environment,
}

/// Resolved at-least-one behavior for a group, decided once per group before
/// any constraint clause is emitted.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GroupPolicy {
    /// Inspect the group's options: `exactly-one` if any carries `single`,
    /// otherwise `at-most-one`.
    Auto,
    ExactlyOne,
    AtMostOne,
}

impl GroupPolicy {
    /// Resolve `auto` against this group's options; a non-auto policy is
    /// returned unchanged (instance-level override wins).
    pub fn resolve(self, options: &[Option]) -> ResolvedPolicy {
        match self {
            GroupPolicy::ExactlyOne => ResolvedPolicy::ExactlyOne,
            GroupPolicy::AtMostOne => ResolvedPolicy::AtMostOne,
            GroupPolicy::Auto => {
                if options.iter().any(|o| o.single) {
                    ResolvedPolicy::ExactlyOne
                } else {
                    ResolvedPolicy::AtMostOne
                }
            }
        }
    }
}

/// The policy after `auto` resolution; what the group constraint emitter
/// actually branches on.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ResolvedPolicy {
    ExactlyOne,
    AtMostOne,
}

/// A single option within a group.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Option {
    pub name: String,
    pub property: std::option::Option<String>,
    pub condition: std::option::Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub single: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub error: bool,
    /// Ignored by the encoder; preserved only because the IR schema says
    /// unknown/decorative keys survive parsing.
    pub comment: std::option::Option<String>,
}

impl Option {
    pub fn new(name: impl Into<String>) -> Self {
        Option {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn error(mut self) -> Self {
        self.error = true;
        self
    }
}

/// A mutually-exclusive choice domain: one parameter or environment dimension.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    pub name: String,
    pub category: GroupCategory,
    /// Ignored by the encoder; preserved only because the IR schema says so.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flag: std::option::Option<String>,
    /// Insertion order preserved; this is the order group constraints and
    /// coverage enumeration iterate in.
    pub options: Vec<Option>,
}

impl Group {
    pub fn new(name: impl Into<String>, category: GroupCategory) -> Self {
        Group {
            name: name.into(),
            category,
            flag: None,
            options: Vec::new(),
        }
    }
}

/// The symmetric pairs of mutually exclusive property names supplied by the
/// caller. Stored as an ordered list of unordered pairs; duplicates (in
/// either direction) are canonicalized by sorted pair before use.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AntonymPairs(pub Vec<(String, String)>);

impl AntonymPairs {
    /// Deduplicated, sorted-pair canonical form, in first-seen order.
    pub fn canonicalize(&self) -> Vec<(String, String)> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for (a, b) in &self.0 {
            let pair = if a <= b {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            };
            if seen.insert(pair.clone()) {
                out.push(pair);
            }
        }
        out
    }
}

/// Enumerated encoder configuration (spec §6 "Encoder configuration").
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncoderConfig {
    /// Interaction strength for coverage; must be `>= 1`.
    pub t: u32,
    /// Number of slots (test-suite size); must be `>= 1`.
    pub k: u32,
    /// Overrides per-group at-least-one behavior.
    pub group_policy: GroupPolicy,
    /// If true, emit unit clauses asserting each coverage variable.
    pub require_full_coverage: bool,
    /// If true, unknown atoms in guards abort; else a fresh per-slot property
    /// variable is allocated for them.
    pub strict_conditions: bool,
    /// Symmetric pairs of mutually exclusive properties.
    pub antonyms: AntonymPairs,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            t: 2,
            k: 1,
            group_policy: GroupPolicy::Auto,
            require_full_coverage: false,
            strict_conditions: false,
            antonyms: AntonymPairs::default(),
        }
    }
}
