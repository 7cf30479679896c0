//! Core types for the combinatorial-interaction CNF encoder.
//!
//! This crate owns the vocabulary shared by every encoder pass: the
//! monotonic [`registry::VariableRegistry`], signed [`ids::Literal`]s and
//! [`clause::Clause`]s, the typed IR record shapes in [`domain`], and the
//! canonical tuple ordering in [`determinism`]. It has no knowledge of JSON,
//! files, or the pipeline that drives the passes — those live in downstream
//! crates.

#![forbid(unsafe_code)]

pub mod clause;
pub mod determinism;
pub mod domain;
pub mod errors;
pub mod ids;
pub mod registry;

pub use clause::{to_dimacs, Clause, CnfFormula};
pub use determinism::{sort_coverage_keys, CoverageKey};
pub use domain::{AntonymPairs, EncoderConfig, Group, GroupCategory, GroupPolicy, Option, ResolvedPolicy};
pub use errors::CoreError;
pub use ids::{Literal, VarId};
pub use registry::{VarCategory, VariableRegistry};
