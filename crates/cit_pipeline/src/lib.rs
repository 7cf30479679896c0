//! Orchestration layer tying `cit_io` and `cit_encode` together: read an IR
//! file, run the non-fatal structural checks, encode it, and write the
//! DIMACS CNF, varmap, and manifest artifacts to a directory. `cit_encode`
//! itself never touches a filesystem path; this crate is where that happens.

#![forbid(unsafe_code)]

pub mod artifacts;
pub mod error;
pub mod load;
pub mod manifest;
pub mod run;
pub mod validate;

pub use artifacts::{write_artifacts, EncodedArtifacts};
pub use error::{PipelineError, PipelineResult};
pub use load::{load, load_from_str, LoadedIr};
pub use manifest::{build_manifest, EncodingManifest};
pub use run::{run_from_file, run_from_str, RunOutcome};
pub use validate::{validate, Severity, ValidationIssue, ValidationReport};
