//! ARTIFACTS stage: renders the encoder's output into the three files a
//! downstream solver run needs — the DIMACS CNF text, the id↔label varmap,
//! and the encoding manifest — and writes them atomically to a directory.

use std::path::Path;

use cit_core::{CnfFormula, VariableRegistry};
use cit_io::canonical_json::write_bytes_atomically;
use cit_io::dimacs;

use crate::error::PipelineError;
use crate::manifest::EncodingManifest;

pub struct EncodedArtifacts {
    pub registry: VariableRegistry,
    pub formula: CnfFormula,
    pub manifest: EncodingManifest,
}

/// Write `problem.cnf`, `varmap.json`, and `manifest.json` into `out_dir`,
/// creating it if needed. Every write goes through the same atomic
/// temp-file-then-rename path `cit_io::canonical_json` uses for JSON.
pub fn write_artifacts(out_dir: &Path, artifacts: &EncodedArtifacts) -> Result<(), PipelineError> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| PipelineError::OutputDir(e.to_string()))?;

    let comments = vec![format!("manifest-id {}", artifacts.manifest.id)];
    let dimacs_text = dimacs::render(&artifacts.formula, &artifacts.registry, &comments);
    write_bytes_atomically(&out_dir.join("problem.cnf"), dimacs_text.as_bytes())
        .map_err(|e| PipelineError::OutputDir(e.to_string()))?;

    dimacs::write_varmap_file(&out_dir.join("varmap.json"), &artifacts.registry)?;

    let manifest_value = serde_json::to_value(&artifacts.manifest)
        .expect("EncodingManifest always serializes");
    cit_io::canonical_json::write_canonical_file(&out_dir.join("manifest.json"), &manifest_value)
        .map_err(|e| PipelineError::OutputDir(e.to_string()))?;

    Ok(())
}
