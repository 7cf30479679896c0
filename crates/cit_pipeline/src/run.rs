//! Top-level entry points: load → validate → encode → artifacts, in that
//! fixed order, against a single IR source (file or in-memory string).

use std::path::Path;

use cit_encode::RawEncoderConfig;

use crate::artifacts::{write_artifacts, EncodedArtifacts};
use crate::error::PipelineError;
use crate::load::{load, load_from_str, LoadedIr};
use crate::manifest::build_manifest;
use crate::validate::{validate, ValidationReport};

/// Everything a caller needs to inspect a completed run: the written
/// artifacts plus whatever non-fatal issues `validate` surfaced.
pub struct RunOutcome {
    pub artifacts: EncodedArtifacts,
    pub validation: ValidationReport,
}

pub fn run_from_file(
    ir_path: &Path,
    raw_config: RawEncoderConfig,
    out_dir: &Path,
) -> Result<RunOutcome, PipelineError> {
    let loaded = load(ir_path)?;
    run(loaded, raw_config, out_dir)
}

pub fn run_from_str(
    ir_text: &str,
    raw_config: RawEncoderConfig,
    out_dir: &Path,
) -> Result<RunOutcome, PipelineError> {
    let loaded = load_from_str(ir_text)?;
    run(loaded, raw_config, out_dir)
}

fn run(
    loaded: LoadedIr,
    raw_config: RawEncoderConfig,
    out_dir: &Path,
) -> Result<RunOutcome, PipelineError> {
    let LoadedIr {
        groups,
        input_sha256,
    } = loaded;

    // Resolve the config once up front so validate/manifest see the same
    // `EncoderConfig` that `encode` itself will derive from `raw_config`.
    let resolved_config = cit_encode::validate_config(raw_config.clone(), groups.len())
        .map_err(cit_encode::EncodeError::from)?;
    let validation = validate(&groups, &resolved_config);

    let output = cit_encode::encode(&groups, raw_config)?;

    let manifest = build_manifest(
        &input_sha256,
        &resolved_config,
        &output.registry,
        output.formula.len(),
    );

    let artifacts = EncodedArtifacts {
        registry: output.registry,
        formula: output.formula,
        manifest,
    };
    write_artifacts(out_dir, &artifacts)?;

    Ok(RunOutcome {
        artifacts,
        validation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_end_to_end_and_writes_artifacts() {
        let ir = r#"{"parameters":{"A":{"a1":{},"a2":{}},"B":{"b1":{},"b2":{}}}}"#;
        let dir = tempfile::tempdir().unwrap();
        let outcome = run_from_str(
            ir,
            RawEncoderConfig {
                t: 2,
                k: 1,
                ..Default::default()
            },
            dir.path(),
        )
        .unwrap();

        assert!(!outcome.artifacts.formula.is_empty());
        assert!(dir.path().join("problem.cnf").exists());
        assert!(dir.path().join("manifest.json").exists());
    }
}
