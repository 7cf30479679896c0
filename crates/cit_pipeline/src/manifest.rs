//! Builds the canonical encoding manifest: a small provenance record that
//! names the input digest, the resolved config, and the resulting variable
//! and clause counts. Hashed the same way the rest of the pipeline hashes
//! canonical JSON — idless payload first, `sha256` of its canonical bytes
//! becomes the id.

use cit_core::{EncoderConfig, VarCategory, VariableRegistry};
use cit_io::hasher::sha256_canonical;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
pub struct EncodingManifest {
    pub id: String,
    pub input_sha256: String,
    pub t: u32,
    pub k: u32,
    pub require_full_coverage: bool,
    pub strict_conditions: bool,
    pub var_count: usize,
    pub clause_count: usize,
    pub var_counts_by_category: Value,
}

fn category_label(cat: VarCategory) -> &'static str {
    match cat {
        VarCategory::OptionSlot => "option_slot",
        VarCategory::PropertySlot => "property_slot",
        VarCategory::TseitinAux => "tseitin_aux",
        VarCategory::CoverageIndicator => "coverage_indicator",
        VarCategory::CoverageVar => "coverage_var",
    }
}

pub fn build_manifest(
    input_sha256: &str,
    config: &EncoderConfig,
    registry: &VariableRegistry,
    clause_count: usize,
) -> EncodingManifest {
    let var_count = (registry.next_id_peek() - 1) as usize;

    let by_category: Value = registry
        .counts_by_category()
        .into_iter()
        .map(|(cat, n)| (category_label(cat).to_string(), json!(n)))
        .collect::<serde_json::Map<_, _>>()
        .into();

    let noid = json!({
        "input_sha256": input_sha256,
        "t": config.t,
        "k": config.k,
        "require_full_coverage": config.require_full_coverage,
        "strict_conditions": config.strict_conditions,
        "var_count": var_count,
        "clause_count": clause_count,
        "var_counts_by_category": by_category,
    });
    let id = format!("ENC:{}", sha256_canonical(&noid));

    EncodingManifest {
        id,
        input_sha256: input_sha256.to_string(),
        t: config.t,
        k: config.k,
        require_full_coverage: config.require_full_coverage,
        strict_conditions: config.strict_conditions,
        var_count,
        clause_count,
        var_counts_by_category: by_category,
    }
}
