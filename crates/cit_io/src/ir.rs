//! IR ingestion: read the nested `parameters`/`environments` JSON produced by
//! the (out-of-scope) surface-syntax parser, validate it, and hand back
//! typed, insertion-ordered [`cit_core::Group`] records.
//!
//! `serde_json::Value` objects preserve source key order only with the
//! `preserve_order` feature (enabled in this crate's `Cargo.toml`); every
//! group/option table below is walked in that order rather than deserialized
//! straight into a `HashMap`, which is how insertion order would otherwise be
//! lost between the file and the encoder.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use cit_core::{CoreError, Group, GroupCategory, Option as CitOption};

use crate::IoError;

/// Read and parse a whole IR document from a path.
pub fn load_ir_file(path: &Path) -> Result<Vec<Group>, IoError> {
    let text = std::fs::read_to_string(path)?;
    load_ir_str(&text)
}

/// Parse a whole IR document from a JSON string.
pub fn load_ir_str(text: &str) -> Result<Vec<Group>, IoError> {
    let value: Value = serde_json::from_str(text)?;
    parse_ir(&value)
}

/// Parse the two top-level sections (`parameters`, `environments`) into one
/// ordered list of groups: parameters first, then environments, each in
/// source order. Both are normalized identically downstream.
pub fn parse_ir(root: &Value) -> Result<Vec<Group>, IoError> {
    let obj = root.as_object().ok_or_else(|| IoError::Json {
        pointer: "/".to_string(),
        msg: "IR root must be a JSON object".to_string(),
    })?;

    let mut groups = Vec::new();
    if let Some(parameters) = obj.get("parameters") {
        groups.extend(parse_section(parameters, "/parameters", GroupCategory::Parameter)?);
    }
    if let Some(environments) = obj.get("environments") {
        groups.extend(parse_section(
            environments,
            "/environments",
            GroupCategory::Environment,
        )?);
    }

    validate_groups(&groups)?;
    Ok(groups)
}

fn parse_section(section: &Value, pointer: &str, category: GroupCategory) -> Result<Vec<Group>, IoError> {
    let obj = section.as_object().ok_or_else(|| IoError::Json {
        pointer: pointer.to_string(),
        msg: "section must be an ordered object of group name -> group record".to_string(),
    })?;

    let mut groups = Vec::with_capacity(obj.len());
    for (name, record) in obj.iter() {
        groups.push(parse_group(name, record, category, &format!("{pointer}/{name}"))?);
    }
    Ok(groups)
}

fn parse_group(
    name: &str,
    record: &Value,
    category: GroupCategory,
    pointer: &str,
) -> Result<Group, IoError> {
    let obj = record.as_object().ok_or_else(|| IoError::Json {
        pointer: pointer.to_string(),
        msg: "group record must be an object".to_string(),
    })?;

    let flag = obj.get("flag").and_then(|v| v.as_str()).map(|s| s.to_string());

    let options_value = obj.get("options").ok_or_else(|| IoError::Json {
        pointer: pointer.to_string(),
        msg: "group record missing 'options'".to_string(),
    })?;
    let options_array = options_value.as_array().ok_or_else(|| IoError::Json {
        pointer: format!("{pointer}/options"),
        msg: "'options' must be an array".to_string(),
    })?;

    let mut options = Vec::with_capacity(options_array.len());
    for (i, opt_value) in options_array.iter().enumerate() {
        let record: OptionRecord = serde_json::from_value(opt_value.clone()).map_err(|e| IoError::Json {
            pointer: format!("{pointer}/options/{i}"),
            msg: e.to_string(),
        })?;
        options.push(record.into());
    }

    let mut group = Group::new(name, category);
    group.flag = flag;
    group.options = options;
    Ok(group)
}

/// The wire shape of a single option record. Unknown keys (and `comment`)
/// are preserved by `serde` in the sense of not erroring, but only
/// `comment` is retained on the typed record — the schema names it
/// explicitly as ignored-but-preserved.
#[derive(Deserialize)]
struct OptionRecord {
    name: String,
    #[serde(default)]
    property: std::option::Option<String>,
    #[serde(default)]
    condition: std::option::Option<String>,
    #[serde(default)]
    single: bool,
    #[serde(default)]
    error: bool,
    #[serde(default)]
    comment: std::option::Option<String>,
}

impl From<OptionRecord> for CitOption {
    fn from(r: OptionRecord) -> Self {
        CitOption {
            name: r.name,
            property: r.property,
            condition: r.condition,
            single: r.single,
            error: r.error,
            comment: r.comment,
        }
    }
}

/// Cross-group structural checks: spec §4.2 "Fails if: an option name
/// appears in two groups, or a group has zero options."
fn validate_groups(groups: &[Group]) -> Result<(), IoError> {
    if groups.is_empty() {
        return Err(CoreError::NoOptions.into());
    }

    let mut seen_options = HashSet::new();
    let mut total_options = 0usize;
    for g in groups {
        if g.options.is_empty() {
            return Err(CoreError::EmptyGroup(g.name.clone()).into());
        }
        for opt in &g.options {
            if !seen_options.insert(opt.name.clone()) {
                return Err(CoreError::DuplicateOption(opt.name.clone()).into());
            }
            total_options += 1;
        }
    }
    if total_options == 0 {
        return Err(CoreError::NoOptions.into());
    }
    Ok(())
}
