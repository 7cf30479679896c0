//! Merges the optional sibling JSON config file with CLI flag overrides into
//! a [`RawEncoderConfig`]. Flags always win over the file; the file's own
//! defaults fall back to `RawEncoderConfig::default()`.

use std::collections::BTreeMap;
use std::fs;

use cit_core::{AntonymPairs, GroupPolicy};
use cit_encode::RawEncoderConfig;

use crate::args::Args;

/// Wire shape of the config file. Every field is optional so a config file
/// can specify only what it needs to override; `antonyms` is a JSON object
/// rather than `AntonymPairs`'s own array-of-pairs serialization, since a
/// hand-written config file is more naturally a mapping.
#[derive(Debug, serde::Deserialize, Default)]
struct ConfigFile {
    t: Option<i64>,
    k: Option<i64>,
    group_policy: Option<String>,
    require_full_coverage: Option<bool>,
    strict_conditions: Option<bool>,
    antonyms: Option<BTreeMap<String, String>>,
}

pub fn resolve_raw_config(args: &Args) -> Result<RawEncoderConfig, String> {
    let file = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read config file {}: {e}", path.display()))?;
            serde_json::from_str::<ConfigFile>(&text)
                .map_err(|e| format!("invalid config file {}: {e}", path.display()))?
        }
        None => ConfigFile::default(),
    };

    let mut config = RawEncoderConfig::default();

    if let Some(t) = args.t.or(file.t) {
        config.t = t;
    }
    if let Some(k) = args.k.or(file.k) {
        config.k = k;
    }
    if let Some(policy) = args.group_policy.clone().or(file.group_policy) {
        config.group_policy = parse_group_policy(&policy)?;
    }
    config.require_full_coverage = args.require_full_coverage
        || file.require_full_coverage.unwrap_or(false);
    config.strict_conditions = args.strict_conditions || file.strict_conditions.unwrap_or(false);

    if let Some(map) = file.antonyms {
        config.antonyms = AntonymPairs(map.into_iter().collect());
    }

    Ok(config)
}

fn parse_group_policy(s: &str) -> Result<GroupPolicy, String> {
    match s {
        "auto" => Ok(GroupPolicy::Auto),
        "exactly-one" => Ok(GroupPolicy::ExactlyOne),
        "at-most-one" => Ok(GroupPolicy::AtMostOne),
        other => Err(format!("unknown group_policy: {other}")),
    }
}
