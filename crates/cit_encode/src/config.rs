//! Config validation: turns the raw, wire-shaped encoder options (where `t`
//! and `k` can carry an out-of-range value from JSON or a CLI flag) into the
//! validated [`EncoderConfig`] every pass assumes it can trust.

use cit_core::{AntonymPairs, EncoderConfig, GroupPolicy};

use crate::error::ConfigError;

/// Wire shape of the "Encoder configuration" table (spec §6): signed so that
/// a non-positive `t`/`k` is a value to reject, not a type error to deserialize away.
#[derive(Clone, Debug)]
pub struct RawEncoderConfig {
    pub t: i64,
    pub k: i64,
    pub group_policy: GroupPolicy,
    pub require_full_coverage: bool,
    pub strict_conditions: bool,
    pub antonyms: AntonymPairs,
}

impl Default for RawEncoderConfig {
    fn default() -> Self {
        RawEncoderConfig {
            t: 2,
            k: 1,
            group_policy: GroupPolicy::Auto,
            require_full_coverage: false,
            strict_conditions: false,
            antonyms: AntonymPairs::default(),
        }
    }
}

/// Validate `raw` against spec §7 ConfigError rules and resolve it into the
/// internal [`EncoderConfig`]. `num_groups` is needed for the `t > groups` check.
pub fn validate_config(raw: RawEncoderConfig, num_groups: usize) -> Result<EncoderConfig, ConfigError> {
    if raw.t < 1 {
        return Err(ConfigError::NonPositiveT(raw.t));
    }
    if raw.k < 1 {
        return Err(ConfigError::NonPositiveK(raw.k));
    }
    let t = raw.t as u32;
    if t as usize > num_groups {
        return Err(ConfigError::TTooLarge {
            t,
            groups: num_groups,
        });
    }

    Ok(EncoderConfig {
        t,
        k: raw.k as u32,
        group_policy: raw.group_policy,
        require_full_coverage: raw.require_full_coverage,
        strict_conditions: raw.strict_conditions,
        antonyms: raw.antonyms,
    })
}
