//! The CNF encoding passes: index builder, group constraint emitter,
//! property linker, condition compiler, and coverage encoder, plus the
//! `encode()` entry point that drives all six in their fixed order.
//!
//! Depends only on `cit_core` — no JSON, no filesystem, no CLI.

#![forbid(unsafe_code)]

pub mod condition_pass;
pub mod conditions;
pub mod config;
pub mod coverage;
pub mod encoder;
pub mod error;
pub mod groups;
pub mod index;
pub mod properties;
pub mod vars;

pub use config::{validate_config, RawEncoderConfig};
pub use encoder::{encode, EncodeOutput};
pub use error::{ConditionError, ConfigError, EncodeError};
pub use index::{GroupIndex, OptionMeta};
