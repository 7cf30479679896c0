//! I/O for the combinatorial-interaction CNF encoder: IR deserialization and
//! validation, canonical-JSON atomic writes, and content hashing.
//!
//! Keeps the same split the core crate does: `cit_core` owns the domain
//! types and pure-domain errors, this crate owns everything that touches a
//! filesystem path or a JSON byte stream.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for cit_io (used by `ir`, `canonical_json`, `dimacs`).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (create_dir_all, rename, fsync, etc.)
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON parse/serialize errors with an optional JSON Pointer.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// The IR deserialized fine but fails a domain invariant.
    #[error("malformed IR: {0}")]
    Core(#[from] cit_core::CoreError),

    /// Hashing-related errors (e.g., feature disabled, read failures).
    #[error("hash error: {0}")]
    Hash(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

pub mod canonical_json;
pub mod dimacs;
#[cfg(feature = "hash")]
pub mod hasher;
pub mod ir;

pub mod prelude {
    pub use crate::{IoError, IoResult};

    pub use crate::canonical_json;
    #[cfg(feature = "hash")]
    pub use crate::hasher;
    pub use crate::{dimacs, ir};

    pub use crate::canonical_json::write_canonical_file;
    #[cfg(feature = "hash")]
    pub use crate::hasher::sha256_hex;
}
