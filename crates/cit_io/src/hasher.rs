//! SHA-256 hashing of canonical JSON bytes, used to fingerprint an IR input
//! (surfaced by the CLI/report layers for reproducibility, not consulted by
//! the encoder itself).

#![forbid(unsafe_code)]

use digest::Digest;
use sha2::Sha256;

use crate::IoError;
use crate::canonical_json::to_canonical_json_bytes;

/// Compute lowercase 64-hex SHA-256 of raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// SHA-256 of canonical JSON representation (sorted keys, compact); returns
/// lowercase 64-hex.
pub fn sha256_canonical(value: &serde_json::Value) -> String {
    sha256_hex(&to_canonical_json_bytes(value))
}

/// Convenience: hash a file from disk; returns lowercase 64-hex.
pub fn sha256_file<P: AsRef<std::path::Path>>(path: P) -> Result<String, IoError> {
    let bytes = std::fs::read(path)?;
    Ok(sha256_hex(&bytes))
}

/// True iff string is lowercase 64-hex.
pub fn is_hex64(s: &str) -> bool {
    s.len() == 64 && s.as_bytes().iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b85"
        );
    }

    #[test]
    fn hex_validator_rejects_wrong_length_and_case() {
        assert!(!is_hex64("abc"));
        assert!(!is_hex64(&"A".repeat(64)));
        assert!(is_hex64(&"a".repeat(64)));
    }
}
