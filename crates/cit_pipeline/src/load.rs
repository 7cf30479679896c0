//! LOAD stage: read the IR JSON file, hand it to `cit_io::ir` for parsing and
//! structural validation, and echo the input's content digest for the
//! manifest stage. No encoding decisions happen here.

use std::path::Path;

use cit_core::Group;
use cit_io::hasher;

use crate::error::PipelineError;

/// The parsed, validated IR plus the digest of the bytes it came from.
#[derive(Debug, Clone)]
pub struct LoadedIr {
    pub groups: Vec<Group>,
    pub input_sha256: String,
}

pub fn load(path: &Path) -> Result<LoadedIr, PipelineError> {
    let groups = cit_io::ir::load_ir_file(path)?;
    let input_sha256 = hasher::sha256_file(path)?;
    Ok(LoadedIr {
        groups,
        input_sha256,
    })
}

pub fn load_from_str(text: &str) -> Result<LoadedIr, PipelineError> {
    let groups = cit_io::ir::load_ir_str(text)?;
    let input_sha256 = hasher::sha256_hex(text.as_bytes());
    Ok(LoadedIr {
        groups,
        input_sha256,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_and_hashes_a_minimal_ir() {
        let text = r#"{"parameters":{"A":{"a1":{},"a2":{}}}}"#;
        let loaded = load_from_str(text).unwrap();
        assert_eq!(loaded.groups.len(), 1);
        assert_eq!(loaded.input_sha256.len(), 64);
    }

    #[test]
    fn loads_from_a_real_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"parameters":{{"A":{{"a1":{{}},"a2":{{}}}}}}}}"#).unwrap();
        let loaded = load(f.path()).unwrap();
        assert_eq!(loaded.groups.len(), 1);
        assert_eq!(
            loaded.input_sha256,
            hasher::sha256_file(f.path()).unwrap()
        );
    }
}
