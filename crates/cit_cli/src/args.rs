// crates/cit_cli/src/args.rs
//
// Deterministic, offline CLI argument parsing & validation.
// - No networked paths (reject http/https schemes)
// - IR input is required; a sibling JSON config file is optional and is
//   overridden field-by-field by explicit flags.
// - Light config-file "quick-check" (it must parse as a JSON object) before
//   handing it to cit_pipeline.

use clap::Parser;
use std::{
    env,
    fs,
    path::PathBuf,
};

#[derive(Debug, Parser)]
pub struct Args {
    /// Path to the IR JSON document (`parameters`/`environments` groups).
    #[arg(long)]
    pub ir: PathBuf,

    /// Path to a sibling JSON config file; individual flags below override
    /// whatever it sets.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub t: Option<i64>,
    #[arg(long)]
    pub k: Option<i64>,
    #[arg(long, value_parser = ["auto", "exactly-one", "at-most-one"])]
    pub group_policy: Option<String>,
    #[arg(long)]
    pub require_full_coverage: bool,
    #[arg(long)]
    pub strict_conditions: bool,

    // Output & rendering
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
    #[arg(long, value_parser = ["json", "html"], num_args = 0..=2)]
    pub render: Vec<String>,

    #[arg(long)]
    pub validate_only: bool,
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
    ConfigQuick(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {}", p),
            NotFound(p) => write!(f, "file not found: {}", p),
            ConfigQuick(s) => write!(f, "config quick-check failed: {}", s),
        }
    }
}
impl std::error::Error for CliError {}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    let mut args = Args::parse();

    ensure_local_exists(&args.ir, "--ir")?;
    args.ir = normalize_path(&args.ir);

    if let Some(p) = &args.config {
        ensure_local_exists(p, "--config")?;
        quick_check_config_bytes(&fs::read(p).map_err(|_| CliError::NotFound(p.display().to_string()))?)?;
        args.config = Some(normalize_path(p));
    }

    args.out = normalize_path(&args.out);

    Ok(args)
}

/// Ensure a path is local (no scheme) and exists as a file.
fn ensure_local_exists(p: &PathBuf, label: &'static str) -> Result<(), CliError> {
    let s = p.to_string_lossy().to_string();
    if has_scheme(&s) {
        return Err(CliError::NonLocalPath(format!("{} {}", label, s)));
    }
    let meta = fs::metadata(p).map_err(|_| CliError::NotFound(format!("{} {}", label, s)))?;
    if !meta.is_file() {
        return Err(CliError::NotFound(format!("{} {}", label, s)));
    }
    Ok(())
}

/// Best-effort normalization to an absolute canonical path.
fn normalize_path(p: &PathBuf) -> PathBuf {
    fs::canonicalize(p).unwrap_or_else(|_| {
        if p.is_absolute() {
            p.clone()
        } else {
            env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(p)
        }
    })
}

/// Shape-only check: the config file must parse as a JSON object (field
/// names are validated later by `cit_encode::validate_config`, not here) and
/// must not reference a remote URL anywhere.
fn quick_check_config_bytes(bytes: &[u8]) -> Result<(), CliError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| CliError::ConfigQuick("config must be UTF-8 JSON".into()))?;
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| CliError::ConfigQuick(format!("invalid JSON: {e}")))?;
    if !value.is_object() {
        return Err(CliError::ConfigQuick("config must be a JSON object".into()));
    }
    if text.contains("http://") || text.contains("https://") {
        return Err(CliError::ConfigQuick(
            "URLs are not allowed (offline only)".into(),
        ));
    }
    Ok(())
}

fn has_scheme(s: &str) -> bool {
    s.contains("://") || s.starts_with("http:") || s.starts_with("https:")
}
