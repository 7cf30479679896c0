//! Errors surfaced by pipeline orchestration. Wraps the lower-layer error
//! types from `cit_io` and `cit_encode` rather than re-deriving their cases.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Io(#[from] cit_io::IoError),

    #[error(transparent)]
    Encode(#[from] cit_encode::EncodeError),

    #[error("output directory error: {0}")]
    OutputDir(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
