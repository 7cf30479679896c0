//! Pure offline report model + renderers over a finished encoding run.
//!
//! No network, no filesystem writes here — callers already have an
//! in-memory `cit_pipeline::RunOutcome` and want to present it. Field order
//! in both renderers mirrors [`structure::ReportModel`]'s section order.

#![forbid(unsafe_code)]

use core::fmt;

pub mod structure;

#[cfg(feature = "render_json")]
pub mod render_json;
#[cfg(feature = "render_html")]
pub mod render_html;

pub use structure::{build_model, ReportModel};

#[cfg(feature = "render_json")]
pub use render_json::render_json;
#[cfg(feature = "render_html")]
pub use render_html::render_html;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportError {
    Serialize(String),
    Template(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Serialize(m) => write!(f, "failed to serialize report: {m}"),
            ReportError::Template(m) => write!(f, "failed to render report template: {m}"),
        }
    }
}

impl std::error::Error for ReportError {}
