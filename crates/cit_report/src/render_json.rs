//! JSON rendering of a [`crate::ReportModel`]. Field order is whatever
//! `serde_json` gives a struct with `preserve_order` off — the model's own
//! field order, since `ReportModel` derives `Serialize` directly rather than
//! going through a `serde_json::Value`.

use crate::structure::ReportModel;
use crate::ReportError;

pub fn render_json(model: &ReportModel) -> Result<String, ReportError> {
    serde_json::to_string_pretty(model).map_err(|e| ReportError::Serialize(e.to_string()))
}
