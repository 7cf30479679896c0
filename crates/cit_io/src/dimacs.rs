//! DIMACS CNF output plus its id→label sidecar.
//!
//! The encoder returns an in-memory [`cit_core::CnfFormula`]; everything here
//! is concerned with turning that into the two artifacts a downstream solver
//! and decoder actually consume.

use std::collections::BTreeMap;
use std::path::Path;

use cit_core::{to_dimacs, CnfFormula, VariableRegistry};
use serde_json::Value;

use crate::canonical_json::write_bytes_atomically;
use crate::canonical_json::write_canonical_file;
use crate::IoError;

/// Render a formula to DIMACS text using the registry's allocated id count
/// (not [`CnfFormula::max_var_mentioned`] — ids allocated but never used in a
/// clause must still be counted in the header).
pub fn render(formula: &CnfFormula, registry: &VariableRegistry, comments: &[String]) -> String {
    to_dimacs(formula, registry.next_id_peek() - 1, comments)
}

/// Write the rendered DIMACS text to `path` atomically.
pub fn write_dimacs_file(
    path: &Path,
    formula: &CnfFormula,
    registry: &VariableRegistry,
    comments: &[String],
) -> Result<(), IoError> {
    let text = render(formula, registry, comments);
    write_bytes_atomically(path, text.as_bytes())?;
    Ok(())
}

/// The id↔label sidecar: `by_id` (decimal id string → label) and `by_label`
/// (label → decimal id string), so a consumer can look up either direction
/// without re-deriving one map from the other.
pub fn varmap_value(registry: &VariableRegistry) -> Value {
    let by_id: BTreeMap<String, &str> = registry
        .iter_by_id()
        .map(|(id, label)| (id.get().to_string(), label))
        .collect();
    let by_label: BTreeMap<&str, String> = registry
        .iter_by_id()
        .map(|(id, label)| (label, id.get().to_string()))
        .collect();
    serde_json::json!({ "by_id": by_id, "by_label": by_label })
}

/// Write the id→label sidecar to `path` atomically as canonical JSON.
pub fn write_varmap_file(path: &Path, registry: &VariableRegistry) -> Result<(), IoError> {
    write_canonical_file(path, &varmap_value(registry))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cit_core::{Clause, VarCategory};

    #[test]
    fn render_includes_requested_comments() {
        let mut reg = VariableRegistry::new();
        let a = reg.intern("v(a1,1)", VarCategory::OptionSlot);
        let mut f = CnfFormula::new();
        f.unit(a.pos());
        let text = render(&f, &reg, &["generated".to_string()]);
        assert!(text.starts_with("c generated\n"));
        assert!(text.contains("p cnf 1 1\n"));
    }

    #[test]
    fn varmap_keys_are_decimal_ids() {
        let mut reg = VariableRegistry::new();
        reg.intern("v(a1,1)", VarCategory::OptionSlot);
        reg.intern("v(a2,1)", VarCategory::OptionSlot);
        let v = varmap_value(&reg);
        assert_eq!(v["by_id"]["1"], "v(a1,1)");
        assert_eq!(v["by_id"]["2"], "v(a2,1)");
    }

    #[test]
    fn varmap_is_bidirectional() {
        let mut reg = VariableRegistry::new();
        reg.intern("v(a1,1)", VarCategory::OptionSlot);
        reg.intern("v(a2,1)", VarCategory::OptionSlot);
        let v = varmap_value(&reg);
        assert_eq!(v["by_label"]["v(a1,1)"], "1");
        assert_eq!(v["by_label"]["v(a2,1)"], "2");
        // round trip: by_id then by_label gets back the same id.
        assert_eq!(v["by_label"][v["by_id"]["1"].as_str().unwrap()], "1");
    }

    #[test]
    fn write_dimacs_and_varmap_round_trip_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = VariableRegistry::new();
        let a = reg.intern("v(a1,1)", VarCategory::OptionSlot);
        let mut f = CnfFormula::new();
        f.push(Clause::from_literals([a.pos()]));

        let cnf_path = dir.path().join("out.cnf");
        let varmap_path = dir.path().join("varmap.json");
        write_dimacs_file(&cnf_path, &f, &reg, &[]).unwrap();
        write_varmap_file(&varmap_path, &reg).unwrap();

        let cnf_text = std::fs::read_to_string(&cnf_path).unwrap();
        assert!(cnf_text.starts_with("p cnf 1 1\n"));
        let varmap_text = std::fs::read_to_string(&varmap_path).unwrap();
        assert_eq!(
            varmap_text,
            r#"{"by_id":{"1":"v(a1,1)"},"by_label":{"v(a1,1)":"1"}}"#
        );
    }
}
