//! Pure report data model + mapper from pipeline artifacts. No I/O, no
//! recomputation — every field here is read straight off an already-finished
//! `cit_pipeline::RunOutcome`.

#[derive(Clone, Debug, serde::Serialize)]
pub struct ReportModel {
    pub cover: CoverSection,
    pub config: ConfigSection,
    pub variables: VariableSection,
    pub coverage: CoverageSection,
    pub validation: ValidationSection,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct CoverSection {
    pub manifest_id: String,
    pub input_sha256: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ConfigSection {
    pub t: u32,
    pub k: u32,
    pub require_full_coverage: bool,
    pub strict_conditions: bool,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct VariableSection {
    pub total: usize,
    pub by_category: Vec<CategoryCount>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct CoverageSection {
    pub clause_count: usize,
    pub coverage_variable_count: usize,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ValidationIssueView {
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ValidationSection {
    pub clean: bool,
    pub issues: Vec<ValidationIssueView>,
}

/// Build the report model from a completed pipeline run. Pure and
/// deterministic — the same `RunOutcome` always yields the same model.
pub fn build_model(outcome: &cit_pipeline::RunOutcome) -> ReportModel {
    let manifest = &outcome.artifacts.manifest;
    let registry = &outcome.artifacts.registry;

    let cover = CoverSection {
        manifest_id: manifest.id.clone(),
        input_sha256: manifest.input_sha256.clone(),
    };

    let config = ConfigSection {
        t: manifest.t,
        k: manifest.k,
        require_full_coverage: manifest.require_full_coverage,
        strict_conditions: manifest.strict_conditions,
    };

    let by_category: Vec<CategoryCount> = registry
        .counts_by_category()
        .into_iter()
        .map(|(cat, n)| CategoryCount {
            category: category_label(cat).to_string(),
            count: n,
        })
        .collect();
    let variables = VariableSection {
        total: manifest.var_count,
        by_category,
    };

    let coverage_variable_count = registry
        .counts_by_category()
        .into_iter()
        .find(|(cat, _)| *cat == cit_core::VarCategory::CoverageVar)
        .map(|(_, n)| n)
        .unwrap_or(0);
    let coverage = CoverageSection {
        clause_count: manifest.clause_count,
        coverage_variable_count,
    };

    let issues: Vec<ValidationIssueView> = outcome
        .validation
        .issues
        .iter()
        .map(|i| ValidationIssueView {
            code: i.code.to_string(),
            message: i.message.clone(),
        })
        .collect();
    let validation = ValidationSection {
        clean: outcome.validation.is_clean(),
        issues,
    };

    ReportModel {
        cover,
        config,
        variables,
        coverage,
        validation,
    }
}

fn category_label(cat: cit_core::VarCategory) -> &'static str {
    use cit_core::VarCategory::*;
    match cat {
        OptionSlot => "option_slot",
        PropertySlot => "property_slot",
        TseitinAux => "tseitin_aux",
        CoverageIndicator => "coverage_indicator",
        CoverageVar => "coverage_var",
    }
}
