//! Compact HTML summary rendered with an embedded `minijinja` template — no
//! external assets. The template walks `ReportModel` directly (passed in as
//! the render context via its `Serialize` impl), so field names here must
//! track `structure::ReportModel` exactly.

use minijinja::Environment;

use crate::structure::ReportModel;
use crate::ReportError;

static TEMPLATE: &str = r#"<!doctype html>
<html lang="en"><meta charset="utf-8">
<title>Encoding report — {{ cover.manifest_id }}</title>
<h1>Encoding report</h1>
<p>Input sha256: {{ cover.input_sha256 }}</p>

<h2>Configuration</h2>
<p>t={{ config.t }}, k={{ config.k }}, full_coverage={{ config.require_full_coverage }}, strict_conditions={{ config.strict_conditions }}</p>

<h2>Variables</h2>
<p>Total: {{ variables.total }}</p>
<ul>
{% for row in variables.by_category %}
  <li>{{ row.category }}: {{ row.count }}</li>
{% endfor %}
</ul>

<h2>Coverage</h2>
<p>Clauses: {{ coverage.clause_count }} — coverage variables: {{ coverage.coverage_variable_count }}</p>

<h2>Validation</h2>
{% if validation.clean %}
<p>No issues.</p>
{% else %}
<ul>
{% for issue in validation.issues %}
  <li>{{ issue.code }}: {{ issue.message }}</li>
{% endfor %}
</ul>
{% endif %}
</html>
"#;

pub fn render_html(model: &ReportModel) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_template("report.html", TEMPLATE)
        .map_err(|e| ReportError::Template(e.to_string()))?;
    let tmpl = env
        .get_template("report.html")
        .map_err(|e| ReportError::Template(e.to_string()))?;

    tmpl.render(model)
        .map_err(|e| ReportError::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::*;

    #[test]
    fn renders_html_mentioning_manifest_id() {
        let model = ReportModel {
            cover: CoverSection {
                manifest_id: "ENC:abc".into(),
                input_sha256: "deadbeef".into(),
            },
            config: ConfigSection {
                t: 2,
                k: 1,
                require_full_coverage: false,
                strict_conditions: false,
            },
            variables: VariableSection {
                total: 10,
                by_category: vec![],
            },
            coverage: CoverageSection {
                clause_count: 30,
                coverage_variable_count: 4,
            },
            validation: ValidationSection {
                clean: true,
                issues: vec![],
            },
        };
        let html = render_html(&model).unwrap();
        assert!(html.contains("ENC:abc"));
        assert!(html.contains("No issues."));
    }
}
