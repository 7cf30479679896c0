// crates/cit_cli/src/main.rs
//
// citenc — CLI entrypoint for the combinatorial-interaction CNF encoder.
// Drives load → validate → encode → artifacts end to end, then (optionally)
// renders a summary report. Strictly offline & deterministic: no network,
// no OS RNG, no retries.

mod args;
mod config_file;

use args::{parse_and_validate, Args, CliError};
use cit_encode::RawEncoderConfig;
use cit_io::canonical_json::write_bytes_atomically;
use cit_pipeline::RunOutcome;
use std::process::ExitCode;

#[cfg(feature = "report-json")]
use cit_report::render_json as render_json_report;
#[cfg(feature = "report-html")]
use cit_report::render_html as render_html_report;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_and_validate() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("citenc: error: {e}");
            return ExitCode::from(1);
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("citenc: error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<ExitCode, String> {
    let raw_config = config_file::resolve_raw_config(&args)
        .map_err(|e| format!("config resolution: {e}"))?;

    if args.validate_only {
        let loaded = cit_pipeline::load(&args.ir).map_err(|e| format!("load: {e}"))?;
        let resolved = cit_encode::validate_config(raw_config, loaded.groups.len())
            .map_err(|e| format!("config: {e}"))?;
        let report = cit_pipeline::validate(&loaded.groups, &resolved);
        print_validation(&report, args.quiet);
        // `cit_pipeline::validate` only ever collects warnings (see its own
        // doc comment: "never blocks encoding"), so a dirty report is not a
        // process failure — the exit code here is always 0.
        return Ok(ExitCode::from(0));
    }

    std::fs::create_dir_all(&args.out)
        .map_err(|e| format!("cannot create output directory {}: {e}", args.out.display()))?;

    let outcome = cit_pipeline::run_from_file(&args.ir, raw_config, &args.out)
        .map_err(|e| format!("pipeline failed: {e}"))?;

    if !args.render.is_empty() {
        render_reports(&args, &outcome).map_err(|e| format!("render reports: {e}"))?;
    }

    if !args.quiet {
        println!(
            "citenc: completed — manifest={}",
            outcome.artifacts.manifest.id
        );
        println!(
            "citenc: {} variable(s), {} clause(s)",
            outcome.artifacts.manifest.var_count, outcome.artifacts.manifest.clause_count
        );
        println!("citenc: artifacts written to {}", args.out.display());
        print_validation(&outcome.validation, false);
    }

    Ok(ExitCode::from(0))
}

fn print_validation(report: &cit_pipeline::ValidationReport, quiet: bool) {
    if quiet {
        return;
    }
    if report.is_clean() {
        println!("citenc: validation: no issues");
    } else {
        for issue in &report.issues {
            println!("citenc: validation [{}]: {}", issue.code, issue.message);
        }
    }
}

fn render_reports(args: &Args, outcome: &RunOutcome) -> Result<(), Box<dyn std::error::Error>> {
    let model = cit_report::build_model(outcome);

    for fmt in &args.render {
        match fmt.as_str() {
            #[cfg(feature = "report-json")]
            "json" => {
                let s = render_json_report(&model)?;
                let path = args.out.join("report.json");
                write_bytes_atomically(&path, s.as_bytes())?;
            }
            #[cfg(feature = "report-html")]
            "html" => {
                let s = render_html_report(&model)?;
                let path = args.out.join("report.html");
                write_bytes_atomically(&path, s.as_bytes())?;
            }
            other => eprintln!("citenc: warning: unknown --render format: {other}"),
        }
    }
    Ok(())
}
