//! # Validate Subcommand
//!
//! Runs the integrity pass over a framework export.
//!
//! Duplicate identifiers are expected in the published export (elements are
//! repeated once per party association), so by default they are reported
//! as notes and do not fail validation. `--strict` fails on any finding.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use csf_framework::IntegrityReport;

use crate::config::CliConfig;

/// Arguments for the `csf validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Framework export (JSON).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Fail on advisory findings (duplicate identifiers) as well.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure. Operational
/// errors propagate and exit 2.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let strict = args.strict || config.strict;
    let (path, framework) = crate::load_framework(args.path.as_deref(), config)?;
    let report = framework.integrity_report();

    tracing::info!(
        advisory = report.advisory.len(),
        structural = report.structural.len(),
        strict,
        "integrity validation complete"
    );

    println!("Framework: {}", path.display());
    println!("{}", render_report(&report, strict));
    Ok(exit_code(&report, strict))
}

/// 0 when the report passes, 1 when it fails.
pub fn exit_code(report: &IntegrityReport, strict: bool) -> u8 {
    let failed = if strict {
        !report.is_clean()
    } else {
        !report.is_valid()
    };
    u8::from(failed)
}

/// Render the findings and the verdict.
pub fn render_report(report: &IntegrityReport, strict: bool) -> String {
    let mut lines = Vec::new();
    let advisory_tag = if strict { "FAIL" } else { "NOTE" };
    for finding in &report.advisory {
        lines.push(format!("  {advisory_tag}: {finding}"));
    }
    for finding in &report.structural {
        lines.push(format!("  FAIL: {finding}"));
    }

    if !report.advisory.is_empty() && !strict {
        lines.push(format!(
            "{} duplicate-identifier finding(s); expected for party associations",
            report.advisory.len()
        ));
    }

    if exit_code(report, strict) == 0 {
        lines.push("Integrity: OK".to_string());
    } else {
        let failing = if strict {
            report.len()
        } else {
            report.structural.len()
        };
        lines.push(format!("Integrity: FAILED ({failing} finding(s))"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use csf_framework::IntegrityFinding;

    fn report(broken: bool) -> IntegrityReport {
        let dir = tempfile::tempdir().unwrap();
        let path = fixtures::write_export(&dir, broken);
        csf_framework::load_framework_from_json(&path)
            .unwrap()
            .integrity_report()
    }

    #[test]
    fn duplicates_only_pass_by_default() {
        let report = report(false);
        assert_eq!(exit_code(&report, false), 0);
        let text = render_report(&report, false);
        assert!(text.contains("NOTE: Duplicate element IDs found: {GV.OC-01}"));
        assert!(text.contains("Integrity: OK"));
    }

    #[test]
    fn duplicates_fail_under_strict() {
        let report = report(false);
        assert_eq!(exit_code(&report, true), 1);
        let text = render_report(&report, true);
        assert!(text.contains("FAIL: Duplicate element IDs found"));
        assert!(text.contains("Integrity: FAILED (1 finding(s))"));
    }

    #[test]
    fn structural_findings_fail() {
        let report = report(true);
        assert_eq!(exit_code(&report, false), 1);
        let text = render_report(&report, false);
        assert!(text.contains("FAIL: Relationship references invalid source: INVALID"));
        assert!(text.contains("Integrity: FAILED (1 finding(s))"));
    }

    #[test]
    fn clean_report_passes_strict() {
        assert_eq!(exit_code(&IntegrityReport::default(), true), 0);
        let structural = IntegrityReport::from_findings(vec![IntegrityFinding::InvalidDestination(
            "X".into(),
        )]);
        assert_eq!(exit_code(&structural, false), 1);
    }

    #[test]
    fn run_validate_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixtures::write_export(&dir, false);
        let config = CliConfig::default();

        let lax = ValidateArgs {
            path: Some(path.clone()),
            strict: false,
        };
        assert_eq!(run_validate(&lax, &config).unwrap(), 0);

        let strict = ValidateArgs {
            path: Some(path.clone()),
            strict: true,
        };
        assert_eq!(run_validate(&strict, &config).unwrap(), 1);

        let strict_config = CliConfig {
            strict: true,
            ..Default::default()
        };
        assert_eq!(run_validate(&lax, &strict_config).unwrap(), 1);
    }

    #[test]
    fn run_validate_missing_file_is_error() {
        let args = ValidateArgs {
            path: Some(PathBuf::from("/tmp/csf-test-nonexistent.json")),
            strict: false,
        };
        assert!(run_validate(&args, &CliConfig::default()).is_err());
    }
}
