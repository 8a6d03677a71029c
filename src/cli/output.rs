//! Output formatting utilities

use crate::application::{BuildReport, CustomizeReport};
use crate::domain::rules::Diagnostic;

/// Format one resolver diagnostic for display
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::Cycle { chain } => {
            format!("Cyclic include: {}", chain.join(" -> "))
        }
        Diagnostic::MissingFile { chain } => {
            format!("Missing source file: {}", chain.join(" -> "))
        }
        Diagnostic::EmptyDocument { chain } => {
            format!("Empty file: {}", chain.join(" -> "))
        }
        Diagnostic::BelowThreshold { chain, count } => {
            format!("Too few entries ({}): {}", count, chain.join(" -> "))
        }
    }
}

/// Format a build report summary for display
pub fn format_build_report(report: &BuildReport) -> String {
    let mut output = String::new();
    for diagnostic in &report.diagnostics {
        output.push_str(&format_diagnostic(diagnostic));
        output.push('\n');
    }
    if report.processed == 0 {
        output.push_str("No source files found\n");
    } else {
        output.push_str(&format!(
            "Done: processed {} files, wrote {} artifacts\n",
            report.processed, report.artifacts
        ));
    }
    output
}

/// Format a customization report for display
pub fn format_customize_report(report: &CustomizeReport) -> String {
    let mut output = String::new();
    for name in &report.skipped {
        output.push_str(&format!("Skipped missing file: {}\n", name));
    }
    for (name, removed) in &report.applied {
        output.push_str(&format!(
            "Cleaned {}: removed {} include lines\n",
            name, removed
        ));
    }
    if report.applied.is_empty() && report.skipped.is_empty() {
        output.push_str("No customization rules configured\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cycle_diagnostic_shows_chain() {
        let diagnostic = Diagnostic::Cycle {
            chain: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert_eq!(format_diagnostic(&diagnostic), "Cyclic include: a -> b -> a");
    }

    #[test]
    fn test_format_threshold_diagnostic_shows_count() {
        let diagnostic = Diagnostic::BelowThreshold {
            chain: vec!["small".to_string()],
            count: 2,
        };
        assert_eq!(format_diagnostic(&diagnostic), "Too few entries (2): small");
    }

    #[test]
    fn test_format_build_report_summary() {
        let report = BuildReport {
            processed: 3,
            artifacts: 5,
            policy_loaded: true,
            diagnostics: vec![Diagnostic::EmptyDocument {
                chain: vec!["empty".to_string()],
            }],
        };
        let output = format_build_report(&report);
        assert!(output.contains("Empty file: empty"));
        assert!(output.contains("processed 3 files, wrote 5 artifacts"));
    }

    #[test]
    fn test_format_build_report_no_files() {
        let report = BuildReport {
            processed: 0,
            artifacts: 0,
            policy_loaded: false,
            diagnostics: vec![],
        };
        assert!(format_build_report(&report).contains("No source files found"));
    }

    #[test]
    fn test_format_customize_report() {
        let report = CustomizeReport {
            applied: vec![("main".to_string(), 2)],
            skipped: vec!["ghost".to_string()],
        };
        let output = format_customize_report(&report);
        assert!(output.contains("Skipped missing file: ghost"));
        assert!(output.contains("Cleaned main: removed 2 include lines"));
    }

    #[test]
    fn test_format_customize_report_empty() {
        let output = format_customize_report(&CustomizeReport::default());
        assert!(output.contains("No customization rules configured"));
    }
}
