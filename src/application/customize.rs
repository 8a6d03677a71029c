//! Pre-build source customization
//!
//! Applies the exclusion configuration to the source tree before a build:
//! whole `include:<target>` lines are deleted from the named files when the
//! target is in a rule's exclude set. The files are rewritten in place.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::infrastructure::CustomizationConfig;

/// Regex for the target of an include line: everything after `include:` up to
/// the first whitespace, `@`, or `#`
fn include_target_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*include:([^\s@#]+)").unwrap())
}

/// Extract the include target from a raw source line, if it is an include
fn include_target(line: &str) -> Option<&str> {
    include_target_regex()
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Outcome of applying customization rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomizeReport {
    /// (file name, removed include-line count) per rewritten file
    pub applied: Vec<(String, usize)>,

    /// Rules whose target file did not exist
    pub skipped: Vec<String>,
}

/// Service applying pre-build customization rules
pub struct CustomizeService;

impl CustomizeService {
    pub fn execute(source_dir: &Path, config: &CustomizationConfig) -> Result<CustomizeReport> {
        let mut report = CustomizeReport::default();

        for rule in &config.exclude_includes {
            let path = source_dir.join(&rule.from_file);
            if !path.exists() {
                report.skipped.push(rule.from_file.clone());
                continue;
            }

            let contents = fs::read_to_string(&path)?;
            let mut kept = String::new();
            let mut removed = 0;

            // split_inclusive keeps line endings so untouched lines are
            // rewritten byte-for-byte
            for line in contents.split_inclusive('\n') {
                match include_target(line) {
                    Some(target) if rule.exclude.iter().any(|t| t == target) => removed += 1,
                    _ => kept.push_str(line),
                }
            }

            fs::write(&path, kept)?;
            report.applied.push((rule.from_file.clone(), removed));
        }

        Ok(report)
    }
}
