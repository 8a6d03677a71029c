//! Configuration loading
//!
//! Both configuration files are JSON. A missing file is not an error - the
//! run proceeds without tag output or without pre-processing - but a file
//! that exists and is malformed is a configuration authoring error and aborts
//! the run before any resolution begins.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::rules::{PolicySet, TagPolicy};
use crate::error::{DomsetError, Result};

/// Load the tag policy map from JSON: `{"cn": {"pos": true, "neg": false}}`.
///
/// Returns `None` when the file does not exist. Wrong JSON shape or
/// non-boolean fields are fatal; absent fields default to `false`.
pub fn load_tag_policies(path: &Path) -> Result<Option<PolicySet>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DomsetError::Io(e)),
    };

    let raw: HashMap<String, TagPolicy> = serde_json::from_str(&contents)?;
    for tag in raw.keys() {
        if tag.is_empty() {
            return Err(DomsetError::Config(
                "Tag policy contains an empty tag name".to_string(),
            ));
        }
    }

    Ok(Some(PolicySet::new(raw)))
}

/// One pre-processing rule: delete `include:<target>` lines from a source file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExcludeRule {
    pub from_file: String,
    pub exclude: Vec<String>,
}

/// Pre-build customization configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CustomizationConfig {
    #[serde(default)]
    pub exclude_includes: Vec<ExcludeRule>,
}

impl CustomizationConfig {
    /// Load from JSON; `None` when the file does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DomsetError::Io(e)),
        };

        let config: CustomizationConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(Some(config))
    }

    fn validate(&self) -> Result<()> {
        for (idx, rule) in self.exclude_includes.iter().enumerate() {
            if rule.from_file.is_empty() {
                return Err(DomsetError::Config(format!(
                    "exclude_includes[{}].from_file must be a non-empty string",
                    idx
                )));
            }
            if rule.exclude.is_empty() {
                return Err(DomsetError::Config(format!(
                    "exclude_includes[{}].exclude must be a non-empty array",
                    idx
                )));
            }
            for (j, target) in rule.exclude.iter().enumerate() {
                if target.is_empty() {
                    return Err(DomsetError::Config(format!(
                        "exclude_includes[{}].exclude[{}] must be a non-empty string",
                        idx, j
                    )));
                }
            }
        }
        Ok(())
    }
}
