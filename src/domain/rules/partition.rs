//! Tag partitioning - deciding which tag-suffixed outputs to materialize
//!
//! Given a resolved document and an external tag policy, produces the base
//! artifact plus one artifact per policy-enabled tag token observed on the
//! document's entries. Pure value transformation; writing is left to the
//! release writer.

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use super::resolver::ResolvedDocument;
use super::tags::TagToken;

/// Emission switches for one tag; both default to off
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct TagPolicy {
    #[serde(default)]
    pub pos: bool,
    #[serde(default)]
    pub neg: bool,
}

/// Tag name to policy mapping; unknown tags emit nothing
#[derive(Debug, Clone, Default)]
pub struct PolicySet {
    policies: HashMap<String, TagPolicy>,
}

impl PolicySet {
    pub fn new(policies: HashMap<String, TagPolicy>) -> Self {
        PolicySet { policies }
    }

    /// Whether output for this token is enabled, per the field matching the
    /// token's polarity
    pub fn allows(&self, token: &TagToken) -> bool {
        match self.policies.get(token.name()) {
            Some(policy) if token.is_negative() => policy.neg,
            Some(policy) => policy.pos,
            None => false,
        }
    }
}

/// One output file to be written: name, originating document, sorted lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub source: String,
    pub lines: Vec<String>,
}

/// Partition a resolved document into output artifacts.
///
/// The base artifact `{name}.txt` is emitted whenever the document's lines
/// are non-empty, independent of policy. For each distinct tag token observed
/// across the entries (positive or negative) that the policy enables, the
/// lines of every entry carrying that exact token are concatenated, sorted,
/// and emitted as `{name}@tag.txt` or `{name}@!tag.txt` when non-empty.
///
/// Gated (empty or below-threshold) documents must not be passed here; they
/// produce no artifacts at all.
pub fn partition(name: &str, document: &ResolvedDocument, policy: &PolicySet) -> Vec<Artifact> {
    let mut artifacts = Vec::new();

    if !document.lines.is_empty() {
        artifacts.push(Artifact {
            file_name: format!("{}.txt", name),
            source: name.to_string(),
            lines: document.lines.clone(),
        });
    }

    let observed: BTreeSet<TagToken> = document
        .entries
        .iter()
        .flat_map(|entry| entry.tags.tokens())
        .collect();

    for token in observed {
        if !policy.allows(&token) {
            continue;
        }

        let mut lines: Vec<String> = document
            .entries
            .iter()
            .filter(|entry| entry.tags.contains(&token))
            .flat_map(|entry| entry.lines().iter().cloned())
            .collect();
        lines.sort();

        if !lines.is_empty() {
            artifacts.push(Artifact {
                file_name: format!("{}{}.txt", name, token),
                source: name.to_string(),
                lines,
            });
        }
    }

    artifacts
}
