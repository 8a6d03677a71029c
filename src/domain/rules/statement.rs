//! Source line parsing
//!
//! Converts raw rule-file text into normalized lines, then into typed,
//! tagged statements. Rendering for non-include statements happens once, at
//! entry creation, and is immutable thereafter.

use super::tags::TagSet;

/// Closed set of statement kinds recognized in rule files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Full,
    Domain,
    Keyword,
    Regexp,
    Include,
}

impl StatementKind {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "full" => Some(StatementKind::Full),
            "domain" => Some(StatementKind::Domain),
            "keyword" => Some(StatementKind::Keyword),
            "include" => Some(StatementKind::Include),
            _ => None,
        }
    }
}

/// One parsed source line, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub value: String,
    pub tags: TagSet,
}

impl Statement {
    /// Decode a normalized line into a statement.
    ///
    /// Grammar: `[kind:]value[@tagToken[@tagToken...]]` with an absent kind
    /// meaning `domain`, or `regexp:pattern` where the whole remainder
    /// (including any `@`) is the pattern and no tags are parsed.
    pub fn parse(line: &str) -> Statement {
        if let Some(pattern) = line.strip_prefix("regexp:") {
            return Statement {
                kind: StatementKind::Regexp,
                value: pattern.to_string(),
                tags: TagSet::new(),
            };
        }

        let (head, tag_spec) = match line.split_once('@') {
            Some((head, rest)) => (head, rest),
            None => (line, ""),
        };

        let (kind, value) = match head.split_once(':') {
            Some((prefix, rest)) => match StatementKind::from_prefix(prefix) {
                Some(kind) => (kind, rest.to_string()),
                // Unrecognized prefix: the whole head is a domain value
                None => (StatementKind::Domain, head.to_string()),
            },
            None => (StatementKind::Domain, head.to_string()),
        };

        Statement {
            kind,
            value,
            tags: TagSet::parse(tag_spec),
        }
    }
}

/// A resolved, renderable unit: fixed output lines plus the tags it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: StatementKind,
    pub value: String,
    pub tags: TagSet,
    lines: Vec<String>,
}

impl Entry {
    /// Create an entry from a non-include statement, rendering its output
    /// lines once. Include statements never become entries.
    pub fn new(kind: StatementKind, value: String, tags: TagSet) -> Entry {
        let lines = match kind {
            StatementKind::Full => vec![format!("{}\n", value)],
            StatementKind::Domain => vec![format!(".{}\n", value)],
            StatementKind::Keyword => vec![format!("keyword:{}\n", value)],
            StatementKind::Regexp => vec![format!("regexp:{}\n", value)],
            // Includes expand into child entries and render nothing themselves
            StatementKind::Include => Vec::new(),
        };
        Entry {
            kind,
            value,
            tags,
            lines,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Normalize raw file content into statement lines, preserving file order.
///
/// Per line: drop blanks and full-line comments; strip a trailing comment
/// (for `regexp:` lines only a ` #` comment is stripped, so a literal `#` in
/// the pattern body survives); remove all spaces and tabs; drop lines that
/// end up empty. Whitespace inside regexp bodies is stripped like everywhere
/// else - a known quirk of the format, preserved deliberately.
pub fn normalize(content: &str) -> Vec<String> {
    let mut result = Vec::new();
    for raw in content.lines() {
        let stripped = raw.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let uncommented = if stripped.starts_with("regexp:") {
            match stripped.find(" #") {
                Some(idx) => &stripped[..idx],
                None => stripped,
            }
        } else {
            match stripped.find('#') {
                Some(idx) => &stripped[..idx],
                None => stripped,
            }
        };

        let compact: String = uncommented
            .chars()
            .filter(|c| *c != ' ' && *c != '\t')
            .collect();
        if !compact.is_empty() {
            result.push(compact);
        }
    }
    result
}
