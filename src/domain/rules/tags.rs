//! Tag algebra - canonical positive/negative tag sets
//!
//! Tags annotate rule statements (`ad1.com@ads`) and include filters
//! (`include:geolocation-cn@cn@!ads`). The `-tag` and `!tag` spellings both
//! denote the same negative tag and canonicalize identically at the parse
//! boundary.

use std::collections::BTreeSet;
use std::fmt;

/// One observed tag token: a plain tag name plus its polarity.
///
/// Displays as `@name` for positive and `@!name` for negative tokens; the
/// displayed form doubles as the output file-name suffix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagToken {
    name: String,
    negated: bool,
}

impl TagToken {
    pub fn positive(name: impl Into<String>) -> Self {
        TagToken {
            name: name.into(),
            negated: false,
        }
    }

    pub fn negative(name: impl Into<String>) -> Self {
        TagToken {
            name: name.into(),
            negated: true,
        }
    }

    /// Plain tag name without polarity markers
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negative(&self) -> bool {
        self.negated
    }
}

impl fmt::Display for TagToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "@!{}", self.name)
        } else {
            write!(f, "@{}", self.name)
        }
    }
}

/// A set of tags with explicit positive/negative partitions.
///
/// Used both as the tags carried by an entry and as the filter predicate
/// attached to an `include` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        TagSet::default()
    }

    /// Parse a tag spec: the `@`-separated token list after a statement's
    /// first `@`. Tokens starting with `-` or `!` are negative; empty tokens
    /// are skipped.
    pub fn parse(spec: &str) -> Self {
        let mut set = TagSet::new();
        for token in spec.split('@') {
            if token.is_empty() {
                continue;
            }
            if let Some(name) = token.strip_prefix('-').or_else(|| token.strip_prefix('!')) {
                if !name.is_empty() {
                    set.negative.insert(name.to_string());
                }
            } else {
                set.positive.insert(token.to_string());
            }
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Evaluate this set as an include filter against an entry's tags.
    ///
    /// Passes iff every positive filter tag is among the entry's positive
    /// tags, and no negative filter tag names an entry's positive tag. Empty
    /// filter partitions pass everything.
    pub fn permits(&self, entry_tags: &TagSet) -> bool {
        self.positive.is_subset(&entry_tags.positive)
            && self.negative.is_disjoint(&entry_tags.positive)
    }

    /// Whether this set carries the exact token (name and polarity)
    pub fn contains(&self, token: &TagToken) -> bool {
        if token.negated {
            self.negative.contains(&token.name)
        } else {
            self.positive.contains(&token.name)
        }
    }

    /// All tokens in this set, negatives after positives, each partition in
    /// name order
    pub fn tokens(&self) -> impl Iterator<Item = TagToken> + '_ {
        self.positive
            .iter()
            .map(|name| TagToken::positive(name.clone()))
            .chain(
                self.negative
                    .iter()
                    .map(|name| TagToken::negative(name.clone())),
            )
    }
}
