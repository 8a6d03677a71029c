//! Graph resolution engine
//!
//! Turns a root file name into a flattened, sorted line list by recursively
//! expanding `include` statements. Resolution is memoized per run in a
//! write-once cache and made cycle-safe by an explicit ancestor chain that is
//! threaded through the recursion rather than held as global state.

use std::collections::HashMap;

use super::statement::{Entry, Statement, StatementKind};
use crate::error::Result;

/// External content loader: file name to raw content.
///
/// `Ok(None)` means the file does not exist, which the resolver treats as a
/// recoverable condition. Other IO failures propagate as errors.
pub trait ContentSource {
    fn load(&self, name: &str) -> Result<Option<String>>;
}

/// A fully resolved document: its sorted rendered lines plus the entry list
/// the lines were flattened from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub lines: Vec<String>,
    pub entries: Vec<Entry>,
}

/// Recoverable condition observed during resolution, keyed by the full
/// ancestor chain from the run's root down to the affected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Cycle { chain: Vec<String> },
    MissingFile { chain: Vec<String> },
    EmptyDocument { chain: Vec<String> },
    BelowThreshold { chain: Vec<String>, count: usize },
}

/// Recursive, memoized, cycle-detecting resolver over one source tree.
///
/// The cache is scoped to this resolver instance: each name is resolved at
/// most once, every requester sees the same cached document, and the cache is
/// discarded with the resolver at run end.
pub struct Resolver<'a, S: ContentSource> {
    source: &'a S,
    min_entries: usize,
    cache: HashMap<String, ResolvedDocument>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, S: ContentSource> Resolver<'a, S> {
    pub fn new(source: &'a S, min_entries: usize) -> Self {
        Resolver {
            source,
            min_entries,
            cache: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Resolve a root document
    pub fn resolve(&mut self, name: &str) -> Result<ResolvedDocument> {
        self.resolve_with_ancestors(name, &[])
    }

    /// Diagnostics accumulated so far, in the order they were observed
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn resolve_with_ancestors(
        &mut self,
        name: &str,
        ancestors: &[String],
    ) -> Result<ResolvedDocument> {
        // Cycle: the name is a proper ancestor of itself. Return empty and do
        // not cache, so the node can still resolve normally as a later root.
        if ancestors.iter().any(|a| a == name) {
            self.diagnostics.push(Diagnostic::Cycle {
                chain: chain_through(ancestors, name),
            });
            return Ok(ResolvedDocument::default());
        }

        if let Some(cached) = self.cache.get(name) {
            return Ok(cached.clone());
        }

        let statements = match self.source.load(name)? {
            Some(content) => super::statement::normalize(&content),
            None => {
                self.diagnostics.push(Diagnostic::MissingFile {
                    chain: chain_through(ancestors, name),
                });
                Vec::new()
            }
        };

        // The size gate counts statements, not expanded entries: an include
        // line counts once no matter how many entries it expands to.
        let statement_count = statements.len();

        let mut entries: Vec<Entry> = Vec::new();
        for line in statements {
            let stmt = Statement::parse(&line);
            if stmt.kind == StatementKind::Include {
                let chain = chain_through(ancestors, name);
                let child = self.resolve_with_ancestors(&stmt.value, &chain)?;
                // The include's tags act only as a filter; surviving child
                // entries keep their own original tags.
                entries.extend(
                    child
                        .entries
                        .iter()
                        .filter(|entry| stmt.tags.permits(&entry.tags))
                        .cloned(),
                );
            } else {
                entries.push(Entry::new(stmt.kind, stmt.value, stmt.tags));
            }
        }

        let lines = if statement_count == 0 {
            self.diagnostics.push(Diagnostic::EmptyDocument {
                chain: chain_through(ancestors, name),
            });
            Vec::new()
        } else if statement_count < self.min_entries {
            self.diagnostics.push(Diagnostic::BelowThreshold {
                chain: chain_through(ancestors, name),
                count: statement_count,
            });
            Vec::new()
        } else {
            let mut lines: Vec<String> = entries
                .iter()
                .flat_map(|entry| entry.lines().iter().cloned())
                .collect();
            lines.sort();
            lines
        };

        // Gated documents cache an empty line list but keep their entries, so
        // parents that include them still see those entries and a repeat
        // request does not re-parse.
        let document = ResolvedDocument { lines, entries };
        self.cache.insert(name.to_string(), document.clone());
        Ok(document)
    }
}

fn chain_through(ancestors: &[String], name: &str) -> Vec<String> {
    let mut chain = ancestors.to_vec();
    chain.push(name.to_string());
    chain
}
