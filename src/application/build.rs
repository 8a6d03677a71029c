//! Build use case
//!
//! Orchestrates the full workflow: load the tag policy, resolve every source
//! file through one shared resolver, partition each resolved document and
//! write the resulting artifacts.

use std::path::PathBuf;

use crate::domain::rules::{partition, Diagnostic, PolicySet, Resolver};
use crate::error::{DomsetError, Result};
use crate::infrastructure::{load_tag_policies, ReleaseWriter, SourceRepository};

/// Options for a build run
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding the rule files
    pub source_dir: PathBuf,

    /// Directory the flattened outputs are written to (created if absent)
    pub release_dir: PathBuf,

    /// Minimum entry count a document needs before any output is written
    pub min_entries: usize,

    /// Tag policy configuration file
    pub tag_policy_path: PathBuf,
}

/// Outcome of a build run
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Number of source files processed as roots
    pub processed: usize,

    /// Number of output artifacts written
    pub artifacts: usize,

    /// Whether the tag policy file was found
    pub policy_loaded: bool,

    /// Recoverable conditions observed during resolution
    pub diagnostics: Vec<Diagnostic>,
}

/// Service for running a full build
pub struct BuildService;

impl BuildService {
    /// Execute the build
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source directory does not exist
    /// - The tag policy file exists but is malformed
    /// - File I/O fails outside of the recoverable resolver conditions
    pub fn execute(options: &BuildOptions) -> Result<BuildReport> {
        if !options.source_dir.is_dir() {
            return Err(DomsetError::SourceDirNotFound(options.source_dir.clone()));
        }

        // 1. Load the tag policy before any resolution; a missing file just
        //    disables tag output.
        let loaded = load_tag_policies(&options.tag_policy_path)?;
        let policy_loaded = loaded.is_some();
        let policy = loaded.unwrap_or_else(PolicySet::default);

        // 2. Prepare the repositories
        let repository = SourceRepository::new(options.source_dir.clone());
        let writer = ReleaseWriter::create(options.release_dir.clone())?;
        let names = repository.list_sources()?;

        // 3. Resolve every source file; the shared cache makes each document
        //    resolve exactly once no matter how often it is included.
        let mut resolver = Resolver::new(&repository, options.min_entries);
        let mut artifacts = 0;
        let mut processed = 0;

        for name in &names {
            let document = resolver.resolve(name)?;
            processed += 1;

            // Gated documents (empty or below threshold) emit nothing
            if document.lines.is_empty() {
                continue;
            }

            for artifact in partition(name, &document, &policy) {
                writer.write(&artifact)?;
                artifacts += 1;
            }
        }

        Ok(BuildReport {
            processed,
            artifacts,
            policy_loaded,
            diagnostics: resolver.into_diagnostics(),
        })
    }
}

/// Parse the minimum-entry threshold, falling back to the default of 1 with a
/// warning on a non-numeric value
pub fn parse_min_entries(raw: &str) -> usize {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Warning: invalid minimum line count '{}', using 1", raw);
            1
        }
    }
}
