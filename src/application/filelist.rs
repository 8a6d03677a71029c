//! Release page file listing
//!
//! Generates `fileList.js` describing every `.txt` artifact in the release
//! directory (name, UTC modified time, rule-line count) and optionally copies
//! an `index.html` template next to it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{DomsetError, Result};
use crate::infrastructure::repository::walkdir_io_error;

/// One row of the generated listing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileData {
    pub name: String,
    pub modified: String,
    pub lines: usize,
}

/// Outcome of generating the listing
#[derive(Debug, Clone)]
pub struct FilelistReport {
    pub file_list_path: PathBuf,
    pub files: usize,
    pub index_copied: bool,
}

/// Service generating the release page listing
pub struct FilelistService;

impl FilelistService {
    /// Generate `fileList.js` in `output_dir` from the artifacts in
    /// `release_dir`, copying `index` alongside when provided
    pub fn execute(
        release_dir: &Path,
        output_dir: &Path,
        repo_name: &str,
        index: Option<&Path>,
    ) -> Result<FilelistReport> {
        if !release_dir.is_dir() {
            return Err(DomsetError::ReleaseDirNotFound(release_dir.to_path_buf()));
        }
        fs::create_dir_all(output_dir)?;

        let file_data = collect_file_data(release_dir)?;
        let file_list_path = output_dir.join("fileList.js");
        fs::write(&file_list_path, render_filelist_js(&file_data, repo_name)?)?;

        let mut index_copied = false;
        if let Some(index) = index {
            fs::copy(index, output_dir.join("index.html"))?;
            index_copied = true;
        }

        Ok(FilelistReport {
            file_list_path,
            files: file_data.len(),
            index_copied,
        })
    }
}

fn collect_file_data(release_dir: &Path) -> Result<Vec<FileData>> {
    let mut result = Vec::new();
    for entry in WalkDir::new(release_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(walkdir_io_error)?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt")
        {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let metadata = entry.metadata().map_err(walkdir_io_error)?;
        let modified: DateTime<Utc> = metadata.modified()?.into();

        result.push(FileData {
            name: name.to_string(),
            modified: modified.to_rfc3339_opts(SecondsFormat::Secs, false),
            lines: count_rule_lines(path)?,
        });
    }
    result.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(result)
}

/// Count non-blank, non-comment lines of an artifact
fn count_rule_lines(path: &Path) -> Result<usize> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .count())
}

fn render_filelist_js(file_data: &[FileData], repo_name: &str) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!(
        "const repoName = {};\n",
        serde_json::to_string(repo_name)?
    ));
    output.push_str("const fileData = [\n");
    for item in file_data {
        output.push_str(&format!("  {},\n", serde_json::to_string(item)?));
    }
    output.push_str("];\n");
    Ok(output)
}
