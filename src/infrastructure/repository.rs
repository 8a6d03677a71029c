//! File system repository for source and release trees

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::rules::{Artifact, ContentSource};
use crate::error::{DomsetError, Result};

/// Map a walkdir error to the crate's io error, covering the rare cases
/// without an io cause (loops, dangling roots)
pub(crate) fn walkdir_io_error(error: walkdir::Error) -> DomsetError {
    DomsetError::Io(
        error
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("walkdir error without io cause")),
    )
}

/// Read access to a directory of rule files.
///
/// Rule files are the extension-less regular files directly under the source
/// directory; their file name is the document name used by `include`
/// statements.
#[derive(Debug, Clone)]
pub struct SourceRepository {
    root: PathBuf,
}

impl SourceRepository {
    pub fn new(root: PathBuf) -> Self {
        SourceRepository { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List document names in deterministic (sorted) order
    pub fn list_sources(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(walkdir_io_error)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_some() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl ContentSource for SourceRepository {
    fn load(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomsetError::Io(e)),
        }
    }
}

/// Writes partitioned artifacts into the release directory
#[derive(Debug, Clone)]
pub struct ReleaseWriter {
    root: PathBuf,
}

impl ReleaseWriter {
    /// Create the writer, ensuring the release directory exists
    pub fn create(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(ReleaseWriter { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write one artifact: provenance header, blank line, sorted lines
    pub fn write(&self, artifact: &Artifact) -> Result<()> {
        let mut contents = String::new();
        contents.push_str(&format!(
            "# Source: https://github.com/v2fly/domain-list-community/tree/master/data/{}\n\n",
            artifact.source
        ));
        for line in &artifact.lines {
            contents.push_str(line);
        }
        fs::write(self.root.join(&artifact.file_name), contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_sources_skips_files_with_extensions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("google"), "google.com").unwrap();
        fs::write(temp.path().join("cn"), "baidu.com").unwrap();
        fs::write(temp.path().join("README.md"), "# readme").unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();

        let repo = SourceRepository::new(temp.path().to_path_buf());
        let names = repo.list_sources().unwrap();
        assert_eq!(names, vec!["cn", "google"]);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let repo = SourceRepository::new(temp.path().to_path_buf());
        assert_eq!(repo.load("ghost").unwrap(), None);
    }

    #[test]
    fn test_load_reads_contents() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("google"), "google.com\n").unwrap();

        let repo = SourceRepository::new(temp.path().to_path_buf());
        assert_eq!(repo.load("google").unwrap(), Some("google.com\n".to_string()));
    }

    #[test]
    fn test_writer_creates_directory_and_prepends_header() {
        let temp = TempDir::new().unwrap();
        let release = temp.path().join("release");
        let writer = ReleaseWriter::create(release.clone()).unwrap();

        writer
            .write(&Artifact {
                file_name: "test@cn.txt".to_string(),
                source: "test".to_string(),
                lines: vec![".a.com\n".to_string(), ".b.com\n".to_string()],
            })
            .unwrap();

        let contents = fs::read_to_string(release.join("test@cn.txt")).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "# Source: https://github.com/v2fly/domain-list-community/tree/master/data/test"
        );
        assert_eq!(lines.next().unwrap(), "");
        assert_eq!(lines.next().unwrap(), ".a.com");
        assert_eq!(lines.next().unwrap(), ".b.com");
    }
}
