//! Local directory walker: Discovers manifest files in a directory tree

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use super::ScanError;

/// File names recognised as SCP manifests
pub const MANIFEST_FILE_NAMES: [&str; 2] = ["scp.yaml", "scp.yml"];

/// Scanner for discovering manifest files under a directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    file_names: Vec<String>,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_names: MANIFEST_FILE_NAMES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Match these file names instead of the defaults
    #[must_use]
    pub fn with_file_names(mut self, file_names: Vec<String>) -> Self {
        self.file_names = file_names;
        self
    }

    /// Walk the directory and return matching files, sorted by path
    ///
    /// `.gitignore` rules are honoured even outside a git checkout, and hidden
    /// directories are visited.
    /// Entries that cannot be read are skipped.
    ///
    /// # Errors
    /// Returns an error if the root does not exist or is not a directory.
    pub fn scan(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::NotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut found: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .hidden(false)
            .require_git(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|path| self.matches(path))
            .collect();

        found.sort();
        Ok(found)
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.file_names.iter().any(|f| f == name))
    }
}
