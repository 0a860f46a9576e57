//! Run configuration: where to scan and where to write the snapshot

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::indexer::{index_files, IndexError, IndexStats};

/// Root scanned when none is given
pub const DEFAULT_ROOT: &str = ".";

/// Database written when none is given
pub const DEFAULT_DB: &str = "project_files.db";

/// Configuration for one indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub root: PathBuf,
    pub db_path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, DEFAULT_DB)
    }
}

impl IndexConfig {
    /// Create a new configuration
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, db_path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            db_path: db_path.into(),
        }
    }

    /// Set the root directory
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the database path
    #[must_use]
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    /// Resolve both paths against the current directory
    ///
    /// Existing paths are canonicalized (symlinks resolved). Paths that do
    /// not exist yet, such as a database about to be created, are made
    /// absolute without touching the filesystem.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn resolve(&self) -> io::Result<Self> {
        Ok(Self {
            root: resolve_path(&self.root)?,
            db_path: resolve_path(&self.db_path)?,
        })
    }
}

fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    path.canonicalize().or_else(|_| std::path::absolute(path))
}

/// Resolve the configuration and run one full scan
///
/// # Errors
/// Returns an error if path resolution or indexing fails.
pub fn run(config: &IndexConfig) -> Result<IndexStats, IndexError> {
    let resolved = config.resolve().map_err(IndexError::Resolve)?;
    debug!(
        "Resolved root {} and database {}",
        resolved.root.display(),
        resolved.db_path.display()
    );
    index_files(&resolved.root, &resolved.db_path)
}
