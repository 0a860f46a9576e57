//! File walker: Discovers files in a directory tree

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::filter::should_skip;
use crate::store::FileRecord;

/// A file discovered during scanning
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Path as found on disk (root joined with the relative path)
    pub path: PathBuf,
    /// Path relative to the scanned root
    pub relative_path: PathBuf,
}

impl DiscoveredFile {
    /// Read the file's modification time and full contents into a record
    ///
    /// Symlinks are followed, so a link to a regular file stores the
    /// target's mtime and bytes under the link's own path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be stat'ed or read.
    pub fn read_record(&self) -> io::Result<FileRecord> {
        let metadata = fs::metadata(&self.path)?;
        let content = fs::read(&self.path)?;
        Ok(FileRecord {
            path: self.relative_path.to_string_lossy().into_owned(),
            mtime: unix_seconds(metadata.modified()?),
            content,
        })
    }
}

/// Seconds since the Unix epoch, negative for earlier times
#[must_use]
pub fn unix_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}

/// Scanner for discovering files in a directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the directory and yield every file eligible for indexing
    ///
    /// Excluded directories are pruned rather than descended into. The
    /// filter sees each path as walked, root included, so a root that sits
    /// below an excluded directory yields nothing.
    /// Directory symlinks are not followed. Walk errors are yielded so
    /// the caller decides whether to abort.
    pub fn scan(&self) -> impl Iterator<Item = Result<DiscoveredFile, walkdir::Error>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !Self::is_excluded(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => self.discover(entry).map(Ok),
                Err(e) => Some(Err(e)),
            })
    }

    fn is_excluded(entry: &DirEntry) -> bool {
        let excluded = should_skip(entry.path());
        if excluded {
            debug!("Skipping excluded path: {}", entry.path().display());
        }
        excluded
    }

    fn discover(&self, entry: DirEntry) -> Option<DiscoveredFile> {
        if entry.depth() == 0 || !is_regular_file(&entry) {
            return None;
        }
        let relative_path = entry.path().strip_prefix(&self.root).ok()?.to_path_buf();
        Some(DiscoveredFile {
            path: entry.into_path(),
            relative_path,
        })
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
}
