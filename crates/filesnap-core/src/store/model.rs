//! Store model types

/// One row of the `files` table
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Path relative to the scanned root
    pub path: String,
    /// Modification time in seconds since the Unix epoch
    pub mtime: f64,
    /// Raw file contents
    pub content: Vec<u8>,
}

impl FileRecord {
    /// Create a new file record
    #[must_use]
    pub fn new(path: impl Into<String>, mtime: f64, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            mtime,
            content: content.into(),
        }
    }
}
