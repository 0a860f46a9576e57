//! Read-side queries over a snapshot

use rusqlite::OptionalExtension;

use super::{FileRecord, FileStore, StoreError};

impl FileStore {
    /// Look up the record stored for `path`
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn get(&self, path: &str) -> Result<Option<FileRecord>, StoreError> {
        let record = self
            .conn()
            .query_row(
                "SELECT path, mtime, content FROM files WHERE path = ?1",
                [path],
                |row| {
                    Ok(FileRecord {
                        path: row.get(0)?,
                        mtime: row.get(1)?,
                        content: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    /// Number of rows in the `files` table
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn()
            .query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))?;
        row_count(count)
    }

    /// All stored paths in ascending order
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn paths(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn()
            .prepare("SELECT path FROM files ORDER BY path")?;
        let paths = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(paths)
    }
}

/// Convert a `COUNT(*)` result, rejecting values that cannot be a row count
pub(super) fn row_count(count: i64) -> Result<u64, StoreError> {
    u64::try_from(count)
        .map_err(|_| StoreError::Sqlite(rusqlite::Error::IntegralValueOutOfRange(0, count)))
}
