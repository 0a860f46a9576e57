//! SQLite client for the file snapshot table

use std::path::Path;

use rusqlite::{params, Connection, Transaction};
use thiserror::Error;
use tracing::debug;

use super::FileRecord;

/// Schema of the only table in a snapshot database
const CREATE_FILES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS files (
        path TEXT PRIMARY KEY,
        mtime REAL,
        content BLOB
    )
";

const UPSERT_FILE: &str = "INSERT OR REPLACE INTO files (path, mtime, content) VALUES (?1, ?2, ?3)";

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle to a snapshot database
pub struct FileStore {
    conn: Connection,
}

impl FileStore {
    /// Open or create the database at `path` and ensure the `files` table exists
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the table cannot be created.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        debug!("Opening snapshot database: {}", path.display());
        Self::init(Connection::open(path)?)
    }

    /// Open a throwaway in-memory database with the `files` table
    ///
    /// # Errors
    /// Returns an error if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(CREATE_FILES_TABLE)?;
        Ok(Self { conn })
    }

    /// Start the write transaction for a scan
    ///
    /// Nothing written through the returned writer is visible until
    /// [`StoreWriter::commit`]; dropping the writer rolls everything back.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be started.
    pub fn begin(&mut self) -> Result<StoreWriter<'_>, StoreError> {
        Ok(StoreWriter {
            tx: self.conn.transaction()?,
        })
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    ///
    /// # Errors
    /// Returns an error if SQLite fails to close the connection cleanly.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Open write transaction on a [`FileStore`]
pub struct StoreWriter<'a> {
    tx: Transaction<'a>,
}

impl StoreWriter<'_> {
    /// Insert the record, replacing any existing row with the same path
    ///
    /// # Errors
    /// Returns an error if the statement fails.
    pub fn upsert(&self, record: &FileRecord) -> Result<(), StoreError> {
        self.tx
            .prepare_cached(UPSERT_FILE)?
            .execute(params![record.path, record.mtime, record.content])?;
        Ok(())
    }

    /// Commit every upsert made through this writer
    ///
    /// # Errors
    /// Returns an error if the commit fails (disk full, read-only file, ...).
    pub fn commit(self) -> Result<(), StoreError> {
        self.tx.commit()?;
        Ok(())
    }
}
