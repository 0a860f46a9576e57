//! Indexer module: One full scan of a root directory into a snapshot
//!
//! Opens the store, walks the tree, upserts every eligible file inside a
//! single transaction, then commits and closes. Any failure aborts the
//! run with nothing from it committed.

mod error;

use std::path::Path;

use tracing::{debug, info};

use crate::scanner::{DiscoveredFile, Scanner};
use crate::store::{FileStore, StoreWriter};

pub use error::IndexError;

/// Counters collected during one scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub files_indexed: u64,
    pub bytes_stored: u64,
}

impl std::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files indexed, {} bytes stored",
            self.files_indexed, self.bytes_stored
        )
    }
}

/// Scan `root` and upsert every eligible file into the database at `db_path`
///
/// The `files` table is created if absent. Rows for paths seen in this scan
/// are replaced; rows for other paths are left untouched.
/// A database that lives under `root` is indexed like any other file.
///
/// # Errors
/// Returns an error if the walk, any file read, or any database operation
/// fails. The transaction is rolled back in that case.
pub fn index_files(root: &Path, db_path: &Path) -> Result<IndexStats, IndexError> {
    debug!("Indexing {} into {}", root.display(), db_path.display());

    let mut store = FileStore::open(db_path)?;
    let writer = store.begin()?;
    let stats = upsert_all(&Scanner::new(root), &writer)?;
    writer.commit()?;
    store.close()?;

    info!("✓ Index completed: {stats}");
    Ok(stats)
}

fn upsert_all(scanner: &Scanner, writer: &StoreWriter<'_>) -> Result<IndexStats, IndexError> {
    let mut stats = IndexStats::default();
    for file in scanner.scan() {
        let bytes = upsert_file(&file?, writer)?;
        stats.files_indexed += 1;
        stats.bytes_stored += bytes;
    }
    Ok(stats)
}

fn upsert_file(file: &DiscoveredFile, writer: &StoreWriter<'_>) -> Result<u64, IndexError> {
    let record = file.read_record().map_err(|source| IndexError::Read {
        path: file.path.clone(),
        source,
    })?;
    writer.upsert(&record)?;
    debug!("Indexed {} ({} bytes)", record.path, record.content.len());
    Ok(record.content.len() as u64)
}
