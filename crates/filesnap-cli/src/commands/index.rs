//! Index command: Snapshot a project directory into SQLite

use std::path::Path;

use anyhow::{Context, Result};
use filesnap_core::{IndexConfig, IndexStats};
use tracing::info;

/// Run the index command
///
/// Both paths are resolved to absolute paths before use.
///
/// # Errors
/// Returns an error if path resolution, the directory walk, a file read or
/// any database operation fails.
pub fn run(root: &Path, db: &Path) -> Result<IndexStats> {
    info!("Snapshotting {} into {}", root.display(), db.display());

    let config = IndexConfig::default().with_root(root).with_db_path(db);
    let stats = filesnap_core::run(&config)
        .with_context(|| format!("Failed to index {} into {}", root.display(), db.display()))?;
    Ok(stats)
}
