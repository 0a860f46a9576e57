//! filesnap-core: Core library for snapshotting project files into SQLite
//!
//! Walks a project directory, skips dependency and tooling directories,
//! and upserts every file's relative path, modification time and raw
//! contents into a single `files` table.

pub mod config;
pub mod filter;
pub mod indexer;
pub mod scanner;
pub mod store;

// Re-export commonly used types
pub use config::{run, IndexConfig, DEFAULT_DB, DEFAULT_ROOT};
pub use filter::{should_skip, EXCLUDED_DIRS};
pub use indexer::{index_files, IndexError, IndexStats};
pub use scanner::{DiscoveredFile, Scanner};
pub use store::{FileRecord, FileStore, StoreError, StoreWriter};
