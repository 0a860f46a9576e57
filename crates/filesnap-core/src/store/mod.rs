//! Store module: SQLite persistence for file records
//!
//! Owns the `files` table, the single write transaction used by a scan,
//! and a few read-side queries for inspecting a snapshot afterwards.

pub mod model;
pub mod queries;
pub mod sqlite;

pub use model::FileRecord;
pub use sqlite::{FileStore, StoreError, StoreWriter};
