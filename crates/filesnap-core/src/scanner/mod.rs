//! Scanner module: File discovery
//!
//! Responsible for walking the project tree, pruning excluded
//! directories, and reading the files that end up in a snapshot.

mod walker;

pub use walker::{unix_seconds, DiscoveredFile, Scanner};
