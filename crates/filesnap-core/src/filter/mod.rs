//! Path filter: Decides which paths are left out of a snapshot
//!
//! A path is excluded when any of its segments is exactly one of the
//! names in [`EXCLUDED_DIRS`].

use std::path::{Component, Path};

/// Directory names whose subtrees are never indexed
pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", "__pycache__", ".venv"];

/// Returns true if any segment of `path` is an excluded directory name.
///
/// Matching is exact and case-sensitive. Root, prefix and `.`/`..`
/// components are never considered segments.
#[must_use]
pub fn should_skip(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(segment) => segment
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name)),
        _ => false,
    })
}

#[cfg(test)]
mod tests;
