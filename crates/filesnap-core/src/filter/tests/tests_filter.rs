//! Tests for the path filter

use crate::filter::{should_skip, EXCLUDED_DIRS};
use rstest::rstest;
use std::path::Path;

#[rstest]
#[case(".git")]
#[case("node_modules")]
#[case("__pycache__")]
#[case(".venv")]
fn test_excluded_name_as_top_level_dir(#[case] name: &str) {
    let path = Path::new(name).join("file.txt");
    assert!(should_skip(&path));
}

#[rstest]
#[case(".git")]
#[case("node_modules")]
#[case("__pycache__")]
#[case(".venv")]
fn test_excluded_name_at_depth(#[case] name: &str) {
    let path = Path::new("a").join("b").join(name).join("c").join("d.txt");
    assert!(should_skip(&path));
}

#[rstest]
#[case(".git")]
#[case("node_modules")]
#[case("__pycache__")]
#[case(".venv")]
fn test_excluded_directory_itself(#[case] name: &str) {
    assert!(should_skip(Path::new(name)));
    assert!(should_skip(&Path::new("pkg").join(name)));
}

#[test]
fn test_plain_paths_are_kept() {
    assert!(!should_skip(Path::new("README.md")));
    assert!(!should_skip(Path::new("src/main.py")));
    assert!(!should_skip(Path::new("a/b/c.txt")));
}

#[test]
fn test_empty_path_is_kept() {
    assert!(!should_skip(Path::new("")));
}

#[test]
fn test_match_is_case_sensitive() {
    assert!(!should_skip(Path::new(".GIT/config")));
    assert!(!should_skip(Path::new("Node_Modules/x.js")));
}

#[test]
fn test_substring_does_not_match() {
    assert!(!should_skip(Path::new(".gitignore")));
    assert!(!should_skip(Path::new(".github/workflows/ci.yml")));
    assert!(!should_skip(Path::new("my_node_modules/x.js")));
    assert!(!should_skip(Path::new("__pycache__.txt")));
    assert!(!should_skip(Path::new("venv/lib/site.py")));
}

#[test]
fn test_file_named_like_excluded_dir_is_skipped() {
    // Matching is on segments, not on directory status
    assert!(should_skip(Path::new("docs/.venv")));
}

#[test]
fn test_absolute_path_segments_are_checked() {
    assert!(should_skip(Path::new("/home/user/project/.git/HEAD")));
    assert!(!should_skip(Path::new("/home/user/project/src/lib.rs")));
}

#[test]
fn test_excluded_dirs_has_four_names() {
    assert_eq!(EXCLUDED_DIRS.len(), 4);
    for name in [".git", "node_modules", "__pycache__", ".venv"] {
        assert!(EXCLUDED_DIRS.contains(&name));
    }
}
