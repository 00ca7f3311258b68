//! Shared fixtures for the integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small project tree:
///
/// ```text
/// file_with_lines   5 non-empty lines
/// empty_file        0 bytes
/// src/lib.rs
/// src/notes.md
/// target/debug/out.rs
/// ```
pub fn project_tree() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write(root, "file_with_lines", "one\ntwo\nthree\nfour\nfive\n");
    write(root, "empty_file", "");
    write(root, "src/lib.rs", "pub mod a;\n\npub mod b;\n");
    write(root, "src/notes.md", "# Notes\n");
    write(root, "target/debug/out.rs", "fn generated() {}\n");

    temp_dir
}

pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, contents).expect("Failed to write fixture file");
}

/// Canonical form of `root`, which is how the walker reports directories
pub fn canonical(root: &Path) -> PathBuf {
    fs::canonicalize(root).expect("Failed to canonicalize fixture root")
}
