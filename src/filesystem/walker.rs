//! Recursive directory walker shared by the line counter, size and listing helpers

use crate::map_read_error;
use crate::utils::error_helpers::convert_walk_error;
use crate::utils::validation::ensure_directory;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filters and traversal settings for [`walk`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkOptions {
    /// Path fragments; any entry whose path below the root contains one is skipped
    pub ignore: Vec<String>,
    /// Allowed extensions, with or without the leading dot. Empty allows all files.
    pub extensions: Vec<String>,
    /// Follow symbolic links. Off by default, so link cycles cannot be entered.
    pub follow_symlinks: bool,
    /// Maximum descent below the root
    pub max_depth: Option<usize>,
}

impl WalkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(mut self, fragment: impl Into<String>) -> Self {
        self.ignore.push(fragment.into());
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extensions.push(extension.into());
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Depth-first list of the regular files under `root` that pass the filters.
///
/// Paths are absolute. Siblings are visited in file-name order. Directories are
/// always descended unless ignored; the extension filter only applies to files.
///
/// # Errors
/// Returns `ArgumentError` when `root` does not exist or is not a directory.
pub fn walk(root: &Path, options: &WalkOptions) -> crate::Result<Vec<PathBuf>> {
    ensure_directory(root)?;
    let root = map_read_error!(fs::canonicalize(root), root)?;
    let extensions: Vec<String> = options.extensions.iter().map(|e| dotted(e)).collect();

    let mut walker = WalkDir::new(&root)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files = Vec::new();
    let entries = walker
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry, &root, &options.ignore));

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 => {
                return Err(convert_walk_error(error, &root).into());
            }
            Err(error) => {
                if let Some(ancestor) = error.loop_ancestor() {
                    log::warn!(
                        "Skipping symlink cycle back to {}",
                        ancestor.display()
                    );
                } else {
                    log::warn!("Skipping unreadable entry: {}", error);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !extensions.is_empty() && !has_extension(entry.path(), &extensions) {
            continue;
        }
        files.push(entry.into_path());
    }

    log::debug!("Walked {}: {} matching files", root.display(), files.len());
    Ok(files)
}

fn dotted(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

fn is_ignored(entry: &DirEntry, root: &Path, fragments: &[String]) -> bool {
    if entry.depth() == 0 || fragments.is_empty() {
        return false;
    }
    // Anchored as "/rel/path", with a trailing "/" on directories, so fragments
    // such as "/vendor/" match whole segments
    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    let mut relative = format!("/{}", relative.to_string_lossy().replace('\\', "/"));
    if entry.file_type().is_dir() {
        relative.push('/');
    }
    fragments
        .iter()
        .filter(|fragment| !fragment.is_empty())
        .any(|fragment| relative.contains(fragment.as_str()))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| extensions.contains(&ext))
}
