//! Aggregations over the files produced by the walker

use super::walker::{WalkOptions, walk};
use crate::map_read_error;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory path → (file name → non-empty line count)
pub type LineCounts = BTreeMap<String, BTreeMap<String, usize>>;

/// Count non-empty lines of every matched file, grouped by directory.
///
/// A line is a newline-delimited record; records that are empty (or only a
/// carriage return) are not counted.
pub fn line_counter(root: &Path, options: &WalkOptions) -> crate::Result<LineCounts> {
    let mut counts = LineCounts::new();
    for path in walk(root, options)? {
        let count = count_file_lines(&path)?;
        let directory = path
            .parent()
            .map(|parent| parent.display().to_string())
            .unwrap_or_default();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        counts.entry(directory).or_default().insert(file_name, count);
    }
    Ok(counts)
}

/// Total of the counts [`line_counter`] would report for the same arguments
pub fn line_count_total(root: &Path, options: &WalkOptions) -> crate::Result<usize> {
    walk(root, options)?
        .iter()
        .try_fold(0, |total, path| -> crate::Result<usize> {
            Ok(total + count_file_lines(path)?)
        })
}

/// Sum of the byte lengths of every matched file
pub fn directory_size(root: &Path, options: &WalkOptions) -> crate::Result<u64> {
    walk(root, options)?
        .iter()
        .try_fold(0, |total, path| -> crate::Result<u64> {
            let metadata = map_read_error!(fs::metadata(path), path)?;
            Ok(total + metadata.len())
        })
}

/// Flat, ordered list of the absolute paths of every matched file
pub fn directory_list(root: &Path, options: &WalkOptions) -> crate::Result<Vec<PathBuf>> {
    walk(root, options)
}

fn count_file_lines(path: &Path) -> crate::Result<usize> {
    let bytes = map_read_error!(fs::read(path), path)?;
    Ok(count_lines(&bytes))
}

fn count_lines(bytes: &[u8]) -> usize {
    bytes
        .split(|byte| *byte == b'\n')
        .filter(|line| !matches!(line, [] | [b'\r']))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(b""), 0);
        assert_eq!(count_lines(b"one"), 1);
        assert_eq!(count_lines(b"one\ntwo\n"), 2);
        assert_eq!(count_lines(b"one\n\n\ntwo\r\n\r\n"), 2);
        assert_eq!(count_lines(b"   \n"), 1);
    }

    #[test]
    fn test_line_counter_groups_by_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        fs::write(root.join("file_with_lines"), "a\nb\nc\nd\ne\n").unwrap();
        fs::write(root.join("empty_file"), "").unwrap();

        let counts = line_counter(root, &WalkOptions::new()).unwrap();
        assert_eq!(counts.len(), 1);

        let files = counts.values().next().unwrap();
        assert_eq!(files.get("file_with_lines"), Some(&5));
        assert_eq!(files.get("empty_file"), Some(&0));
        assert_eq!(line_count_total(root, &WalkOptions::new()).unwrap(), 5);
    }

    #[test]
    fn test_directory_size_and_list() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("a.txt"), "12345").unwrap();
        fs::write(root.join("sub/b.txt"), "123").unwrap();
        fs::write(root.join("sub/c.log"), "1").unwrap();

        assert_eq!(directory_size(root, &WalkOptions::new()).unwrap(), 9);
        let txt_only = WalkOptions::new().extension("txt");
        assert_eq!(directory_size(root, &txt_only).unwrap(), 8);

        let listed = directory_list(root, &txt_only).unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].ends_with("a.txt"));
        assert!(listed[1].ends_with("sub/b.txt"));
    }
}
