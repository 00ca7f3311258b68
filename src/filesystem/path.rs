//! Pure string path helpers; nothing here touches the filesystem

use std::path::Path;

/// Normalise separators and resolve `.` and `..` segments.
///
/// Backslashes become forward slashes and separator runs collapse. Each `..`
/// removes the preceding segment; above the root of an absolute path it is
/// dropped, at the start of a relative path it is kept.
///
/// # Examples
/// ```
/// use toolbelt::filesystem::normalize_file_path;
///
/// assert_eq!(normalize_file_path("/a/b/../c"), "/a/c");
/// assert_eq!(normalize_file_path("a\\\\b//./c/"), "a/b/c");
/// ```
pub fn normalize_file_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if segments.len() == 1 && is_drive(last) => {}
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                None if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// POSIX (`/x`), UNC (`\\server`) and drive-letter (`C:\`, `C:/`) absolute forms
pub fn is_absolute_path(path: &str) -> bool {
    if path.starts_with('/') || path.starts_with("\\\\") {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Lower-cased extension without the dot
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
