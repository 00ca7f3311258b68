use crate::error::RuntimeError;
use std::io;
use std::path::Path;

/// Helper functions for standardizing error conversions across the codebase
/// Convert IO errors to RuntimeError with path context
pub fn convert_io_error(error: io::Error, path: &Path) -> RuntimeError {
    if error.kind() == io::ErrorKind::PermissionDenied {
        return RuntimeError::NotWritable {
            path: path.display().to_string(),
        };
    }
    RuntimeError::FileIo {
        path: path.display().to_string(),
        source: error,
    }
}

/// Convert read errors, where permission problems are not about writability
pub fn convert_read_error(error: io::Error, path: &Path) -> RuntimeError {
    RuntimeError::FileIo {
        path: path.display().to_string(),
        source: error,
    }
}

/// Convert walkdir errors to RuntimeError
pub fn convert_walk_error(error: walkdir::Error, root: &Path) -> RuntimeError {
    let path = error
        .path()
        .unwrap_or(root)
        .display()
        .to_string();
    RuntimeError::Walk {
        path,
        message: error.to_string(),
    }
}

/// Helper macro for write-side IO errors
#[macro_export]
macro_rules! map_io_error {
    ($result:expr, $path:expr) => {
        $result.map_err(|e| $crate::utils::error_helpers::convert_io_error(e, $path))
    };
}

/// Helper macro for read-side IO errors
#[macro_export]
macro_rules! map_read_error {
    ($result:expr, $path:expr) => {
        $result.map_err(|e| $crate::utils::error_helpers::convert_read_error(e, $path))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_io_error_permission_denied() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        match convert_io_error(io_error, Path::new("/locked")) {
            RuntimeError::NotWritable { path } => assert_eq!(path, "/locked"),
            _ => panic!("Expected NotWritable error"),
        }
    }

    #[test]
    fn test_convert_io_error_other() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "test");
        match convert_io_error(io_error, Path::new("/pipe")) {
            RuntimeError::FileIo { path, .. } => assert_eq!(path, "/pipe"),
            _ => panic!("Expected FileIo error"),
        }
    }

    #[test]
    fn test_convert_read_error_keeps_kind() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        match convert_read_error(io_error, Path::new("/secret")) {
            RuntimeError::FileIo { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied)
            }
            _ => panic!("Expected FileIo error"),
        }
    }
}
