//! Input validation utilities
//!
//! This module provides the argument checks shared by the helper modules, so that
//! every namespace reports bad input with the same `ArgumentError` variants.

use crate::error::ArgumentError;
use std::path::Path;

/// Validate that a string argument is not empty or whitespace
pub fn ensure_not_empty(field: &str, value: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(ArgumentError::Empty {
            field: field.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validate that a numeric argument lies within `[min, max]`
pub fn ensure_in_range(field: &str, value: f64, min: f64, max: f64) -> crate::Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(ArgumentError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}

/// Validate that a path exists
pub fn ensure_exists(path: &Path) -> crate::Result<()> {
    if !path.exists() {
        return Err(ArgumentError::PathNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validate that a path exists and is a directory
pub fn ensure_directory(path: &Path) -> crate::Result<()> {
    ensure_exists(path)?;
    if !path.is_dir() {
        return Err(ArgumentError::NotADirectory {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_not_empty() {
        assert!(ensure_not_empty("key", "memory_limit").is_ok());
        assert!(ensure_not_empty("key", "").is_err());
        assert!(ensure_not_empty("key", "   ").is_err());
    }

    #[test]
    fn test_ensure_in_range() {
        assert!(ensure_in_range("latitude", 45.0, -90.0, 90.0).is_ok());
        assert!(ensure_in_range("latitude", -90.0, -90.0, 90.0).is_ok());
        assert!(ensure_in_range("latitude", 90.5, -90.0, 90.0).is_err());
        assert!(ensure_in_range("latitude", f64::NAN, -90.0, 90.0).is_err());
    }

    #[test]
    fn test_ensure_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        assert!(ensure_directory(temp_dir.path()).is_ok());

        let file_path = temp_dir.path().join("file.txt");
        std::fs::write(&file_path, "x").expect("Failed to write file");
        match ensure_directory(&file_path) {
            Err(AppError::Argument(ArgumentError::NotADirectory { .. })) => {}
            other => panic!("Expected NotADirectory, got {:?}", other),
        }

        match ensure_directory(&temp_dir.path().join("missing")) {
            Err(AppError::Argument(ArgumentError::PathNotFound { .. })) => {}
            other => panic!("Expected PathNotFound, got {:?}", other),
        }
    }
}
