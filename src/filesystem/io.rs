//! Byte-oriented file reads and writes with argument checks

use crate::error::{ArgumentError, RuntimeError};
use crate::utils::validation::{ensure_directory, ensure_exists};
use crate::{map_io_error, map_read_error};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

pub fn read_file(path: &Path) -> crate::Result<Vec<u8>> {
    ensure_exists(path)?;
    map_read_error!(fs::read(path), path).map_err(Into::into)
}

pub fn read_file_to_string(path: &Path) -> crate::Result<String> {
    ensure_exists(path)?;
    map_read_error!(fs::read_to_string(path), path).map_err(Into::into)
}

/// Write `contents`, replacing any existing file
pub fn write_file(path: &Path, contents: &[u8]) -> crate::Result<()> {
    ensure_writable(path)?;
    map_io_error!(fs::write(path, contents), path)?;
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Append `contents`, creating the file when it does not exist
pub fn append_file(path: &Path, contents: &[u8]) -> crate::Result<()> {
    ensure_writable(path)?;
    let mut file = map_io_error!(
        OpenOptions::new().create(true).append(true).open(path),
        path
    )?;
    map_io_error!(file.write_all(contents), path)?;
    Ok(())
}

/// Ensure a directory exists, creating it and its parents if necessary
pub fn ensure_directory_exists(path: &Path) -> crate::Result<()> {
    if path.exists() {
        return ensure_directory(path);
    }
    map_io_error!(fs::create_dir_all(path), path)?;
    log::debug!("Created directory {}", path.display());
    Ok(())
}

/// Recursively delete a directory and everything below it
pub fn delete_directory(path: &Path) -> crate::Result<()> {
    ensure_directory(path)?;
    map_io_error!(fs::remove_dir_all(path), path)?;
    log::debug!("Deleted directory {}", path.display());
    Ok(())
}

fn ensure_writable(path: &Path) -> crate::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.is_dir() {
            return Err(ArgumentError::InvalidValue {
                field: "path".to_string(),
                value: path.display().to_string(),
                reason: "is a directory".to_string(),
            }
            .into());
        }
        if metadata.permissions().readonly() {
            return Err(RuntimeError::NotWritable {
                path: path.display().to_string(),
            }
            .into());
        }
    }
    Ok(())
}
