//! Persistent defaults for the stateful helpers
//!
//! Settings live in `<config_dir>/toolbelt/config.toml`. A missing file is not an
//! error; every field falls back to its default.

use crate::dates::{DEFAULT_TIMEZONE, parse_timezone};
use crate::error::RuntimeError;
use crate::filesystem::WalkOptions;
use crate::strings::{DEFAULT_ENCODING, Strings};
use crate::{map_io_error, map_read_error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Encoding label understood by `encoding_rs`
    pub encoding: String,
    /// IANA timezone identifier
    pub timezone: String,
    pub walker: WalkerSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WalkerSettings {
    pub follow_symlinks: bool,
    pub max_depth: Option<usize>,
    pub ignore: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            walker: WalkerSettings::default(),
        }
    }
}

impl Settings {
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No settings at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = map_read_error!(fs::read_to_string(&config_path), &config_path)?;
        let settings: Settings =
            toml::from_str(&content).map_err(|e| RuntimeError::ConfigParse {
                message: e.to_string(),
            })?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            map_io_error!(fs::create_dir_all(parent), parent)?;
        }

        let toml_content = toml::to_string(self).map_err(|e| RuntimeError::ConfigParse {
            message: e.to_string(),
        })?;
        map_io_error!(fs::write(&config_path, toml_content), &config_path)?;

        log::debug!("Saved settings to {}", config_path.display());
        Ok(())
    }

    pub fn config_file_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(RuntimeError::ConfigDirNotFound)?;
        Ok(config_dir.join("toolbelt").join("config.toml"))
    }

    /// Check that the encoding and timezone are recognised
    pub fn validate(&self) -> crate::Result<()> {
        self.strings()?;
        parse_timezone(&self.timezone)?;
        Ok(())
    }

    /// String helper context using the configured encoding
    pub fn strings(&self) -> crate::Result<Strings> {
        Strings::new(&self.encoding)
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            ignore: self.walker.ignore.clone(),
            extensions: Vec::new(),
            follow_symlinks: self.walker.follow_symlinks,
            max_depth: self.walker.max_depth,
        }
    }
}
