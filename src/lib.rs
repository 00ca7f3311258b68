//! # toolbelt
//!
//! General-purpose helpers for everyday application code: nested JSON arrays,
//! strings, numbers, unit conversion, dates, filesystem scans, image sniffing,
//! request introspection and HTTP vocabulary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use toolbelt::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> toolbelt::Result<()> {
//!     let options = WalkOptions::new().ignore("target").extension("rs");
//!     let counts = line_counter(Path::new("."), &options)?;
//!     for (dir, files) in &counts {
//!         println!("{}: {} files", dir, files.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`arrays`]: flatten, unflatten and deep map over `serde_json::Value`
//! - [`strings`]: encoding-aware [`strings::Strings`] context and free text helpers
//! - [`numbers`]: haversine distance and number formatting
//! - [`conversion`]: temperatures and byte sizes
//! - [`dates`]: timezones and calendar helpers
//! - [`filesystem`]: recursive walker, line counter, directory size and listing
//! - [`image`]: image type detection
//! - [`environment`]: request context and ini-style settings
//! - [`http`]: methods and status codes
//! - [`config`]: persisted defaults
//! - [`error`]: error hierarchy with troubleshooting hints
//!
//! Every operation is synchronous. Diagnostics go through the `log` facade; the
//! library never installs a logger.

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use toolbelt::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Filesystem
    pub use crate::filesystem::{
        WalkOptions, directory_list, directory_size, line_count_total, line_counter,
        normalize_file_path, walk,
    };

    // Data helpers
    pub use crate::arrays::{deep_map, flatten, unflatten};
    pub use crate::numbers::{Coordinate, Distance, haversine_distance};
    pub use crate::strings::Strings;

    // Settings
    pub use crate::config::Settings;
}

pub mod arrays;
pub mod config;
pub mod conversion;
pub mod dates;
pub mod environment;
pub mod error;
pub mod filesystem;
pub mod http;
pub mod image;
pub mod numbers;
pub mod strings;
pub mod utils;

pub type Result<T> = std::result::Result<T, AppError>;
