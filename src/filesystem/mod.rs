//! Filesystem helpers
//!
//! - [`walker`]: recursive directory walk with ignore fragments and extension filters
//! - [`scan`]: line counting, directory size and directory listing built on the walker
//! - [`path`]: pure string path normalisation
//! - [`io`]: byte-oriented reads and writes

pub mod io;
pub mod path;
pub mod scan;
pub mod walker;

pub use path::{file_extension, is_absolute_path, normalize_file_path};
pub use scan::{LineCounts, directory_list, directory_size, line_count_total, line_counter};
pub use walker::{WalkOptions, walk};
