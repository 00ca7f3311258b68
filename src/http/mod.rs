//! HTTP vocabulary: request methods and status codes
//!
//! Plain enums only. Nothing here performs network I/O.

pub mod method;
pub mod status;

pub use method::Method;
pub use status::{StatusCategory, StatusCode};
