//! Utils module - Shared utilities and helpers
//!
//! This module provides the helpers used across several namespaces of the crate.

/// Argument validation shared by every namespace
pub mod validation;

/// Conversions from foreign errors into the crate's error types
pub mod error_helpers;
