//! Error hierarchy: caller mistakes (`ArgumentError`) versus environment
//! failures (`RuntimeError`), both wrapped by `AppError`

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ArgumentError: {0}")]
    Argument(#[from] ArgumentError),
    #[error("RuntimeError: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Bad input shape or value, detected before any side effect happens.
#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("'{field}' cannot be empty")]
    Empty { field: String },
    #[error("Path not found: {path}")]
    PathNotFound { path: String },
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },
    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Unknown encoding: {name}")]
    UnknownEncoding { name: String },
    #[error("Unknown timezone: {name}")]
    UnknownTimezone { name: String },
}

/// Failures coming from the environment rather than from the caller's input.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Target is not writable: {path}")]
    NotWritable { path: String },
    #[error("Directory walk failed at {path}: {message}")]
    Walk { path: String, message: String },
    #[error("Operation unavailable: {operation}")]
    Unavailable { operation: String },
    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Argument(_) => ErrorSeverity::Low,
            AppError::Runtime(runtime_error) => match runtime_error {
                RuntimeError::NotWritable { .. } | RuntimeError::ConfigDirNotFound => {
                    ErrorSeverity::High
                }
                _ => ErrorSeverity::Medium,
            },
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AppError::Argument(_))
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Argument(ArgumentError::PathNotFound { .. }) => {
                Some("Check the path exists and is spelled correctly".to_string())
            }
            AppError::Argument(ArgumentError::UnknownEncoding { .. }) => Some(
                "Use a WHATWG encoding label such as 'UTF-8' or 'ISO-8859-1'".to_string(),
            ),
            AppError::Argument(ArgumentError::UnknownTimezone { .. }) => {
                Some("Use an IANA identifier such as 'Europe/Paris'".to_string())
            }
            AppError::Runtime(RuntimeError::NotWritable { .. }) => {
                Some("Check the file permissions of the target".to_string())
            }
            _ => None,
        }
    }
}
