//! Error types for view_forge
//!
//! This module defines the error type used throughout the crate:
//! backend handle creation, engine singletons, and scene preset loading.
//! View configuration itself never fails.

use std::fmt;

/// Result type for view_forge operations
pub type Result<T> = std::result::Result<T, Error>;

/// view_forge errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (native renderer, lock poisoning, ...)
    BackendError(String),

    /// Invalid resource (unknown world, stale handle, ...)
    InvalidResource(String),

    /// Initialization failed (engine, backend, subsystems)
    InitializationFailed(String),

    /// Scene preset could not be parsed or serialized
    ConfigError(String),

    /// Filesystem error while reading or writing a preset
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config error: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

// ===== ERROR MACROS =====

/// Log an ERROR (with file:line) and build an `Error::BackendError` from the message
///
/// # Example
///
/// ```ignore
/// return Err(engine_err!("view_forge::Engine", "lock poisoned: {}", name));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::forge::Error::BackendError(message)
    }};
}

/// Log an ERROR (with file:line) and return early with `Err(Error::BackendError)`
///
/// # Example
///
/// ```ignore
/// if name.is_empty() {
///     engine_bail!("view_forge::recording", "empty camera name");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
