//! Application-level error type.

use thiserror::Error;

use crate::api::ApiError;

/// Errors surfaced at the application shell.
///
/// The fetch itself never reaches this type at runtime (its failure is
/// logged and swallowed by the event loop); this covers client construction
/// and terminal I/O.
#[derive(Debug, Error)]
pub enum AppError {
    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors (terminal setup, drawing).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
