//! Error Types
//!
//! [`ExportError`] covers every way an export can fail after code generation:
//! archive serialization, writing the download, loading settings, and the
//! background task itself.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    // ========================================================================
    // Packaging Errors
    // ========================================================================
    /// The zip writer rejected an entry or failed to finalize.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The download target could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A download was requested under a name that is not a plain file name.
    #[error("Invalid download file name: {0:?}")]
    InvalidFileName(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Settings error: {0}")]
    Config(#[from] serde_json::Error),

    // ========================================================================
    // Async Errors
    // ========================================================================
    /// The background packaging task panicked or was dropped.
    #[error("Export task failed: {0}")]
    TaskFailed(String),
}

/// Alias for `Result<T, ExportError>`.
pub type Result<T> = std::result::Result<T, ExportError>;
