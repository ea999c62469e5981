//! Error Types
//!
//! Errors raised while parsing or validating core value types.
//! Higher layers wrap [`CoreError`] in their own error enums.

use thiserror::Error;

/// Errors produced by the core value types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A color string was not of the form `#rrggbb`, `rrggbb` or `0xrrggbb`.
    #[error("Invalid color literal: {0:?}")]
    InvalidColor(String),

    /// A property path did not name a known property.
    #[error("Unknown property path: {0:?}")]
    UnknownProperty(String),
}

/// Alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;
