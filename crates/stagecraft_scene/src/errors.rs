use stagecraft_core::CoreError;
use thiserror::Error;

/// Errors raised by scene mutation and inspector writes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The scene already holds a ground object.
    #[error("Scene already contains a ground object")]
    DuplicateGround,

    /// A value of the wrong type was written to a property.
    #[error("Property {path} expects a {expected} value")]
    PropertyType {
        /// The property being written
        path: String,
        /// Human-readable name of the expected value type
        expected: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Alias for `Result<T, SceneError>`.
pub type Result<T> = std::result::Result<T, SceneError>;
