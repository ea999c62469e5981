//! Core value types shared by every Stagecraft crate.
//!
//! - [`Color`]: 24-bit RGB colors as used by the editor inspector and emitted code
//! - [`Transform`]: position / Euler rotation / scale of a placed object
//! - [`number`]: decimal formatting of numeric literals for generated source
//! - [`errors`]: the low-level error type

pub mod color;
pub mod errors;
pub mod number;
pub mod transform;

pub use color::Color;
pub use errors::{CoreError, Result};
pub use transform::Transform;
