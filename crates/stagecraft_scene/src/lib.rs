//! Editor scene state for Stagecraft.
//!
//! The scene is an ordered collection of [`SceneObject`]s. Insertion order is
//! the emission order, and an object's position in that order is the suffix
//! used for generated variable names.
//!
//! - [`state`]: the [`SceneState`] handle passed to every export component
//! - [`object`]: placed object kinds (primitive meshes, imported models, lights, ground)
//! - [`classifier`]: maps engine geometry type names to canonical primitives
//! - [`inspector`]: property read/write contract used by the inspector panel

pub mod classifier;
pub mod errors;
pub mod inspector;
pub mod object;
pub mod state;

pub use classifier::{GeometrySpec, PrimitiveType, classify};
pub use errors::{Result, SceneError};
pub use object::{ImportedModel, LightObject, LightType, MeshMaterial, ObjectKind, PrimitiveMesh, SceneObject};
pub use state::{ObjectKey, SceneState};
