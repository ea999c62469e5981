//! Code Emitter
//!
//! Turns a snapshot of the editor scene into a standalone program that rebuilds
//! the scene, attaches a first-person controller and runs a render loop.
//!
//! Generation happens in two steps:
//!
//! 1. [`CodeEmitter::emit`] walks the [`SceneState`](stagecraft_scene::SceneState)
//!    and produces a [`Program`]: an ordered list of [`Block`]s that describe
//!    *what* to build, independent of any output format.
//! 2. A [`ProgramRenderer`] turns the program into text. [`ThreeJsRenderer`]
//!    targets three.js through embedded minijinja templates.
//!
//! [`EmitterConfig`] selects the model fidelity and controller tuning; the
//! presets reproduce the editor's code view, archive export and single-file
//! export.

pub mod config;
pub mod document;
pub mod emitter;
pub mod ir;
pub mod render;
mod templates;

pub use config::{ControlTuning, EmitterConfig, ModelFidelity};
pub use document::HtmlDocument;
pub use emitter::CodeEmitter;
pub use ir::{Block, Program};
pub use render::{ProgramRenderer, ThreeJsRenderer};
