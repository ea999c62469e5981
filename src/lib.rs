//! # Stagecraft
//!
//! Scene-to-code export for a browser 3D game editor: the editor's scene is
//! turned into a standalone three.js program with first-person controls, and
//! optionally packaged with its imported models into a downloadable archive.
//!
//! - [`scene`]: editor scene state, geometry classification, inspector contract
//! - [`codegen`]: program emission and rendering to JavaScript/HTML
//! - [`export`]: archive packaging, downloads and the Preview/CodeView trigger
//!
//! ```no_run
//! use std::sync::Arc;
//! use stagecraft::prelude::*;
//!
//! let mut scene = SceneState::new();
//! scene.add(SceneObject::primitive(PrimitiveType::Box, Color::from_hex(0xff0000)))?;
//!
//! let trigger = ExportTrigger::new(
//!     ExportSettings::default(),
//!     Arc::new(DirectorySink::new("out")),
//!     TextSurface::new(),
//! );
//! trigger.export_game(&scene).wait()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use stagecraft_codegen as codegen;
pub use stagecraft_core as core;
pub use stagecraft_export as export;
pub use stagecraft_scene as scene;

pub use stagecraft_codegen::{CodeEmitter, EmitterConfig, HtmlDocument, ModelFidelity};
pub use stagecraft_core::{Color, Transform};
pub use stagecraft_export::{ExportError, ExportSettings, ExportTask, ExportTrigger, ViewMode};
pub use stagecraft_scene::{SceneError, SceneObject, SceneState};

pub mod prelude {
    pub use glam::Vec3;

    pub use stagecraft_codegen::{CodeEmitter, ControlTuning, EmitterConfig, HtmlDocument, ModelFidelity, Program, ProgramRenderer, ThreeJsRenderer};
    pub use stagecraft_core::{Color, Transform};
    pub use stagecraft_export::{
        AssetPackager, DirectorySink, DisplaySurface, DownloadSink, ExportReceipt, ExportSettings, ExportTask, ExportTrigger, MemorySink, TextSurface,
        ViewMode,
    };
    pub use stagecraft_scene::{LightType, ObjectKey, PrimitiveType, SceneObject, SceneState};
}
