use serde::{Deserialize, Serialize};
use stagecraft_core::Color;

/// How imported models are represented in the generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFidelity {
    /// Comment lines recording file name and transform; nothing is loaded.
    #[default]
    CommentStub,
    /// A placeholder group with the live transform, filled by a deferred
    /// loader from the archive's model directory.
    DeferredLoader,
}

/// Tuning of the generated first-person controller.
///
/// Distances are in scene units, times in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTuning {
    /// Radians of yaw/pitch per pixel of mouse drag.
    pub mouse_sensitivity: f32,
    /// Fraction of the remaining rotation applied per frame; `1` is immediate.
    pub smoothing: f32,
    /// Horizontal velocity damping per second.
    pub friction: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub move_acceleration: f32,
    /// Camera height at which the ground clamp applies.
    pub eye_height: f32,
}

impl ControlTuning {
    /// Code view: direct mouse look, coarse sensitivity.
    pub const PREVIEW: Self = Self {
        mouse_sensitivity: 0.01,
        smoothing: 1.0,
        friction: 10.0,
        gravity: 980.0,
        jump_impulse: 350.0,
        move_acceleration: 400.0,
        eye_height: 1.0,
    };

    /// Exported games: smoothed look, finer sensitivity.
    pub const EXPORT: Self = Self {
        mouse_sensitivity: 0.002,
        smoothing: 0.15,
        friction: 10.0,
        gravity: 980.0,
        jump_impulse: 350.0,
        move_acceleration: 400.0,
        eye_height: 1.0,
    };
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self::EXPORT
    }
}

/// Parameters of one code emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub fidelity: ModelFidelity,
    pub controls: ControlTuning,
    /// Archive directory models are loaded from, with trailing slash.
    pub models_dir: String,
    pub mesh_roughness: f32,
    pub mesh_metalness: f32,
    /// Color used for meshes without a material.
    pub fallback_color: Color,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::preview()
    }
}

impl EmitterConfig {
    /// Code view inside the editor.
    #[must_use]
    pub fn preview() -> Self {
        Self {
            fidelity: ModelFidelity::CommentStub,
            controls: ControlTuning::PREVIEW,
            models_dir: "models/".to_string(),
            mesh_roughness: 0.7,
            mesh_metalness: 0.2,
            fallback_color: Color::WHITE,
        }
    }

    /// Zip export: models are shipped and loaded at runtime.
    #[must_use]
    pub fn export_bundle() -> Self {
        Self {
            fidelity: ModelFidelity::DeferredLoader,
            controls: ControlTuning::EXPORT,
            ..Self::preview()
        }
    }

    /// Single-file HTML export: no assets shipped, models stay comments.
    #[must_use]
    pub fn standalone_html() -> Self {
        Self {
            fidelity: ModelFidelity::CommentStub,
            controls: ControlTuning::EXPORT,
            ..Self::preview()
        }
    }

    #[must_use]
    pub fn with_models_dir(mut self, dir: impl Into<String>) -> Self {
        let mut dir = dir.into();
        if !dir.is_empty() && !dir.ends_with('/') {
            dir.push('/');
        }
        self.models_dir = dir;
        self
    }

    /// Archive path a model is loaded from.
    #[must_use]
    pub fn model_path(&self, file_name: &str) -> String {
        format!("{}{file_name}", self.models_dir)
    }
}
