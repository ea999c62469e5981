//! Program renderers.

use serde::Serialize;
use stagecraft_core::Transform;
use stagecraft_core::number::{js_args, js_number, js_triple};
use stagecraft_scene::{LightType, PrimitiveType};

use crate::config::ControlTuning;
use crate::ir::{Block, GroundBlock, LightBlock, LightOrigin, MeshBlock, ModelBlock, ModelRequest, Preamble, Program};
use crate::templates;

/// Turns a [`Program`] into source text for one target API.
pub trait ProgramRenderer {
    fn render(&self, program: &Program) -> String;
}

/// Renders programs as three.js (r128) JavaScript.
///
/// Blocks are rendered independently and separated by a blank line; comment
/// blocks attach directly to the block that follows them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeJsRenderer;

impl ProgramRenderer for ThreeJsRenderer {
    fn render(&self, program: &Program) -> String {
        let mut out = String::new();
        for block in program {
            let text = Self::render_block(block);
            out.push_str(text.trim_end());
            out.push('\n');
            if !matches!(block, Block::Comment(_)) {
                out.push('\n');
            }
        }
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }
}

impl ThreeJsRenderer {
    fn render_block(block: &Block) -> String {
        match block {
            Block::Comment(text) => templates::render("comment.js", &CommentContext { text }),
            Block::Preamble(preamble) => templates::render("preamble.js", &PreambleContext::from(preamble)),
            Block::Ground(ground) => templates::render("ground.js", &GroundContext::from(ground)),
            Block::Light(light) => templates::render("light.js", &LightContext::from(light)),
            Block::Mesh(mesh) => templates::render("mesh.js", &MeshContext::from(mesh)),
            Block::ModelStub(model) => templates::render("model_stub.js", &ModelContext::from(model)),
            Block::ModelPlaceholder(model) => {
                templates::render("model_placeholder.js", &ModelContext::from(model))
            }
            Block::ModelLoader(requests) => templates::render(
                "model_loader.js",
                &LoaderContext {
                    models: requests.iter().map(LoaderEntry::from).collect(),
                },
            ),
            Block::Controls(tuning) => templates::render("controls.js", &ControlsContext::from(tuning)),
        }
    }

    /// three.js geometry class for a primitive.
    #[must_use]
    pub const fn geometry_class(primitive: PrimitiveType) -> &'static str {
        primitive.descriptor()
    }
}

// ============================================================================
// Template contexts
// ============================================================================
// Numbers are preformatted so the template engine never prints its own float
// representation (`1.0` instead of `1`).

#[derive(Serialize)]
struct CommentContext<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct PreambleContext {
    background: String,
    fov: String,
    near: String,
    far: String,
    camera_position: String,
    antialias: bool,
    shadows: bool,
}

impl From<&Preamble> for PreambleContext {
    fn from(p: &Preamble) -> Self {
        Self {
            background: p.background.hex_literal(),
            fov: js_number(p.fov),
            near: js_number(p.near),
            far: js_number(p.far),
            camera_position: js_triple(p.camera_position),
            antialias: p.antialias,
            shadows: p.shadows,
        }
    }
}

#[derive(Serialize)]
struct GroundContext {
    size: String,
    color: String,
    elevation: String,
}

impl From<&GroundBlock> for GroundContext {
    fn from(g: &GroundBlock) -> Self {
        Self {
            size: js_args(&[g.width, g.depth]),
            color: g.color.hex_literal(),
            elevation: js_number(g.elevation),
        }
    }
}

#[derive(Serialize)]
struct LightContext {
    ident: String,
    kind: &'static str,
    color: String,
    intensity: String,
    distance: String,
    position: String,
    cast_shadow: bool,
}

impl From<&LightBlock> for LightContext {
    fn from(l: &LightBlock) -> Self {
        let (kind, distance) = match l.light_type {
            LightType::Ambient => ("ambient", 0.0),
            LightType::Directional => ("directional", 0.0),
            LightType::Point { distance } => ("point", distance),
        };
        let ident = match l.origin {
            LightOrigin::Scene(index) => format!("light{index}"),
            LightOrigin::Default => format!("{kind}Light"),
        };
        Self {
            ident,
            kind,
            color: l.color.hex_literal(),
            intensity: js_number(l.intensity),
            distance: js_number(distance),
            position: js_triple(l.position),
            cast_shadow: l.cast_shadow,
        }
    }
}

#[derive(Serialize)]
struct TransformContext {
    position: String,
    rotation: String,
    scale: String,
}

impl From<&Transform> for TransformContext {
    fn from(t: &Transform) -> Self {
        Self {
            position: js_triple(t.position),
            rotation: js_triple(t.rotation),
            scale: js_triple(t.scale),
        }
    }
}

#[derive(Serialize)]
struct MeshContext {
    index: usize,
    label: &'static str,
    geometry: &'static str,
    params: String,
    color: String,
    roughness: String,
    metalness: String,
    transform: TransformContext,
}

impl From<&MeshBlock> for MeshContext {
    fn from(m: &MeshBlock) -> Self {
        Self {
            index: m.index,
            label: m.geometry.primitive.label(),
            geometry: ThreeJsRenderer::geometry_class(m.geometry.primitive),
            params: js_args(m.geometry.params),
            color: m.color.hex_literal(),
            roughness: js_number(m.roughness),
            metalness: js_number(m.metalness),
            transform: TransformContext::from(&m.transform),
        }
    }
}

#[derive(Serialize)]
struct ModelContext<'a> {
    index: usize,
    file_name: &'a str,
    asset_path: &'a str,
    transform: TransformContext,
}

impl<'a> From<&'a ModelBlock> for ModelContext<'a> {
    fn from(m: &'a ModelBlock) -> Self {
        Self {
            index: m.index,
            file_name: &m.file_name,
            asset_path: &m.asset_path,
            transform: TransformContext::from(&m.transform),
        }
    }
}

#[derive(Serialize)]
struct LoaderEntry<'a> {
    index: usize,
    path: &'a str,
}

impl<'a> From<&'a ModelRequest> for LoaderEntry<'a> {
    fn from(r: &'a ModelRequest) -> Self {
        Self {
            index: r.index,
            path: &r.asset_path,
        }
    }
}

#[derive(Serialize)]
struct LoaderContext<'a> {
    models: Vec<LoaderEntry<'a>>,
}

#[derive(Serialize)]
struct ControlsContext {
    mouse_sensitivity: String,
    smoothing: String,
    friction: String,
    gravity: String,
    jump_impulse: String,
    move_acceleration: String,
    eye_height: String,
}

impl From<&ControlTuning> for ControlsContext {
    fn from(t: &ControlTuning) -> Self {
        Self {
            mouse_sensitivity: js_number(t.mouse_sensitivity),
            smoothing: js_number(t.smoothing),
            friction: js_number(t.friction),
            gravity: js_number(t.gravity),
            jump_impulse: js_number(t.jump_impulse),
            move_acceleration: js_number(t.move_acceleration),
            eye_height: js_number(t.eye_height),
        }
    }
}
