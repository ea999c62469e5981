//! Program intermediate representation.
//!
//! A [`Program`] is an ordered list of statement blocks. Blocks carry raw
//! values (vectors, colors, tuning constants); formatting is left to the
//! [`ProgramRenderer`](crate::render::ProgramRenderer).

use glam::Vec3;
use stagecraft_core::{Color, Transform};
use stagecraft_scene::{GeometrySpec, LightType};

use crate::config::ControlTuning;

/// Scene, camera and renderer setup.
#[derive(Debug, Clone, PartialEq)]
pub struct Preamble {
    pub background: Color,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub camera_position: Vec3,
    pub antialias: bool,
    pub shadows: bool,
}

impl Default for Preamble {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x1a_1a1a),
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 1.0, 5.0),
            antialias: true,
            shadows: true,
        }
    }
}

/// The synthetic floor. Receives shadows, never casts them.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundBlock {
    pub width: f32,
    pub depth: f32,
    pub color: Color,
    pub elevation: f32,
}

impl Default for GroundBlock {
    fn default() -> Self {
        Self {
            width: 100.0,
            depth: 100.0,
            color: Color::from_hex(0x3a_3a3a),
            elevation: -2.0,
        }
    }
}

/// Where a light block came from; decides the generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightOrigin {
    /// A light object at this scene index.
    Scene(usize),
    /// Injected because the scene has no lights.
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightBlock {
    pub origin: LightOrigin,
    pub light_type: LightType,
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
}

impl LightBlock {
    /// The fixed pair used when the scene has no light objects.
    #[must_use]
    pub fn default_pair() -> [Self; 2] {
        [
            Self {
                origin: LightOrigin::Default,
                light_type: LightType::Ambient,
                color: Color::from_hex(0x40_4040),
                intensity: 0.5,
                position: Vec3::ZERO,
                cast_shadow: false,
            },
            Self {
                origin: LightOrigin::Default,
                light_type: LightType::Directional,
                color: Color::WHITE,
                intensity: 0.8,
                position: Vec3::new(10.0, 20.0, 5.0),
                cast_shadow: true,
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshBlock {
    pub index: usize,
    pub geometry: GeometrySpec,
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelBlock {
    pub index: usize,
    pub file_name: String,
    /// Path inside the exported archive.
    pub asset_path: String,
    pub transform: Transform,
}

/// One model the runtime loader has to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub index: usize,
    pub asset_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A single-line comment, used for section headers.
    Comment(String),
    Preamble(Preamble),
    Ground(GroundBlock),
    Light(LightBlock),
    Mesh(MeshBlock),
    /// Imported model recorded as comments only.
    ModelStub(ModelBlock),
    /// Imported model as a placeholder filled at runtime.
    ModelPlaceholder(ModelBlock),
    /// Loads every requested model and clears the loading indicator.
    ModelLoader(Vec<ModelRequest>),
    Controls(ControlTuning),
}

/// An emitted program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub blocks: Vec<Block>,
}

impl Program {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Comment(text.into()));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn lights(&self) -> impl Iterator<Item = &LightBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Light(light) => Some(light),
            _ => None,
        })
    }

    pub fn meshes(&self) -> impl Iterator<Item = &MeshBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Mesh(mesh) => Some(mesh),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
