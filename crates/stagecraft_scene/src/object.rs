use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use stagecraft_core::{Color, Transform};

use crate::classifier::{GeometrySpec, PrimitiveType, classify};

/// Surface properties of a primitive mesh.
///
/// Only the color is user-editable; roughness and metalness are fixed
/// constants applied when code is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshMaterial {
    pub color: Color,
}

/// A basic shape placed from the editor toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveMesh {
    /// Engine geometry type name, e.g. `"BoxGeometry"`.
    pub shape: String,
    pub material: Option<MeshMaterial>,
}

impl PrimitiveMesh {
    #[must_use]
    pub fn geometry(&self) -> GeometrySpec {
        classify(&self.shape)
    }

    #[inline]
    #[must_use]
    pub fn primitive_type(&self) -> PrimitiveType {
        self.geometry().primitive
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.material.map(|m| m.color)
    }
}

/// A model file imported by the user.
///
/// The original file bytes are shared, not copied: an export in flight keeps
/// its own reference even if the object is deleted meanwhile.
#[derive(Debug, Clone)]
pub struct ImportedModel {
    pub file_name: String,
    pub bytes: Arc<[u8]>,
}

impl PartialEq for ImportedModel {
    fn eq(&self, other: &Self) -> bool {
        self.file_name == other.file_name && self.bytes == other.bytes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightType {
    Ambient,
    Directional,
    Point {
        /// Falloff radius; `0` means no limit.
        distance: f32,
    },
}

impl LightType {
    /// Whether the light uses the object's position.
    #[must_use]
    pub const fn is_positional(self) -> bool {
        !matches!(self, Self::Ambient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightObject {
    pub light_type: LightType,
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Primitive(PrimitiveMesh),
    Model(ImportedModel),
    Light(LightObject),
    /// The synthetic floor plane. Re-created by a fixed block on export.
    Ground,
}

/// One placed entity in the editor scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Display name for the object list.
    pub name: Option<String>,
    pub transform: Transform,
    pub kind: ObjectKind,
}

impl SceneObject {
    #[must_use]
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            name: None,
            transform: Transform::IDENTITY,
            kind,
        }
    }

    /// A primitive placed from the toolbar with the given color.
    #[must_use]
    pub fn primitive(primitive: PrimitiveType, color: Color) -> Self {
        Self::mesh(primitive.descriptor(), Some(color))
    }

    /// A primitive mesh with an arbitrary engine geometry name.
    #[must_use]
    pub fn mesh(shape: impl Into<String>, color: Option<Color>) -> Self {
        Self::new(ObjectKind::Primitive(PrimitiveMesh {
            shape: shape.into(),
            material: color.map(|color| MeshMaterial { color }),
        }))
    }

    #[must_use]
    pub fn model(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::new(ObjectKind::Model(ImportedModel {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }))
    }

    #[must_use]
    pub fn light(light_type: LightType, color: Color, intensity: f32) -> Self {
        Self::new(ObjectKind::Light(LightObject {
            light_type,
            color,
            intensity,
        }))
    }

    #[must_use]
    pub fn ambient_light(color: Color, intensity: f32) -> Self {
        Self::light(LightType::Ambient, color, intensity)
    }

    #[must_use]
    pub fn directional_light(color: Color, intensity: f32, position: Vec3) -> Self {
        Self::light(LightType::Directional, color, intensity).at(position)
    }

    #[must_use]
    pub fn point_light(color: Color, intensity: f32, distance: f32, position: Vec3) -> Self {
        Self::light(LightType::Point { distance }, color, intensity).at(position)
    }

    /// The editor's floor plane: 100×100, laid flat two units below the origin.
    #[must_use]
    pub fn ground() -> Self {
        Self {
            name: Some("Ground".to_string()),
            transform: Transform::from_position(Vec3::new(0.0, -2.0, 0.0))
                .with_rotation(Vec3::new(-std::f32::consts::FRAC_PI_2, 0.0, 0.0)),
            kind: ObjectKind::Ground,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    #[must_use]
    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    #[must_use]
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_ground(&self) -> bool {
        matches!(self.kind, ObjectKind::Ground)
    }

    #[inline]
    #[must_use]
    pub fn is_light(&self) -> bool {
        matches!(self.kind, ObjectKind::Light(_))
    }

    #[inline]
    #[must_use]
    pub fn as_model(&self) -> Option<&ImportedModel> {
        match &self.kind {
            ObjectKind::Model(model) => Some(model),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_light(&self) -> Option<&LightObject> {
        match &self.kind {
            ObjectKind::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Material of a primitive mesh; `None` for every other kind.
    #[must_use]
    pub fn material_mut(&mut self) -> Option<&mut MeshMaterial> {
        match &mut self.kind {
            ObjectKind::Primitive(mesh) => mesh.material.as_mut(),
            _ => None,
        }
    }

    #[must_use]
    pub fn material(&self) -> Option<&MeshMaterial> {
        match &self.kind {
            ObjectKind::Primitive(mesh) => mesh.material.as_ref(),
            _ => None,
        }
    }
}
