//! Geometry Classifier
//!
//! Maps the rendering engine's geometry type name (e.g. `"BoxGeometry"`,
//! `"SphereBufferGeometry"`) to one canonical primitive and a fixed tuple of
//! construction parameters.
//!
//! The parameters are the editor's placement defaults, not the object's
//! current dimensions. Size changes made in the editor only survive export
//! through the object's `scale`.

use serde::{Deserialize, Serialize};

/// The fixed set of primitives the editor can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Box,
    Sphere,
    Cone,
    Cylinder,
    Plane,
}

/// Substring rules, checked in order; the first hit wins.
const RULES: [(&str, PrimitiveType); 5] = [
    ("Box", PrimitiveType::Box),
    ("Sphere", PrimitiveType::Sphere),
    ("Cone", PrimitiveType::Cone),
    ("Cylinder", PrimitiveType::Cylinder),
    ("Plane", PrimitiveType::Plane),
];

impl PrimitiveType {
    pub const ALL: [Self; 5] = [Self::Box, Self::Sphere, Self::Cone, Self::Cylinder, Self::Plane];

    /// Fixed construction parameters emitted for this primitive.
    #[must_use]
    pub const fn default_params(self) -> &'static [f32] {
        match self {
            Self::Box => &[2.0, 2.0, 2.0],
            Self::Sphere => &[1.0, 32.0, 32.0],
            Self::Cone => &[1.0, 2.0, 32.0],
            Self::Cylinder => &[1.0, 1.0, 2.0, 32.0],
            Self::Plane => &[5.0, 5.0],
        }
    }

    /// Engine geometry type name used when the editor places this primitive.
    #[must_use]
    pub const fn descriptor(self) -> &'static str {
        match self {
            Self::Box => "BoxGeometry",
            Self::Sphere => "SphereGeometry",
            Self::Cone => "ConeGeometry",
            Self::Cylinder => "CylinderGeometry",
            Self::Plane => "PlaneGeometry",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Cone => "cone",
            Self::Cylinder => "cylinder",
            Self::Plane => "plane",
        }
    }

    /// Capitalized name for comments and labels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Box => "Box",
            Self::Sphere => "Sphere",
            Self::Cone => "Cone",
            Self::Cylinder => "Cylinder",
            Self::Plane => "Plane",
        }
    }
}

/// Result of classifying a geometry descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySpec {
    pub primitive: PrimitiveType,
    pub params: &'static [f32],
}

impl From<PrimitiveType> for GeometrySpec {
    fn from(primitive: PrimitiveType) -> Self {
        Self {
            primitive,
            params: primitive.default_params(),
        }
    }
}

/// Classifies a geometry type name. Total: unknown names fall back to a box.
#[must_use]
pub fn classify(descriptor: &str) -> GeometrySpec {
    RULES
        .iter()
        .find(|(needle, _)| descriptor.contains(needle))
        .map_or(PrimitiveType::Box, |(_, primitive)| *primitive)
        .into()
}
