//! Inspector contract.
//!
//! The property panel addresses fields of the selected object with dotted
//! paths (`position.x`, `scale.z`, `material.color`). Number inputs carry
//! floats, the color picker carries a color.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use stagecraft_core::{Color, CoreError};

use crate::errors::{Result, SceneError};
use crate::object::SceneObject;
use crate::state::{ObjectKey, SceneState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn get(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }

    fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Self::X => v.x = value,
            Self::Y => v.y = value,
            Self::Z => v.z = value,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    Position(Axis),
    Rotation(Axis),
    Scale(Axis),
    MaterialColor,
}

impl FromStr for PropertyPath {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, CoreError> {
        if s == "material.color" {
            return Ok(Self::MaterialColor);
        }

        let unknown = || CoreError::UnknownProperty(s.to_string());
        let (group, axis) = s.split_once('.').ok_or_else(unknown)?;
        let axis = match axis {
            "x" => Axis::X,
            "y" => Axis::Y,
            "z" => Axis::Z,
            _ => return Err(unknown()),
        };

        match group {
            "position" => Ok(Self::Position(axis)),
            "rotation" => Ok(Self::Rotation(axis)),
            "scale" => Ok(Self::Scale(axis)),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(axis) => write!(f, "position.{}", axis.name()),
            Self::Rotation(axis) => write!(f, "rotation.{}", axis.name()),
            Self::Scale(axis) => write!(f, "scale.{}", axis.name()),
            Self::MaterialColor => f.write_str("material.color"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Number(f32),
    Color(Color),
}

/// Reads a property of the selected object.
///
/// `None` when nothing is selected or the object has no such property
/// (e.g. `material.color` on an imported model).
#[must_use]
pub fn read_property(scene: &SceneState, path: PropertyPath) -> Option<PropertyValue> {
    let object = scene.selected_object()?;
    let t = &object.transform;
    match path {
        PropertyPath::Position(axis) => Some(PropertyValue::Number(axis.get(t.position))),
        PropertyPath::Rotation(axis) => Some(PropertyValue::Number(axis.get(t.rotation))),
        PropertyPath::Scale(axis) => Some(PropertyValue::Number(axis.get(t.scale))),
        PropertyPath::MaterialColor => object.material().map(|m| PropertyValue::Color(m.color)),
    }
}

/// Writes a property of the selected object.
///
/// Returns `Ok(false)` when nothing was written: no selection, or a color
/// written to an object without material.
pub fn write_property(scene: &mut SceneState, path: PropertyPath, value: PropertyValue) -> Result<bool> {
    let Some(object) = scene.selected_object_mut() else {
        return Ok(false);
    };

    match (path, value) {
        (PropertyPath::Position(axis), PropertyValue::Number(v)) => {
            axis.set(&mut object.transform.position, v);
        }
        (PropertyPath::Rotation(axis), PropertyValue::Number(v)) => {
            axis.set(&mut object.transform.rotation, v);
        }
        (PropertyPath::Scale(axis), PropertyValue::Number(v)) => {
            axis.set(&mut object.transform.scale, v);
        }
        (PropertyPath::MaterialColor, PropertyValue::Color(color)) => {
            let Some(material) = object.material_mut() else {
                return Ok(false);
            };
            material.color = color;
        }
        (PropertyPath::MaterialColor, PropertyValue::Number(_)) => {
            return Err(SceneError::PropertyType {
                path: path.to_string(),
                expected: "color",
            });
        }
        (_, PropertyValue::Color(_)) => {
            return Err(SceneError::PropertyType {
                path: path.to_string(),
                expected: "number",
            });
        }
    }
    Ok(true)
}

/// Removes the selected object. Returns it, or `None` without a selection.
pub fn delete_selected(scene: &mut SceneState) -> Option<SceneObject> {
    let key = scene.selected()?;
    let removed = scene.remove(key);
    scene.clear_selection();
    removed
}

/// One row of the inspector's object list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectListEntry {
    pub key: ObjectKey,
    pub label: String,
    pub active: bool,
}

/// Rows for every object except the ground, in scene order.
#[must_use]
pub fn object_list(scene: &SceneState) -> Vec<ObjectListEntry> {
    let selected = scene.selected();
    scene
        .iter()
        .filter(|(_, _, obj)| !obj.is_ground())
        .map(|(index, key, obj)| ObjectListEntry {
            key,
            label: obj.name.clone().unwrap_or_else(|| format!("Object_{index}")),
            active: selected == Some(key),
        })
        .collect()
}
