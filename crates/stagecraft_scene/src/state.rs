use slotmap::{SlotMap, new_key_type};

use crate::errors::{Result, SceneError};
use crate::object::{ImportedModel, LightObject, SceneObject};

new_key_type! {
    /// Generational handle to a placed object. Stale after the object is removed.
    pub struct ObjectKey;
}

/// The editor's live scene.
///
/// Objects live in a slot map for stable handles; `order` keeps insertion
/// order, which is both the emission order and the index used for generated
/// variable names. The collection owns the selection so that deleting the
/// selected object clears it.
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    objects: SlotMap<ObjectKey, SceneObject>,
    order: Vec<ObjectKey>,
    ground: Option<ObjectKey>,
    selected: Option<ObjectKey>,
}

impl SceneState {
    /// A scene holding only the ground plane, as the editor starts.
    #[must_use]
    pub fn new() -> Self {
        let mut scene = Self::empty();
        let key = scene.objects.insert(SceneObject::ground());
        scene.order.push(key);
        scene.ground = Some(key);
        scene
    }

    /// A scene without any object, not even the ground.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends an object. A second ground object is rejected.
    pub fn add(&mut self, object: SceneObject) -> Result<ObjectKey> {
        let is_ground = object.is_ground();
        if is_ground && self.ground.is_some() {
            return Err(SceneError::DuplicateGround);
        }

        let key = self.objects.insert(object);
        self.order.push(key);
        if is_ground {
            self.ground = Some(key);
        }
        log::debug!("Scene: added object #{} ({key:?})", self.order.len() - 1);
        Ok(key)
    }

    /// Removes an object. Clears the selection if it pointed at it.
    pub fn remove(&mut self, key: ObjectKey) -> Option<SceneObject> {
        let object = self.objects.remove(key)?;
        self.order.retain(|k| *k != key);
        if self.ground == Some(key) {
            self.ground = None;
        }
        if self.selected == Some(key) {
            self.selected = None;
        }
        Some(object)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of an object in insertion order.
    #[must_use]
    pub fn index_of(&self, key: ObjectKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    #[inline]
    #[must_use]
    pub fn ground(&self) -> Option<ObjectKey> {
        self.ground
    }

    /// Iterates `(index, key, object)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ObjectKey, &SceneObject)> {
        self.order
            .iter()
            .enumerate()
            .filter_map(|(index, key)| self.objects.get(*key).map(|obj| (index, *key, obj)))
    }

    /// Iterates objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.iter().map(|(_, _, obj)| obj)
    }

    pub fn lights(&self) -> impl Iterator<Item = (&SceneObject, &LightObject)> {
        self.objects().filter_map(|obj| obj.as_light().map(|light| (obj, light)))
    }

    pub fn models(&self) -> impl Iterator<Item = (&SceneObject, &ImportedModel)> {
        self.objects().filter_map(|obj| obj.as_model().map(|model| (obj, model)))
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Selects an object. Returns `false` if the handle is stale.
    pub fn select(&mut self, key: ObjectKey) -> bool {
        if self.objects.contains_key(key) {
            self.selected = Some(key);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected handle, if it still resolves.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectKey> {
        self.selected.filter(|key| self.objects.contains_key(*key))
    }

    #[must_use]
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.and_then(|key| self.objects.get(key))
    }

    pub fn selected_object_mut(&mut self) -> Option<&mut SceneObject> {
        self.selected.and_then(|key| self.objects.get_mut(key))
    }
}
