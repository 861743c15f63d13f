use cgmath::Vector3;
use log::debug;

use crate::gfx::geometry::{create_cube, create_pyramid, create_sphere, Mesh};

use super::components::MeshRenderer;
use super::object::SceneObject;

/// Main scene containing objects and the current selection
///
/// Objects are stored in insertion order, which is also the order the
/// outliner shows and the order picking iterates. At most one object is
/// selected at a time.
pub struct Scene {
    objects: Vec<SceneObject>,
    selected: Option<usize>,
}

impl Scene {
    /// Creates an empty scene with nothing selected
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            selected: None,
        }
    }

    /// All objects in scene order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Gets the total number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets immutable reference to an object by index
    pub fn get_object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    /// Gets mutable reference to an object by index
    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.objects.get_mut(index)
    }

    /// Gets all object names for UI display
    pub fn object_names(&self) -> Vec<String> {
        self.objects.iter().map(|o| o.name().to_string()).collect()
    }

    /// Index of the selected object, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Replace the selection outright
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// The selected object, or `None` when the selection is empty or stale
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.and_then(|index| self.objects.get(index))
    }

    /// Mutable access to the selected object
    pub fn selected_object_mut(&mut self) -> Option<&mut SceneObject> {
        self.selected.and_then(|index| self.objects.get_mut(index))
    }

    /// Removes the selected object and clears the selection
    ///
    /// Nothing is auto-reselected afterwards.
    pub fn delete_selected(&mut self) {
        if let Some(index) = self.selected {
            if index < self.objects.len() {
                let object = self.objects.remove(index);
                debug!("Deleted object '{}'", object.name());
                self.selected = None;
            }
        }
    }

    /// Generate a unique display name from a base name
    ///
    /// Returns the base name verbatim when no object uses it. On a
    /// collision, scans existing names for the exact `base (N)` suffix
    /// grammar, takes the highest N seen, and emits `base (N+1)`. Names
    /// that merely start with the base are ignored.
    pub fn generate_unique_name(&self, base_name: &str) -> String {
        let exists = self.objects.iter().any(|o| o.name() == base_name);
        if !exists {
            return base_name.to_string();
        }

        let mut max_num = 0u32;
        for object in &self.objects {
            let Some(rest) = object.name().strip_prefix(base_name) else {
                continue;
            };
            let Some(digits) = rest.strip_prefix(" (").and_then(|r| r.strip_suffix(')')) else {
                continue;
            };
            if let Ok(num) = digits.parse::<u32>() {
                max_num = max_num.max(num);
            }
        }

        format!("{} ({})", base_name, max_num + 1)
    }

    /// Creates an empty object at the given position and selects it
    pub fn add_empty_object(
        &mut self,
        base_name: &str,
        position: Vector3<f32>,
    ) -> &mut SceneObject {
        let name = self.generate_unique_name(base_name);
        let mut object = SceneObject::new(name);
        object.transform_mut().position = position;

        debug!("Created empty object '{}'", object.name());
        self.objects.push(object);
        self.selected = Some(self.objects.len() - 1);
        self.objects.last_mut().expect("object was just pushed")
    }

    /// Spawns a cube of the given edge length
    pub fn add_cube(
        &mut self,
        size: f32,
        position: Vector3<f32>,
        base_name: &str,
    ) -> &mut SceneObject {
        self.spawn_with_mesh(base_name, position, create_cube(size))
    }

    /// Spawns a pyramid of the given base size
    pub fn add_pyramid(
        &mut self,
        size: f32,
        position: Vector3<f32>,
        base_name: &str,
    ) -> &mut SceneObject {
        self.spawn_with_mesh(base_name, position, create_pyramid(size))
    }

    /// Spawns a UV sphere of the given diameter and segment count
    pub fn add_sphere(
        &mut self,
        diameter: f32,
        segments: u32,
        position: Vector3<f32>,
        base_name: &str,
    ) -> &mut SceneObject {
        self.spawn_with_mesh(base_name, position, create_sphere(diameter, segments))
    }

    /// Shared spawn path: unique name, positioned transform, mesh renderer
    /// with freshly generated geometry. Leaves the selection unchanged.
    fn spawn_with_mesh(
        &mut self,
        base_name: &str,
        position: Vector3<f32>,
        mesh: Mesh,
    ) -> &mut SceneObject {
        let name = self.generate_unique_name(base_name);
        let mut object = SceneObject::new(name);
        object.transform_mut().position = position;
        object.add_component::<MeshRenderer>().set_mesh(mesh);

        debug!(
            "Spawned '{}' at ({}, {}, {})",
            object.name(),
            position.x,
            position.y,
            position.z
        );
        self.objects.push(object);
        self.objects.last_mut().expect("object was just pushed")
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
