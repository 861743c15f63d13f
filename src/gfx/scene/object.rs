//! Scene objects and their per-instance component table.

use super::components::{Component, ComponentData, ComponentKind, Transform};

/// An addressable entity in the scene graph
///
/// Carries a display name and at most one component of each kind. The
/// ordered component list is the inspector order; the slot table indexes it
/// by kind. Every object owns exactly one [`Transform`] from construction,
/// and that component can never be removed.
pub struct SceneObject {
    name: String,
    components: Vec<Component>,
    slots: [Option<usize>; ComponentKind::COUNT],
}

impl SceneObject {
    /// Creates an object with the given display name and a default Transform
    pub fn new(name: impl Into<String>) -> Self {
        let mut object = Self {
            name: name.into(),
            components: Vec::new(),
            slots: [None; ComponentKind::COUNT],
        };
        let _ = object.add_component::<Transform>();
        object
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add a component of type `T`, or return the existing one
    ///
    /// Idempotent: a second call for the same kind never constructs a
    /// duplicate, it hands back the instance already attached.
    pub fn add_component<T: ComponentData>(&mut self) -> &mut T {
        let slot = T::KIND.index();
        let index = match self.slots[slot] {
            Some(index) => index,
            None => {
                let index = self.components.len();
                self.components.push(T::default().into_component());
                self.slots[slot] = Some(index);
                index
            }
        };
        T::from_component_mut(&mut self.components[index])
            .expect("slot table always points at a component of the matching kind")
    }

    /// Borrow the component of type `T`, if attached
    pub fn get_component<T: ComponentData>(&self) -> Option<&T> {
        self.slots[T::KIND.index()].and_then(|index| T::from_component(&self.components[index]))
    }

    /// Mutably borrow the component of type `T`, if attached
    pub fn get_component_mut<T: ComponentData>(&mut self) -> Option<&mut T> {
        self.slots[T::KIND.index()]
            .and_then(|index| T::from_component_mut(&mut self.components[index]))
    }

    /// Whether a component of type `T` is attached
    pub fn has_component<T: ComponentData>(&self) -> bool {
        self.slots[T::KIND.index()].is_some()
    }

    /// Remove the component of the given kind
    ///
    /// No-op (returns false) when the kind is absent or refuses removal
    /// (Transform). Otherwise the instance leaves both the slot table and
    /// the ordered list, and anything it owned — a MeshRenderer's mesh —
    /// is dropped with it.
    pub fn remove_component(&mut self, kind: ComponentKind) -> bool {
        let slot = kind.index();
        let Some(index) = self.slots[slot] else {
            return false;
        };
        if !self.components[index].is_removable() {
            return false;
        }

        let _ = self.components.remove(index);
        self.slots[slot] = None;

        // Later entries shifted down by the removal
        for entry in self.slots.iter_mut().flatten() {
            if *entry > index {
                *entry -= 1;
            }
        }
        true
    }

    /// The object's Transform, always present
    pub fn transform(&self) -> &Transform {
        self.get_component::<Transform>()
            .expect("every SceneObject owns a Transform")
    }

    /// Mutable access to the object's Transform
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.get_component_mut::<Transform>()
            .expect("every SceneObject owns a Transform")
    }

    /// Components in insertion order (inspector order)
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}
