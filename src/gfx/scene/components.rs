//! # Component Types
//!
//! The typed capability modules a [`SceneObject`](super::SceneObject) can
//! carry: Transform, MeshRenderer, Light, and Material. The set is closed —
//! [`Component`] is a sum type over the four kinds and the per-object slot
//! table is keyed by [`ComponentKind`], which is what enforces the
//! one-instance-per-kind rule without any runtime type machinery.

use cgmath::{Matrix4, Vector3};

use crate::gfx::geometry::{create_cube, create_pyramid, create_sphere, Mesh};
use crate::gfx::math;

/// Tag identifying one of the supported component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Transform,
    MeshRenderer,
    Light,
    Material,
}

impl ComponentKind {
    /// Width of the per-object slot table
    pub(crate) const COUNT: usize = 4;

    /// All kinds in slot order
    pub const ALL: [ComponentKind; Self::COUNT] = [
        ComponentKind::Transform,
        ComponentKind::MeshRenderer,
        ComponentKind::Light,
        ComponentKind::Material,
    ];

    /// Human-readable kind name for inspector display
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::MeshRenderer => "Mesh Renderer",
            ComponentKind::Light => "Light",
            ComponentKind::Material => "Material",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ComponentKind::Transform => 0,
            ComponentKind::MeshRenderer => 1,
            ComponentKind::Light => 2,
            ComponentKind::Material => 3,
        }
    }
}

/// A component instance owned by a scene object
pub enum Component {
    Transform(Transform),
    MeshRenderer(MeshRenderer),
    Light(Light),
    Material(Material),
}

impl Component {
    /// The kind tag of this instance
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::MeshRenderer(_) => ComponentKind::MeshRenderer,
            Component::Light(_) => ComponentKind::Light,
            Component::Material(_) => ComponentKind::Material,
        }
    }

    /// Whether `remove_component` may take this instance off its object
    ///
    /// Transform is permanent; everything else can go.
    pub fn is_removable(&self) -> bool {
        !matches!(self, Component::Transform(_))
    }

    /// Human-readable kind name for inspector display
    pub fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}

/// Typed access into the [`Component`] sum type
///
/// Implemented by the four component structs; lets the object-level
/// `add/get/has` methods stay generic while the storage stays a closed enum.
pub trait ComponentData: Default {
    /// Kind tag for this component type
    const KIND: ComponentKind;

    /// Wrap a value into the sum type
    fn into_component(self) -> Component;

    /// Borrow out of the sum type, `None` on a kind mismatch
    fn from_component(component: &Component) -> Option<&Self>;

    /// Mutably borrow out of the sum type, `None` on a kind mismatch
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

/// Position, rotation, and scale — present on every scene object
#[derive(Debug, Clone)]
pub struct Transform {
    /// World-space position
    pub position: Vector3<f32>,
    /// Euler angles in degrees
    pub rotation: Vector3<f32>,
    /// Per-axis scale factors
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// World model matrix for this transform
    pub fn model_matrix(&self) -> Matrix4<f32> {
        math::build_model_matrix(self.position, self.rotation * math::DEG_TO_RAD, self.scale)
    }
}

impl ComponentData for Transform {
    const KIND: ComponentKind = ComponentKind::Transform;

    fn into_component(self) -> Component {
        Component::Transform(self)
    }

    fn from_component(component: &Component) -> Option<&Self> {
        match component {
            Component::Transform(transform) => Some(transform),
            _ => None,
        }
    }

    fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
        match component {
            Component::Transform(transform) => Some(transform),
            _ => None,
        }
    }
}

/// Built-in geometry a mesh renderer can regenerate on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeshPreset {
    #[default]
    None,
    Cube,
    Pyramid,
    Sphere,
}

/// Holds the renderable geometry of a scene object
///
/// Owns its mesh exclusively: replacing the preset or clearing drops the
/// previous mesh before any new one is built.
pub struct MeshRenderer {
    /// Disabled renderers are skipped by picking and drawing
    pub enabled: bool,
    mesh: Option<Mesh>,
    preset: MeshPreset,
}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self {
            enabled: true,
            mesh: None,
            preset: MeshPreset::None,
        }
    }
}

impl MeshRenderer {
    /// The owned mesh, if any
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Replace the owned mesh, dropping the previous one
    ///
    /// Leaves the preset untouched; spawners assign generated geometry
    /// without claiming a preset.
    pub fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = Some(mesh);
    }

    /// Drop the mesh and reset the preset
    pub fn clear_mesh(&mut self) {
        self.mesh = None;
        self.preset = MeshPreset::None;
    }

    /// Current preset tag
    pub fn preset(&self) -> MeshPreset {
        self.preset
    }

    /// Switch presets and regenerate the owned geometry
    ///
    /// The old mesh is dropped before the new one is built. Presets use
    /// fixed default dimensions: unit cube, unit pyramid, unit-diameter
    /// sphere with 32 segments.
    pub fn set_preset(&mut self, preset: MeshPreset) {
        self.mesh = None;
        self.preset = preset;
        self.mesh = match preset {
            MeshPreset::None => None,
            MeshPreset::Cube => Some(create_cube(1.0)),
            MeshPreset::Pyramid => Some(create_pyramid(1.0)),
            MeshPreset::Sphere => Some(create_sphere(1.0, 32)),
        };
    }
}

impl ComponentData for MeshRenderer {
    const KIND: ComponentKind = ComponentKind::MeshRenderer;

    fn into_component(self) -> Component {
        Component::MeshRenderer(self)
    }

    fn from_component(component: &Component) -> Option<&Self> {
        match component {
            Component::MeshRenderer(renderer) => Some(renderer),
            _ => None,
        }
    }

    fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
        match component {
            Component::MeshRenderer(renderer) => Some(renderer),
            _ => None,
        }
    }
}

/// Kind of light a [`Light`] component emits
///
/// Spot is declared for the inspector but not yet aggregated by
/// [`collect_lights`](crate::gfx::lighting::collect_lights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightType {
    #[default]
    Point,
    Directional,
    Ambient,
    Spot,
}

/// Light emission parameters
#[derive(Debug, Clone)]
pub struct Light {
    /// Disabled lights are skipped during collection
    pub enabled: bool,
    /// RGB color, components in [0, 1]
    pub color: Vector3<f32>,
    /// Scalar multiplier applied to the color, >= 0
    pub intensity: f32,
    /// Falloff range, meaningful for point and spot lights
    pub range: f32,
    pub light_type: LightType,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Vector3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            range: 10.0,
            light_type: LightType::Point,
        }
    }
}

impl ComponentData for Light {
    const KIND: ComponentKind = ComponentKind::Light;

    fn into_component(self) -> Component {
        Component::Light(self)
    }

    fn from_component(component: &Component) -> Option<&Self> {
        match component {
            Component::Light(light) => Some(light),
            _ => None,
        }
    }

    fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
        match component {
            Component::Light(light) => Some(light),
            _ => None,
        }
    }
}

/// PBR-like surface parameters
#[derive(Debug, Clone)]
pub struct Material {
    /// RGB base color
    pub albedo: Vector3<f32>,
    /// 0 = dielectric, 1 = metal
    pub metallic: f32,
    /// 0 = smooth, 1 = rough
    pub roughness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vector3::new(0.8, 0.5, 0.2),
            metallic: 0.0,
            roughness: 0.8,
        }
    }
}

impl Material {
    /// Creates a material, clamping metallic and roughness into [0, 1]
    pub fn new(albedo: Vector3<f32>, metallic: f32, roughness: f32) -> Self {
        Self {
            albedo,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
        }
    }
}

impl ComponentData for Material {
    const KIND: ComponentKind = ComponentKind::Material;

    fn into_component(self) -> Component {
        Component::Material(self)
    }

    fn from_component(component: &Component) -> Option<&Self> {
        match component {
            Component::Material(material) => Some(material),
            _ => None,
        }
    }

    fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
        match component {
            Component::Material(material) => Some(material),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_defaults() {
        let transform = Transform::default();
        assert_eq!(transform.position, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(transform.rotation, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(transform.scale, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_preset_rebuild_replaces_geometry() {
        let mut renderer = MeshRenderer::default();
        assert!(renderer.mesh().is_none());

        renderer.set_preset(MeshPreset::Cube);
        assert_eq!(renderer.mesh().map(Mesh::vertex_count), Some(36));

        renderer.set_preset(MeshPreset::Pyramid);
        assert_eq!(renderer.mesh().map(Mesh::vertex_count), Some(12));

        renderer.set_preset(MeshPreset::None);
        assert!(renderer.mesh().is_none());
    }

    #[test]
    fn test_clear_mesh_resets_preset() {
        let mut renderer = MeshRenderer::default();
        renderer.set_preset(MeshPreset::Sphere);
        assert!(renderer.mesh().is_some());

        renderer.clear_mesh();
        assert!(renderer.mesh().is_none());
        assert_eq!(renderer.preset(), MeshPreset::None);
    }

    #[test]
    fn test_material_clamps_parameters() {
        let material = Material::new(Vector3::new(1.0, 0.0, 0.0), 1.5, -0.5);
        assert_eq!(material.metallic, 1.0);
        assert_eq!(material.roughness, 0.0);
    }

    #[test]
    fn test_transform_is_not_removable() {
        assert!(!Transform::default().into_component().is_removable());
        assert!(Light::default().into_component().is_removable());
    }
}
