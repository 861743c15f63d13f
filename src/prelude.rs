//! # Maquette Prelude
//!
//! Brings the commonly used types into scope in one import:
//!
//! ```rust
//! use maquette::prelude::*;
//!
//! let mut scene = Scene::new();
//! let mut camera = OrbitCamera::default();
//!
//! let _ = scene.add_cube(1.0, Vector3::new(0.0, 0.0, -2.0), "Cube");
//! camera.orbit(0.2, -0.1);
//!
//! let selected = pick(&mut scene, &camera, 400.0, 300.0, 800.0, 600.0);
//! assert_eq!(selected, scene.selected_index());
//! ```

// Re-export core scene types
pub use crate::gfx::scene::{
    Component, ComponentKind, Light, LightType, Material, MeshPreset, MeshRenderer, Scene,
    SceneObject, Transform,
};

// Re-export camera types
pub use crate::gfx::camera::{CameraConfig, CameraController, OrbitCamera};

// Re-export geometry types
pub use crate::gfx::geometry::{create_cube, create_pyramid, create_sphere, GridLines, Mesh};

// Re-export picking and lighting entry points
pub use crate::gfx::lighting::{collect_lights, LightingData};
pub use crate::gfx::picking::{pick, screen_to_ray, Ray};

// Re-export error types
pub use crate::error::MeshError;

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Matrix4, Vector3};
