// src/lib.rs
//! Maquette Scene Core
//!
//! The scene/component model and camera-driven 3D interaction core of an
//! editor-style application: a scene graph of named objects carrying typed
//! components, an orbit camera, and pointer-based object selection via ray
//! casting. Rendering and UI are external consumers of the state this crate
//! owns.

pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::MeshError;
pub use gfx::camera::{CameraConfig, OrbitCamera};
pub use gfx::picking::pick;
pub use gfx::scene::{Scene, SceneObject};
