//! # Graphics Module
//!
//! This module contains the scene-side graphics functionality of the
//! maquette core: camera state, scene management, mesh geometry, light
//! collection, and ray-cast picking.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Orbit camera with pan, zoom, and fly
//!   controls, producing the view/projection matrices
//! - **Scene Management** ([`scene`]) - Objects, typed components, selection
//! - **Geometry** ([`geometry`]) - Validated triangle-list meshes, primitive
//!   factories, and the viewport grid
//! - **Picking** ([`picking`]) - Pointer-to-ray unprojection and
//!   ray-triangle selection
//! - **Lighting** ([`lighting`]) - Per-frame light aggregation for the
//!   renderer
//! - **Math Kernel** ([`math`]) - Matrix construction/inversion and
//!   intersection routines shared by the above
//!
//! ## Frame Flow
//!
//! Within one tick, input mutates the camera, the camera yields matrices,
//! picking unprojects the pointer and writes the scene selection, and the
//! external renderer then reads scene and camera state. Everything is
//! single-threaded and synchronous; no stage observes a half-updated
//! neighbor.

pub mod camera;
pub mod geometry;
pub mod lighting;
pub mod math;
pub mod picking;
pub mod scene;

// Re-export commonly used types
pub use camera::{CameraConfig, OrbitCamera};
pub use scene::Scene;
