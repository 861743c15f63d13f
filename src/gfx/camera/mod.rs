//! # Camera Module
//!
//! Orbit camera state and input mapping. The camera is the single source of
//! the view and projection matrices consumed by both the renderer and the
//! picking pipeline, and of the eye position picking uses as its ray origin.

pub mod camera_controller;
pub mod orbit_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use orbit_camera::{CameraConfig, OrbitCamera};
