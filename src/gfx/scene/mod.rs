//! # Scene Management Module
//!
//! This module provides the scene graph for the editor core: addressable
//! objects composed of typed capability components, plus the selection
//! state the picking pipeline and inspector operate on.
//!
//! ## Key Components
//!
//! - [`Scene`] - Ordered object collection with selection and spawn helpers
//! - [`SceneObject`] - A named entity carrying at most one component per kind
//! - [`components`] - The closed component set: Transform, MeshRenderer,
//!   Light, Material
//!
//! ## Component Rules
//!
//! Every object owns exactly one Transform from construction; it cannot be
//! removed. Adding a component kind twice returns the existing instance.
//! A MeshRenderer exclusively owns its mesh, so removing the component (or
//! switching its preset) drops the geometry with it.

pub mod components;
pub mod object;
pub mod scene;

// Re-export main types
pub use components::{
    Component, ComponentData, ComponentKind, Light, LightType, Material, MeshPreset, MeshRenderer,
    Transform,
};
pub use object::SceneObject;
pub use scene::Scene;
