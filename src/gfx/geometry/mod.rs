//! # Geometry Module
//!
//! Mesh storage and procedural geometry for the scene core.
//!
//! A [`Mesh`] is an immutable flat triangle list of positions: no indices,
//! no normals, no sharing between instances. The picking pipeline walks the
//! raw vertex list directly, and the external renderer uploads it verbatim.
//!
//! ## Key Components
//!
//! - [`Mesh`] - Validated triangle-list vertex storage
//! - [`primitives`] - Cube, pyramid, and sphere factories
//! - [`GridLines`] - Ground-reference grid line list for the viewport

pub mod grid;
pub mod primitives;

// Re-export main types
pub use grid::GridLines;
pub use primitives::{create_cube, create_pyramid, create_sphere};

use crate::error::MeshError;

/// Immutable triangle-list mesh
///
/// Vertices are consumed three at a time as independent triangles.
/// Construction validates the shape of the list so every downstream
/// consumer can iterate whole triangles without bounds checks.
pub struct Mesh {
    vertices: Vec<[f32; 3]>,
}

impl Mesh {
    /// Creates a mesh from a flat triangle list
    ///
    /// # Errors
    /// Returns [`MeshError::Empty`] for an empty vertex list and
    /// [`MeshError::NotTriangleList`] when the length is not a multiple of 3.
    pub fn new(vertices: Vec<[f32; 3]>) -> Result<Self, MeshError> {
        if vertices.is_empty() {
            return Err(MeshError::Empty);
        }
        if vertices.len() % 3 != 0 {
            return Err(MeshError::NotTriangleList(vertices.len()));
        }
        Ok(Self { vertices })
    }

    /// Constructor for the primitive factories, whose output is
    /// triangle-shaped by construction.
    pub(crate) fn from_triangles(vertices: Vec<[f32; 3]>) -> Self {
        debug_assert!(!vertices.is_empty() && vertices.len() % 3 == 0);
        Self { vertices }
    }

    /// Read-only vertex access (used by picking and the renderer upload)
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles described by the vertex list
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}
