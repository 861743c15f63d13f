//! Error types for the scene core.
//!
//! Almost every failure mode in this crate is recovered locally (absent
//! components, out-of-range selection indices, non-invertible camera
//! matrices) and surfaces as an `Option` or a no-op. Malformed geometry is
//! the one hard failure: it is rejected at mesh construction so downstream
//! triangle iteration never reads partial triangles.

use thiserror::Error;

/// Error type for mesh construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The vertex list was empty.
    #[error("mesh has no vertices")]
    Empty,

    /// The vertex list does not describe whole triangles.
    #[error("vertex count {0} is not a multiple of 3")]
    NotTriangleList(usize),
}
