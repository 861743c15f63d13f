//! # Primitive Shape Generation
//!
//! Factory functions for the built-in mesh presets. Every call returns a
//! freshly allocated [`Mesh`] — geometry is never shared between instances,
//! so a renderer or picker holding one mesh is unaffected by another being
//! rebuilt or dropped.

use super::Mesh;
use std::f32::consts::PI;

/// Generate a pyramid with a triangular base
///
/// The base sits in the XY plane at half-extent `size / 2` and the apex at
/// `(0, 0, size)`. Four triangles: the base plus three sides sharing the
/// apex. 12 vertices total.
pub fn create_pyramid(size: f32) -> Mesh {
    let s = size * 0.5;
    let vertices = vec![
        // Base triangle (XY plane)
        [0.0, s, 0.0],
        [-s, -s, 0.0],
        [s, -s, 0.0],
        // Side 1
        [0.0, s, 0.0],
        [-s, -s, 0.0],
        [0.0, 0.0, size],
        // Side 2
        [-s, -s, 0.0],
        [s, -s, 0.0],
        [0.0, 0.0, size],
        // Side 3
        [s, -s, 0.0],
        [0.0, s, 0.0],
        [0.0, 0.0, size],
    ];
    Mesh::from_triangles(vertices)
}

/// Generate a cube centered at the origin
///
/// Unit cube scaled by `size`, 6 faces of 2 triangles each with consistent
/// outward winding. 36 vertices total.
pub fn create_cube(size: f32) -> Mesh {
    let s = size * 0.5;
    let vertices = vec![
        // Front face
        [-s, -s, s],
        [s, -s, s],
        [s, s, s],
        [s, s, s],
        [-s, s, s],
        [-s, -s, s],
        // Back face
        [-s, -s, -s],
        [-s, s, -s],
        [s, s, -s],
        [s, s, -s],
        [s, -s, -s],
        [-s, -s, -s],
        // Left face
        [-s, -s, -s],
        [-s, -s, s],
        [-s, s, s],
        [-s, s, s],
        [-s, s, -s],
        [-s, -s, -s],
        // Right face
        [s, -s, -s],
        [s, s, -s],
        [s, s, s],
        [s, s, s],
        [s, -s, s],
        [s, -s, -s],
        // Top face
        [-s, s, -s],
        [-s, s, s],
        [s, s, s],
        [s, s, s],
        [s, s, -s],
        [-s, s, -s],
        // Bottom face
        [-s, -s, -s],
        [s, -s, -s],
        [s, -s, s],
        [s, -s, s],
        [-s, -s, s],
        [-s, -s, -s],
    ];
    Mesh::from_triangles(vertices)
}

/// Generate a UV sphere
///
/// # Arguments
/// * `diameter` - Sphere diameter
/// * `segments` - Longitude steps; latitude bands are `segments / 2`.
///   Clamped to a minimum of 3 so the geometry is never degenerate.
///
/// Vertices come from the spherical-to-Cartesian conversion
/// `(r sinθ cosφ, r cosθ, r sinθ sinφ)` with two triangles per quad.
pub fn create_sphere(diameter: f32, segments: u32) -> Mesh {
    let r = diameter * 0.5;
    let segments = segments.max(3);
    let rings = (segments / 2).max(1);

    let mut vertices = Vec::with_capacity((rings * segments * 6) as usize);
    for y in 0..rings {
        let v0 = y as f32 / rings as f32;
        let v1 = (y + 1) as f32 / rings as f32;
        let theta0 = v0 * PI;
        let theta1 = v1 * PI;

        for x in 0..segments {
            let u0 = x as f32 / segments as f32;
            let u1 = (x + 1) as f32 / segments as f32;
            let phi0 = u0 * 2.0 * PI;
            let phi1 = u1 * 2.0 * PI;

            // 4 corners of the quad
            let p00 = spherical_point(r, theta0, phi0);
            let p01 = spherical_point(r, theta0, phi1);
            let p10 = spherical_point(r, theta1, phi0);
            let p11 = spherical_point(r, theta1, phi1);

            // 2 triangles per quad
            vertices.push(p00);
            vertices.push(p10);
            vertices.push(p11);
            vertices.push(p00);
            vertices.push(p11);
            vertices.push(p01);
        }
    }
    Mesh::from_triangles(vertices)
}

fn spherical_point(r: f32, theta: f32, phi: f32) -> [f32; 3] {
    [
        r * theta.sin() * phi.cos(),
        r * theta.cos(),
        r * theta.sin() * phi.sin(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pyramid_generation() {
        let pyramid = create_pyramid(1.0);
        assert_eq!(pyramid.vertex_count(), 12); // 4 triangles * 3 vertices
        assert_eq!(pyramid.triangle_count(), 4);

        // Apex sits at (0, 0, size)
        assert!(pyramid
            .vertices()
            .iter()
            .any(|v| *v == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_cube_generation() {
        let cube = create_cube(2.0);
        assert_eq!(cube.vertex_count(), 36); // 6 faces * 2 triangles * 3 vertices
        assert_eq!(cube.triangle_count(), 12);

        // Every coordinate lies on the half-extent
        for vertex in cube.vertices() {
            for coord in vertex {
                assert_relative_eq!(coord.abs(), 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_sphere_generation() {
        let segments = 16u32;
        let sphere = create_sphere(2.0, segments);
        let rings = segments / 2;
        assert_eq!(sphere.vertex_count(), (rings * segments * 6) as usize);

        // Every vertex lies on the radius
        for vertex in sphere.vertices() {
            let len = (vertex[0] * vertex[0] + vertex[1] * vertex[1] + vertex[2] * vertex[2]).sqrt();
            assert_relative_eq!(len, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sphere_clamps_low_segment_counts() {
        // segments = 1 would otherwise produce an empty vertex list
        let sphere = create_sphere(1.0, 1);
        assert!(sphere.vertex_count() > 0);
        assert_eq!(sphere.vertex_count() % 3, 0);
    }

    #[test]
    fn test_factories_allocate_fresh_geometry() {
        let a = create_cube(1.0);
        let b = create_cube(1.0);
        assert_ne!(a.vertices().as_ptr(), b.vertices().as_ptr());
    }
}
