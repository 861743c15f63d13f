//! # Math Kernel
//!
//! Pure matrix and intersection routines shared by the camera and the
//! picking pipeline. Everything here is a stateless function over cgmath
//! types; matrices are column-major throughout, matching the layout the
//! GPU-facing layers expect.

use cgmath::{InnerSpace, Matrix4, Vector3};
use std::f32::consts::PI;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Determinant threshold below which a matrix is treated as singular
const INVERT_EPSILON: f32 = 1e-6;

/// Möller–Trumbore rejection threshold (parallel rays, behind-origin hits)
const RAY_EPSILON: f32 = 1e-7;

/// Build a 4x4 model matrix from position, rotation, and scale
///
/// Rotation is Euler angles in radians, composed in ZYX order (Rz, then Ry,
/// then Rx) with each basis column scaled by the per-axis scale factor.
///
/// # Arguments
/// * `position` - World-space translation
/// * `rotation` - Euler angles in radians (x, y, z)
/// * `scale` - Per-axis scale factors
pub fn build_model_matrix(
    position: Vector3<f32>,
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
) -> Matrix4<f32> {
    let (sin_x, cos_x) = rotation.x.sin_cos();
    let (sin_y, cos_y) = rotation.y.sin_cos();
    let (sin_z, cos_z) = rotation.z.sin_cos();

    #[rustfmt::skip]
    let matrix = Matrix4::new(
        cos_y * cos_z * scale.x,
        (sin_x * sin_y * cos_z - cos_x * sin_z) * scale.x,
        (cos_x * sin_y * cos_z + sin_x * sin_z) * scale.x,
        0.0,

        cos_y * sin_z * scale.y,
        (sin_x * sin_y * sin_z + cos_x * cos_z) * scale.y,
        (cos_x * sin_y * sin_z - sin_x * cos_z) * scale.y,
        0.0,

        -sin_y * scale.z,
        sin_x * cos_y * scale.z,
        cos_x * cos_y * scale.z,
        0.0,

        position.x,
        position.y,
        position.z,
        1.0,
    );
    matrix
}

/// Right-handed perspective projection with OpenGL [-1, 1] NDC depth
///
/// # Arguments
/// * `fov_radians` - Vertical field of view in radians
/// * `aspect` - Viewport width / height
/// * `near` - Near clip plane distance (> 0)
/// * `far` - Far clip plane distance (> near)
pub fn perspective(fov_radians: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    let f = 1.0 / (fov_radians * 0.5).tan();

    #[rustfmt::skip]
    let matrix = Matrix4::new(
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (far + near) / (near - far), -1.0,
        0.0, 0.0, (2.0 * far * near) / (near - far), 0.0,
    );
    matrix
}

/// OpenGL-style orthographic projection
///
/// Used by UI layers that draw screen-space overlays over the scene.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Matrix4<f32> {
    #[rustfmt::skip]
    let matrix = Matrix4::new(
        2.0 / (right - left), 0.0, 0.0, 0.0,
        0.0, 2.0 / (top - bottom), 0.0, 0.0,
        0.0, 0.0, -2.0 / (far - near), 0.0,
        -(right + left) / (right - left),
        -(top + bottom) / (top - bottom),
        -(far + near) / (far - near),
        1.0,
    );
    matrix
}

/// General 4x4 matrix inverse via cofactor expansion
///
/// Returns `None` when the determinant magnitude falls below 1e-6, which the
/// picking pipeline treats as "no hit this frame" rather than an error.
pub fn invert_matrix(matrix: &Matrix4<f32>) -> Option<Matrix4<f32>> {
    let m: &[f32; 16] = matrix.as_ref();
    let mut inv = [0.0f32; 16];

    inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
        + m[9] * m[7] * m[14]
        + m[13] * m[6] * m[11]
        - m[13] * m[7] * m[10];
    inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
        - m[8] * m[7] * m[14]
        - m[12] * m[6] * m[11]
        + m[12] * m[7] * m[10];
    inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
        + m[8] * m[7] * m[13]
        + m[12] * m[5] * m[11]
        - m[12] * m[7] * m[9];
    inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
        - m[8] * m[6] * m[13]
        - m[12] * m[5] * m[10]
        + m[12] * m[6] * m[9];
    inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
        - m[9] * m[3] * m[14]
        - m[13] * m[2] * m[11]
        + m[13] * m[3] * m[10];
    inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
        + m[8] * m[3] * m[14]
        + m[12] * m[2] * m[11]
        - m[12] * m[3] * m[10];
    inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
        - m[8] * m[3] * m[13]
        - m[12] * m[1] * m[11]
        + m[12] * m[3] * m[9];
    inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
        + m[8] * m[2] * m[13]
        + m[12] * m[1] * m[10]
        - m[12] * m[2] * m[9];
    inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
        + m[5] * m[3] * m[14]
        + m[13] * m[2] * m[7]
        - m[13] * m[3] * m[6];
    inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
        - m[4] * m[3] * m[14]
        - m[12] * m[2] * m[7]
        + m[12] * m[3] * m[6];
    inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
        + m[4] * m[3] * m[13]
        + m[12] * m[1] * m[7]
        - m[12] * m[3] * m[5];
    inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
        - m[4] * m[2] * m[13]
        - m[12] * m[1] * m[6]
        + m[12] * m[2] * m[5];
    inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
        - m[5] * m[3] * m[10]
        - m[9] * m[2] * m[7]
        + m[9] * m[3] * m[6];
    inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
        + m[4] * m[3] * m[10]
        + m[8] * m[2] * m[7]
        - m[8] * m[3] * m[6];
    inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
        - m[4] * m[3] * m[9]
        - m[8] * m[1] * m[7]
        + m[8] * m[3] * m[5];
    inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
        + m[4] * m[2] * m[9]
        + m[8] * m[1] * m[6]
        - m[8] * m[2] * m[5];

    let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
    if det.abs() < INVERT_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    for value in &mut inv {
        *value *= inv_det;
    }

    #[rustfmt::skip]
    let result = Matrix4::new(
        inv[0], inv[1], inv[2], inv[3],
        inv[4], inv[5], inv[6], inv[7],
        inv[8], inv[9], inv[10], inv[11],
        inv[12], inv[13], inv[14], inv[15],
    );
    Some(result)
}

/// Transform a position by an affine model matrix (w = 1)
pub fn transform_point(matrix: &Matrix4<f32>, point: [f32; 3]) -> Vector3<f32> {
    let m: &[f32; 16] = matrix.as_ref();
    Vector3::new(
        m[0] * point[0] + m[4] * point[1] + m[8] * point[2] + m[12],
        m[1] * point[0] + m[5] * point[1] + m[9] * point[2] + m[13],
        m[2] * point[0] + m[6] * point[1] + m[10] * point[2] + m[14],
    )
}

/// Ray-triangle intersection using the Möller–Trumbore algorithm
///
/// Returns the distance `t` along the ray to the hit point, or `None` when
/// the ray is parallel to the triangle plane, the barycentric coordinates
/// fall outside the triangle, or the hit lies behind the ray origin.
pub fn ray_triangle_intersect(
    origin: Vector3<f32>,
    direction: Vector3<f32>,
    v0: Vector3<f32>,
    v1: Vector3<f32>,
    v2: Vector3<f32>,
) -> Option<f32> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = direction.cross(edge2);
    let a = edge1.dot(h);
    if a.abs() < RAY_EPSILON {
        return None; // Ray parallel to triangle plane
    }

    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if t > RAY_EPSILON {
        Some(t)
    } else {
        None // Hit behind the ray origin
    }
}
