//! Orbit camera parameterized by distance, yaw, and pitch around a movable
//! look-at target.

use cgmath::{InnerSpace, Matrix4, Vector3};
use log::warn;

use crate::gfx::math;

/// Minimum orbit distance; stops the camera clipping through its target
const MIN_DISTANCE: f32 = 0.5;

/// Pitch clamp in radians (~86 degrees), avoids pole-flip instability
const PITCH_LIMIT: f32 = 1.5;

/// Pan speed per unit of orbit distance
const PAN_SPEED: f32 = 0.01;

/// Distance change per unit of zoom delta
const ZOOM_STEP: f32 = 0.5;

/// Immutable camera construction parameters
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// Orbit distance from the look-at target
    pub distance: f32,
    /// Yaw in radians
    pub yaw: f32,
    /// Pitch in radians
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane distance (> 0)
    pub near_plane: f32,
    /// Far clip plane distance (> near)
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 10.0,
            yaw: 0.0,
            pitch: 0.3,
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 10_000.0,
        }
    }
}

/// Orbit/pan/zoom/fly camera
///
/// Produces the view and projection matrices the renderer and the picking
/// pipeline share. The eye position is derived, never stored: both
/// [`view_matrix`](Self::view_matrix) and the picking ray origin go through
/// [`eye_position`](Self::eye_position), so the two can never disagree.
pub struct OrbitCamera {
    distance: f32,
    yaw: f32,
    pitch: f32,
    pan: Vector3<f32>,
    fov_degrees: f32,
    near_plane: f32,
    far_plane: f32,
}

impl OrbitCamera {
    /// Creates a camera from the given configuration, looking at the origin
    pub fn new(config: CameraConfig) -> Self {
        Self {
            distance: config.distance,
            yaw: config.yaw,
            pitch: config.pitch,
            pan: Vector3::new(0.0, 0.0, 0.0),
            fov_degrees: config.fov_degrees,
            near_plane: config.near_plane,
            far_plane: config.far_plane,
        }
    }

    /// Rotate around the target
    ///
    /// Yaw is unbounded (it wraps through the trig functions); pitch is
    /// clamped to avoid gimbal lock at the poles.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move the look-at target in the world XY plane
    ///
    /// Scaled by distance so a screen-space drag feels constant at any zoom.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let pan_speed = PAN_SPEED * self.distance;
        self.pan.x += delta_x * pan_speed;
        self.pan.y += delta_y * pan_speed;
    }

    /// Linear zoom toward the target, clamped to the minimum distance
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta * ZOOM_STEP).max(MIN_DISTANCE);
    }

    /// Move the target relative to the camera orientation and world up
    ///
    /// The forward direction matches the view-matrix forward exactly, so
    /// moving "forward" always heads toward what is visually ahead. Strafing
    /// stays on the horizontal plane; `up` raises the target along world Y.
    pub fn move_relative(&mut self, forward: f32, right: f32, up: f32) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        let fwd = Vector3::new(-sin_yaw * cos_pitch, -sin_pitch, -cos_yaw * cos_pitch);
        let right_dir = Vector3::new(cos_yaw, 0.0, -sin_yaw);

        // Speed scales with distance for consistent feel
        let speed = (0.02 * self.distance).max(0.001);
        self.pan += (fwd * forward + right_dir * right + Vector3::new(0.0, up, 0.0)) * speed;
    }

    /// Camera world position derived from distance, yaw, pitch, and pan
    pub fn eye_position(&self) -> Vector3<f32> {
        let orbit = Vector3::new(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        );
        orbit + self.pan
    }

    /// Right-handed look-at view matrix from the eye toward the target
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = self.eye_position();
        let target = self.pan;

        let forward = target - eye;
        let forward_len = forward.magnitude();
        if forward_len < 1e-6 {
            // Eye coincides with the target; an axis-aligned view keeps the
            // frame finite instead of dividing by zero
            warn!("degenerate view: camera eye coincides with its target");
            return Matrix4::from_translation(-eye);
        }
        let f = forward / forward_len;

        let world_up = Vector3::new(0.0, 1.0, 0.0);
        let s = f.cross(world_up).normalize();
        let u = s.cross(f);

        #[rustfmt::skip]
        let view = Matrix4::new(
            s.x, u.x, -f.x, 0.0,
            s.y, u.y, -f.y, 0.0,
            s.z, u.z, -f.z, 0.0,
            -s.dot(eye), -u.dot(eye), f.dot(eye), 1.0,
        );
        view
    }

    /// Perspective projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        math::perspective(
            self.fov_degrees * math::DEG_TO_RAD,
            aspect,
            self.near_plane,
            self.far_plane,
        )
    }

    /// Set the vertical field of view in degrees
    pub fn set_fov(&mut self, fov_degrees: f32) {
        self.fov_degrees = fov_degrees;
    }

    /// Set the near and far clip planes
    pub fn set_clip_planes(&mut self, near_plane: f32, far_plane: f32) {
        self.near_plane = near_plane;
        self.far_plane = far_plane;
    }

    /// Current orbit distance
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current yaw in radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current look-at target (the accumulated pan offset)
    pub fn target(&self) -> Vector3<f32> {
        self.pan
    }

    /// Vertical field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Near clip plane distance
    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    /// Far clip plane distance
    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
