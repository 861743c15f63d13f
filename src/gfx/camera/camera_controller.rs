//! Maps pointer and keyboard deltas onto orbit camera operations.
//!
//! Input acquisition (the windowing toolkit, the UI layer's hover checks)
//! lives outside this crate; the controller only holds the modifier state
//! and the speed factors, so any event source can drive it.

use super::orbit_camera::OrbitCamera;

pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    is_mouse_pressed: bool,
    is_shift_held: bool,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            is_mouse_pressed: false,
            is_shift_held: false,
        }
    }

    /// Record the primary mouse button state
    pub fn set_mouse_pressed(&mut self, pressed: bool) {
        self.is_mouse_pressed = pressed;
    }

    /// Record the shift modifier state
    pub fn set_shift_held(&mut self, held: bool) {
        self.is_shift_held = held;
    }

    /// Feed a pointer motion delta in pixels
    ///
    /// Does nothing unless the mouse is pressed. Plain drag orbits
    /// (horizontal inverted: drag right looks left); shift + drag pans the
    /// focus point.
    pub fn process_mouse_motion(&mut self, delta_x: f32, delta_y: f32, camera: &mut OrbitCamera) {
        if !self.is_mouse_pressed {
            return;
        }

        if self.is_shift_held {
            // SHIFT + DRAG = PAN (move focus point)
            camera.pan(delta_x, -delta_y);
        } else {
            // NORMAL DRAG = ROTATE (orbit around focus)
            camera.orbit(-delta_x * self.rotate_speed, delta_y * self.rotate_speed);
        }
    }

    /// Feed a scroll wheel delta
    pub fn process_scroll(&mut self, delta: f32, camera: &mut OrbitCamera) {
        camera.zoom(delta * self.zoom_speed);
    }

    /// Feed the movement key axes (forward/back, right/left, up/down)
    ///
    /// The axis vector is normalized first so diagonal movement is no
    /// faster than axial movement.
    pub fn process_movement(&mut self, forward: f32, right: f32, up: f32, camera: &mut OrbitCamera) {
        let len = (forward * forward + right * right + up * up).sqrt();
        if len > 0.0 {
            camera.move_relative(forward / len, right / len, up / len);
        }
    }

    /// Returns true if a shift-drag pan is in progress
    pub fn is_panning(&self) -> bool {
        self.is_mouse_pressed && self.is_shift_held
    }

    /// Returns true if a plain drag orbit is in progress
    pub fn is_rotating(&self) -> bool {
        self.is_mouse_pressed && !self.is_shift_held
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(0.005, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_motion_ignored_until_pressed() {
        let mut controller = CameraController::default();
        let mut camera = OrbitCamera::default();
        let yaw = camera.yaw();

        controller.process_mouse_motion(10.0, 0.0, &mut camera);
        assert_eq!(camera.yaw(), yaw);
    }

    #[test]
    fn test_plain_drag_orbits() {
        let mut controller = CameraController::default();
        let mut camera = OrbitCamera::default();
        controller.set_mouse_pressed(true);

        controller.process_mouse_motion(10.0, 0.0, &mut camera);
        assert_relative_eq!(camera.yaw(), -0.05, epsilon = 1e-6);
        assert!(controller.is_rotating());
    }

    #[test]
    fn test_shift_drag_pans() {
        let mut controller = CameraController::default();
        let mut camera = OrbitCamera::default();
        controller.set_mouse_pressed(true);
        controller.set_shift_held(true);

        let yaw = camera.yaw();
        controller.process_mouse_motion(5.0, 0.0, &mut camera);
        assert_eq!(camera.yaw(), yaw);
        assert!(camera.target().x > 0.0);
        assert!(controller.is_panning());
    }

    #[test]
    fn test_movement_normalizes_diagonals() {
        use crate::gfx::camera::CameraConfig;

        // Level pitch so forward/right/up form an orthonormal frame and the
        // target displacement length reflects the input length directly
        let level = CameraConfig {
            pitch: 0.0,
            ..CameraConfig::default()
        };
        let mut controller = CameraController::default();

        let mut straight = OrbitCamera::new(level);
        controller.process_movement(1.0, 0.0, 0.0, &mut straight);

        let mut diagonal = OrbitCamera::new(level);
        controller.process_movement(1.0, 1.0, 1.0, &mut diagonal);

        let straight_len = {
            let t = straight.target();
            (t.x * t.x + t.y * t.y + t.z * t.z).sqrt()
        };
        let diagonal_len = {
            let t = diagonal.target();
            (t.x * t.x + t.y * t.y + t.z * t.z).sqrt()
        };
        assert_relative_eq!(straight_len, diagonal_len, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_movement_is_a_no_op() {
        let mut controller = CameraController::default();
        let mut camera = OrbitCamera::default();
        controller.process_movement(0.0, 0.0, 0.0, &mut camera);
        assert_eq!(camera.target().x, 0.0);
        assert_eq!(camera.target().y, 0.0);
        assert_eq!(camera.target().z, 0.0);
    }
}
