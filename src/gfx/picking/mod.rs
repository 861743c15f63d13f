//! # Object Picking System
//!
//! This module provides 3D object picking functionality using mouse
//! ray-casting. It allows users to click on 3D objects in the scene to
//! select them for manipulation or inspection.
//!
//! ## How it works
//!
//! 1. **Mouse to Ray**: Unproject the pointer through the inverse projection
//!    and view matrices into a world-space ray from the camera eye
//! 2. **Ray-Triangle Intersection**: Test the ray against every triangle of
//!    every enabled mesh, transformed by its object's model matrix
//! 3. **Selection**: The nearest hit becomes the scene selection; no hit
//!    clears it
//!
//! Every pick is a pure function of the current scene, camera, and pointer —
//! there is no cached state, and a non-invertible camera matrix simply
//! degrades to "no hit" for that frame.

use cgmath::{InnerSpace, Vector3, Vector4};
use log::{debug, trace};

use crate::gfx::camera::OrbitCamera;
use crate::gfx::math;
use crate::gfx::scene::{MeshRenderer, Scene};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Convert viewport-local pointer coordinates to a world-space ray
///
/// Returns `None` when the projection or view matrix cannot be inverted.
///
/// # Arguments
/// * `camera` - Camera supplying the matrices and the ray origin
/// * `pointer` - Pointer position in viewport pixels, origin top-left
/// * `viewport` - Viewport size in pixels
pub fn screen_to_ray(
    camera: &OrbitCamera,
    pointer: (f32, f32),
    viewport: (f32, f32),
) -> Option<Ray> {
    let (pointer_x, pointer_y) = pointer;
    let (width, height) = viewport;

    // Normalized device coordinates; Y flips because the viewport origin is
    // top-left while NDC's is bottom-left
    let ndc_x = (pointer_x / width) * 2.0 - 1.0;
    let ndc_y = 1.0 - (pointer_y / height) * 2.0;

    let aspect = width / height;
    let inv_proj = math::invert_matrix(&camera.projection_matrix(aspect))?;
    let inv_view = math::invert_matrix(&camera.view_matrix())?;

    // Near-plane point in clip space
    let ray_clip = Vector4::new(ndc_x, ndc_y, -1.0, 1.0);

    // Into eye space, keeping only the direction: z = -1, w = 0 discards the
    // perspective divide
    let mut ray_eye = inv_proj * ray_clip;
    ray_eye.z = -1.0;
    ray_eye.w = 0.0;

    let ray_world = inv_view * ray_eye;
    Some(Ray::new(camera.eye_position(), ray_world.truncate()))
}

/// Pick the nearest object under the pointer and make it the selection
///
/// Iterates every object carrying an enabled [`MeshRenderer`] with a mesh,
/// transforms each triangle into world space, and keeps the minimum hit
/// distance. The comparison is strict, so exact ties go to the first object
/// in scene order (and its first hit triangle). The winning index — or
/// `None` — replaces the previous selection outright.
pub fn pick(
    scene: &mut Scene,
    camera: &OrbitCamera,
    pointer_x: f32,
    pointer_y: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Option<usize> {
    let Some(ray) = screen_to_ray(
        camera,
        (pointer_x, pointer_y),
        (viewport_width, viewport_height),
    ) else {
        debug!("pick aborted: camera matrices are not invertible");
        scene.set_selected_index(None);
        return None;
    };
    trace!(
        "pick ray origin ({}, {}, {}) direction ({}, {}, {})",
        ray.origin.x,
        ray.origin.y,
        ray.origin.z,
        ray.direction.x,
        ray.direction.y,
        ray.direction.z
    );

    let mut closest_index = None;
    let mut closest_distance = f32::MAX;

    for (index, object) in scene.objects().iter().enumerate() {
        let Some(renderer) = object.get_component::<MeshRenderer>() else {
            continue;
        };
        if !renderer.enabled {
            continue;
        }
        let Some(mesh) = renderer.mesh() else {
            continue;
        };

        let model = object.transform().model_matrix();
        for (triangle_index, triangle) in mesh.vertices().chunks_exact(3).enumerate() {
            let v0 = math::transform_point(&model, triangle[0]);
            let v1 = math::transform_point(&model, triangle[1]);
            let v2 = math::transform_point(&model, triangle[2]);

            if let Some(t) = math::ray_triangle_intersect(ray.origin, ray.direction, v0, v1, v2) {
                trace!("hit object {} triangle {} at t = {}", index, triangle_index, t);
                if t < closest_distance {
                    closest_distance = t;
                    closest_index = Some(index);
                }
            }
        }
    }

    match closest_index {
        Some(index) => debug!("picked object {} at distance {}", index, closest_distance),
        None => debug!("pick found no intersection, clearing selection"),
    }
    scene.set_selected_index(closest_index);
    closest_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::CameraConfig;
    use approx::assert_relative_eq;
    use cgmath::Vector3;

    /// Camera at distance 10 looking straight down -Z at the given target
    fn camera_looking_at(target_x: f32) -> OrbitCamera {
        let mut camera = OrbitCamera::new(CameraConfig {
            pitch: 0.0,
            yaw: 0.0,
            ..CameraConfig::default()
        });
        // pan() scales by 0.01 * distance, so 10 pixels move the target 1 unit
        camera.pan(target_x * 10.0, 0.0);
        camera
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = camera_looking_at(0.0);
        let ray = screen_to_ray(&camera, (400.0, 300.0), (800.0, 600.0)).unwrap();

        assert_relative_eq!(ray.origin.z, 10.0, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_pick_selects_the_cube_under_the_pointer() {
        let mut scene = Scene::new();
        let _ = scene.add_cube(1.0, Vector3::new(-3.0, 0.0, 0.0), "Left");
        let _ = scene.add_cube(1.0, Vector3::new(3.0, 0.0, 0.0), "Right");

        let camera = camera_looking_at(-3.0);
        let picked = pick(&mut scene, &camera, 400.0, 300.0, 800.0, 600.0);

        assert_eq!(picked, Some(0));
        assert_eq!(scene.selected_index(), Some(0));
    }

    #[test]
    fn test_pick_keeps_the_nearest_object() {
        let mut scene = Scene::new();
        let _ = scene.add_cube(1.0, Vector3::new(0.0, 0.0, 0.0), "Far");
        let _ = scene.add_cube(1.0, Vector3::new(0.0, 0.0, 5.0), "Near");

        let camera = camera_looking_at(0.0); // eye at (0, 0, 10)
        let picked = pick(&mut scene, &camera, 400.0, 300.0, 800.0, 600.0);

        assert_eq!(picked, Some(1));
    }

    #[test]
    fn test_pick_tie_goes_to_scene_order() {
        let mut scene = Scene::new();
        let _ = scene.add_cube(1.0, Vector3::new(0.0, 0.0, 0.0), "First");
        let _ = scene.add_cube(1.0, Vector3::new(0.0, 0.0, 0.0), "Second");

        let camera = camera_looking_at(0.0);
        let picked = pick(&mut scene, &camera, 400.0, 300.0, 800.0, 600.0);

        assert_eq!(picked, Some(0));
    }

    #[test]
    fn test_pick_miss_clears_selection() {
        let mut scene = Scene::new();
        let _ = scene.add_cube(1.0, Vector3::new(0.0, 0.0, 0.0), "Cube");
        scene.set_selected_index(Some(0));

        // Top-left corner, nowhere near the cube
        let camera = camera_looking_at(0.0);
        let picked = pick(&mut scene, &camera, 2.0, 2.0, 800.0, 600.0);

        assert_eq!(picked, None);
        assert_eq!(scene.selected_index(), None);
    }

    #[test]
    fn test_pick_empty_scene() {
        let mut scene = Scene::new();
        let camera = camera_looking_at(0.0);
        assert_eq!(pick(&mut scene, &camera, 400.0, 300.0, 800.0, 600.0), None);
        assert_eq!(scene.selected_index(), None);
    }

    #[test]
    fn test_pick_skips_disabled_renderers() {
        let mut scene = Scene::new();
        let _ = scene.add_cube(1.0, Vector3::new(0.0, 0.0, 0.0), "Cube");
        scene
            .get_object_mut(0)
            .unwrap()
            .get_component_mut::<MeshRenderer>()
            .unwrap()
            .enabled = false;

        let camera = camera_looking_at(0.0);
        assert_eq!(pick(&mut scene, &camera, 400.0, 300.0, 800.0, 600.0), None);
    }

    #[test]
    fn test_pick_respects_transform_scale() {
        let mut scene = Scene::new();
        // A cube scaled up enough to cover an off-center pointer
        let object = scene.add_cube(1.0, Vector3::new(0.0, 0.0, 0.0), "Big");
        object.transform_mut().scale = Vector3::new(8.0, 8.0, 8.0);

        let camera = camera_looking_at(0.0);
        let picked = pick(&mut scene, &camera, 500.0, 300.0, 800.0, 600.0);
        assert_eq!(picked, Some(0));
    }
}
