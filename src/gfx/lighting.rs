//! # Light Collection
//!
//! CPU-side aggregation of the scene's light components into a flat
//! structure the renderer can upload as uniforms. The caps match the
//! fixed-size uniform arrays on the shader side.
//!
//! Spot lights are declared in the component model but not yet aggregated
//! here; they contribute nothing to the collected data.

use cgmath::Vector3;

use crate::gfx::scene::{Light, LightType, Scene};

/// Maximum directional lights the renderer accepts
pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;

/// Maximum point lights the renderer accepts
pub const MAX_POINT_LIGHTS: usize = 16;

/// Base ambient term always present, even in an unlit scene
pub const BASE_AMBIENT: Vector3<f32> = Vector3::new(0.02, 0.02, 0.02);

/// A collected directional light, color premultiplied by intensity
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub color: Vector3<f32>,
}

/// A collected point light, color premultiplied by intensity
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vector3<f32>,
    pub color: Vector3<f32>,
    pub range: f32,
}

/// Aggregated lighting state for one frame
#[derive(Debug, Clone)]
pub struct LightingData {
    pub directional: Vec<DirectionalLight>,
    pub point: Vec<PointLight>,
    /// Base ambient plus every ambient light's contribution
    pub ambient: Vector3<f32>,
}

/// Collects enabled lights from the scene, up to the per-type caps
///
/// Directional light directions derive from the owning transform's X/Y
/// rotation; point lights take the transform position. Ambient lights
/// accumulate into the ambient term with no cap. Iteration stops early
/// once both capped lists are full.
pub fn collect_lights(scene: &Scene) -> LightingData {
    let mut data = LightingData {
        directional: Vec::new(),
        point: Vec::new(),
        ambient: BASE_AMBIENT,
    };

    for object in scene.objects() {
        if data.directional.len() >= MAX_DIRECTIONAL_LIGHTS && data.point.len() >= MAX_POINT_LIGHTS
        {
            break;
        }
        let Some(light) = object.get_component::<Light>() else {
            continue;
        };
        if !light.enabled {
            continue;
        }
        let transform = object.transform();
        let color = light.color * light.intensity;

        match light.light_type {
            LightType::Directional => {
                if data.directional.len() < MAX_DIRECTIONAL_LIGHTS {
                    data.directional.push(DirectionalLight {
                        direction: direction_from_rotation(transform.rotation),
                        color,
                    });
                }
            }
            LightType::Point => {
                if data.point.len() < MAX_POINT_LIGHTS {
                    data.point.push(PointLight {
                        position: transform.position,
                        color,
                        range: light.range,
                    });
                }
            }
            LightType::Ambient => {
                data.ambient += color;
            }
            LightType::Spot => {} // Not aggregated yet
        }
    }

    data
}

/// Emission direction from a transform's Euler rotation in degrees
///
/// Treats rotY as yaw and rotX as pitch, matching the camera's angle
/// conventions.
fn direction_from_rotation(rotation_degrees: Vector3<f32>) -> Vector3<f32> {
    let yaw = rotation_degrees.y * crate::gfx::math::DEG_TO_RAD;
    let pitch = rotation_degrees.x * crate::gfx::math::DEG_TO_RAD;
    Vector3::new(
        pitch.cos() * yaw.sin(),
        -pitch.sin(),
        -pitch.cos() * yaw.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn add_light(scene: &mut Scene, light_type: LightType, intensity: f32) {
        let object = scene.add_empty_object("Light", Vector3::new(0.0, 0.0, 0.0));
        let light = object.add_component::<Light>();
        light.light_type = light_type;
        light.intensity = intensity;
    }

    #[test]
    fn test_empty_scene_keeps_base_ambient() {
        let scene = Scene::new();
        let data = collect_lights(&scene);
        assert!(data.directional.is_empty());
        assert!(data.point.is_empty());
        assert_eq!(data.ambient, BASE_AMBIENT);
    }

    #[test]
    fn test_ambient_lights_accumulate() {
        let mut scene = Scene::new();
        add_light(&mut scene, LightType::Ambient, 0.5);
        add_light(&mut scene, LightType::Ambient, 0.25);

        let data = collect_lights(&scene);
        assert_relative_eq!(data.ambient.x, 0.02 + 0.5 + 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_intensity_premultiplies_color() {
        let mut scene = Scene::new();
        let object = scene.add_empty_object("Light", Vector3::new(1.0, 2.0, 3.0));
        let light = object.add_component::<Light>();
        light.light_type = LightType::Point;
        light.color = Vector3::new(1.0, 0.5, 0.0);
        light.intensity = 2.0;
        light.range = 25.0;

        let data = collect_lights(&scene);
        assert_eq!(data.point.len(), 1);
        assert_eq!(data.point[0].color, Vector3::new(2.0, 1.0, 0.0));
        assert_eq!(data.point[0].position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(data.point[0].range, 25.0);
    }

    #[test]
    fn test_caps_are_respected() {
        let mut scene = Scene::new();
        for _ in 0..MAX_POINT_LIGHTS + 4 {
            add_light(&mut scene, LightType::Point, 1.0);
        }
        for _ in 0..MAX_DIRECTIONAL_LIGHTS + 2 {
            add_light(&mut scene, LightType::Directional, 1.0);
        }

        let data = collect_lights(&scene);
        assert_eq!(data.point.len(), MAX_POINT_LIGHTS);
        assert_eq!(data.directional.len(), MAX_DIRECTIONAL_LIGHTS);
    }

    #[test]
    fn test_spot_and_disabled_lights_are_skipped() {
        let mut scene = Scene::new();
        add_light(&mut scene, LightType::Spot, 1.0);
        let object = scene.add_empty_object("Off", Vector3::new(0.0, 0.0, 0.0));
        let light = object.add_component::<Light>();
        light.light_type = LightType::Point;
        light.enabled = false;

        let data = collect_lights(&scene);
        assert!(data.point.is_empty());
        assert!(data.directional.is_empty());
        assert_eq!(data.ambient, BASE_AMBIENT);
    }

    #[test]
    fn test_directional_direction_from_rotation() {
        let mut scene = Scene::new();
        let object = scene.add_empty_object("Sun", Vector3::new(0.0, 0.0, 0.0));
        object.transform_mut().rotation = Vector3::new(0.0, 0.0, 0.0);
        let light = object.add_component::<Light>();
        light.light_type = LightType::Directional;

        let data = collect_lights(&scene);
        // Zero rotation shines down -Z
        assert_relative_eq!(data.directional[0].direction.z, -1.0, epsilon = 1e-6);
    }
}
