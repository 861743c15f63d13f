//! Ground-reference grid for the editor viewport.
//!
//! Generates the line list the renderer draws under the scene. The grid is
//! oversized and recentered under the camera eye each frame so it reads as
//! infinite without actually being so.

use cgmath::Vector3;

/// Line-list grid on the XZ plane (Y = 0)
pub struct GridLines {
    vertices: Vec<[f32; 3]>,
    size: i32,
    spacing: f32,
}

impl GridLines {
    /// Creates a grid of `2 * size + 1` lines along each axis
    ///
    /// `size` is clamped to a minimum of 500 so the grid covers far
    /// distances when recentered under the camera.
    pub fn new(size: i32, spacing: f32) -> Self {
        let size = size.max(500);
        let extent = size as f32 * spacing;

        let mut vertices = Vec::with_capacity((4 * (2 * size + 1)) as usize);

        // Lines parallel to the X axis
        for z in -size..=size {
            let z = z as f32 * spacing;
            vertices.push([-extent, 0.0, z]);
            vertices.push([extent, 0.0, z]);
        }

        // Lines parallel to the Z axis
        for x in -size..=size {
            let x = x as f32 * spacing;
            vertices.push([x, 0.0, -extent]);
            vertices.push([x, 0.0, extent]);
        }

        Self {
            vertices,
            size,
            spacing,
        }
    }

    /// Line endpoints, two vertices per line
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Total endpoint count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Distance between adjacent grid lines
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Half-extent of the grid in lines per direction
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Grid placement translation for the current camera eye
    ///
    /// Snaps to the grid spacing so lines stay put while the camera moves.
    pub fn recenter_for_eye(&self, eye: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(
            (eye.x / self.spacing).floor() * self.spacing,
            0.0,
            (eye.z / self.spacing).floor() * self.spacing,
        )
    }
}

impl Default for GridLines {
    fn default() -> Self {
        Self::new(20, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_vertex_count() {
        let grid = GridLines::new(20, 1.0);
        // Size clamps up to 500: (2 * 500 + 1) lines per axis, 2 axes, 2 endpoints
        assert_eq!(grid.size(), 500);
        assert_eq!(grid.vertex_count(), 4 * (2 * 500 + 1));
    }

    #[test]
    fn test_grid_lies_in_ground_plane() {
        let grid = GridLines::new(500, 0.5);
        assert!(grid.vertices().iter().all(|v| v[1] == 0.0));
    }

    #[test]
    fn test_recenter_snaps_to_spacing() {
        let grid = GridLines::new(500, 1.0);
        let placement = grid.recenter_for_eye(Vector3::new(3.7, 12.0, -2.4));
        assert_eq!(placement, Vector3::new(3.0, 0.0, -3.0));
    }
}
