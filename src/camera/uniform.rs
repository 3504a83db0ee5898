use glam::Mat4;

use super::camera::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the camera matrices and eye position.
///
/// Plain bytes in std140-compatible layout; upload with
/// `bytemuck::bytes_of`. The view and projection matrices are kept
/// separate so shaders can reconstruct world-space positions without a
/// second upload.
pub struct CameraUniform {
    /// View matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Projection matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Eye position in world space.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl CameraUniform {
    /// Create a uniform with identity matrices and a zero eye position.
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Refresh from the camera's current state and a projection matrix.
    pub fn update(&mut self, camera: &mut Camera, projection: &Mat4) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = projection.to_cols_array_2d();
        self.position = camera.position().to_array();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
