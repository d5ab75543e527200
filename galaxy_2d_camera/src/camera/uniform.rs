/// CameraUniform — per-frame camera block for the GPU.
///
/// std140-compatible: three column-major mat4, 192 bytes.

use bytemuck::{Pod, Zeroable};
use glam::DMat4;

/// GPU-side camera matrices (f32, column-major).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Narrow f64 matrices to f32. The product is taken before narrowing.
    pub fn new(view: &DMat4, projection: &DMat4) -> Self {
        Self {
            view: view.as_mat4().to_cols_array_2d(),
            projection: projection.as_mat4().to_cols_array_2d(),
            view_projection: (*projection * *view).as_mat4().to_cols_array_2d(),
        }
    }

    /// Raw bytes for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
