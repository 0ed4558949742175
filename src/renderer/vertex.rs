//! Vertex types for 3D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Homogeneous-position vertex with color.
///
/// Shapes are built in world space (`w = 1`); the render state projects
/// them to clip space before upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.extend(1.0).to_array(),
            color,
        }
    }

    /// Same vertex transformed by `matrix`
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            position: (*matrix * Vec4::from_array(self.position)).to_array(),
            color: self.color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GRID: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
    pub const GRID_AXIS: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    /// Maroon
    pub const HUD_TEXT: [f32; 4] = [190.0 / 255.0, 33.0 / 255.0, 55.0 / 255.0, 1.0];
}
