//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
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
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const GRASS: [f32; 4] = [0.13, 0.55, 0.13, 1.0];
    pub const ROAD: [f32; 4] = [0.31, 0.31, 0.31, 1.0];
    pub const LANE_LINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER_BODY: [f32; 4] = [0.15, 0.45, 0.9, 1.0];
    pub const RIVAL_BODY: [f32; 4] = [0.9, 0.15, 0.15, 1.0];
    pub const CAR_GLASS: [f32; 4] = [0.1, 0.12, 0.16, 1.0];
}
