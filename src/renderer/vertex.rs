//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const DEFAULT: [f32; 4] = [1.0, 0.0, 1.0, 1.0]; // Magenta: tag never initialized
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LIGHT_GRAY: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
    pub const SLIME: [f32; 4] = [0.3, 0.85, 0.3, 1.0];
    pub const WISP: [f32; 4] = [0.95, 0.25, 0.2, 1.0];
    pub const WALL: [f32; 4] = [0.3, 0.3, 0.4, 1.0];
    pub const COIN: [f32; 4] = [0.95, 0.85, 0.2, 1.0];
    pub const GEM: [f32; 4] = [0.3, 0.9, 1.0, 1.0];
    pub const POTION: [f32; 4] = [0.7, 0.3, 0.9, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
