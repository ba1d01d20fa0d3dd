//! Vertex type for tessellated draw lists

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position and color, laid out for direct upload
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
}

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const WON: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const PAUSED: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}
