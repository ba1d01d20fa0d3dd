//! Presentation boundary
//!
//! The core never draws. Each frame it fills a `DrawList` from the current
//! state and hands it to a host-provided `Presenter`.

pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use scene::{breakout_scene, pong_scene};
pub use vertex::{Vertex, colors};

/// Segments used when tessellating the ball
const CIRCLE_SEGMENTS: u32 = 24;

/// A filled primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
}

/// A line of HUD text, `pos` is the left end of the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub pos: Vec2,
    /// Font size in pixels
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub shapes: Vec<Shape>,
    pub texts: Vec<Text>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's contents, keeping allocations
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.texts.clear();
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]) {
        self.shapes.push(Shape::Rect { min, size, color });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, color: [f32; 4]) {
        self.texts.push(Text {
            text: text.into(),
            pos,
            size,
            color,
        });
    }

    /// Tessellate every shape into a triangle list
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out = Vec::new();
        for shape in &self.shapes {
            match *shape {
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => out.extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS)),
                Shape::Rect { min, size, color } => out.extend(shapes::rect(min, size, color)),
            }
        }
        out
    }

    /// Tessellated vertices as raw bytes, ready for a vertex buffer
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}

/// Host-side renderer. Called once per frame after stepping.
pub trait Presenter {
    fn present(&mut self, frame: &DrawList);
}

/// Presenter that keeps the most recent frame, for headless runs and tests
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub frames_presented: u64,
    pub last: DrawList,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, frame: &DrawList) {
        self.frames_presented += 1;
        self.last.clone_from(frame);
    }
}
