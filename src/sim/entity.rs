//! Entities shared by both games: playfield, ball, paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, clamp_to_span};

/// The rectangular simulation area. Origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A ball. Velocity is in pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Advance by one frame of travel
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }

    /// Flip horizontal direction
    #[inline]
    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Flip vertical direction
    #[inline]
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

/// A rectangular paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Velocity applied on the next move (pixels per frame)
    pub vel: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_corner(self.pos, self.size)
    }

    /// Whether `x` falls within the paddle's horizontal extent (edges included)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.pos.x && x <= self.pos.x + self.size.x
    }

    /// Apply velocity for one frame
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Keep the paddle horizontally inside the playfield
    pub fn clamp_x(&mut self, field: &Playfield) {
        self.pos.x = clamp_to_span(self.pos.x, 0.0, field.width - self.size.x);
    }

    /// Keep the paddle vertically inside the playfield
    pub fn clamp_y(&mut self, field: &Playfield) {
        self.pos.y = clamp_to_span(self.pos.y, 0.0, field.height - self.size.y);
    }
}
