//! Pong state

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::pong::PADDLE_MARGIN;
use crate::settings::PongTuning;
use crate::sim::entity::{Ball, Paddle, Playfield};

/// Pong has no win or lose phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongPhase {
    NotStarted,
    Running,
    Paused,
}

impl PongPhase {
    /// Phases in which stepping leaves the state untouched
    pub fn is_frozen(&self) -> bool {
        matches!(self, PongPhase::NotStarted | PongPhase::Paused)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongState {
    pub field: Playfield,
    pub tuning: PongTuning,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: PongPhase,
    rng: Pcg32,
}

impl PongState {
    pub fn new(field: Playfield, tuning: PongTuning, seed: u64) -> Self {
        let size = Vec2::new(tuning.paddle_width, tuning.paddle_height);
        let y = field.height / 2.0 - tuning.paddle_height / 2.0;
        let left = Paddle::new(Vec2::new(PADDLE_MARGIN, y), size);
        let right = Paddle::new(
            Vec2::new(field.width - tuning.paddle_width - PADDLE_MARGIN, y),
            size,
        );
        let speed = tuning.serve_speed;

        Self {
            field,
            tuning,
            ball: Ball::new(field.center(), Vec2::new(speed, speed), tuning.ball_radius),
            left,
            right,
            left_score: 0,
            right_score: 0,
            phase: PongPhase::NotStarted,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Re-center the ball, flip its horizontal direction and pick a random
    /// vertical direction, both at serve speed.
    pub fn serve(&mut self) {
        let speed = self.tuning.serve_speed;
        let dy = if self.rng.random_bool(0.5) { -speed } else { speed };
        self.ball.pos = self.field.center();
        self.ball.vel = Vec2::new(-self.ball.vel.x.signum() * speed, dy);
    }

    /// NotStarted -> Running
    pub fn start(&mut self) -> bool {
        if self.phase == PongPhase::NotStarted {
            self.phase = PongPhase::Running;
            true
        } else {
            false
        }
    }

    /// Running <-> Paused
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            PongPhase::Running => PongPhase::Paused,
            PongPhase::Paused => PongPhase::Running,
            PongPhase::NotStarted => PongPhase::NotStarted,
        };
    }

    /// Re-anchor the right paddle and keep both paddles inside the new field.
    /// Scores and the ball are left alone.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Playfield::new(width, height);
        self.right.pos.x = width - self.right.width() - PADDLE_MARGIN;
        self.left.clamp_y(&self.field);
        self.right.clamp_y(&self.field);
    }
}
