//! Breakout state and core types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::breakout::*;
use crate::settings::BreakoutTuning;
use crate::sim::collision::Aabb;
use crate::sim::entity::{Ball, Paddle, Playfield};

/// Current phase of a breakout round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakoutPhase {
    /// Waiting for the first start
    NotStarted,
    /// Active gameplay
    Running,
    Paused,
    /// Out of lives
    GameOver,
    /// Every brick cleared
    Won,
}

impl BreakoutPhase {
    /// Phases in which stepping leaves the state untouched
    pub fn is_frozen(&self) -> bool {
        matches!(
            self,
            BreakoutPhase::Paused | BreakoutPhase::GameOver | BreakoutPhase::Won
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BreakoutPhase::GameOver | BreakoutPhase::Won)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Alive,
    Destroyed,
}

/// A brick in the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }
}

/// Brick grid geometry derived from the playfield width.
///
/// Computed once per create/resize and shared by the stepper and presenter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub columns: usize,
    pub rows: usize,
    /// Gap between bricks and around the grid
    pub spacing: f32,
    pub brick_size: Vec2,
}

impl BrickLayout {
    pub fn new(field_width: f32) -> Self {
        let columns = BRICK_COLUMNS;
        let spacing = WALL;
        let brick_width = (field_width - spacing * (columns as f32 + 1.0)) / columns as f32;
        Self {
            columns,
            rows: BRICK_ROWS,
            spacing,
            brick_size: Vec2::new(brick_width, BRICK_HEIGHT),
        }
    }

    /// Number of bricks in a full grid
    #[inline]
    pub fn total(&self) -> usize {
        self.columns * self.rows
    }

    /// Top-left corner of the brick at (column, row)
    pub fn origin(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new(
            column as f32 * (self.brick_size.x + self.spacing) + self.spacing,
            row as f32 * (self.brick_size.y + self.spacing) + self.spacing,
        )
    }

    /// Bounds of a brick placed by this layout
    pub fn bounds(&self, brick: &Brick) -> Aabb {
        Aabb::from_corner(brick.pos, self.brick_size)
    }
}

/// Complete breakout state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakoutState {
    pub field: Playfield,
    pub tuning: BreakoutTuning,
    pub layout: BrickLayout,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Column-major: index = column * rows + row
    pub bricks: Vec<Brick>,
    pub score: u32,
    /// Best score across every round of this session
    pub high_score: u32,
    pub lives: u32,
    pub phase: BreakoutPhase,
    /// Frames stepped this round
    pub frame: u64,
    rng: Pcg32,
}

impl BreakoutState {
    /// Create a fresh round that has not started yet
    pub fn new(field: Playfield, tuning: BreakoutTuning, seed: u64) -> Self {
        let layout = BrickLayout::new(field.width);
        let mut state = Self {
            field,
            tuning,
            layout,
            ball: Ball::new(Vec2::ZERO, Vec2::ZERO, tuning.ball_radius),
            paddle: Paddle::new(Vec2::ZERO, Vec2::ZERO),
            bricks: Vec::with_capacity(layout.total()),
            score: 0,
            high_score: 0,
            lives: tuning.initial_lives,
            phase: BreakoutPhase::NotStarted,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        };

        state.reset_entities();
        state
    }

    /// Rebuild bricks, ball and paddle for a new round
    fn reset_entities(&mut self) {
        self.layout = BrickLayout::new(self.field.width);
        self.bricks.clear();
        for column in 0..self.layout.columns {
            for row in 0..self.layout.rows {
                self.bricks.push(Brick {
                    column,
                    row,
                    pos: self.layout.origin(column, row),
                    status: BrickStatus::Alive,
                });
            }
        }
        self.spawn_ball();
        self.place_paddle();
    }

    /// Serve the ball from center-bottom, random horizontal direction, moving up
    pub fn spawn_ball(&mut self) {
        let speed = self.tuning.ball_speed;
        let dx = if self.rng.random_bool(0.5) { speed } else { -speed };
        self.ball = Ball::new(
            Vec2::new(self.field.width / 2.0, self.field.height - BALL_SPAWN_OFFSET),
            Vec2::new(dx, -speed),
            self.tuning.ball_radius,
        );
    }

    /// Size the paddle from the playfield and center it near the floor
    fn place_paddle(&mut self) {
        let width = self.field.width * self.tuning.paddle_width_fraction;
        self.paddle = Paddle::new(
            Vec2::new(
                (self.field.width - width) / 2.0,
                self.field.height - PADDLE_FLOOR_OFFSET,
            ),
            Vec2::new(width, PADDLE_HEIGHT),
        );
    }

    /// NotStarted -> Running
    pub fn start(&mut self) -> bool {
        if self.phase == BreakoutPhase::NotStarted {
            self.phase = BreakoutPhase::Running;
            true
        } else {
            false
        }
    }

    /// Running <-> Paused. Other phases ignore the toggle.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            BreakoutPhase::Running => BreakoutPhase::Paused,
            BreakoutPhase::Paused => BreakoutPhase::Running,
            other => other,
        };
    }

    /// Fresh bricks, ball, paddle, score and lives; keeps the high score
    pub fn new_game(&mut self) {
        self.score = 0;
        self.lives = self.tuning.initial_lives;
        self.frame = 0;
        self.reset_entities();
        self.phase = BreakoutPhase::Running;
    }

    /// Recompute paddle and brick layout for a new playfield size.
    ///
    /// Score, lives, phase and brick status survive. The ball is not moved.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Playfield::new(width, height);
        self.layout = BrickLayout::new(width);
        let layout = self.layout;
        for brick in &mut self.bricks {
            brick.pos = layout.origin(brick.column, brick.row);
        }
        self.place_paddle();
    }

    pub fn brick(&self, column: usize, row: usize) -> Option<&Brick> {
        if column >= self.layout.columns || row >= self.layout.rows {
            return None;
        }
        self.bricks.get(column * self.layout.rows + row)
    }

    pub fn alive_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_alive())
    }

    pub fn remaining_bricks(&self) -> usize {
        self.alive_bricks().count()
    }
}
