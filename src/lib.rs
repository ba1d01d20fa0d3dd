//! Arcade Twin - simulation core for two small arcade games
//!
//! Core modules:
//! - `sim`: Per-frame simulation (entities, collisions, scoring) for breakout and pong
//! - `game`: Sessions that own a game's state, map keys to intents, and the loop driver
//! - `renderer`: Draw-list builder handed to an external presenter
//! - `platform`: Key and frame-timing abstractions supplied by the host
//! - `settings`: Data-driven tuning

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{BreakoutTuning, PongTuning, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. Velocities are tuned per frame at this rate.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per refresh to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Breakout defaults
    pub mod breakout {
        /// Spacing between bricks and around the grid edge
        pub const WALL: f32 = 10.0;
        pub const BRICK_COLUMNS: usize = 7;
        pub const BRICK_ROWS: usize = 5;
        pub const BRICK_HEIGHT: f32 = 20.0;

        /// Paddle width as a fraction of playfield width
        pub const PADDLE_WIDTH_FRACTION: f32 = 0.2;
        pub const PADDLE_HEIGHT: f32 = 10.0;
        /// Distance from the paddle's top edge to the floor
        pub const PADDLE_FLOOR_OFFSET: f32 = 20.0;
        /// Pixels per frame at full input deflection
        pub const PADDLE_SPEED: f32 = 10.0;

        pub const BALL_RADIUS: f32 = 10.0;
        /// Pixels per frame on each axis
        pub const BALL_SPEED: f32 = 5.0;
        /// Ball spawn height above the floor
        pub const BALL_SPAWN_OFFSET: f32 = 30.0;

        pub const INITIAL_LIVES: u32 = 3;
    }

    /// Pong defaults
    pub mod pong {
        pub const PADDLE_WIDTH: f32 = 10.0;
        pub const PADDLE_HEIGHT: f32 = 100.0;
        /// Gap between a paddle and its side wall
        pub const PADDLE_MARGIN: f32 = 10.0;
        /// Paddle velocity while a key is held (pixels per frame)
        pub const PADDLE_SPEED: f32 = 5.0;

        pub const BALL_RADIUS: f32 = 10.0;
        /// Serve speed on each axis (pixels per frame)
        pub const SERVE_SPEED: f32 = 5.0;

        pub const DEFAULT_WIDTH: f32 = 800.0;
        pub const DEFAULT_HEIGHT: f32 = 600.0;
    }
}
