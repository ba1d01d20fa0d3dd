//! Game settings and tuning
//!
//! Loaded from JSON. Every field has a default, so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{breakout, pong};

/// Breakout balance knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutTuning {
    /// Ball speed per axis (pixels per frame)
    pub ball_speed: f32,
    pub ball_radius: f32,
    /// Paddle speed at full deflection (pixels per frame)
    pub paddle_speed: f32,
    /// Paddle width as a fraction of playfield width (0-1)
    pub paddle_width_fraction: f32,
    pub initial_lives: u32,
}

impl Default for BreakoutTuning {
    fn default() -> Self {
        Self {
            ball_speed: breakout::BALL_SPEED,
            ball_radius: breakout::BALL_RADIUS,
            paddle_speed: breakout::PADDLE_SPEED,
            paddle_width_fraction: breakout::PADDLE_WIDTH_FRACTION,
            initial_lives: breakout::INITIAL_LIVES,
        }
    }
}

/// Pong balance knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongTuning {
    /// Serve speed per axis (pixels per frame)
    pub serve_speed: f32,
    pub ball_radius: f32,
    /// Paddle speed while a key is held (pixels per frame)
    pub paddle_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
}

impl Default for PongTuning {
    fn default() -> Self {
        Self {
            serve_speed: pong::SERVE_SPEED,
            ball_radius: pong::BALL_RADIUS,
            paddle_speed: pong::PADDLE_SPEED,
            paddle_width: pong::PADDLE_WIDTH,
            paddle_height: pong::PADDLE_HEIGHT,
        }
    }
}

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for serve directions
    pub seed: u64,
    pub breakout: BreakoutTuning,
    pub pong: PongTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            breakout: BreakoutTuning::default(),
            pong: PongTuning::default(),
        }
    }
}

/// Keep `value` if it is finite and positive, else fall back
fn positive_or(name: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Rejected {} = {}, using {}", name, value, fallback);
        fallback
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace nonsensical values with defaults
    pub fn sanitized(mut self) -> Self {
        let b = BreakoutTuning::default();
        let t = &mut self.breakout;
        t.ball_speed = positive_or("breakout.ball_speed", t.ball_speed, b.ball_speed);
        t.ball_radius = positive_or("breakout.ball_radius", t.ball_radius, b.ball_radius);
        t.paddle_speed = positive_or("breakout.paddle_speed", t.paddle_speed, b.paddle_speed);
        t.paddle_width_fraction = positive_or(
            "breakout.paddle_width_fraction",
            t.paddle_width_fraction,
            b.paddle_width_fraction,
        )
        .min(1.0);
        if t.initial_lives == 0 {
            log::warn!("Rejected breakout.initial_lives = 0, using {}", b.initial_lives);
            t.initial_lives = b.initial_lives;
        }

        let p = PongTuning::default();
        let t = &mut self.pong;
        t.serve_speed = positive_or("pong.serve_speed", t.serve_speed, p.serve_speed);
        t.ball_radius = positive_or("pong.ball_radius", t.ball_radius, p.ball_radius);
        t.paddle_speed = positive_or("pong.paddle_speed", t.paddle_speed, p.paddle_speed);
        t.paddle_width = positive_or("pong.paddle_width", t.paddle_width, p.paddle_width);
        t.paddle_height = positive_or("pong.paddle_height", t.paddle_height, p.paddle_height);

        self
    }
}
