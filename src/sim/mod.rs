//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One `step` call per frame, velocities are per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod breakout;
pub mod collision;
pub mod entity;
pub mod event;
pub mod pong;

pub use breakout::{BreakoutPhase, BreakoutState};
pub use collision::{Aabb, clamp_to_span};
pub use entity::{Ball, Paddle, Playfield};
pub use event::{GameEvent, Side};
pub use pong::{PongPhase, PongState};
