//! Brick-breaker simulation
//!
//! One ball, one paddle near the floor, a 7 x 5 grid of bricks.

pub mod state;
pub mod tick;

pub use state::{BreakoutPhase, BreakoutState, Brick, BrickLayout, BrickStatus};
pub use tick::{TickInput, step};
