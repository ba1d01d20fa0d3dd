//! Two-paddle pong simulation
//!
//! Endless: scores grow until the session is paused or dropped.

pub mod state;
pub mod tick;

pub use state::{PongPhase, PongState};
pub use tick::{TickInput, step};
