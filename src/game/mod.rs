//! Game sessions and the loop driver
//!
//! A session owns one game's state plus the input intents that key handlers
//! write between frames. The driver only talks to sessions through `Game`.

pub mod breakout;
pub mod driver;
pub mod pong;

pub use breakout::BreakoutGame;
pub use driver::GameLoop;
pub use pong::PongGame;

use crate::platform::{Key, KeyAction};
use crate::renderer::DrawList;
use crate::sim::GameEvent;

pub trait Game {
    /// Update intents or lifecycle from a key event. Never steps the simulation.
    fn handle_key(&mut self, key: Key, action: KeyAction);

    /// Whether the next `tick` would advance the simulation
    fn is_active(&self) -> bool;

    /// Step one frame with the current intents
    fn tick(&mut self) -> Vec<GameEvent>;

    /// Playfield size changed
    fn resize(&mut self, width: f32, height: f32);

    /// Fill `list` with the current state
    fn draw(&self, list: &mut DrawList);
}
