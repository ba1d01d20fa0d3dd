//! Events emitted by a single step
//!
//! Consumers (presenter, audio) read these instead of diffing state.

use serde::{Deserialize, Serialize};

/// Which side of the playfield something happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a playfield wall
    WallBounce,
    /// Ball reflected off a paddle
    PaddleHit { paddle: Side },
    /// Brick at (column, row) was destroyed
    BrickDestroyed { column: usize, row: usize },
    /// Ball reached the floor, `remaining` lives left
    LifeLost { remaining: u32 },
    GameOver,
    Won,
    /// `scorer` gained a point
    PointScored { scorer: Side },
}
