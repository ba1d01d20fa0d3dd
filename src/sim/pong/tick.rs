//! Pong frame step

use super::state::PongState;
use crate::sim::entity::{Paddle, Playfield};
use crate::sim::event::{GameEvent, Side};

/// Paddle velocity intents for a single step (pixels per frame, +y is down)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub left_dy: f32,
    pub right_dy: f32,
}

/// Advance pong by one frame. Does nothing before start or while paused.
pub fn step(state: &mut PongState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase.is_frozen() {
        return events;
    }

    state.ball.integrate();

    if state.ball.bottom() > state.field.height || state.ball.top() < 0.0 {
        state.ball.bounce_y();
        events.push(GameEvent::WallBounce);
    }

    // Both paddles every frame, whichever side the ball is on
    let ball_box = state.ball.bounds();
    for (paddle, side) in [(&state.left, Side::Left), (&state.right, Side::Right)] {
        if ball_box.overlaps(&paddle.rect()) {
            state.ball.bounce_x();
            events.push(GameEvent::PaddleHit { paddle: side });
        }
    }

    let scorer = if state.ball.right() > state.field.width {
        state.left_score += 1;
        Some(Side::Left)
    } else if state.ball.left() < 0.0 {
        state.right_score += 1;
        Some(Side::Right)
    } else {
        None
    };
    if let Some(scorer) = scorer {
        log::debug!(
            "Point {:?}: {} - {}",
            scorer,
            state.left_score,
            state.right_score
        );
        events.push(GameEvent::PointScored { scorer });
        state.serve();
    }

    let field = state.field;
    move_paddle(&mut state.left, input.left_dy, &field);
    move_paddle(&mut state.right, input.right_dy, &field);

    events
}

fn move_paddle(paddle: &mut Paddle, dy: f32, field: &Playfield) {
    paddle.vel.y = if dy.is_finite() { dy } else { 0.0 };
    paddle.advance();
    paddle.clamp_y(field);
}
