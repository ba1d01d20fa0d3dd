//! Breakout frame step
//!
//! Velocities are per frame; one call is one display refresh at `SIM_DT`.

use super::state::{BreakoutPhase, BreakoutState, BrickStatus};
use crate::sim::event::{GameEvent, Side};

/// Input intents for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Paddle direction, -1 (left) to 1 (right)
    pub paddle_dx: f32,
}

/// Advance breakout by one frame.
///
/// Does nothing while paused or after the round has ended.
pub fn step(state: &mut BreakoutState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase.is_frozen() {
        return events;
    }

    state.frame += 1;

    state.ball.integrate();

    // Walls: sign flip only, the ball may sit past the wall for a frame
    if state.ball.right() > state.field.width || state.ball.left() < 0.0 {
        state.ball.bounce_x();
        events.push(GameEvent::WallBounce);
    }
    if state.ball.top() < 0.0 {
        state.ball.bounce_y();
        events.push(GameEvent::WallBounce);
    }

    if state.ball.bottom() > state.field.height {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });
        if state.lives == 0 {
            state.phase = BreakoutPhase::GameOver;
            events.push(GameEvent::GameOver);
            log::debug!("Out of lives at score {}", state.score);
        } else {
            log::debug!("Life lost, {} remaining", state.lives);
            state.spawn_ball();
        }
    }

    // Flat bounce, impact point does not matter
    if state.ball.bottom() > state.paddle.pos.y && state.paddle.spans_x(state.ball.pos.x) {
        state.ball.bounce_y();
        events.push(GameEvent::PaddleHit {
            paddle: Side::Bottom,
        });
    }

    let direction = if input.paddle_dx.is_finite() {
        input.paddle_dx.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    state.paddle.vel.x = direction * state.tuning.paddle_speed;
    state.paddle.advance();
    state.paddle.clamp_x(&state.field);

    resolve_bricks(state, &mut events);

    events
}

/// Destroy every alive brick containing the ball center.
///
/// No early exit: overlapping several bricks clears and scores each of them.
fn resolve_bricks(state: &mut BreakoutState, events: &mut Vec<GameEvent>) {
    let center = state.ball.pos;
    let layout = state.layout;
    let total = state.bricks.len();

    for brick in &mut state.bricks {
        if !brick.is_alive() || !layout.bounds(brick).contains_inclusive(center) {
            continue;
        }

        brick.status = BrickStatus::Destroyed;
        state.ball.bounce_y();
        state.score += 1;
        state.high_score = state.high_score.max(state.score);
        events.push(GameEvent::BrickDestroyed {
            column: brick.column,
            row: brick.row,
        });

        if state.score as usize == total && state.phase != BreakoutPhase::GameOver {
            state.phase = BreakoutPhase::Won;
            events.push(GameEvent::Won);
            log::debug!("All {} bricks cleared", total);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::settings::BreakoutTuning;
    use crate::sim::entity::Playfield;

    fn running() -> BreakoutState {
        let mut state =
            BreakoutState::new(Playfield::new(800.0, 600.0), BreakoutTuning::default(), 42);
        state.start();
        state
    }

    /// Clear every brick so the ball can roam freely
    fn without_bricks(mut state: BreakoutState) -> BreakoutState {
        for brick in &mut state.bricks {
            brick.status = BrickStatus::Destroyed;
        }
        state
    }

    #[test]
    fn test_free_flight_keeps_velocity() {
        let mut state = without_bricks(running());
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(5.0, -5.0);

        let events = step(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(405.0, 295.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_side_wall_flips_dx() {
        let mut state = without_bricks(running());
        state.ball.pos = Vec2::new(788.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 5.0);

        let events = step(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 5.0));
        // No positional correction
        assert_eq!(state.ball.pos.x, 793.0);
        assert_eq!(events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_top_wall_flips_dy() {
        let mut state = without_bricks(running());
        state.ball.pos = Vec2::new(400.0, 12.0);
        state.ball.vel = Vec2::new(-5.0, -5.0);

        step(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn test_paddle_hit_flat_bounce() {
        let mut state = without_bricks(running());
        state.paddle.pos = Vec2::new(350.0, 310.0);
        state.paddle.size = Vec2::new(100.0, 10.0);
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 5.0);

        let events = step(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
        assert_eq!(state.score, 0);
        assert!(events.contains(&GameEvent::PaddleHit {
            paddle: Side::Bottom
        }));
    }

    #[test]
    fn test_paddle_miss_outside_span() {
        let mut state = without_bricks(running());
        state.paddle.pos = Vec2::new(350.0, 310.0);
        state.paddle.size = Vec2::new(100.0, 10.0);
        state.ball.pos = Vec2::new(460.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 5.0);

        step(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_floor_costs_a_life_and_respawns() {
        let mut state = without_bricks(running());
        state.ball.pos = Vec2::new(50.0, 588.0);
        state.ball.vel = Vec2::new(5.0, 5.0);

        let events = step(&mut state, &TickInput::default());
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, BreakoutPhase::Running);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 570.0));
        assert_eq!(state.ball.vel.y, -5.0);
        assert_eq!(state.ball.vel.x.abs(), 5.0);
        assert_eq!(events[0], GameEvent::LifeLost { remaining: 2 });
    }

    #[test]
    fn test_floor_keeps_bricks_and_score() {
        let mut state = running();
        state.bricks[0].status = BrickStatus::Destroyed;
        state.bricks[8].status = BrickStatus::Destroyed;
        state.score = 20;
        state.high_score = 20;
        let bricks = state.bricks.clone();
        let remaining = state.remaining_bricks();
        state.ball.pos = Vec2::new(50.0, 588.0);
        state.ball.vel = Vec2::new(5.0, 5.0);

        step(&mut state, &TickInput::default());
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 20);
        assert_eq!(state.high_score, 20);
        assert_eq!(state.remaining_bricks(), remaining);
        assert_eq!(state.bricks, bricks);
    }

    #[test]
    fn test_last_life_ends_game_and_freezes() {
        let mut state = without_bricks(running());
        state.lives = 1;
        state.ball.pos = Vec2::new(50.0, 588.0);
        state.ball.vel = Vec2::new(5.0, 5.0);

        let events = step(&mut state, &TickInput::default());
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, BreakoutPhase::GameOver);
        assert!(events.contains(&GameEvent::GameOver));

        let frozen = state.clone();
        let events = step(&mut state, &TickInput { paddle_dx: 1.0 });
        assert!(events.is_empty());
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_paddle_moves_and_clamps() {
        let mut state = without_bricks(running());
        state.ball.pos = Vec2::new(400.0, 300.0);

        step(&mut state, &TickInput { paddle_dx: 1.0 });
        assert_eq!(state.paddle.pos.x, 330.0);

        state.paddle.pos.x = 635.0;
        step(&mut state, &TickInput { paddle_dx: 1.0 });
        assert_eq!(state.paddle.pos.x, 640.0);

        state.paddle.pos.x = 3.0;
        step(&mut state, &TickInput { paddle_dx: -1.0 });
        assert_eq!(state.paddle.pos.x, 0.0);

        // Out-of-range intents saturate to full speed
        state.paddle.pos.x = 100.0;
        step(&mut state, &TickInput { paddle_dx: -7.0 });
        assert_eq!(state.paddle.pos.x, 90.0);

        step(&mut state, &TickInput { paddle_dx: f32::NAN });
        assert_eq!(state.paddle.pos.x, 90.0);
    }

    #[test]
    fn test_brick_hit_scores() {
        let mut state = running();
        let target = state.layout.origin(2, 4) + state.layout.brick_size / 2.0;
        state.ball.pos = target - Vec2::new(5.0, -5.0);
        state.ball.vel = Vec2::new(5.0, -5.0);

        let events = step(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.brick(2, 4).unwrap().status, BrickStatus::Destroyed);
        assert_eq!(state.remaining_bricks(), 34);
        assert!(events.contains(&GameEvent::BrickDestroyed { column: 2, row: 4 }));
    }

    #[test]
    fn test_destroyed_brick_is_ignored() {
        let mut state = running();
        let target = state.layout.origin(0, 0) + state.layout.brick_size / 2.0;
        state.bricks[0].status = BrickStatus::Destroyed;
        state.ball.pos = target;
        state.ball.vel = Vec2::ZERO;

        step(&mut state, &TickInput::default());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_overlapping_bricks_all_score() {
        let mut state = running();
        // Stack a second brick on top of (0, 0) so the ball sits in both
        state.bricks[1].pos = state.bricks[0].pos;
        let center = state.bricks[0].pos + state.layout.brick_size / 2.0;
        state.ball.pos = center;
        state.ball.vel = Vec2::ZERO;

        let events = step(&mut state, &TickInput::default());
        assert_eq!(state.score, 2);
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn test_last_brick_wins() {
        let mut state = running();
        for brick in state.bricks.iter_mut().skip(1) {
            brick.status = BrickStatus::Destroyed;
        }
        state.score = 34;
        state.high_score = 34;
        state.ball.pos = state.bricks[0].pos + state.layout.brick_size / 2.0;
        state.ball.vel = Vec2::ZERO;

        let events = step(&mut state, &TickInput::default());
        assert_eq!(state.score, 35);
        assert_eq!(state.phase, BreakoutPhase::Won);
        assert!(events.contains(&GameEvent::Won));

        let frozen = state.clone();
        step(&mut state, &TickInput { paddle_dx: -1.0 });
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_paused_step_is_noop() {
        let mut state = running();
        state.toggle_pause();
        let frozen = state.clone();
        assert!(step(&mut state, &TickInput { paddle_dx: 1.0 }).is_empty());
        assert_eq!(state, frozen);
    }
}
