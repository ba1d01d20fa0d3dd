//! State to draw-list conversion. Read-only with respect to game state.

use glam::Vec2;

use super::DrawList;
use super::vertex::colors;
use crate::sim::{BreakoutPhase, BreakoutState, PongPhase, PongState};

const HUD_FONT: f32 = 16.0;
const BANNER_FONT: f32 = 30.0;
const PONG_SCORE_FONT: f32 = 30.0;

/// Centered banner text, offset by a rough half-width of the message
fn banner(
    list: &mut DrawList,
    width: f32,
    height: f32,
    text: &str,
    half_width: f32,
    color: [f32; 4],
) {
    list.text(
        text,
        Vec2::new(width / 2.0 - half_width, height / 2.0),
        BANNER_FONT,
        color,
    );
}

/// Bricks, ball, paddle, score/lives and any phase banner
pub fn breakout_scene(state: &BreakoutState, list: &mut DrawList) {
    let field = state.field;

    for brick in state.alive_bricks() {
        list.rect(brick.pos, state.layout.brick_size, colors::WHITE);
    }
    list.circle(state.ball.pos, state.ball.radius, colors::WHITE);
    list.rect(state.paddle.pos, state.paddle.size, colors::WHITE);

    list.text(
        format!("Score: {}", state.score),
        Vec2::new(8.0, 20.0),
        HUD_FONT,
        colors::WHITE,
    );
    list.text(
        format!("Best: {}", state.high_score),
        Vec2::new(field.width / 2.0 - 30.0, 20.0),
        HUD_FONT,
        colors::WHITE,
    );
    list.text(
        format!("Lives: {}", state.lives),
        Vec2::new(field.width - 65.0, 20.0),
        HUD_FONT,
        colors::WHITE,
    );

    match state.phase {
        BreakoutPhase::GameOver => banner(
            list,
            field.width,
            field.height,
            "Game Over!",
            70.0,
            colors::GAME_OVER,
        ),
        BreakoutPhase::Won => banner(
            list,
            field.width,
            field.height,
            "You Win!",
            60.0,
            colors::WON,
        ),
        BreakoutPhase::Paused => banner(
            list,
            field.width,
            field.height,
            "Paused",
            45.0,
            colors::PAUSED,
        ),
        BreakoutPhase::NotStarted | BreakoutPhase::Running => {}
    }
}

/// Ball, both paddles and the two scores
pub fn pong_scene(state: &PongState, list: &mut DrawList) {
    let field = state.field;

    list.circle(state.ball.pos, state.ball.radius, colors::WHITE);
    list.rect(state.left.pos, state.left.size, colors::WHITE);
    list.rect(state.right.pos, state.right.size, colors::WHITE);

    list.text(
        state.left_score.to_string(),
        Vec2::new(field.width / 4.0, 50.0),
        PONG_SCORE_FONT,
        colors::WHITE,
    );
    list.text(
        state.right_score.to_string(),
        Vec2::new(field.width * 0.75, 50.0),
        PONG_SCORE_FONT,
        colors::WHITE,
    );

    if state.phase == PongPhase::Paused {
        banner(list, field.width, field.height, "Paused", 45.0, colors::PAUSED);
    }
}
