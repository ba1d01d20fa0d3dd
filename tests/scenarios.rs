use arcade_twin::game::{BreakoutGame, Game, GameLoop, PongGame};
use arcade_twin::platform::{FixedFrames, Key, KeyAction};
use arcade_twin::renderer::{RecordingPresenter, Shape};
use arcade_twin::settings::{BreakoutTuning, PongTuning, Settings};
use arcade_twin::sim::breakout::{self, BreakoutPhase, BreakoutState, BrickStatus};
use arcade_twin::sim::pong::{self, PongState};
use arcade_twin::sim::{GameEvent, Playfield, Side};
use glam::Vec2;

#[test]
fn breakout_paddle_reflects_without_scoring() {
    let mut state =
        BreakoutState::new(Playfield::new(800.0, 600.0), BreakoutTuning::default(), 11);
    state.start();
    state.paddle.pos = Vec2::new(350.0, 310.0);
    state.paddle.size = Vec2::new(100.0, 10.0);
    state.ball.pos = Vec2::new(400.0, 300.0);
    state.ball.vel = Vec2::new(5.0, 5.0);

    breakout::step(&mut state, &breakout::TickInput::default());
    assert_eq!(state.ball.vel.y, -5.0);
    assert_eq!(state.score, 0);
}

#[test]
fn pong_right_edge_point() {
    let mut state = PongState::new(Playfield::new(800.0, 600.0), PongTuning::default(), 5);
    state.start();
    state.ball.pos = Vec2::new(799.0, 300.0);
    state.ball.vel = Vec2::new(5.0, 5.0);

    let events = pong::step(&mut state, &pong::TickInput::default());
    assert_eq!(state.left_score, 1);
    assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(state.ball.vel.x, -5.0);
    assert!([-5.0, 5.0].contains(&state.ball.vel.y));
    assert_eq!(
        events,
        vec![GameEvent::PointScored {
            scorer: Side::Left
        }]
    );
}

#[test]
fn breakout_full_clear_wins_and_keeps_high_score() {
    let mut game = BreakoutGame::new(Playfield::new(800.0, 600.0), &Settings::default());
    game.start();

    // Walk the ball through every brick center, one per step
    let centers: Vec<Vec2> = game
        .state
        .bricks
        .iter()
        .map(|b| b.pos + game.state.layout.brick_size / 2.0)
        .collect();
    for center in centers {
        game.state.ball.pos = center;
        game.state.ball.vel = Vec2::ZERO;
        game.tick();
    }

    assert_eq!(game.state.phase, BreakoutPhase::Won);
    assert_eq!(game.state.score, 35);
    assert_eq!(game.state.high_score, 35);
    assert_eq!(game.scores.top_score(), Some(35));

    game.handle_key(Key::N, KeyAction::Down);
    assert_eq!(game.state.phase, BreakoutPhase::Running);
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.high_score, 35);
    assert!(game.state.bricks.iter().all(|b| b.status == BrickStatus::Alive));
}

#[test]
fn breakout_three_floor_hits_end_the_game() {
    let mut state =
        BreakoutState::new(Playfield::new(800.0, 600.0), BreakoutTuning::default(), 2);
    state.start();
    for expected in [2, 1, 0] {
        state.ball.pos = Vec2::new(50.0, 590.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        breakout::step(&mut state, &breakout::TickInput::default());
        assert_eq!(state.lives, expected);
    }
    assert_eq!(state.phase, BreakoutPhase::GameOver);

    let ball = state.ball;
    breakout::step(&mut state, &breakout::TickInput { paddle_dx: 1.0 });
    assert_eq!(state.ball, ball);
}

#[test]
fn resize_mid_round_keeps_score_and_phase() {
    let mut game = BreakoutGame::new(Playfield::new(800.0, 600.0), &Settings::default());
    game.start();
    let mut lp = GameLoop::new(game, RecordingPresenter::default());
    lp.start();
    lp.run(&mut FixedFrames::new(60.0, 30));

    let score = lp.game().state.score;
    let lives = lp.game().state.lives;
    lp.resize(1024.0, 768.0);

    let state = &lp.game().state;
    assert_eq!(state.score, score);
    assert_eq!(state.lives, lives);
    assert_eq!(state.phase, BreakoutPhase::Running);
    assert_eq!(state.paddle.pos.y, 748.0);
    assert!((state.layout.brick_size.x - (1024.0 - 80.0) / 7.0).abs() < 1e-3);
}

#[test]
fn pong_loop_presents_every_refresh() {
    let game = PongGame::new(Playfield::new(800.0, 600.0), &Settings::default());
    let mut lp = GameLoop::new(game, RecordingPresenter::default());
    lp.handle_key(Key::Space, KeyAction::Down);
    lp.handle_key(Key::W, KeyAction::Down);
    lp.start();
    lp.run(&mut FixedFrames::new(60.0, 60));

    assert_eq!(lp.presenter().frames_presented, 60);
    assert_eq!(lp.ticks(), 60);
    // Held for a full second: pinned to the top
    assert_eq!(lp.game().state.left.pos.y, 0.0);

    let frame = &lp.presenter().last;
    let circles = frame
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Circle { .. }))
        .count();
    assert_eq!(circles, 1);
    assert!(!frame.vertex_bytes().is_empty());
}

#[test]
fn same_seed_same_run() {
    let settings = Settings::default();
    let run = || {
        let mut game = PongGame::new(Playfield::new(800.0, 600.0), &settings);
        game.start();
        for _ in 0..1000 {
            game.tick();
        }
        game.state
    };
    assert_eq!(run(), run());
}
