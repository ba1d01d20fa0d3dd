//! Arcade Twin headless runner
//!
//! Plays both games for a fixed number of frames with a simple autopilot
//! and logs the outcome. Usage: `arcade-twin [settings.json] [frames]`

use arcade_twin::game::{BreakoutGame, Game, GameLoop, PongGame};
use arcade_twin::platform::{FixedFrames, FrameSource, Key, KeyAction};
use arcade_twin::renderer::RecordingPresenter;
use arcade_twin::settings::Settings;
use arcade_twin::sim::{GameEvent, Playfield};

const DEFAULT_FRAMES: u64 = 60 * 60;
const REFRESH_HZ: f64 = 60.0;

/// Nudge the breakout paddle toward the ball
fn breakout_autopilot(game: &mut BreakoutGame) {
    let paddle_center = game.state.paddle.pos.x + game.state.paddle.width() / 2.0;
    let gap = game.state.ball.pos.x - paddle_center;
    let key = if gap < -5.0 {
        Some(Key::ArrowLeft)
    } else if gap > 5.0 {
        Some(Key::ArrowRight)
    } else {
        None
    };
    match key {
        Some(key) => game.handle_key(key, KeyAction::Down),
        None => game.handle_key(Key::ArrowLeft, KeyAction::Up),
    }
}

/// Left paddle tracks the ball, right paddle idles
fn pong_autopilot(game: &mut PongGame) {
    let center = game.state.left.pos.y + game.state.left.height() / 2.0;
    let gap = game.state.ball.pos.y - center;
    if gap < -5.0 {
        game.handle_key(Key::W, KeyAction::Down);
    } else if gap > 5.0 {
        game.handle_key(Key::S, KeyAction::Down);
    } else {
        game.handle_key(Key::W, KeyAction::Up);
    }
}

fn run_breakout(settings: &Settings, frames: u64) {
    let game = BreakoutGame::new(Playfield::new(800.0, 600.0), settings);
    let mut lp = GameLoop::new(game, RecordingPresenter::default());
    lp.handle_key(Key::Space, KeyAction::Down);
    lp.start();

    let mut source = FixedFrames::new(REFRESH_HZ, frames);
    let mut bricks = 0;
    while let Some(now_ms) = source.next_frame() {
        breakout_autopilot(lp.game_mut());
        for event in lp.frame(now_ms) {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks += 1,
                GameEvent::GameOver | GameEvent::Won => lp.stop(),
                _ => {}
            }
        }
        if !lp.is_running() {
            break;
        }
    }

    let state = &lp.game().state;
    log::info!(
        "Breakout: {:?} after {} ticks, score {}, lives {}, {} bricks cleared",
        state.phase,
        lp.ticks(),
        state.score,
        state.lives,
        bricks
    );
    match serde_json::to_string(&lp.game().scores) {
        Ok(json) => log::debug!("Leaderboard: {}", json),
        Err(e) => log::warn!("Could not serialize leaderboard: {}", e),
    }
}

fn run_pong(settings: &Settings, frames: u64) {
    let game = PongGame::new(Playfield::new(800.0, 600.0), settings);
    let mut lp = GameLoop::new(game, RecordingPresenter::default());
    lp.handle_key(Key::Enter, KeyAction::Down);
    lp.start();

    let mut source = FixedFrames::new(REFRESH_HZ, frames);
    while let Some(now_ms) = source.next_frame() {
        pong_autopilot(lp.game_mut());
        lp.frame(now_ms);
        // Halfway through, shrink the window to exercise the resize path
        if lp.frames() == frames / 2 {
            lp.resize(640.0, 480.0);
        }
    }

    let state = &lp.game().state;
    log::info!(
        "Pong: {} - {} after {} ticks",
        state.left_score,
        state.right_score,
        lp.ticks()
    );
}

fn main() {
    env_logger::init();
    log::info!("Arcade Twin (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    run_breakout(&settings, frames);
    run_pong(&settings, frames);
}
