//! Fixed-timestep loop driver
//!
//! Called once per display refresh. Steps the game at `SIM_DT` regardless of
//! the refresh rate, then presents exactly once.

use super::Game;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::platform::{FrameSource, Key, KeyAction};
use crate::renderer::{DrawList, Presenter};
use crate::sim::GameEvent;

/// Longest refresh gap honored, in seconds. Longer stalls are truncated.
const MAX_FRAME_DT: f32 = 0.1;
/// Slack so evenly spaced 60 Hz refreshes always yield one step each
const DT_EPSILON: f32 = 1e-6;

pub struct GameLoop<G: Game, P: Presenter> {
    game: G,
    presenter: P,
    draw_list: DrawList,
    accumulator: f32,
    last_time: Option<f64>,
    running: bool,
    /// Simulation steps taken
    ticks: u64,
    /// Refreshes handled while running
    frames: u64,
}

impl<G: Game, P: Presenter> GameLoop<G, P> {
    pub fn new(game: G, presenter: P) -> Self {
        Self {
            game,
            presenter,
            draw_list: DrawList::new(),
            accumulator: 0.0,
            last_time: None,
            running: false,
            ticks: 0,
            frames: 0,
        }
    }

    /// Begin handling refreshes. Timing restarts from the next frame.
    pub fn start(&mut self) {
        self.running = true;
        self.last_time = None;
        self.accumulator = 0.0;
    }

    /// Stop handling refreshes. State is kept and `start` resumes.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn handle_key(&mut self, key: Key, action: KeyAction) {
        self.game.handle_key(key, action);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.game.resize(width, height);
    }

    /// Handle one display refresh at `now_ms`. Returns the events stepped.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        // A bad timestamp banks nothing and leaves the clock where it was
        let dt = match self.last_time {
            _ if !now_ms.is_finite() => 0.0,
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        if now_ms.is_finite() {
            self.last_time = Some(now_ms);
        }
        self.frames += 1;

        // Paused or finished games keep polling but don't bank time
        if !self.game.is_active() {
            self.accumulator = 0.0;
        } else {
            self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

            let mut substeps = 0;
            while self.accumulator + DT_EPSILON >= SIM_DT && substeps < MAX_SUBSTEPS {
                if !self.game.is_active() {
                    self.accumulator = 0.0;
                    break;
                }
                events.extend(self.game.tick());
                self.ticks += 1;
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Fell behind: drop the backlog rather than spiral
                self.accumulator = self.accumulator.min(SIM_DT);
            }
        }

        self.draw_list.clear();
        self.game.draw(&mut self.draw_list);
        self.presenter.present(&self.draw_list);

        events
    }

    /// Drive frames from `source` until it runs dry or the loop is stopped
    pub fn run(&mut self, source: &mut impl FrameSource) {
        while self.running {
            match source.next_frame() {
                Some(now_ms) => {
                    self.frame(now_ms);
                }
                None => break,
            }
        }
    }
}
