//! Breakout session: state, paddle intent, leaderboard

use super::Game;
use crate::highscores::{HighScores, RoundOutcome};
use crate::platform::{Key, KeyAction};
use crate::renderer::{DrawList, breakout_scene};
use crate::settings::Settings;
use crate::sim::breakout::{BreakoutPhase, BreakoutState, TickInput, step};
use crate::sim::{GameEvent, Playfield};

pub struct BreakoutGame {
    pub state: BreakoutState,
    pub input: TickInput,
    pub scores: HighScores,
    /// 1-based index of the current round
    round: u32,
    /// Whether the current round already went into the leaderboard
    recorded: bool,
}

impl BreakoutGame {
    pub fn new(field: Playfield, settings: &Settings) -> Self {
        Self {
            state: BreakoutState::new(field, settings.breakout, settings.seed),
            input: TickInput::default(),
            scores: HighScores::new(),
            round: 1,
            recorded: false,
        }
    }

    /// Begin the first round
    pub fn start(&mut self) {
        if self.state.start() {
            log::info!(
                "Breakout started ({}x{})",
                self.state.field.width,
                self.state.field.height
            );
        }
    }

    /// Fresh round, keeping the high score and leaderboard
    pub fn new_game(&mut self) {
        if self.state.phase != BreakoutPhase::NotStarted {
            self.round += 1;
        }
        self.state.new_game();
        self.input = TickInput::default();
        self.recorded = false;
        log::info!(
            "Breakout round {} (best so far {})",
            self.round,
            self.state.high_score
        );
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        log::debug!("Breakout phase now {:?}", self.state.phase);
    }

    /// Put a finished round on the leaderboard, once
    fn record_round(&mut self) {
        if self.recorded {
            return;
        }
        let outcome = match self.state.phase {
            BreakoutPhase::Won => RoundOutcome::Cleared,
            BreakoutPhase::GameOver => RoundOutcome::OutOfLives,
            _ => return,
        };
        self.recorded = true;
        let rank = self.scores.add_score(self.state.score, outcome, self.round);
        log::info!(
            "Breakout round {} over: {:?}, score {}, rank {:?}",
            self.round,
            outcome,
            self.state.score,
            rank
        );
    }
}

impl Game for BreakoutGame {
    fn handle_key(&mut self, key: Key, action: KeyAction) {
        match (key, action) {
            (Key::ArrowLeft, KeyAction::Down) => self.input.paddle_dx = -1.0,
            (Key::ArrowRight, KeyAction::Down) => self.input.paddle_dx = 1.0,
            (Key::ArrowLeft | Key::ArrowRight, KeyAction::Up) => self.input.paddle_dx = 0.0,
            (Key::P, KeyAction::Down) => self.toggle_pause(),
            (Key::Space | Key::Enter, KeyAction::Down) => {
                if self.state.phase.is_terminal() {
                    self.new_game();
                } else {
                    self.start();
                }
            }
            (Key::N, KeyAction::Down) => self.new_game(),
            _ => {}
        }
    }

    fn is_active(&self) -> bool {
        self.state.phase == BreakoutPhase::Running
    }

    fn tick(&mut self) -> Vec<GameEvent> {
        let events = step(&mut self.state, &self.input);
        if self.state.phase.is_terminal() {
            self.record_round();
        }
        events
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
        log::info!("Breakout playfield resized to {}x{}", width, height);
    }

    fn draw(&self, list: &mut DrawList) {
        breakout_scene(&self.state, list);
    }
}
