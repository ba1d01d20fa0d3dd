//! Pong session: state plus both paddle intents

use super::Game;
use crate::platform::{Key, KeyAction};
use crate::renderer::{DrawList, pong_scene};
use crate::settings::Settings;
use crate::sim::pong::{PongPhase, PongState, TickInput, step};
use crate::sim::{GameEvent, Playfield};

pub struct PongGame {
    pub state: PongState,
    pub input: TickInput,
}

impl PongGame {
    pub fn new(field: Playfield, settings: &Settings) -> Self {
        Self {
            state: PongState::new(field, settings.pong, settings.seed),
            input: TickInput::default(),
        }
    }

    pub fn start(&mut self) {
        if self.state.start() {
            log::info!(
                "Pong started ({}x{})",
                self.state.field.width,
                self.state.field.height
            );
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        log::debug!("Pong phase now {:?}", self.state.phase);
    }
}

impl Game for PongGame {
    fn handle_key(&mut self, key: Key, action: KeyAction) {
        let speed = self.state.tuning.paddle_speed;
        match (key, action) {
            (Key::W, KeyAction::Down) => self.input.left_dy = -speed,
            (Key::S, KeyAction::Down) => self.input.left_dy = speed,
            (Key::W | Key::S, KeyAction::Up) => self.input.left_dy = 0.0,
            (Key::ArrowUp, KeyAction::Down) => self.input.right_dy = -speed,
            (Key::ArrowDown, KeyAction::Down) => self.input.right_dy = speed,
            (Key::ArrowUp | Key::ArrowDown, KeyAction::Up) => self.input.right_dy = 0.0,
            (Key::P, KeyAction::Down) => self.toggle_pause(),
            (Key::Space | Key::Enter, KeyAction::Down) => self.start(),
            _ => {}
        }
    }

    fn is_active(&self) -> bool {
        self.state.phase == PongPhase::Running
    }

    fn tick(&mut self) -> Vec<GameEvent> {
        step(&mut self.state, &self.input)
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
        log::info!("Pong playfield resized to {}x{}", width, height);
    }

    fn draw(&self, list: &mut DrawList) {
        pong_scene(&self.state, list);
    }
}
