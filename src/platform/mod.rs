//! Platform abstraction layer
//!
//! The host supplies two things:
//! - Key events, already translated into `Key` values
//! - Display refresh timestamps, through a `FrameSource`

/// Keys the games react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    W,
    S,
    /// Pause toggle
    P,
    /// New game
    N,
    Space,
    Enter,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.key` string
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "p" | "P" => Some(Key::P),
            "n" | "N" => Some(Key::N),
            " " => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

/// Source of display refresh timestamps (milliseconds, monotonic).
///
/// Returns `None` when the host stops refreshing.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Evenly spaced frames, for headless runs and tests
#[derive(Debug, Clone)]
pub struct FixedFrames {
    interval_ms: f64,
    now_ms: f64,
    remaining: u64,
}

impl FixedFrames {
    pub fn new(hz: f64, frames: u64) -> Self {
        Self {
            interval_ms: 1000.0 / hz,
            now_ms: 0.0,
            remaining: frames,
        }
    }
}

impl FrameSource for FixedFrames {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.now_ms += self.interval_ms;
        Some(self.now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_key_name("P"), Some(Key::P));
        assert_eq!(Key::from_key_name("p"), Some(Key::P));
        assert_eq!(Key::from_key_name(" "), Some(Key::Space));
        assert_eq!(Key::from_key_name("Shift"), None);
    }

    #[test]
    fn test_fixed_frames() {
        let mut frames = FixedFrames::new(50.0, 2);
        assert_eq!(frames.next_frame(), Some(20.0));
        assert_eq!(frames.next_frame(), Some(40.0));
        assert_eq!(frames.next_frame(), None);
    }
}
