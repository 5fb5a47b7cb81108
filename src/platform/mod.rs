//! Platform abstraction layer
//!
//! Input arrives as finite batches of discrete events, one batch per poll.
//! The game loop polls once per frame, including while paused.

pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedInput;
pub use terminal::TerminalInput;

use crate::error::Result;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Enter,
    Other,
}

impl Key {
    pub fn is_left(self) -> bool {
        matches!(self, Key::Left | Key::A)
    }

    pub fn is_right(self) -> bool {
        matches!(self, Key::Right | Key::D)
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / user asked to leave
    Quit,
    /// Key went down this poll
    KeyDown(Key),
    /// Key is still down from an earlier poll
    KeyHeld(Key),
}

/// Source of input event batches
pub trait InputSource {
    fn poll(&mut self) -> Result<Vec<InputEvent>>;
}
