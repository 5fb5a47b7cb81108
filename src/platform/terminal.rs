//! Keyboard input from the terminal via crossterm
//!
//! Terminals that support the keyboard enhancement protocol report key
//! releases, so held keys are exact. Elsewhere a key counts as held for a
//! few polls after its last press or auto-repeat.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use super::{InputEvent, InputSource, Key};
use crate::error::Result;

/// Polls a movement key stays held without a fresh press/repeat
const HOLD_POLLS: u32 = 4;

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Char('a' | 'A') => Key::A,
        KeyCode::Char('d' | 'D') => Key::D,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Non-blocking keyboard reader. Expects raw mode (see `TerminalRenderer`).
pub struct TerminalInput {
    /// Movement keys currently held, with polls left before they lapse
    held: HashMap<Key, u32>,
    /// Key releases are reported, so held keys never lapse
    exact_release: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        let exact_release = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
            && execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .is_ok();
        log::info!(
            "Keyboard input: {}",
            if exact_release {
                "press/release events"
            } else {
                "press events with hold timeout"
            }
        );
        Self {
            held: HashMap::new(),
            exact_release,
        }
    }

    fn translate(&mut self, key: KeyEvent, seen: &mut Vec<Key>) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Release {
            self.held.remove(&map_key(key.code));
            return None;
        }
        if is_quit(&key) {
            return Some(InputEvent::Quit);
        }

        let mapped = map_key(key.code);
        if !(mapped.is_left() || mapped.is_right()) {
            return (key.kind == KeyEventKind::Press).then_some(InputEvent::KeyDown(mapped));
        }

        seen.push(mapped);
        let was_held = self.held.insert(mapped, HOLD_POLLS).is_some();
        Some(if was_held || key.kind == KeyEventKind::Repeat {
            InputEvent::KeyHeld(mapped)
        } else {
            InputEvent::KeyDown(mapped)
        })
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let mut seen = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && let Some(ev) = self.translate(key, &mut seen)
            {
                events.push(ev);
            }
        }

        let exact = self.exact_release;
        self.held.retain(|key, polls_left| {
            if seen.contains(key) {
                return true;
            }
            if !exact {
                *polls_left -= 1;
                if *polls_left == 0 {
                    return false;
                }
            }
            events.push(InputEvent::KeyHeld(*key));
            true
        });

        Ok(events)
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        if self.exact_release
            && let Err(e) = execute!(io::stdout(), PopKeyboardEnhancementFlags)
        {
            log::warn!("Failed to restore keyboard mode: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(exact_release: bool) -> TerminalInput {
        TerminalInput {
            held: HashMap::new(),
            exact_release,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut input = input(false);
        let mut seen = Vec::new();
        assert_eq!(
            input.translate(press(KeyCode::Esc), &mut seen),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            input.translate(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut seen
            ),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            input.translate(press(KeyCode::Char('c')), &mut seen),
            Some(InputEvent::KeyDown(Key::Other))
        );
    }

    #[test]
    fn test_second_press_counts_as_held() {
        let mut input = input(false);
        let mut seen = Vec::new();
        assert_eq!(
            input.translate(press(KeyCode::Left), &mut seen),
            Some(InputEvent::KeyDown(Key::Left))
        );
        assert_eq!(
            input.translate(press(KeyCode::Left), &mut seen),
            Some(InputEvent::KeyHeld(Key::Left))
        );
        assert_eq!(seen, vec![Key::Left, Key::Left]);
    }

    #[test]
    fn test_release_clears_hold() {
        let mut input = input(true);
        let mut seen = Vec::new();
        input.translate(press(KeyCode::Char('d')), &mut seen);
        assert!(input.held.contains_key(&Key::D));

        let mut release = press(KeyCode::Char('d'));
        release.kind = KeyEventKind::Release;
        assert_eq!(input.translate(release, &mut seen), None);
        assert!(input.held.is_empty());
    }

    #[test]
    fn test_enter_is_not_held() {
        let mut input = input(false);
        let mut seen = Vec::new();
        assert_eq!(
            input.translate(press(KeyCode::Enter), &mut seen),
            Some(InputEvent::KeyDown(Key::Enter))
        );
        assert!(input.held.is_empty());
        assert!(seen.is_empty());
    }
}
