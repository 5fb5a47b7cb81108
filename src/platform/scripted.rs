//! Input replayed from a prepared script, for headless runs and tests

use std::collections::VecDeque;

use super::{InputEvent, InputSource};
use crate::error::Result;

/// Yields one prepared batch per poll, then empty batches (or a quit)
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
    quit_when_exhausted: bool,
}

impl ScriptedInput {
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
            quit_when_exhausted: false,
        }
    }

    /// Emit `Quit` once the script runs out
    pub fn quit_when_exhausted(mut self) -> Self {
        self.quit_when_exhausted = true;
        self
    }

    /// Append `count` empty polls
    pub fn idle(mut self, count: usize) -> Self {
        self.batches.extend(std::iter::repeat_n(Vec::new(), count));
        self
    }

    /// Append one batch
    pub fn then(mut self, batch: Vec<InputEvent>) -> Self {
        self.batches.push_back(batch);
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>> {
        Ok(match self.batches.pop_front() {
            Some(batch) => batch,
            None if self.quit_when_exhausted => vec![InputEvent::Quit],
            None => Vec::new(),
        })
    }
}
