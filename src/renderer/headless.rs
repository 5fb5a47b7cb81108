//! Renderers with no display: one that discards frames and one that
//! records every draw call per presented frame

use glam::Vec2;

use super::{Color, Font, Renderer, Sprite};
use crate::error::Result;
use crate::sim::Rect;

/// Discards everything; counts presented frames
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_presented: u64,
}

impl Renderer for NullRenderer {
    fn clear(&mut self) {}

    fn draw_sprite(&mut self, _sprite: Sprite, _rect: Rect) {}

    fn draw_text(&mut self, _text: &str, _font: Font, _color: Color, _position: Vec2) {}

    fn present(&mut self) -> Result<()> {
        self.frames_presented += 1;
        Ok(())
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite(Sprite, Rect),
    Text { text: String, font: Font, position: Vec2 },
}

/// Keeps the draw calls of every presented frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Vec<DrawCommand>>,
    current: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn last_frame(&self) -> &[DrawCommand] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_frame_texts(&self) -> Vec<String> {
        self.last_frame()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                DrawCommand::Sprite(..) => None,
            })
            .collect()
    }

    /// Number of presented frames that showed `text`
    pub fn frames_with_text(&self, text: &str) -> usize {
        self.frames
            .iter()
            .filter(|frame| {
                frame
                    .iter()
                    .any(|cmd| matches!(cmd, DrawCommand::Text { text: t, .. } if t == text))
            })
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.current.clear();
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.current.push(DrawCommand::Sprite(sprite, rect));
    }

    fn draw_text(&mut self, text: &str, font: Font, _color: Color, position: Vec2) {
        self.current.push(DrawCommand::Text {
            text: text.to_string(),
            font,
            position,
        });
    }

    fn present(&mut self) -> Result<()> {
        self.frames.push(std::mem::take(&mut self.current));
        Ok(())
    }
}
