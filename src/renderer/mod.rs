//! Rendering module
//!
//! The game draws through the [`Renderer`] trait: sprites as rectangles in
//! world coordinates (600x800, origin top-left), text centered on a point.
//! `hud` lays out the HUD and pause screens; the backends live alongside.

pub mod headless;
pub mod hud;
pub mod terminal;

use glam::Vec2;

pub use headless::{DrawCommand, NullRenderer, RecordingRenderer};
pub use terminal::TerminalRenderer;

use crate::error::Result;
use crate::sim::Rect;

/// Things that can be drawn as a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Rock,
    Snowball,
    /// Opaque HUD band with a separator line along its bottom edge
    HudPanel,
}

/// Text sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// 40px title
    Title,
    /// 30px body
    Regular,
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Drawing capability consumed by the game loop
pub trait Renderer {
    /// Start a new frame
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    /// Draw `text` centered on `position`
    fn draw_text(&mut self, text: &str, font: Font, color: Color, position: Vec2);
    /// Show the finished frame
    fn present(&mut self) -> Result<()>;
}
