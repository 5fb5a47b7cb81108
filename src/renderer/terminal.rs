//! Terminal renderer using crossterm
//!
//! The 600x800 world is scaled onto the whole terminal grid. Each frame is
//! composed into a cell buffer and written out in one pass on `present`.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{self, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use glam::Vec2;

use super::{Color, Font, Renderer, Sprite};
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::Result;
use crate::sim::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::WHITE,
};

/// Glyph and color for each sprite
fn sprite_cell(sprite: Sprite) -> Cell {
    match sprite {
        Sprite::Player => Cell {
            ch: '@',
            color: Color::rgb(200, 240, 255),
        },
        Sprite::Rock => Cell {
            ch: '#',
            color: Color::rgb(150, 130, 110),
        },
        Sprite::Snowball => Cell {
            ch: 'o',
            color: Color::rgb(235, 245, 255),
        },
        Sprite::HudPanel => BLANK,
    }
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Full-screen renderer on the alternate screen; restores the terminal on drop
pub struct TerminalRenderer {
    out: Stdout,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalRenderer {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        let setup = execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
        .and_then(|()| terminal::size());
        let (cols, rows) = or_restore(setup, || restore_terminal(&mut out))?;
        log::info!("Terminal renderer {}x{} cells", cols, rows);
        Ok(Self {
            out,
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        })
    }

    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 / WINDOW_WIDTH,
            self.rows as f32 / WINDOW_HEIGHT,
        )
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = cell;
    }

    fn track_size(&mut self) {
        let Ok((cols, rows)) = terminal::size() else {
            return;
        };
        if (cols, rows) != (self.cols, self.rows) {
            log::debug!("Terminal resized to {}x{}", cols, rows);
            self.cols = cols;
            self.rows = rows;
            self.cells = vec![BLANK; cols as usize * rows as usize];
            if let Err(e) = queue!(self.out, terminal::Clear(ClearType::All)) {
                log::warn!("Failed to clear terminal: {e}");
            }
        }
    }
}

impl Renderer for TerminalRenderer {
    fn clear(&mut self) {
        self.track_size();
        self.cells.fill(BLANK);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let scale = self.scale();
        let col0 = (rect.left() * scale.x).floor() as i32;
        let row0 = (rect.top() * scale.y).floor() as i32;
        let col1 = ((rect.right() * scale.x).ceil() as i32 - 1).max(col0);
        let row1 = ((rect.bottom() * scale.y).ceil() as i32 - 1).max(row0);

        let cell = sprite_cell(sprite);
        for row in row0..=row1 {
            for col in col0..=col1 {
                self.put(col, row, cell);
            }
        }

        if sprite == Sprite::HudPanel {
            let separator = Cell {
                ch: '─',
                color: Color::WHITE,
            };
            for col in col0..=col1 {
                self.put(col, row1, separator);
            }
        }
    }

    fn draw_text(&mut self, text: &str, _font: Font, color: Color, position: Vec2) {
        let scale = self.scale();
        let len = text.chars().count() as i32;
        let row = (position.y * scale.y).floor() as i32;
        let start = (position.x * scale.x).round() as i32 - len / 2;
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as i32, row, Cell { ch, color });
        }
    }

    fn present(&mut self) -> Result<()> {
        let mut color = None;
        for row in 0..self.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            let mut run = String::with_capacity(self.cols as usize);
            for cell in &self.cells[start..start + self.cols as usize] {
                if color != Some(cell.color) {
                    if !run.is_empty() {
                        queue!(self.out, Print(&run))?;
                        run.clear();
                    }
                    queue!(self.out, SetForegroundColor(term_color(cell.color)))?;
                    color = Some(cell.color);
                }
                run.push(cell.ch);
            }
            queue!(self.out, Print(&run))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        restore_terminal(&mut self.out);
    }
}

/// Leave the alternate screen and raw mode, logging anything that fails
fn restore_terminal(out: &mut Stdout) {
    if let Err(e) = execute!(out, ResetColor, cursor::Show, LeaveAlternateScreen) {
        log::warn!("Failed to restore terminal screen: {e}");
    }
    if let Err(e) = terminal::disable_raw_mode() {
        log::warn!("Failed to leave raw mode: {e}");
    }
}

/// Run `restore` before handing back a failed setup step
fn or_restore<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}
