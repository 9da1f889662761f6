//! Pure mapping from game state to a framebuffer.
//!
//! Glyphs: `*` for the falling piece, `+` for settled cells, a `|`/`-`/`+`
//! border frame. Full rows awaiting the sweep are drawn as a blinking `+`
//! line across the playable width. No I/O happens here, so this is unit
//! testable.

use term_tetra_core::Game;

use crate::fb::{CellStyle, FrameBuffer};

/// Terminal dimensions the view may draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame_w = (game.right() - game.left() + 1) as u16;
        let frame_h = (game.bottom() - game.top() + 1) as u16;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Settled cells.
        for c in game.field().cells() {
            if c.col < 0 || c.row < 0 {
                continue;
            }
            fb.put_char(
                start_x + c.col as u16,
                start_y + c.row as u16,
                '+',
                CellStyle::PLAIN,
            );
        }

        // Full rows awaiting the sweep flash across the playable width.
        for &row in game.pending_clear() {
            if row < 0 {
                continue;
            }
            for col in (game.left() + 1)..game.right() {
                fb.put_char(
                    start_x + col as u16,
                    start_y + row as u16,
                    '+',
                    CellStyle::BLINK,
                );
            }
        }

        // Falling piece, drawn last so it overlays everything else.
        for c in game.falling().path().iter() {
            if c.col < 0 || c.row < 0 {
                continue;
            }
            fb.put_char(
                start_x + c.col as u16,
                start_y + c.row as u16,
                '*',
                CellStyle::BOLD,
            );
        }

        if game.is_game_over() {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, "Game over");
        }
    }

    /// Convenience wrapper that allocates a fresh framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::PLAIN;

        fb.put_char(x, y, '+', style);
        fb.put_char(x + w - 1, y, '+', style);
        fb.put_char(x, y + h - 1, '+', style);
        fb.put_char(x + w - 1, y + h - 1, '+', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '-', style);
            fb.put_char(x + dx, y + h - 1, '-', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '|', style);
            fb.put_char(x + w - 1, y + dy, '|', style);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let bx = x + w.saturating_sub(text_w) / 2;
        let by = y + h / 2;
        fb.put_str(bx, by, text, CellStyle::BOLD);
    }
}
