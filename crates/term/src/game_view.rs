//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
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

/// Top-left corner of the board frame and its size, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Draws the board, the falling piece and a stats panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let w = snap.width as u16 * self.cell_w + 2;
        let h = snap.height as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for y in 0..snap.height as i8 {
            for x in 0..snap.width as i8 {
                match snap.visible_kind(x, y) {
                    Some(kind) => self.draw_block(fb, frame, x as u16, y as u16, kind),
                    None => self.draw_empty(fb, frame, x as u16, y as u16),
                }
            }
        }

        self.draw_side_panel(fb, snap, frame);

        if snap.is_paused() {
            self.draw_banner(fb, frame, &["PAUSED", "P to resume"]);
        } else if snap.is_game_over() {
            self.draw_banner(fb, frame, &["GAME OVER", "R to restart"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::new(Rgb::new(200, 60, 60), Rgb::BLACK);
        let (x, y, w, h) = (frame.x, frame.y, frame.w, frame.h);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), Rgb::WELL);
        self.fill_board_cell(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(kind.color().into(), Rgb::WELL).bold();
        self.fill_board_cell(fb, frame, x, y, '█', style);
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if fb.width().saturating_sub(panel_x) < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let rows: [(&str, u32); 4] = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("SPEED ms", snap.step_delay_ms),
        ];
        let mut y = frame.y;
        for (name, v) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &v.to_string(), value);
            y += 3;
        }

        let help = CellStyle::new(Rgb::new(120, 120, 130), Rgb::BLACK);
        for line in ["←→ move", "↑ rotate", "↓ drop", "␣ slam", "p pause", "r restart", "q quit"] {
            if y >= fb.height() {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let mid_y = frame.y + frame.h / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x + frame.w.saturating_sub(text_w) / 2;
            fb.put_str(x, mid_y + i as u16, text, style);
        }
    }
}
