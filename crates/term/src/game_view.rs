//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, ShapeMatrix};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Key help shown under the preview.
const CONTROLS: [(&str, &str); 6] = [
    ("Move", "<- ->"),
    ("Rotate", "Up"),
    ("Soft drop", "Down"),
    ("Hard drop", "Space"),
    ("Pause", "Esc"),
    ("Restart", "R"),
];

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left corner of the board frame, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Width and height of the bordered playfield.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16)
                .saturating_mul(self.cell_w)
                .saturating_add(2),
            (BOARD_HEIGHT as u16)
                .saturating_mul(self.cell_h)
                .saturating_add(2),
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, origin.x, origin.y, frame_w, frame_h, border);

        for (y, row) in snap.display_board().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                self.draw_cell(fb, origin, x as u16, y as u16, *cell);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, &["GAME OVER", "R: new game"]);
        } else if snap.paused {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, &["PAUSED", "Esc: resume"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
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

    fn draw_cell(&self, fb: &mut FrameBuffer, origin: Origin, x: u16, y: u16, cell: Cell) {
        let (ch, style) = match cell {
            Some(color) => (
                '█',
                CellStyle {
                    bold: true,
                    ..CellStyle::new(color, PLAYFIELD_BG)
                },
            ),
            None => (
                '·',
                CellStyle {
                    dim: true,
                    ..CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG)
                },
            ),
        };
        let px = (origin.x + 1).saturating_add(x.saturating_mul(self.cell_w));
        let py = (origin.y + 1).saturating_add(y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG)
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = origin.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next.shape, snap.next.color);
        y = y.saturating_add(snap.next.shape.height() as u16 + 1);

        fb.put_str(panel_x, y, "CONTROLS", label);
        y = y.saturating_add(1);
        let dim = CellStyle { dim: true, ..value };
        for (action, key) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, action, dim);
            fb.put_str(panel_x + 11, y, key, value);
            y = y.saturating_add(1);
        }
    }

    /// Draw a shape matrix at its own scale, filled sub-cells in `color`.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &ShapeMatrix, color: Rgb) {
        let style = CellStyle::new(color, PANEL_BG);
        for (sy, row) in shape.rows().iter().enumerate() {
            for (sx, filled) in row.iter().enumerate() {
                if *filled {
                    let px = x.saturating_add((sx as u16).saturating_mul(self.cell_w));
                    fb.fill_rect(px, y + sy as u16, self.cell_w, 1, '█', style);
                }
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG)
        };
        let mid_y = origin.y.saturating_add(frame_h / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = origin.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y + i as u16, text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, SequencePieces};
    use crate::types::ShapeType;

    fn snapshot() -> GameSnapshot {
        GameState::with_source(SequencePieces::new(vec![ShapeType::O, ShapeType::T])).snapshot()
    }

    #[test]
    fn frame_size_accounts_for_cell_width() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
        assert_eq!(GameView::new(u16::MAX, 1).frame_size().0, u16::MAX);
    }

    #[test]
    fn current_piece_is_drawn_in_its_color() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snapshot(), Viewport::new(22, 22));

        // O spawns at column 4, two terminal columns per cell, plus the border.
        let cell = fb.get(1 + 4 * 2, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, ShapeType::O.color());

        let empty = fb.get(1, 1).unwrap();
        assert_eq!(empty.ch, '·');
    }

    #[test]
    fn side_panel_shows_score_and_next() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snapshot(), Viewport::new(60, 24));

        // Board frame is centered: (60 - 22) / 2 = 19, panel starts two past it.
        let panel_x = 19 + 22 + 2;
        assert_eq!(fb.text_at(panel_x, 0, 5), "SCORE");
        assert_eq!(fb.text_at(panel_x, 1, 1), "0");
        assert_eq!(fb.text_at(panel_x, 6, 4), "NEXT");
        // T preview: top row has its middle cell filled.
        let preview = fb.get(panel_x + 2, 7).unwrap();
        assert_eq!(preview.ch, '█');
        assert_eq!(preview.style.fg, ShapeType::T.color());
    }
}
