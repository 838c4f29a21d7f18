//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{PieceKind, Rgb, Shape, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Renders the board, the side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let empty = CellStyle::new(Rgb::new(70, 70, 80), PLAYFIELD_BG).dim();
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as i8, y as i8);
                match cell {
                    Some(kind) => self.draw_block(fb, origin_x, origin_y, (x, y), *kind),
                    None => self.fill_board_cell(fb, origin_x, origin_y, (x, y), '·', empty),
                }
            }
        }

        if !snap.game_over {
            let ghost = CellStyle::new(Rgb::new(140, 140, 140), PLAYFIELD_BG).dim();
            let drop = snap.ghost_drop as i8;
            for &(x, y) in snap.current.cells.iter() {
                self.fill_board_cell(fb, origin_x, origin_y, (x, y + drop), '░', ghost);
            }
        }

        for &pos in snap.current.cells.iter() {
            self.draw_block(fb, origin_x, origin_y, pos, snap.current.kind);
        }

        self.draw_side_panel(fb, snap, origin_x + frame_w + 2, origin_y);

        if snap.game_over {
            self.draw_overlay_text(fb, origin_x, origin_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

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

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        pos: (i8, i8),
        kind: PieceKind,
    ) {
        let style = CellStyle::new(kind.color(), PLAYFIELD_BG).bold();
        self.fill_board_cell(fb, origin_x, origin_y, pos, '█', style);
    }

    /// Fill one board cell; positions off the grid are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        (x, y): (i8, i8),
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = origin_x + 1 + x as u16 * self.cell_w;
        let py = origin_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        if x.saturating_add(8) > fb.width() {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let rows: [(&str, u32); 3] = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ];
        let mut cy = y;
        for (name, n) in rows {
            fb.put_str(x, cy, name, label);
            fb.put_u32(x, cy + 1, n, value);
            cy += 3;
        }

        fb.put_str(x, cy, "NEXT", label);
        self.draw_preview(fb, x, cy + 1, &snap.next.base, snap.next.kind);
    }

    /// Draw a piece's base shape in a small box; base cells span columns -1..=2, rows -1..=2.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, base: &Shape, kind: PieceKind) {
        let style = CellStyle::new(kind.color(), PANEL_BG).bold();
        for &(dx, dy) in base.iter() {
            let px = x + ((dx + 1) as u16) * self.cell_w;
            let py = y + ((dy + 1) as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = origin_x + frame_w.saturating_sub(text_w) / 2;
        let y = origin_y + frame_h / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}
