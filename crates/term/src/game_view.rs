//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Phase, COLUMNS, EMPTY, ROWS};

/// Piece colors indexed by cell value (index 0 is never drawn).
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::from_hex(0xFF0D72),
    Rgb::from_hex(0x0DC2FF),
    Rgb::from_hex(0x0DFF72),
    Rgb::from_hex(0xF538FF),
    Rgb::from_hex(0xFF8E0D),
    Rgb::from_hex(0xFFE138),
    Rgb::from_hex(0x3877FF),
];

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Top-left corner of the board frame inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Origin {
    x: u16,
    y: u16,
}

/// A lightweight terminal renderer for the game.
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
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
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

    /// Size of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            COLUMNS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
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

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, origin, frame_w, frame_h, border);

        // Settled cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                self.draw_cell(fb, origin, x as i16, y as i16, value);
            }
        }

        // Active piece; rows above the top edge are not drawn.
        if let Some(active) = snap.active {
            for (x, y, value) in active.cells() {
                self.draw_cell(fb, origin, x as i16, y as i16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        if let Some(text) = status_text(snap.phase) {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, text);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16, style: CellStyle) {
        let (right, bottom) = (o.x + w - 1, o.y + h - 1);

        fb.put_char(o.x, o.y, '┌', style);
        fb.put_char(right, o.y, '┐', style);
        fb.put_char(o.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for x in o.x + 1..right {
            fb.put_char(x, o.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in o.y + 1..bottom {
            fb.put_char(o.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    /// Draw one board cell. Value 0 draws nothing; coordinates off the grid are skipped.
    fn draw_cell(&self, fb: &mut FrameBuffer, o: Origin, x: i16, y: i16, value: Cell) {
        if value == EMPTY || x < 0 || y < 0 || x as usize >= COLUMNS || y as usize >= ROWS {
            return;
        }
        let Some(&fg) = PALETTE.get(value as usize) else {
            return;
        };

        let style = CellStyle::new(fg, PLAYFIELD_BG).bold();
        let px = o.x + 1 + x as u16 * self.cell_w;
        let py = o.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        o: Origin,
        frame_w: u16,
    ) {
        let panel_x = o.x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = o.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "STATE", label);
        fb.put_str(panel_x, y + 1, snap.phase.as_str(), value);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = o.y + h / 2;
        for (i, line) in text.lines().enumerate() {
            let line_w = line.chars().count() as u16;
            let x = o.x + w.saturating_sub(line_w) / 2;
            fb.put_str(x, mid_y + i as u16, line, style);
        }
    }
}

/// Status text shown over the board for each phase
pub fn status_text(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Ready => Some("PRESS ENTER"),
        Phase::Running => None,
        Phase::Paused => Some("PAUSED"),
        Phase::GameOver => Some("GAME OVER\nR TO RESTART"),
    }
}
