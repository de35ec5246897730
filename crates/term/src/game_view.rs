//! GameView: maps a [`GameSnapshot`] into a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{cells, GameSnapshot};
use crate::fb::{Frame, Glyph, Rgb, Style};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Draws the well, the active piece, and the score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WELL_BG: Rgb = Rgb(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing frame.
    ///
    /// Callers can reuse a frame across draws; it is resized only when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, frame: &mut Frame) {
        frame.resize(viewport.width, viewport.height);
        frame.fill(Glyph::default());

        let well_w = BOARD_WIDTH as u16 * self.cell_w;
        let well_h = BOARD_HEIGHT as u16 * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style {
            fg: Rgb(80, 80, 90),
            bg: WELL_BG,
            bold: false,
            dim: false,
        };

        // Well background and border.
        frame.fill_rect(start_x + 1, start_y + 1, well_w, well_h, ' ', bg);
        self.draw_border(frame, start_x, start_y, frame_w, frame_h);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let tag = snap.board[y as usize][x as usize];
                match PieceKind::from_tag(tag) {
                    Some(kind) => self.draw_block(frame, start_x, start_y, x, y, kind),
                    None => self.draw_well_dot(frame, start_x, start_y, x, y),
                }
            }
        }

        // Active piece overlay.
        if let Some(active) = snap.active {
            for (dx, dy) in cells(active.kind, active.rotation) {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(frame, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(frame, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over(frame, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new frame.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut frame);
        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = Style {
            fg: Rgb(200, 200, 200),
            ..Style::default()
        };

        frame.put_char(x, y, '┌', style);
        frame.put_char(x + w - 1, y, '┐', style);
        frame.put_char(x, y + h - 1, '└', style);
        frame.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            frame.put_char(x + dx, y, '─', style);
            frame.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            frame.put_char(x, y + dy, '│', style);
            frame.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_well_dot(&self, frame: &mut Frame, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = Style {
            fg: Rgb(90, 90, 100),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell(frame, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(
        &self,
        frame: &mut Frame,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = Style {
            fg: kind_color(kind),
            bg: WELL_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell(frame, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        frame: &mut Frame,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        frame.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        frame: &mut Frame,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style {
            bold: true,
            ..Style::default()
        };
        let value = Style {
            fg: Rgb(200, 200, 200),
            ..Style::default()
        };
        let legend = Style {
            dim: true,
            ..value
        };

        let mut y = start_y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            frame.put_str(panel_x, y, name, label);
            frame.put_u32(panel_x, y + 1, number, value);
            y = y.saturating_add(3);
        }

        frame.put_str(panel_x, y, "CONTROLS", label);
        y = y.saturating_add(1);
        for line in [
            "←/→  move",
            "↑    rotate",
            "↓    drop",
            "r    restart",
            "q    quit",
        ] {
            if y >= viewport.height {
                break;
            }
            frame.put_str(panel_x, y, line, legend);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(
        &self,
        frame: &mut Frame,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = Style {
            fg: Rgb(255, 255, 255),
            bold: true,
            ..Style::default()
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        let center = |text_w: u16| start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);

        let title = "GAME OVER";
        frame.put_str(center(title.chars().count() as u16), mid_y, title, style);

        let score_label = "SCORE ";
        let x = center((score_label.len() + 6) as u16);
        frame.put_str(x, mid_y.saturating_add(1), score_label, style);
        frame.put_u32(
            x + score_label.len() as u16,
            mid_y.saturating_add(1),
            snap.score,
            style,
        );
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb(80, 220, 220),
        PieceKind::J => Rgb(80, 120, 220),
        PieceKind::L => Rgb(230, 230, 230),
        PieceKind::O => Rgb(240, 220, 80),
        PieceKind::S => Rgb(100, 220, 120),
        PieceKind::T => Rgb(200, 120, 220),
        PieceKind::Z => Rgb(220, 80, 80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn glyph_at(frame: &Frame, x: u16, y: u16) -> char {
        frame.get(x, y).unwrap().ch
    }

    #[test]
    fn renders_active_piece_blocks() {
        let mut game = GameState::new(1);
        game.spawn_with(PieceKind::O);
        let snap = game.snapshot();

        let view = GameView::default();
        let frame = view.render(&snap, Viewport::new(60, 30));

        let blocks = (0..frame.width())
            .flat_map(|x| (0..frame.height()).map(move |y| (x, y)))
            .filter(|&(x, y)| glyph_at(&frame, x, y) == '█')
            .count();
        // 4 board cells, each 2 columns wide.
        assert_eq!(blocks, 8);
    }

    #[test]
    fn renders_game_over_overlay() {
        let game = GameState::new(1);
        let mut snap = game.snapshot();
        snap.game_over = true;
        snap.score = 123;

        let view = GameView::default();
        let frame = view.render(&snap, Viewport::new(60, 30));
        let text: String = (0..frame.width())
            .map(|x| glyph_at(&frame, x, frame.height() / 2))
            .collect();
        assert!(text.contains("GAME OVER"));
    }

    #[test]
    fn small_viewport_does_not_panic() {
        let game = GameState::new(1);
        let snap = game.snapshot();
        let view = GameView::default();
        let _ = view.render(&snap, Viewport::new(5, 3));
    }
}
