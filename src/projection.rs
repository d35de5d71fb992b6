/// Maps board coordinates (pixels) onto the terminal grid.
///
/// Row 0 is reserved for the HUD; the board is stretched over the
/// remaining `rows - 1` lines and all `columns`.

use crate::entities::Board;

pub const HUD_ROWS: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub columns: u16,
    pub rows: u16,
    scale_x: f64,
    scale_y: f64,
}

impl Projection {
    pub fn new(board: Board, columns: u16, rows: u16) -> Projection {
        let play_rows = rows.saturating_sub(HUD_ROWS).max(1);
        Projection {
            columns,
            rows,
            scale_x: columns as f64 / board.width,
            scale_y: play_rows as f64 / board.height,
        }
    }

    /// Column containing board x, or `None` if it falls off-screen.
    pub fn column(&self, x: f64) -> Option<u16> {
        let col = (x * self.scale_x).floor();
        if col < 0.0 || col >= self.columns as f64 {
            None
        } else {
            Some(col as u16)
        }
    }

    /// Terminal row containing board y, or `None` if off-screen.
    pub fn row(&self, y: f64) -> Option<u16> {
        let row = (y * self.scale_y).floor();
        if row < 0.0 || row >= self.rows.saturating_sub(HUD_ROWS) as f64 {
            None
        } else {
            Some(row as u16 + HUD_ROWS)
        }
    }

    /// Every visible column touched by the half-open span `[x, x + width)`.
    pub fn column_span(&self, x: f64, width: f64) -> std::ops::Range<u16> {
        clip_span(x * self.scale_x, (x + width) * self.scale_x, self.columns, 0)
    }

    /// Every visible terminal row touched by `[y, y + height)`.
    pub fn row_span(&self, y: f64, height: f64) -> std::ops::Range<u16> {
        let play_rows = self.rows.saturating_sub(HUD_ROWS);
        clip_span(y * self.scale_y, (y + height) * self.scale_y, play_rows, HUD_ROWS)
    }
}

fn clip_span(start: f64, end: f64, limit: u16, offset: u16) -> std::ops::Range<u16> {
    let lo = start.floor().max(0.0);
    let hi = end.ceil().min(limit as f64);
    if hi <= lo {
        return offset..offset;
    }
    (lo as u16 + offset)..(hi as u16 + offset)
}
