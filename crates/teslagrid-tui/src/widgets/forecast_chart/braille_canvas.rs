//! Braille dot canvas used by the forecast chart.
//!
//! Each terminal cell holds a 2x4 grid of dots, so a plot gets twice the
//! horizontal and four times the vertical resolution of plain characters.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// First codepoint of the Unicode braille block.
const BRAILLE_BASE: u32 = 0x2800;

/// Dot bit for `[y % 4][x % 2]`:
///
/// ```text
/// Dot 1 (0x01) | Dot 4 (0x08)
/// Dot 2 (0x02) | Dot 5 (0x10)
/// Dot 3 (0x04) | Dot 6 (0x20)
/// Dot 7 (0x40) | Dot 8 (0x80)
/// ```
pub(super) const BRAILLE_BIT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// A single-color layer of braille dots.
///
/// Coordinates are in dot space: x in `0..width*2`, y in `0..height*4`,
/// with y growing downward.
pub(super) struct BrailleCanvas {
    /// Dot pattern per cell: `cells[row][col]`
    pub(super) cells: Vec<Vec<u8>>,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl BrailleCanvas {
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![0u8; width]; height],
            width,
            height,
        }
    }

    pub(super) fn dot_width(&self) -> usize {
        self.width * 2
    }

    pub(super) fn dot_height(&self) -> usize {
        self.height * 4
    }

    /// Set one dot; out-of-bounds coordinates are ignored.
    pub(super) fn set(&mut self, x: usize, y: usize) {
        let col = x / 2;
        let row = y / 4;
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row][col] |= BRAILLE_BIT_MAP[y % 4][x % 2];
    }

    /// Fill dots `top..=bottom` in column `x`
    pub(super) fn vline(&mut self, x: usize, top: usize, bottom: usize) {
        for y in top..=bottom {
            self.set(x, y);
        }
    }

    /// Dashed horizontal line at dot row `y`: `on` dots drawn, `off` skipped
    pub(super) fn dashed_hline(&mut self, y: usize, on: usize, off: usize) {
        let period = (on + off).max(1);
        for x in 0..self.dot_width() {
            if x % period < on {
                self.set(x, y);
            }
        }
    }

    /// Plot a straight segment between two dots
    pub(super) fn line(&mut self, (x0, y0): (usize, usize), (x1, y1): (usize, usize)) {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;

        loop {
            self.set(x as usize, y as usize);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw the non-empty cells into `buf`; empty cells keep what is beneath.
    pub(super) fn render_to_buffer(&self, buf: &mut Buffer, area: Rect, color: Color) {
        let style = Style::default().fg(color);
        for (row, cells) in self.cells.iter().enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            for (col, &bits) in cells.iter().enumerate() {
                let x = area.x + col as u16;
                if x >= area.right() {
                    break;
                }
                if bits == 0 {
                    continue;
                }
                let ch = char::from_u32(BRAILLE_BASE + bits as u32).unwrap_or(' ');
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }
    }
}
