//! Character framebuffer.
//!
//! The game draws monochrome glyphs; styling is limited to the terminal
//! attributes the view actually uses (bold for the falling piece, blink for
//! the line-clear flash, dim for chrome).

/// Per-cell attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub bold: bool,
    pub blink: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle {
        bold: false,
        blink: false,
        dim: false,
    };

    pub const BOLD: CellStyle = CellStyle {
        bold: true,
        blink: false,
        dim: false,
    };

    pub const BLINK: CellStyle = CellStyle {
        bold: false,
        blink: true,
        dim: false,
    };

    pub const DIM: CellStyle = CellStyle {
        bold: false,
        blink: false,
        dim: true,
    };
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::PLAIN,
        }
    }
}

/// 2D grid of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, preserving the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are clipped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Count cells currently showing `ch`, for view tests.
    pub fn count_char(&self, ch: char) -> usize {
        self.cells.iter().filter(|c| c.ch == ch).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_roundtrip() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.put_char(2, 1, '*', CellStyle::BOLD);
        let cell = fb.get(2, 1).unwrap();
        assert_eq!(cell.ch, '*');
        assert!(cell.style.bold);
        assert_eq!(fb.get(0, 0).unwrap(), Cell::default());
    }

    #[test]
    fn out_of_bounds_is_clipped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'x', CellStyle::PLAIN);
        assert_eq!(fb.get(5, 5), None);
        assert_eq!(fb.count_char('x'), 0);
    }

    #[test]
    fn put_str_stops_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abcdef", CellStyle::PLAIN);
        assert_eq!(fb.get(2, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(3, 0).unwrap().ch, 'b');
        assert_eq!(fb.count_char('c'), 0);
    }

    #[test]
    fn resize_clears_content() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(0, 0, '+', CellStyle::PLAIN);
        fb.resize(3, 3);
        assert_eq!(fb.count_char('+'), 0);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 3);
    }
}
