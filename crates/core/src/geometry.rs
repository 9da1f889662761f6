//! Point-set algebra for piece cells.
//!
//! A [`Path`] is the ordered set of absolute cells a piece covers. It is
//! derived data: recomputed from the catalog whenever a piece moves or
//! rotates, never stored authoritatively.

use std::fmt;

use crate::types::Coord;

/// The four cells of a piece at some orientation and position.
///
/// Every tetromino covers exactly four cells, so this is a fixed array
/// rather than a growable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path([Coord; 4]);

impl Path {
    pub const fn new(points: [Coord; 4]) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Coord; 4] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.0.iter()
    }

    /// Pure translation: returns the moved path, leaving `self` untouched.
    pub fn translated(&self, dx: i16, dy: i16) -> Path {
        let mut out = *self;
        out.translate(dx, dy);
        out
    }

    /// In-place translation, used when committing a move.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        for point in &mut self.0 {
            point.translate(dx, dy);
        }
    }

    /// Maximum column over all points.
    pub fn right_edge(&self) -> i16 {
        self.0.iter().map(|c| c.col).max().unwrap_or(0)
    }

    /// Minimum column over all points.
    pub fn left_edge(&self) -> i16 {
        self.0.iter().map(|c| c.col).min().unwrap_or(0)
    }

    /// Minimum row over all points.
    pub fn top_edge(&self) -> i16 {
        self.0.iter().map(|c| c.row).min().unwrap_or(0)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{{{},{}}}", c.col, c.row)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
