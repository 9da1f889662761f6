//! The settled-block fill.
//!
//! Sparse representation: a map from occupied row index to the set of
//! occupied columns in that row. A row with no occupied column is absent
//! from the map, not present as an empty set.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::geometry::Path;
use crate::types::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    rows: BTreeMap<i16, BTreeSet<i16>>,
    /// The lowest row settled blocks can occupy (just above the border).
    floor_row: i16,
}

impl Field {
    pub fn new(floor_row: i16) -> Self {
        Self {
            rows: BTreeMap::new(),
            floor_row,
        }
    }

    /// Membership test for a single cell.
    pub fn occupied(&self, col: i16, row: i16) -> bool {
        self.rows.get(&row).is_some_and(|cols| cols.contains(&col))
    }

    /// True if any point of `path` is occupied.
    pub fn intersects(&self, path: &Path) -> bool {
        path.iter().any(|c| self.occupied(c.col, c.row))
    }

    /// Union a locked piece's cells into the fill.
    pub fn add(&mut self, path: &Path) {
        for c in path.iter() {
            self.rows.entry(c.row).or_default().insert(c.col);
        }
    }

    /// Mark a single cell occupied. Setup helper for tests and scenarios.
    pub fn insert(&mut self, col: i16, row: i16) {
        self.rows.entry(row).or_default().insert(col);
    }

    /// Fill columns `0..width` of one row. Setup helper for tests and
    /// scenarios.
    pub fn fill_row(&mut self, row: i16, width: i16) {
        let cols = self.rows.entry(row).or_default();
        for col in 0..width {
            cols.insert(col);
        }
    }

    /// Rows whose occupied-column count equals the playable width, in
    /// ascending row order.
    pub fn full_rows(&self, playable_width: usize) -> Vec<i16> {
        self.rows
            .iter()
            .filter(|(_, cols)| cols.len() == playable_width)
            .map(|(&row, _)| row)
            .collect()
    }

    /// Delete a row's entry entirely.
    pub fn remove_row(&mut self, row: i16) {
        debug!("removing row {} from field", row);
        self.rows.remove(&row);
    }

    /// Renumber the remaining rows contiguously from the floor upward,
    /// preserving their relative order. This is the gravity step after a
    /// line clear: rows are moved as atomic units, never split.
    pub fn compact(&mut self) {
        let mut compacted = BTreeMap::new();
        let mut current = self.floor_row;
        for (row, cols) in std::mem::take(&mut self.rows).into_iter().rev() {
            if row != current {
                trace!("compact: row {} -> {}", row, current);
            }
            compacted.insert(current, cols);
            current -= 1;
        }
        self.rows = compacted;
    }

    /// Number of rows with at least one occupied column.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row indices currently present, ascending.
    pub fn row_indices(&self) -> impl Iterator<Item = i16> + '_ {
        self.rows.keys().copied()
    }

    /// Every occupied cell, for rendering.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| Coord::new(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: [(i16, i16); 4]) -> Path {
        Path::new([
            Coord::new(points[0].0, points[0].1),
            Coord::new(points[1].0, points[1].1),
            Coord::new(points[2].0, points[2].1),
            Coord::new(points[3].0, points[3].1),
        ])
    }

    #[test]
    fn add_then_occupied() {
        let mut field = Field::new(10);
        field.add(&path([(1, 10), (2, 10), (2, 9), (3, 9)]));

        assert!(field.occupied(1, 10));
        assert!(field.occupied(2, 9));
        assert!(!field.occupied(1, 9));
        assert!(!field.occupied(5, 5));
        assert_eq!(field.row_count(), 2);
    }

    #[test]
    fn intersects_any_point() {
        let mut field = Field::new(10);
        field.add(&path([(4, 10), (5, 10), (6, 10), (7, 10)]));

        assert!(field.intersects(&path([(1, 9), (1, 10), (2, 10), (4, 10)])));
        assert!(!field.intersects(&path([(1, 9), (2, 9), (3, 9), (3, 10)])));
    }

    #[test]
    fn full_rows_requires_exact_playable_width() {
        let mut field = Field::new(10);
        // One column short of a playable width of 10.
        field.fill_row(10, 9);
        assert!(field.full_rows(10).is_empty());

        field.fill_row(9, 10);
        assert_eq!(field.full_rows(10), vec![9]);
    }

    #[test]
    fn remove_then_compact_shifts_rows_toward_floor() {
        let mut field = Field::new(10);
        field.fill_row(10, 10);
        field.fill_row(9, 3);
        field.fill_row(8, 5);

        field.remove_row(10);
        field.compact();

        // Rows 9 and 8 drop one step, keeping their relative order.
        assert_eq!(field.row_count(), 2);
        assert_eq!(field.row_indices().collect::<Vec<_>>(), vec![9, 10]);
        assert!(field.occupied(4, 9)); // was row 8
        assert!(field.occupied(2, 10)); // was row 9
        assert!(!field.occupied(4, 10));
    }

    #[test]
    fn compact_is_idempotent() {
        let mut field = Field::new(10);
        field.fill_row(10, 4);
        field.fill_row(7, 2);
        field.compact();

        let once = field.clone();
        field.compact();
        assert_eq!(field, once);
    }

    #[test]
    fn empty_rows_are_absent_not_empty_sets() {
        let mut field = Field::new(10);
        field.fill_row(10, 4);
        field.remove_row(10);
        assert!(field.is_empty());
        assert_eq!(field.cells().count(), 0);
    }
}
