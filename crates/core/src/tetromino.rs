//! Static catalog of the seven tetromino kinds.
//!
//! Each entry carries a bounding box and one hand-specified 4-cell offset
//! pattern per orientation. The patterns are piece-local (offsets within the
//! bounding box); a [`crate::Shape`] translates them by its origin to get
//! the absolute path. Built at compile time, read-only forever, so
//! concurrent readers never contend.

use crate::geometry::Path;
use crate::types::{Coord, Orientation, PieceKind};

/// An immutable piece template: bounding box plus the four orientation
/// frames (indexed N, E, S, W).
#[derive(Debug)]
pub struct Tetromino {
    pub width: i16,
    pub height: i16,
    frames: [Path; 4],
}

impl Tetromino {
    /// The piece-local cell pattern for one orientation.
    pub fn frame(&self, orientation: Orientation) -> &Path {
        &self.frames[orientation.index()]
    }
}

/// Look up the shared template for a kind.
pub fn tetromino(kind: PieceKind) -> &'static Tetromino {
    &CATALOG[kind.index()]
}

const fn cells(points: [(i16, i16); 4]) -> Path {
    Path::new([
        Coord::new(points[0].0, points[0].1),
        Coord::new(points[1].0, points[1].1),
        Coord::new(points[2].0, points[2].1),
        Coord::new(points[3].0, points[3].1),
    ])
}

/// Indexed by `PieceKind::index()` (O, I, T, J, L, Z, S).
///
/// O is identical in all four orientations by symmetry; every other kind
/// forms a closed 4-step rotation cycle.
static CATALOG: [Tetromino; 7] = [
    // O
    Tetromino {
        width: 2,
        height: 2,
        frames: [
            cells([(0, 0), (0, 1), (1, 0), (1, 1)]),
            cells([(0, 0), (0, 1), (1, 0), (1, 1)]),
            cells([(0, 0), (0, 1), (1, 0), (1, 1)]),
            cells([(0, 0), (0, 1), (1, 0), (1, 1)]),
        ],
    },
    // I
    Tetromino {
        width: 4,
        height: 4,
        frames: [
            cells([(3, 0), (3, 1), (3, 2), (3, 3)]),
            cells([(0, 1), (1, 1), (2, 1), (3, 1)]),
            cells([(3, 0), (3, 1), (3, 2), (3, 3)]),
            cells([(0, 2), (1, 2), (2, 2), (3, 2)]),
        ],
    },
    // T
    Tetromino {
        width: 3,
        height: 3,
        frames: [
            cells([(1, 1), (0, 2), (1, 2), (2, 2)]),
            cells([(0, 1), (1, 0), (1, 1), (1, 2)]),
            cells([(0, 1), (1, 1), (2, 1), (1, 2)]),
            cells([(2, 1), (1, 0), (1, 1), (1, 2)]),
        ],
    },
    // J
    Tetromino {
        width: 3,
        height: 3,
        frames: [
            cells([(0, 1), (1, 1), (2, 1), (2, 2)]),
            cells([(1, 0), (1, 1), (1, 2), (0, 2)]),
            cells([(0, 1), (0, 2), (1, 2), (2, 2)]),
            cells([(1, 0), (2, 0), (1, 1), (1, 2)]),
        ],
    },
    // L
    Tetromino {
        width: 3,
        height: 3,
        frames: [
            cells([(0, 1), (1, 1), (2, 1), (0, 2)]),
            cells([(0, 0), (1, 0), (1, 1), (2, 1)]),
            cells([(0, 2), (1, 2), (2, 2), (2, 1)]),
            cells([(1, 0), (1, 1), (1, 2), (2, 2)]),
        ],
    },
    // Z
    Tetromino {
        width: 3,
        height: 3,
        frames: [
            cells([(0, 1), (1, 1), (1, 2), (2, 2)]),
            cells([(2, 0), (1, 1), (2, 1), (1, 2)]),
            cells([(0, 1), (1, 1), (1, 2), (2, 2)]),
            cells([(1, 0), (0, 1), (1, 1), (0, 2)]),
        ],
    },
    // S
    Tetromino {
        width: 3,
        height: 3,
        frames: [
            cells([(0, 2), (1, 1), (1, 2), (2, 1)]),
            cells([(1, 0), (1, 1), (2, 1), (2, 2)]),
            cells([(0, 2), (1, 1), (1, 2), (2, 1)]),
            cells([(0, 0), (0, 1), (1, 1), (1, 2)]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_frame_has_four_cells_inside_the_bounding_box() {
        for kind in PieceKind::ALL {
            let t = tetromino(kind);
            for o in Orientation::ALL {
                let frame = t.frame(o);
                assert_eq!(frame.points().len(), 4);
                for c in frame.iter() {
                    assert!(c.col >= 0 && c.col < t.width, "{kind:?}/{o:?}: {c:?}");
                    assert!(c.row >= 0 && c.row < t.height, "{kind:?}/{o:?}: {c:?}");
                }
            }
        }
    }

    #[test]
    fn frames_have_distinct_cells() {
        for kind in PieceKind::ALL {
            for o in Orientation::ALL {
                let mut points = tetromino(kind).frame(o).points().to_vec();
                points.sort();
                points.dedup();
                assert_eq!(points.len(), 4, "{kind:?}/{o:?} has duplicate cells");
            }
        }
    }

    #[test]
    fn four_right_rotations_close_the_cycle() {
        for kind in PieceKind::ALL {
            for start in Orientation::ALL {
                let mut o = start;
                for _ in 0..4 {
                    o = o.rotate_cw();
                }
                assert_eq!(tetromino(kind).frame(o), tetromino(kind).frame(start));
            }
        }
    }

    #[test]
    fn o_is_invariant_under_rotation() {
        let t = tetromino(PieceKind::O);
        let north = t.frame(Orientation::North);
        for o in Orientation::ALL {
            assert_eq!(t.frame(o), north);
        }
    }

    #[test]
    fn i_north_is_a_vertical_line() {
        let frame = tetromino(PieceKind::I).frame(Orientation::North);
        let col = frame.points()[0].col;
        assert!(frame.iter().all(|c| c.col == col));
        let mut rows: Vec<i16> = frame.iter().map(|c| c.row).collect();
        rows.sort_unstable();
        assert_eq!(rows, vec![0, 1, 2, 3]);
    }
}
