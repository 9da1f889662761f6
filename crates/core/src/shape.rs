//! A live falling piece.
//!
//! A `Shape` is bookkeeping only: it tracks kind, orientation and origin and
//! keeps the derived absolute [`Path`] in sync. It performs no validity
//! checks - the board decides whether a move may be committed before calling
//! in here.

use log::debug;

use crate::geometry::Path;
use crate::tetromino::{tetromino, Tetromino};
use crate::types::{Coord, Orientation, PieceKind, SPAWN_COL, SPAWN_ROW};

#[derive(Debug, Clone)]
pub struct Shape {
    kind: PieceKind,
    template: &'static Tetromino,
    orientation: Orientation,
    origin: Coord,
    path: Path,
}

impl Shape {
    /// Place a new piece at the fixed spawn origin, facing North.
    pub fn spawn(kind: PieceKind) -> Self {
        let template = tetromino(kind);
        let origin = Coord::new(SPAWN_COL, SPAWN_ROW);
        let mut shape = Self {
            kind,
            template,
            orientation: Orientation::North,
            origin,
            path: *template.frame(Orientation::North),
        };
        shape.recompute_path();
        shape
    }

    /// Translate origin and path together. No validity check.
    pub fn move_by(&mut self, dx: i16, dy: i16) {
        self.origin.translate(dx, dy);
        self.path.translate(dx, dy);
        debug!(
            "shape moved by {},{} to origin {{{},{}}}",
            dx, dy, self.origin.col, self.origin.row
        );
    }

    /// Advance the orientation ring clockwise and recompute the path.
    ///
    /// Deliberately permissive: no wall adjustment, no collision check. A
    /// rotation that leaves the play area is only caught by later movement
    /// checks.
    pub fn rotate_cw(&mut self) {
        self.orientation = self.orientation.rotate_cw();
        self.recompute_path();
    }

    /// Counter-clockwise counterpart of [`Shape::rotate_cw`].
    pub fn rotate_ccw(&mut self) {
        self.orientation = self.orientation.rotate_ccw();
        self.recompute_path();
    }

    /// Minimum row of the current path. Used for the spawn-collision check.
    pub fn top_edge(&self) -> i16 {
        self.path.top_edge()
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> i16 {
        self.template.width
    }

    pub fn height(&self) -> i16 {
        self.template.height
    }

    fn recompute_path(&mut self) {
        self.path = self
            .template
            .frame(self.orientation)
            .translated(self.origin.col, self.origin.row);
    }
}
