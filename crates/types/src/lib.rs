//! Shared data types and constants.
//!
//! Everything here is pure data with no dependencies, usable from the core
//! engine, the renderer and the input mapper alike.
//!
//! # Board geometry
//!
//! The board is a fixed 12x12 character grid. Row 0 and row 11 (and columns
//! 0 and 11) carry the border frame, leaving a 10-cell playable width. New
//! pieces spawn with their template origin at column 5, row 0.
//!
//! # Timing
//!
//! - `TICK_MS`: gravity period, one row per second.
//! - `LINE_CLEAR_PAUSE_MS`: how long the full-row flash stays on screen
//!   before the rows are swept. The pause lives in the driver loop, never in
//!   the engine, so tests can sweep without waiting.
//! - `GAME_OVER_PAUSE_MS`: how long the final frame stays visible.

/// Board width in terminal columns, border included.
pub const BOARD_COLS: i16 = 12;

/// Board height in terminal rows, border included.
pub const BOARD_ROWS: i16 = 12;

/// Spawn origin column for a new piece template.
pub const SPAWN_COL: i16 = 5;

/// Spawn origin row for a new piece template.
pub const SPAWN_ROW: i16 = 0;

/// Gravity period in milliseconds (one row per second).
pub const TICK_MS: u64 = 1000;

/// Duration of the full-row flash before the sweep.
pub const LINE_CLEAR_PAUSE_MS: u64 = 2000;

/// How long the game-over frame stays visible before exit.
pub const GAME_OVER_PAUSE_MS: u64 = 2000;

/// A board-local or piece-local cell position.
///
/// `col` grows rightward, `row` grows downward. Translation never mutates
/// shared state: `translated` returns a new value, `translate` mutates the
/// receiver only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub col: i16,
    pub row: i16,
}

impl Coord {
    pub const fn new(col: i16, row: i16) -> Self {
        Self { col, row }
    }

    /// Pure translation.
    pub fn translated(self, dx: i16, dy: i16) -> Self {
        Self {
            col: self.col + dx,
            row: self.row + dy,
        }
    }

    /// In-place translation.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        self.col += dx;
        self.row += dy;
    }
}

/// The four rotational states of a piece, as a cyclic ring.
///
/// `rotate_cw` and `rotate_ccw` are inverses; four of either returns to the
/// starting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub fn rotate_cw(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    pub fn rotate_ccw(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Stable index into per-orientation tables (N=0, E=1, S=2, W=3).
    pub fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];
}

/// The seven tetromino kinds.
///
/// The discriminant order matches the catalog table and the RNG draw range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    T,
    J,
    L,
    Z,
    S,
}

impl PieceKind {
    /// Catalog index (O=0 .. S=6).
    pub fn index(self) -> usize {
        match self {
            PieceKind::O => 0,
            PieceKind::I => 1,
            PieceKind::T => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
        }
    }

    /// Map a random draw in `0..7` back to a kind.
    pub fn from_index(index: u32) -> Self {
        match index % 7 {
            0 => PieceKind::O,
            1 => PieceKind::I,
            2 => PieceKind::T,
            3 => PieceKind::J,
            4 => PieceKind::L,
            5 => PieceKind::Z,
            _ => PieceKind::S,
        }
    }

    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
    ];
}

/// Player commands the board accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    /// Move the piece down one row ahead of the gravity tick.
    SoftDrop,
}

impl Command {
    /// Short name for log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::RotateCw => "rotate-cw",
            Command::RotateCcw => "rotate-ccw",
            Command::SoftDrop => "soft-drop",
        }
    }
}
