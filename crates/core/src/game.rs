//! Board orchestration: movement, collision, lock, line clear, spawn.
//!
//! The `Game` owns the session boundaries, the settled [`Field`] and the
//! single falling [`Shape`]. All mutation flows through [`Game::apply`],
//! [`Game::tick`] and [`Game::sweep`]; the driver loop guarantees that only
//! one of those runs at a time, so no locking happens here.

use log::debug;

use crate::field::Field;
use crate::geometry::Path;
use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::{Command, BOARD_COLS, BOARD_ROWS};

/// Outcome of one state transition.
///
/// An invalid move is not an error: the request is rejected and the session
/// continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The request was rejected; nothing changed.
    Blocked,
    /// The falling piece moved or rotated.
    Moved,
    /// The piece locked into the field. `full_rows` lists the rows that are
    /// now complete; when non-empty the driver shows the flash and then
    /// calls [`Game::sweep`]. When empty the next piece has already spawned.
    Locked { full_rows: Vec<i16> },
    /// The next piece could not spawn; the session is over.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Game {
    top: i16,
    bottom: i16,
    left: i16,
    right: i16,
    field: Field,
    falling: Shape,
    /// Full rows detected at lock time, awaiting [`Game::sweep`].
    pending_clear: Vec<i16>,
    rng: SimpleRng,
    game_over: bool,
}

impl Game {
    /// A session on the default 12x12 board.
    pub fn new(seed: u32) -> Self {
        Self::with_bounds(BOARD_COLS, BOARD_ROWS, seed)
    }

    /// A session on a `cols` x `rows` board (border included). Boundaries
    /// are fixed for the whole session.
    pub fn with_bounds(cols: i16, rows: i16, seed: u32) -> Self {
        let bottom = rows - 1;
        let right = cols - 1;
        let mut rng = SimpleRng::new(seed);
        let falling = Shape::spawn(rng.next_kind());
        debug!(
            "new game: bounds 0..{} x 0..{}, first piece {:?}",
            right,
            bottom,
            falling.kind()
        );
        Self {
            top: 0,
            bottom,
            left: 0,
            right,
            field: Field::new(bottom - 1),
            falling,
            pending_clear: Vec::new(),
            rng,
            game_over: false,
        }
    }

    /// Apply one player command.
    pub fn apply(&mut self, command: Command) -> Step {
        if self.game_over {
            return Step::GameOver;
        }
        if !self.pending_clear.is_empty() {
            // Locked piece awaiting sweep; nothing is falling.
            return Step::Blocked;
        }
        debug!("command: {}", command.as_str());
        match command {
            Command::MoveLeft => self.move_falling(-1, 0),
            Command::MoveRight => self.move_falling(1, 0),
            Command::SoftDrop => self.move_falling(0, 1),
            Command::RotateCw => {
                self.falling.rotate_cw();
                debug!("rotated cw, path now {}", self.falling.path());
                Step::Moved
            }
            Command::RotateCcw => {
                self.falling.rotate_ccw();
                debug!("rotated ccw, path now {}", self.falling.path());
                Step::Moved
            }
        }
    }

    /// Advance gravity by one row.
    pub fn tick(&mut self) -> Step {
        if self.game_over {
            return Step::GameOver;
        }
        if !self.pending_clear.is_empty() {
            return Step::Blocked;
        }
        self.move_falling(0, 1)
    }

    /// Remove the rows reported by the last lock, compact the field, and
    /// spawn the next piece. The flash pause between lock and sweep belongs
    /// to the driver, so tests can call this back to back.
    pub fn sweep(&mut self) -> Step {
        for row in std::mem::take(&mut self.pending_clear) {
            self.field.remove_row(row);
        }
        self.field.compact();
        if self.spawn_next() {
            Step::Moved
        } else {
            self.game_over = true;
            Step::GameOver
        }
    }

    fn move_falling(&mut self, dx: i16, dy: i16) -> Step {
        if dx != 0 {
            let trial = self.falling.path().translated(dx, 0);
            let edge = if dx > 0 {
                trial.right_edge()
            } else {
                trial.left_edge()
            };
            if edge >= self.right || edge <= self.left {
                debug!("move blocked at wall, edge {}", edge);
                return Step::Blocked;
            }
            if self.field.intersects(&trial) {
                debug!("move blocked by settled blocks");
                return Step::Blocked;
            }
            self.falling.move_by(dx, 0);
            Step::Moved
        } else if dy > 0 {
            let trial = self.falling.path().translated(0, dy);
            if self.hit_bottom(&trial) {
                self.lock_falling()
            } else {
                self.falling.move_by(0, dy);
                Step::Moved
            }
        } else {
            Step::Blocked
        }
    }

    /// True if the path reaches the bottom boundary or the settled fill.
    fn hit_bottom(&self, path: &Path) -> bool {
        if path.iter().any(|c| c.row >= self.bottom) {
            debug!("path hit the bottom: {}", path);
            return true;
        }
        if self.field.intersects(path) {
            debug!("path hit the stack: {}", path);
            return true;
        }
        false
    }

    fn lock_falling(&mut self) -> Step {
        debug!("locking piece {:?} at {}", self.falling.kind(), self.falling.path());
        self.field.add(self.falling.path());

        let full_rows = self.field.full_rows(self.playable_width());
        if full_rows.is_empty() {
            if self.spawn_next() {
                Step::Locked {
                    full_rows: Vec::new(),
                }
            } else {
                self.game_over = true;
                Step::GameOver
            }
        } else {
            debug!("full rows: {:?}", full_rows);
            self.pending_clear = full_rows.clone();
            Step::Locked { full_rows }
        }
    }

    /// Spawn the next piece. Returns false on spawn collision: the piece's
    /// top edge is above the play area or its footprint already overlaps
    /// existing geometry.
    fn spawn_next(&mut self) -> bool {
        self.falling = Shape::spawn(self.rng.next_kind());
        debug!("spawned {:?}", self.falling.kind());
        if self.falling.top_edge() < self.top || self.hit_bottom(self.falling.path()) {
            debug!("spawn collision, game over");
            return false;
        }
        true
    }

    fn playable_width(&self) -> usize {
        (self.right - self.left - 1) as usize
    }

    pub fn left(&self) -> i16 {
        self.left
    }

    pub fn right(&self) -> i16 {
        self.right
    }

    pub fn top(&self) -> i16 {
        self.top
    }

    pub fn bottom(&self) -> i16 {
        self.bottom
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Mutable field access for scenario setup.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn falling(&self) -> &Shape {
        &self.falling
    }

    /// Full rows flagged at the last lock and not yet swept.
    pub fn pending_clear(&self) -> &[i16] {
        &self.pending_clear
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    /// Deterministic game whose first falling piece has the given kind.
    fn game_with_first(kind: PieceKind) -> Game {
        (0u32..1000)
            .map(Game::new)
            .find(|g| g.falling().kind() == kind)
            .expect("some seed spawns every kind first")
    }

    #[test]
    fn horizontal_move_commits_inside_walls() {
        let mut game = Game::new(1);
        let before = *game.falling().path();
        assert_eq!(game.apply(Command::MoveLeft), Step::Moved);
        assert_eq!(*game.falling().path(), before.translated(-1, 0));
    }

    #[test]
    fn horizontal_move_blocked_at_left_wall() {
        let mut game = Game::new(1);
        let mut moves = 0;
        while game.apply(Command::MoveLeft) == Step::Moved {
            moves += 1;
            assert!(moves < 32, "never blocked by the wall");
        }
        assert!(game.falling().path().left_edge() > game.left());
        // A further request is rejected without mutation.
        let before = *game.falling().path();
        assert_eq!(game.apply(Command::MoveLeft), Step::Blocked);
        assert_eq!(*game.falling().path(), before);
    }

    #[test]
    fn horizontal_move_blocked_by_field() {
        let mut game = game_with_first(PieceKind::O);
        // Descend one row so the piece sits at rows 1..2, then wall it off
        // on the right at its own rows.
        assert_eq!(game.tick(), Step::Moved);
        let right_col = game.falling().path().right_edge() + 1;
        let rows: Vec<i16> = game.falling().path().iter().map(|c| c.row).collect();
        for row in rows {
            game.field_mut().insert(right_col, row);
        }
        let before = *game.falling().path();
        assert_eq!(game.apply(Command::MoveRight), Step::Blocked);
        assert_eq!(*game.falling().path(), before);
    }

    #[test]
    fn gravity_locks_at_floor_and_spawns() {
        let mut game = game_with_first(PieceKind::O);
        loop {
            match game.tick() {
                Step::Moved => {}
                Step::Locked { full_rows } => {
                    assert!(full_rows.is_empty());
                    break;
                }
                other => panic!("unexpected step {other:?}"),
            }
        }
        // Exactly the four cells of the locked piece are settled, and a
        // fresh piece is falling from the spawn origin.
        assert_eq!(game.field().cells().count(), 4);
        assert!(game.falling().top_edge() >= game.top());
        assert!(!game.is_game_over());
    }

    #[test]
    fn rotation_is_permissive_at_walls() {
        let mut game = game_with_first(PieceKind::I);
        // I at North is a single column; push it against the left wall.
        while game.apply(Command::MoveLeft) == Step::Moved {}
        assert_eq!(game.falling().path().left_edge(), game.left() + 1);
        // Rotating to East lays the bar horizontally across the wall. The
        // rotation is applied unconditionally.
        assert_eq!(game.apply(Command::RotateCw), Step::Moved);
        assert!(game.falling().path().left_edge() <= game.left());
        // The invalid position is only discovered by movement checks.
        assert_eq!(game.apply(Command::MoveLeft), Step::Blocked);
    }

    #[test]
    fn commands_rejected_between_lock_and_sweep() {
        let mut game = game_with_first(PieceKind::O);
        // Complete the floor row except where the O will land.
        let floor = game.bottom() - 1;
        let landing: Vec<i16> = game.falling().path().iter().map(|c| c.col).collect();
        for col in (game.left() + 1)..game.right() {
            if !landing.contains(&col) {
                game.field_mut().insert(col, floor);
            }
        }
        let full_rows = loop {
            match game.tick() {
                Step::Moved => {}
                Step::Locked { full_rows } => break full_rows,
                other => panic!("unexpected step {other:?}"),
            }
        };
        assert_eq!(full_rows, vec![floor]);
        assert_eq!(game.pending_clear(), &[floor]);
        assert_eq!(game.apply(Command::MoveLeft), Step::Blocked);
        assert_eq!(game.tick(), Step::Blocked);

        assert_eq!(game.sweep(), Step::Moved);
        assert!(game.pending_clear().is_empty());
        assert!(game.field().full_rows(10).is_empty());
    }

    #[test]
    fn stacking_to_the_top_ends_the_game() {
        let mut game = Game::new(3);
        for _ in 0..10_000 {
            match game.tick() {
                Step::Locked { full_rows } if !full_rows.is_empty() => {
                    if game.sweep() == Step::GameOver {
                        break;
                    }
                }
                Step::GameOver => break,
                _ => {}
            }
        }
        assert!(game.is_game_over(), "stack never reached the spawn area");
        // Terminal state is sticky.
        assert_eq!(game.tick(), Step::GameOver);
        assert_eq!(game.apply(Command::SoftDrop), Step::GameOver);
    }
}
