//! Simulation engine - pure, deterministic, and testable.
//!
//! This crate contains the falling-block rules with zero UI or I/O
//! dependencies. Diagnostics go through the `log` facade; whether anything
//! listens is the binary's business.
//!
//! # Module structure
//!
//! - [`geometry`]: the 4-cell [`Path`] and its translation/edge algebra
//! - [`tetromino`]: static catalog of the 7 kinds, 4 orientation frames each
//! - [`shape`]: a live falling piece (kind + orientation + origin + path)
//! - [`field`]: the settled-block fill, keyed by row
//! - [`game`]: board orchestration - movement, collision, lock, line clear
//! - [`rng`]: deterministic LCG for uniform piece selection
//!
//! # Rules
//!
//! - Gravity moves the piece one row per tick; a blocked descent locks the
//!   piece into the field.
//! - Full rows are detected at lock time and swept after the caller's flash
//!   pause ([`Game::sweep`]).
//! - Rotation is permissive: no wall kicks, no validity check. An
//!   out-of-bounds rotation is only discovered by later movement checks.
//! - Pieces are drawn uniformly from all 7 kinds, independent of history.

pub mod field;
pub mod game;
pub mod geometry;
pub mod rng;
pub mod shape;
pub mod tetromino;

pub use term_tetra_types as types;

pub use field::Field;
pub use game::{Game, Step};
pub use geometry::Path;
pub use rng::SimpleRng;
pub use shape::Shape;
pub use tetromino::{tetromino, Tetromino};
