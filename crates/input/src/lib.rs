//! Terminal input mapping.
//!
//! Translates crossterm key events into board [`Command`]s. Unrecognized
//! keys are ignored; there is no quit key - the session ends on game over
//! or external process termination.

mod map;

pub use map::map_key;

pub use term_tetra_types::Command;
