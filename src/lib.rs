//! term-tetra (workspace facade crate).
//!
//! Keeps a stable `term_tetra::{core,input,term,types}` path while the
//! implementation lives in dedicated crates under `crates/`.

pub use term_tetra_core as core;
pub use term_tetra_input as input;
pub use term_tetra_term as term;
pub use term_tetra_types as types;
