//! Terminal rendering.
//!
//! - [`fb`]: a plain character framebuffer with per-cell attributes
//! - [`renderer`]: raw-mode terminal driver that diff-flushes framebuffers
//! - [`game_view`]: pure mapping from game state to a framebuffer

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
