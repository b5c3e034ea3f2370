//! Terminal render adapter.
//!
//! A small, game-oriented rendering layer: the game view draws a snapshot into
//! a framebuffer of styled characters, and the renderer flushes that
//! framebuffer to the terminal.
//!
//! Goals:
//! - Keep `core` free of any terminal dependency
//! - Keep view code pure so it can be tested without a terminal
//! - Allow precise control over aspect ratio (2 chars wide per cell by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{status_text, AnchorY, GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
