//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block game engine. It has **no**
//! dependencies on UI, terminal or I/O (only the `log` facade), which makes it:
//!
//! - **Deterministic**: same seed, same piece sequence
//! - **Testable**: every rule is a plain method on an owned session
//! - **Portable**: runs under a terminal loop, a GUI frame callback, or headless
//!
//! # Module Structure
//!
//! - [`board`]: 12x20 grid, merge and line clearing
//! - [`pieces`]: shape matrices, rotation and the active piece
//! - [`collision`]: the single validity check for every move
//! - [`transform`]: horizontal moves and rotation with a one-step fallback
//! - [`rng`]: seeded uniform piece generator
//! - [`scoring`]: line-clear points
//! - [`game_state`]: gravity, merge controller and phase machine
//! - [`snapshot`]: render-facing copy of the state
//!
//! # Example
//!
//! ```
//! use blockfall_core::{DropOutcome, GameSession};
//! use blockfall_types::{GameAction, Phase};
//!
//! let mut game = GameSession::new(12345);
//! assert_eq!(game.phase(), Phase::Ready);
//!
//! // Input is ignored until the game starts.
//! assert!(!game.apply_action(GameAction::MoveRight));
//! game.apply_action(GameAction::Start);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.drop(), DropOutcome::Moved);
//!
//! // One frame of 16ms is far below the 1000ms gravity interval.
//! assert!(!game.tick(16));
//! ```
//!
//! # Timing
//!
//! The engine never schedules anything itself. Call
//! [`GameSession::tick`](game_state::GameSession::tick) with elapsed
//! milliseconds, or [`GameSession::frame`](game_state::GameSession::frame) with a
//! host timestamp, once per frame.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod transform;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear};
pub use collision::collides;
pub use game_state::{DropOutcome, GameSession};
pub use pieces::{get_shape, ActivePiece, ShapeMatrix};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::line_clear_points;
pub use snapshot::{GameSnapshot, TimersSnapshot};
pub use transform::{try_rotate, try_shift};
