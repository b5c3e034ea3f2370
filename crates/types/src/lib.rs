//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be
//! used by the engine, the input adapter and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: `x = COLUMNS / 2 - shape_width / 2`, `y = 0`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity: one row per second |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Phase, COLUMNS, ROWS};
//!
//! assert_eq!(PieceKind::from_id(2), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.id(), 2);
//!
//! assert!(Phase::Running.accepts_piece_input());
//! assert_eq!((COLUMNS, ROWS), (12, 20));
//! ```

/// Board width in cells (12 columns)
pub const COLUMNS: usize = 12;

/// Board height in cells (20 rows)
pub const ROWS: usize = 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval: the active piece falls one row per interval
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Number of distinct piece kinds
pub const PIECE_KINDS: usize = 7;

/// A board cell value.
///
/// `0` is empty, `1..=7` is a settled cell of the matching [`PieceKind`].
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// Line clear scoring table, indexed by rows cleared in one merge.
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];


/// The seven piece kinds
///
/// The discriminant order matches the cell ids written into the board:
/// - **O** (1): 2x2 square
/// - **T** (2): T-shaped
/// - **S** (3): S-shaped
/// - **Z** (4): Z-shaped (mirror of S)
/// - **I** (5): 1x4 bar
/// - **J** (6): J-shaped
/// - **L** (7): L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    T,
    S,
    Z,
    I,
    J,
    L,
}

impl PieceKind {
    /// All kinds in cell id order
    pub const ALL: [PieceKind; PIECE_KINDS] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Cell value written into the board for this kind (1..=7)
    pub fn id(&self) -> Cell {
        match self {
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::I => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Map a non-empty cell value back to its kind
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(5), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// ```
    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }
}

/// Top-level game mode
///
/// ```text
/// Ready --start--> Running <--toggle pause--> Paused
///                     |
///               spawn blocked
///                     v
///                 GameOver --restart--> Running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Board cleared, piece spawned, waiting for a start command
    #[default]
    Ready,
    /// Gravity active, piece input accepted
    Running,
    /// Gravity suspended, only the pause toggle is accepted
    Paused,
    /// Spawn collided; only restart is accepted
    GameOver,
}

impl Phase {
    /// Whether move/rotate/drop commands act in this phase
    pub fn accepts_piece_input(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game over",
        }
    }
}

/// Logical commands produced by the input adapter
///
/// The engine accepts every action at any time and acts on it only when the
/// current [`Phase`] permits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row (merges if already resting)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Pause or resume
    TogglePause,
    /// Leave the Ready phase
    Start,
    /// Start a new game after game over
    Restart,
}

impl GameAction {
    /// Short name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "move_left",
            GameAction::MoveRight => "move_right",
            GameAction::SoftDrop => "soft_drop",
            GameAction::Rotate => "rotate",
            GameAction::TogglePause => "toggle_pause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Core-side event emitted after a merge, or when a new game starts.
///
/// The score display reads `score` from here; `lines_cleared == 0` events are
/// still emitted so the display can show the initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreLastEvent {
    pub merged: bool,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub score: u32,
}
