use crate::pieces::ActivePiece;
use crate::types::{Cell, Phase, COLUMNS, EMPTY, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimersSnapshot {
    pub drop_ms: u32,
    pub drop_interval_ms: u32,
}

/// Plain copy of everything the render and score adapters read each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; COLUMNS]; ROWS],
    pub active: Option<ActivePiece>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub timers: TimersSnapshot,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY; COLUMNS]; ROWS],
            active: None,
            phase: Phase::Ready,
            score: 0,
            lines: 0,
            timers: TimersSnapshot {
                drop_ms: 0,
                drop_interval_ms: 0,
            },
        }
    }
}
