//! Game state module - one owned game session
//!
//! Ties together board, generator, collision, transforms and scoring. Handles
//! gravity timing, merging, line clears and the Ready/Running/Paused/GameOver
//! phase machine. The host calls [`GameSession::tick`] (or
//! [`GameSession::frame`]) once per frame and forwards input through
//! [`GameSession::apply_action`].

use log::{debug, info};

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::ActivePiece;
use crate::rng::PieceGenerator;
use crate::scoring::line_clear_points;
use crate::snapshot::{GameSnapshot, TimersSnapshot};
use crate::transform::{try_rotate, try_shift};
use crate::types::*;

/// What a single [`GameSession::drop`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Not running; nothing happened
    Ignored,
    /// The piece moved down one row
    Moved,
    /// The piece was merged and a new piece spawned
    Merged { lines_cleared: u32 },
    /// The piece was merged and the next spawn collided
    ToppedOut { lines_cleared: u32 },
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: ActivePiece,
    generator: PieceGenerator,
    phase: Phase,
    score: u32,
    lines: u32,
    /// Elapsed game time since the last drop. Frozen while paused.
    drop_timer_ms: u32,
    drop_interval_ms: u32,
    /// Host timestamp of the previous frame; `None` after start/resume/restart.
    last_frame_ms: Option<u64>,
    /// Last merge / new-game event (consumed by the score display).
    last_event: Option<CoreLastEvent>,
}

impl GameSession {
    /// Create a new session in the Ready phase with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let active = generator.spawn();

        Self {
            board: Board::new(),
            active,
            generator,
            phase: Phase::Ready,
            score: 0,
            lines: 0,
            drop_timer_ms: 0,
            drop_interval_ms: DROP_INTERVAL_MS,
            last_frame_ms: None,
            last_event: Some(Self::new_game_event()),
        }
    }

    /// Replace the board (scripted setups and replays)
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the active piece (scripted setups and replays)
    pub fn with_active(mut self, piece: ActivePiece) -> Self {
        self.active = piece;
        self
    }

    fn new_game_event() -> CoreLastEvent {
        CoreLastEvent {
            merged: false,
            lines_cleared: 0,
            line_clear_score: 0,
            score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(self.active);
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.timers = TimersSnapshot {
            drop_ms: self.drop_timer_ms,
            drop_interval_ms: self.drop_interval_ms,
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last merge / new-game event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    fn set_phase(&mut self, next: Phase) {
        if self.phase != next {
            info!(
                "phase {} -> {} (score {})",
                self.phase.as_str(),
                next.as_str(),
                self.score
            );
            self.phase = next;
        }
    }

    /// Leave the Ready phase and start gravity
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.last_frame_ms = None;
        self.set_phase(Phase::Running);
        true
    }

    /// Running -> Paused, or Paused -> Running.
    ///
    /// The drop accumulator is kept across the pause; the frame baseline is
    /// dropped so wall-clock time spent paused never counts.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.set_phase(Phase::Paused);
                true
            }
            Phase::Paused => {
                self.last_frame_ms = None;
                self.set_phase(Phase::Running);
                true
            }
            Phase::Ready | Phase::GameOver => false,
        }
    }

    /// Start a new game after game over: cleared board, zero score, fresh piece
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }

        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.drop_timer_ms = 0;
        self.drop_interval_ms = DROP_INTERVAL_MS;
        self.last_frame_ms = None;
        self.active = self.generator.spawn();
        self.last_event = Some(Self::new_game_event());
        self.set_phase(Phase::Running);
        true
    }

    /// Shift the active piece one column (`-1` left, `+1` right)
    pub fn move_piece(&mut self, direction: i8) -> bool {
        if !self.phase.accepts_piece_input() {
            return false;
        }
        try_shift(&self.board, &mut self.active, direction)
    }

    /// Rotate the active piece clockwise (with a counter-clockwise fallback)
    pub fn rotate(&mut self) -> bool {
        if !self.phase.accepts_piece_input() {
            return false;
        }
        try_rotate(&self.board, &mut self.active)
    }

    /// Move the active piece down one row, or merge it if it is resting.
    ///
    /// After a merge the next piece spawns; if it collides immediately the game
    /// is over. Manual and timer drops behave the same and both reset the drop
    /// timer.
    pub fn drop(&mut self) -> DropOutcome {
        if !self.phase.accepts_piece_input() {
            return DropOutcome::Ignored;
        }
        self.drop_timer_ms = 0;

        self.active.y += 1;
        if !collides(&self.board, &self.active) {
            return DropOutcome::Moved;
        }
        self.active.y -= 1;

        let lines_cleared = self.merge_active();

        self.active = self.generator.spawn();
        if collides(&self.board, &self.active) {
            info!("spawn of {:?} blocked", self.active.kind);
            self.set_phase(Phase::GameOver);
            return DropOutcome::ToppedOut { lines_cleared };
        }

        DropOutcome::Merged { lines_cleared }
    }

    /// Merge the active piece, clear rows and score. Returns rows cleared.
    fn merge_active(&mut self) -> u32 {
        self.board.merge(&self.active);
        debug!(
            "merged {:?} at ({}, {})",
            self.active.kind, self.active.x, self.active.y
        );

        let cleared = self.board.clear_completed_rows();
        let line_clear_score = line_clear_points(cleared.count);
        self.score = self.score.saturating_add(line_clear_score);
        self.lines = self.lines.saturating_add(cleared.count as u32);

        self.last_event = Some(CoreLastEvent {
            merged: true,
            lines_cleared: cleared.count as u32,
            line_clear_score,
            score: self.score,
        });

        cleared.count as u32
    }

    /// Advance game time by `elapsed_ms`. Returns true if a drop happened.
    ///
    /// Does nothing unless Running.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > self.drop_interval_ms {
            self.drop();
            return true;
        }
        false
    }

    /// Advance to the host timestamp `now_ms` (e.g. a display-refresh callback).
    ///
    /// The first frame after start, resume or restart only sets the baseline.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        let elapsed = match self.last_frame_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_frame_ms = Some(now_ms);
        self.tick(u32::try_from(elapsed).unwrap_or(u32::MAX))
    }

    /// Apply a game action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.drop() != DropOutcome::Ignored,
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
