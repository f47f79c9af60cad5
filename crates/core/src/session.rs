//! Game session module - the state machine a shell drives
//!
//! Ties together the board, the active piece, the piece source and the scoring rules.
//! A shell calls [`GameSession::step`] on every timer tick and [`GameSession::command`] (or
//! [`GameSession::apply_action`]) on every input event, and reads [`GameSession::snapshot`] to
//! draw. Calls must be serialized: the session assumes a single writer.
//!
//! States: `Running`, `Paused`, `GameOver`. Ticks and piece commands only act while running;
//! `restart` is accepted from any state.

use crate::active::{ActivePiece, Fall};
use crate::board::Board;
use crate::rng::{PieceSource, SimpleRng};
use crate::rules::{Rules, RulesError};
use crate::scoring::{score_lock, step_delay_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, GameAction, SessionState};

/// What a lock did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for this lock (before any level-up reset).
    pub points: u32,
    pub leveled_up: bool,
    /// No room was left for the next piece.
    pub game_over: bool,
}

/// Result of a tick or a piece command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session is not running; nothing happened.
    Ignored,
    /// The move was blocked; nothing happened.
    Rejected,
    /// The piece moved or turned.
    Moved,
    /// The piece landed and was merged into the board.
    Locked(LockEvent),
}

impl Outcome {
    /// Whether any state changed.
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::Moved | Outcome::Locked(_))
    }

    pub fn lock_event(&self) -> Option<LockEvent> {
        match self {
            Outcome::Locked(event) => Some(*event),
            _ => None,
        }
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<S: PieceSource = SimpleRng> {
    rules: Rules,
    board: Board,
    active: Option<ActivePiece>,
    source: S,
    state: SessionState,
    score: u32,
    level: u32,
    /// Rows cleared since the last restart.
    lines: u32,
    pieces_locked: u32,
    step_delay_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameSession<SimpleRng> {
    /// Default rules with a seeded [`SimpleRng`].
    pub fn new(seed: u32) -> Self {
        let rules = Rules::default();
        let mut session = Self::build(rules, SimpleRng::new(seed));
        session.spawn_piece();
        session
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameSession<S> {
    /// Start a session with custom rules and piece source. The first piece is spawned here.
    pub fn with_rules(rules: Rules, source: S) -> Result<Self, RulesError> {
        rules.validate()?;
        let mut session = Self::build(rules, source);
        session.spawn_piece();
        Ok(session)
    }

    fn build(rules: Rules, source: S) -> Self {
        Self {
            board: Board::with_size(rules.width, rules.height),
            active: None,
            source,
            state: SessionState::Running,
            score: 0,
            level: rules.start_level,
            lines: 0,
            pieces_locked: 0,
            step_delay_ms: step_delay_ms(rules.start_level, &rules),
            episode_id: 0,
            last_event: None,
            rules,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct access to the grid for setting up positions.
    ///
    /// The caller must not cover the active piece's cells.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Interval the shell should wait between steps at the current level.
    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn a new piece at the anchor. A blocked anchor ends the game.
    pub fn spawn_piece(&mut self) -> bool {
        match ActivePiece::spawn_from(&mut self.source, &self.board) {
            Some(piece) => {
                self.active = Some(piece);
                true
            }
            None => {
                self.active = None;
                self.state = SessionState::GameOver;
                false
            }
        }
    }

    /// Advance one gravity tick.
    pub fn step(&mut self) -> Outcome {
        if self.state != SessionState::Running {
            return Outcome::Ignored;
        }
        let Some(mut active) = self.active else {
            return Outcome::Ignored;
        };

        match active.step_down(&self.board) {
            Fall::Fell => {
                self.active = Some(active);
                Outcome::Moved
            }
            Fall::Landed => Outcome::Locked(self.lock_piece(active)),
        }
    }

    /// Apply a piece command.
    pub fn command(&mut self, command: Command) -> Outcome {
        if self.state != SessionState::Running {
            return Outcome::Ignored;
        }
        let Some(mut active) = self.active else {
            return Outcome::Ignored;
        };

        let moved = match command {
            Command::MoveLeft => active.try_move(&self.board, -1, 0),
            Command::MoveRight => active.try_move(&self.board, 1, 0),
            Command::Rotate => active.try_rotate(&self.board),
            Command::SoftDrop => return self.step(),
            Command::HardDrop => {
                active.drop_to_floor(&self.board);
                return Outcome::Locked(self.lock_piece(active));
            }
        };

        if moved {
            self.active = Some(active);
            Outcome::Moved
        } else {
            Outcome::Rejected
        }
    }

    /// Apply any shell action. Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if let Some(command) = action.command() {
            return self.command(command).changed();
        }
        match action {
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            _ => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.state = SessionState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Running;
        true
    }

    /// Pause when running, resume when paused. No effect after game over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Running => self.pause(),
            SessionState::Paused => self.resume(),
            SessionState::GameOver => false,
        }
    }

    /// Empty the board, zero the score and play on from the current level.
    pub fn restart(&mut self) {
        self.board.reset();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.step_delay_ms = step_delay_ms(self.level, &self.rules);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        self.state = SessionState::Running;
        self.spawn_piece();
    }

    /// Merge the piece, clear rows, score, level up and spawn the next piece.
    fn lock_piece(&mut self, active: ActivePiece) -> LockEvent {
        self.board.merge(&active.piece, active.x, active.y);
        self.active = None;
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let lines_cleared = self.board.clear_completed_rows();
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        let result = score_lock(lines_cleared, self.score, self.level, &self.rules);
        self.score = result.score;
        if result.levels_gained > 0 {
            self.level = result.level;
            self.step_delay_ms = step_delay_ms(self.level, &self.rules);
        }
        if result.wipe_board {
            self.board.reset();
        }

        let spawned = self.spawn_piece();
        let event = LockEvent {
            lines_cleared: lines_cleared as u32,
            points: result.points,
            leveled_up: result.levels_gained > 0,
            game_over: !spawned,
        };
        self.last_event = Some(event);
        event
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.state = self.state;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.step_delay_ms = self.step_delay_ms;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
