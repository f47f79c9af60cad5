//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and no I/O: no terminal, no clock, no threads. A shell
//! feeds it timer ticks and player commands and draws the snapshot it hands back.
//!
//! - **Deterministic**: the same seed and inputs always produce the same game
//! - **Portable**: runs in a terminal, a GUI or headless tests alike
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetrominoes and the quarter-turn transform
//! - [`board`]: the landed-block grid, validity checks, merge and row clearing
//! - [`active`]: the falling piece and its moves
//! - [`rng`]: where the next piece comes from
//! - [`scoring`]: line-clear points, level-ups and the speed curve
//! - [`rules`]: tunable board size and scoring parameters
//! - [`session`]: the running/paused/game-over state machine
//! - [`snapshot`]: read-only view for rendering
//!
//! # Game Rules
//!
//! - New pieces appear at `(width / 2, 0)`; if they do not fit, the game is over
//! - Rotation turns the shape about its local origin, with no wall kicks
//! - Every lock scores `100` per cleared row plus `200` per extra row
//! - Reaching `1000` points gains a level, zeroes the score and empties the board
//! - The step interval is `500ms * 0.95^(level - 1)`, never below `50ms`
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, Outcome};
//! use blockfall_types::{Command, SessionState};
//!
//! let mut game = GameSession::new(12345);
//!
//! game.command(Command::MoveRight);
//! game.command(Command::Rotate);
//! assert_eq!(game.step(), Outcome::Moved);
//!
//! let outcome = game.command(Command::HardDrop);
//! assert!(outcome.lock_event().is_some());
//! assert_eq!(game.state(), SessionState::Running);
//! ```

pub mod active;
pub mod board;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, Fall};
pub use board::Board;
pub use pieces::{rotate_shape, spawn_shape, Piece, PieceShape};
pub use rng::{FixedSequence, PieceSource, SimpleRng};
pub use rules::{LevelUpPolicy, Rules, RulesError};
pub use scoring::{line_clear_points, score_lock, step_delay_ms, ScoreResult};
pub use session::{GameSession, LockEvent, Outcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
