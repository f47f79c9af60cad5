//! Core types module - shared data structures and constants
//!
//! Pure data with no dependencies, usable from the engine, the terminal shell and tests alike.
//!
//! # Board
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: `(width / 2, 0)`
//!
//! # Default rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_STEP_DELAY_MS` | 500 | Step interval at level 1 |
//! | `MIN_STEP_DELAY_MS` | 50 | Floor of the speed curve |
//! | `SPEED_DECAY` | 0.95 | Per-level multiplier of the step interval |
//! | `LEVEL_UP_SCORE` | 1000 | Score that triggers a level-up |
//! | `LINE_CLEAR_POINTS` | 100 | Points per cleared line |
//! | `MULTI_LINE_BONUS` | 200 | Bonus per extra line cleared by the same lock |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, PieceKind, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
//! assert_eq!(PieceKind::T.color(), Color::Magenta);
//! assert_eq!(BOARD_WIDTH / 2, 5);
//! ```

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Step timing (milliseconds)
pub const BASE_STEP_DELAY_MS: u32 = 500;
pub const MIN_STEP_DELAY_MS: u32 = 50;
pub const SPEED_DECAY: f64 = 0.95;

/// Levels start at 1.
pub const START_LEVEL: u32 = 1;

/// Scoring
pub const LEVEL_UP_SCORE: u32 = 1000;
pub const LINE_CLEAR_POINTS: u32 = 100;
pub const MULTI_LINE_BONUS: u32 = 200;

/// Number of distinct tetrominoes in the catalog.
pub const PIECE_COUNT: usize = 7;

/// Tetromino piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, indexed by catalog position.
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Map a catalog index in `[0, 7)` to its kind.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this kind in the catalog.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display color for this kind.
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Magenta,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Named display colors, one per piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Magenta,
    Red,
}

/// Quarter turns applied since spawn (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Commands that act on the active piece. Ignored unless the session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// One gravity step; locks the piece when it cannot fall.
    SoftDrop,
    /// Fall until blocked, then lock.
    HardDrop,
    Rotate,
}

/// Everything a shell can ask of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}

impl GameAction {
    /// The piece command behind this action, if any.
    pub fn command(self) -> Option<Command> {
        match self {
            GameAction::MoveLeft => Some(Command::MoveLeft),
            GameAction::MoveRight => Some(Command::MoveRight),
            GameAction::SoftDrop => Some(Command::SoftDrop),
            GameAction::HardDrop => Some(Command::HardDrop),
            GameAction::Rotate => Some(Command::Rotate),
            GameAction::Pause | GameAction::Restart => None,
        }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Running,
    Paused,
    GameOver,
}

/// Cell on the board (None = empty, Some = landed block of that kind)
pub type Cell = Option<PieceKind>;
