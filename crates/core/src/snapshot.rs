use crate::active::ActivePiece;
use crate::types::{Cell, Color, PieceKind, Rotation, SessionState, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute board cells.
    pub cells: [(i8, i8); 4],
}

impl ActiveSnapshot {
    pub fn color(&self) -> Color {
        self.kind.color()
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.piece.rotation(),
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Read-only view of a session for renderers and observers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Landed cells, row-major.
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub state: SessionState,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub step_delay_ms: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return None;
        }
        Some(self.board[y as usize * self.width as usize + x as usize])
    }

    /// Color of the landed block at `(x, y)`, if any.
    pub fn color_at(&self, x: i8, y: i8) -> Option<Color> {
        self.cell(x, y).flatten().map(PieceKind::color)
    }

    /// What a renderer should draw at `(x, y)`: the active piece wins over landed cells.
    pub fn visible_kind(&self, x: i8, y: i8) -> Option<PieceKind> {
        if let Some(active) = self.active {
            if active.cells.contains(&(x, y)) {
                return Some(active.kind);
            }
        }
        self.cell(x, y).flatten()
    }

    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: None,
            state: SessionState::Running,
            score: 0,
            level: 1,
            lines: 0,
            step_delay_ms: 0,
            episode_id: 0,
        }
    }
}
