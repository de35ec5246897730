//! Read-only state snapshots for renderers and external observers.

use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

use crate::game_state::ActivePiece;

/// Pose of the active piece at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a caller may observe between operations.
///
/// The board is exported as display tags (0 = empty, 1..=7 = kind) so
/// renderers need no knowledge of the cell type. Fill one in place with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into) to avoid
/// per-frame allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub game_over: bool,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
            game_over: false,
            seed: 0,
        }
    }
}
