//! Core types shared across the application.
//!
//! This crate contains pure data types and tuning constants with no external
//! dependencies, so every other crate can depend on it without pulling in I/O.

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of a piece occupancy mask
pub const MASK_SIZE: usize = 4;

/// Input/render loop tick (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity curve: 1000ms per row at level 1, 100ms faster per level, 100ms floor
pub const BASE_FALL_MS: u32 = 1000;
pub const FALL_MS_PER_LEVEL: u32 = 100;
pub const MIN_FALL_MS: u32 = 100;

/// Level advances every 10 cleared lines
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring, indexed by rows cleared in one lock (multiplied by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds, in catalog order.
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
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Stable display tag (1..=7) stored in snapshot grids; 0 means empty.
    pub fn tag(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`tag`](Self::tag). Returns `None` for 0 and unknown values.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Rotation states of a piece mask (North = spawn orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Advance one step clockwise, wrapping.
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Catalog index (0..=3).
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Discrete input events fed into the simulator, one per loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Restart,
}

/// Result of a gravity or soft-drop step, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// The piece advanced (or the operation did not end a piece's life).
    StillFalling,
    /// The piece could not advance and was locked into the grid.
    Locked { lines_cleared: u32 },
    /// A freshly spawned piece collided at the spawn pose; terminal state.
    GameOver,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
