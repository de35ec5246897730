//! Game state module - the board/piece simulator.
//!
//! Ties together the grid, the piece catalog, the picker, and scoring. Every
//! operation is synchronous and total: inputs are discrete commands, the only
//! terminal outcome is game over, and nothing here performs I/O or holds a
//! timer. Gravity cadence belongs to the caller, which compares a monotonic
//! clock against [`GameState::fall_interval_ms`] and invokes
//! [`GameState::fall`] when the interval has elapsed.

use blockfall_types::{FallOutcome, GameAction, PieceKind, Rotation, BOARD_WIDTH};

use crate::board::Board;
use crate::pieces::KICK_OFFSETS;
use crate::rng::PiecePicker;
use crate::scoring;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// Spawn column: centers the 4x4 mask horizontally.
pub const SPAWN_X: i8 = BOARD_WIDTH as i8 / 2 - 2;

/// The falling piece: kind, rotation state, and the grid position of the
/// top-left corner of its 4x4 mask. The mask may hang above the top edge
/// but never off the sides or below the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at the default spawn pose.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: 0,
        }
    }
}

/// Complete game state. Exclusively owns the grid and the active piece.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    picker: PiecePicker,
    score: u32,
    lines: u32,
    level: u32,
    fall_interval_ms: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed. No piece is spawned until
    /// [`start`](Self::start).
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: PiecePicker::new(seed),
            score: 0,
            lines: 0,
            level: 1,
            fall_interval_ms: scoring::fall_interval_ms(1),
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
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

    /// Current gravity interval; the caller uses this to pace [`fall`](Self::fall).
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Spawn a freshly drawn kind at the default pose.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.picker.draw();
        self.spawn_with(kind)
    }

    /// Spawn a specific kind at the default pose, replacing any active piece.
    ///
    /// When the spawn pose already collides the game transitions to game
    /// over and false is returned.
    pub fn spawn_with(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::spawn(kind);
        if self.board.collides(piece.kind, piece.rotation, piece.x, piece.y) {
            self.active = None;
            self.game_over = true;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Shift the active piece horizontally. Commits, or reverts to a no-op
    /// when the new pose collides; never errors.
    pub fn move_horizontal(&mut self, delta: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let x = active.x + delta;
        if self.board.collides(active.kind, active.rotation, x, active.y) {
            return false;
        }
        self.active = Some(ActivePiece { x, ..active });
        true
    }

    /// Rotate the active piece one step clockwise.
    ///
    /// The horizontal offsets in [`KICK_OFFSETS`] are tried in order against
    /// the new rotation state with y unchanged; the first non-colliding one
    /// commits. When every offset collides the rotation is a silent no-op.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rotation = active.rotation.rotate_cw();
        for delta in KICK_OFFSETS {
            let x = active.x + delta;
            if !self.board.collides(active.kind, rotation, x, active.y) {
                self.active = Some(ActivePiece { rotation, x, ..active });
                return true;
            }
        }
        false
    }

    /// Advance the active piece one row down.
    ///
    /// When the row below is free the move commits and the piece is still
    /// falling. Otherwise the piece locks where it is: this is the only path
    /// from falling to locked. Used for both gravity ticks and soft drops.
    pub fn fall(&mut self) -> FallOutcome {
        if self.game_over {
            return FallOutcome::GameOver;
        }
        let Some(active) = self.active else {
            return FallOutcome::StillFalling;
        };
        if !self
            .board
            .collides(active.kind, active.rotation, active.x, active.y + 1)
        {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            return FallOutcome::StillFalling;
        }
        self.lock_piece()
    }

    /// Merge the active piece into the grid, clear lines, apply scoring and
    /// progression, then spawn the next piece.
    fn lock_piece(&mut self) -> FallOutcome {
        let Some(active) = self.active.take() else {
            return FallOutcome::StillFalling;
        };
        self.board
            .merge(active.kind, active.rotation, active.x, active.y);

        let lines_cleared = self.board.clear_lines();
        self.score += scoring::line_clear_score(lines_cleared, self.level);
        self.lines += lines_cleared;
        self.level = scoring::level_for_lines(self.lines);
        self.fall_interval_ms = scoring::fall_interval_ms(self.level);

        if !self.spawn_piece() {
            return FallOutcome::GameOver;
        }
        FallOutcome::Locked { lines_cleared }
    }

    /// Apply a discrete input event and report the resulting transition.
    ///
    /// After game over every action is rejected except Restart.
    pub fn apply_action(&mut self, action: GameAction) -> FallOutcome {
        if self.game_over && action != GameAction::Restart {
            return FallOutcome::GameOver;
        }
        match action {
            GameAction::MoveLeft => {
                self.move_horizontal(-1);
                FallOutcome::StillFalling
            }
            GameAction::MoveRight => {
                self.move_horizontal(1);
                FallOutcome::StillFalling
            }
            GameAction::Rotate => {
                self.rotate();
                FallOutcome::StillFalling
            }
            GameAction::SoftDrop => self.fall(),
            GameAction::Restart => {
                self.restart();
                FallOutcome::StillFalling
            }
        }
    }

    /// Reset to a fresh game, continuing the picker's draw sequence.
    pub fn restart(&mut self) {
        let seed = self.picker.seed();
        *self = Self::new(seed);
        self.start();
    }

    /// Fill a snapshot in place (allocation-free).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.game_over = self.game_over;
        out.seed = self.picker.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
