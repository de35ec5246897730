//! Core game logic - pure, deterministic, and testable.
//!
//! This crate is the board/piece simulator: it owns the grid, the active
//! piece, and the score/level/speed progression, and nothing else. It has
//! **zero dependencies** on UI, clocks, or I/O:
//!
//! - **Deterministic**: the same seed replays the same game
//! - **Synchronous**: every operation completes in bounded time (at most 16
//!   cell checks per collision test, one row scan per clear)
//! - **Caller-paced**: gravity is driven from outside by comparing a
//!   monotonic clock against [`GameState::fall_interval_ms`]
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, the collision predicate, merge and line clearing
//! - [`pieces`]: the 7x4 occupancy-mask catalog and the rotation kick offsets
//! - [`game_state`]: the simulator - movement, rotation, lock, progression
//! - [`rng`]: seeded uniform piece selection
//! - [`scoring`]: line-clear points, level curve, gravity curve
//! - [`snapshot`]: read-only views for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{FallOutcome, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // Drop the piece all the way to the floor.
//! loop {
//!     match game.apply_action(GameAction::SoftDrop) {
//!         FallOutcome::StillFalling => continue,
//!         FallOutcome::Locked { lines_cleared } => {
//!             assert_eq!(lines_cleared, 0);
//!             break;
//!         }
//!         FallOutcome::GameOver => break,
//!     }
//! }
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState, SPAWN_X};
pub use pieces::{cells, mask, occupancy, KICK_OFFSETS};
pub use rng::{Lcg, PiecePicker};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
