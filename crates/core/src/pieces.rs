//! Piece catalog - tetromino occupancy masks and the rotation kick sequence.
//!
//! Each of the 7 kinds has 4 precomputed rotation states. A state is a 4x4
//! occupancy mask stored as four row bitmasks: bit `3 - x` of row `y` is set
//! when cell `(x, y)` is occupied, so the literals below read like the shapes
//! they describe. The tables are constant data, never mutated.

use arrayvec::ArrayVec;
use blockfall_types::{PieceKind, Rotation, MASK_SIZE};

/// One rotation state: four 4-bit row bitmasks, top row first.
pub type PieceMask = [u8; MASK_SIZE];

/// Horizontal offsets tried, in order, when a rotation would collide.
///
/// The first non-colliding offset commits; if all fail the rotation is a
/// silent no-op. The sequence is part of observable behavior and must not be
/// reordered or replaced with a standard kick table.
pub const KICK_OFFSETS: [i8; 4] = [0, -1, 1, -3];

const SHAPES: [[PieceMask; 4]; 7] = [
    // I
    [
        [0b0000, 0b1111, 0b0000, 0b0000],
        [0b0010, 0b0010, 0b0010, 0b0010],
        [0b0000, 0b0000, 0b1111, 0b0000],
        [0b0100, 0b0100, 0b0100, 0b0100],
    ],
    // J
    [
        [0b1000, 0b1110, 0b0000, 0b0000],
        [0b0110, 0b0100, 0b0100, 0b0000],
        [0b0000, 0b1110, 0b0010, 0b0000],
        [0b0100, 0b0100, 0b1100, 0b0000],
    ],
    // L
    [
        [0b0010, 0b1110, 0b0000, 0b0000],
        [0b0100, 0b0100, 0b0110, 0b0000],
        [0b0000, 0b1110, 0b1000, 0b0000],
        [0b1100, 0b0100, 0b0100, 0b0000],
    ],
    // O
    [
        [0b0110, 0b0110, 0b0000, 0b0000],
        [0b0110, 0b0110, 0b0000, 0b0000],
        [0b0110, 0b0110, 0b0000, 0b0000],
        [0b0110, 0b0110, 0b0000, 0b0000],
    ],
    // S
    [
        [0b0110, 0b1100, 0b0000, 0b0000],
        [0b0100, 0b0110, 0b0010, 0b0000],
        [0b0000, 0b0110, 0b1100, 0b0000],
        [0b1000, 0b1100, 0b0100, 0b0000],
    ],
    // T
    [
        [0b0100, 0b1110, 0b0000, 0b0000],
        [0b0100, 0b0110, 0b0100, 0b0000],
        [0b0000, 0b1110, 0b0100, 0b0000],
        [0b0100, 0b1100, 0b0100, 0b0000],
    ],
    // Z
    [
        [0b1100, 0b0110, 0b0000, 0b0000],
        [0b0010, 0b0110, 0b0100, 0b0000],
        [0b0000, 0b1100, 0b0110, 0b0000],
        [0b0100, 0b1100, 0b1000, 0b0000],
    ],
];

/// Look up the occupancy mask for a kind and rotation state. Pure lookup.
pub fn mask(kind: PieceKind, rotation: Rotation) -> PieceMask {
    SHAPES[kind as usize][rotation.index()]
}

/// Whether cell `(x, y)` of a mask is occupied.
#[inline(always)]
pub fn mask_occupied(mask: PieceMask, x: usize, y: usize) -> bool {
    debug_assert!(x < MASK_SIZE && y < MASK_SIZE);
    (mask[y] >> (MASK_SIZE - 1 - x)) & 1 == 1
}

/// The mask as a 4x4 boolean grid, indexed `[y][x]`.
pub fn occupancy(kind: PieceKind, rotation: Rotation) -> [[bool; MASK_SIZE]; MASK_SIZE] {
    let m = mask(kind, rotation);
    let mut grid = [[false; MASK_SIZE]; MASK_SIZE];
    for (y, row) in grid.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = mask_occupied(m, x, y);
        }
    }
    grid
}

/// Occupied `(dx, dy)` offsets of a mask, top-to-bottom then left-to-right.
///
/// Every tetromino occupies exactly 4 cells, so the list never allocates.
pub fn cells(kind: PieceKind, rotation: Rotation) -> ArrayVec<(i8, i8), 4> {
    let m = mask(kind, rotation);
    let mut out = ArrayVec::new();
    for y in 0..MASK_SIZE {
        for x in 0..MASK_SIZE {
            if mask_occupied(m, x, y) {
                out.push((x as i8, y as i8));
            }
        }
    }
    out
}
