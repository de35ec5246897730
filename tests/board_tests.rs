//! Board and collision-predicate tests driven through the facade.

use blockfall::core::Board;
use blockfall::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row_except(board: &mut Board, y: i8, skip: &[i8]) {
    for x in 0..BOARD_WIDTH as i8 {
        if !skip.contains(&x) {
            board.set(x, y, Some(PieceKind::J));
        }
    }
}

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn get_and_set_respect_bounds() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn collision_requires_oob_column_floor_or_filled_cell() {
    let mut board = Board::new();
    board.set(4, 10, Some(PieceKind::L));

    // Free pose: no occupied cell maps anywhere forbidden.
    assert!(!board.collides(PieceKind::O, Rotation::North, 3, 5));

    // Out of bounds horizontally (O occupies mask columns 1 and 2).
    assert!(board.collides(PieceKind::O, Rotation::North, -2, 5));
    assert!(board.collides(PieceKind::O, Rotation::North, 8, 5));

    // Below the floor (O occupies mask rows 0 and 1).
    assert!(board.collides(PieceKind::O, Rotation::North, 3, 19));

    // Overlapping the filled cell at (4, 10).
    assert!(board.collides(PieceKind::O, Rotation::North, 3, 9));
    assert!(board.collides(PieceKind::O, Rotation::North, 3, 10));

    // Partially above the top edge never collides by itself.
    assert!(!board.collides(PieceKind::I, Rotation::East, 0, -2));
}

#[test]
fn merge_writes_cells_and_drops_rows_above_the_top() {
    let mut board = Board::new();
    board.merge(PieceKind::T, Rotation::North, 3, 0);
    // T North: (1,0), (0,1), (1,1), (2,1).
    assert!(board.is_occupied(4, 0));
    assert!(board.is_occupied(3, 1));
    assert!(board.is_occupied(4, 1));
    assert!(board.is_occupied(5, 1));

    let mut above = Board::new();
    above.merge(PieceKind::I, Rotation::East, 0, -3);
    // Only the bottom mask row (dy = 3) reaches the grid.
    assert!(above.is_occupied(2, 0));
    assert!(!above.is_occupied(2, 1));
}

#[test]
fn a_complete_row_is_never_retained_after_clearing() {
    let mut board = Board::new();
    fill_row_except(&mut board, 18, &[4, 5]);
    fill_row_except(&mut board, 19, &[4, 5]);

    // The O plugs both gaps at once.
    board.merge(PieceKind::O, Rotation::North, 3, 18);
    let cleared = board.clear_lines();

    assert_eq!(cleared, 2);
    for y in 0..BOARD_HEIGHT as usize {
        assert!(!board.row_is_complete(y), "row {} still complete", y);
    }
}

#[test]
fn compaction_preserves_the_order_of_rows_above() {
    let mut board = Board::new();
    board.set(0, 15, Some(PieceKind::I));
    board.set(1, 16, Some(PieceKind::O));
    fill_row_except(&mut board, 17, &[]);
    board.set(2, 18, Some(PieceKind::S));
    fill_row_except(&mut board, 19, &[]);

    assert_eq!(board.clear_lines(), 2);

    // Two rows removed below them: everything above drops by two, in order.
    assert_eq!(board.get(0, 17), Some(Some(PieceKind::I)));
    assert_eq!(board.get(1, 18), Some(Some(PieceKind::O)));
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(0, 15), Some(None));
    assert_eq!(board.get(1, 16), Some(None));
}
