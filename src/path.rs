//! Path-clearance utilities.
//!
//! Pure, stateless predicates answering "are the squares strictly between
//! two points empty?" along a rank, file, or diagonal. These only test
//! occupancy — piece identity and colour are the legality layer's concern.

use crate::board::Board;
use crate::types::Coordinate;

/// True iff every square strictly between `from` and `to` on their shared
/// row is empty. Adjacent squares are vacuously clear.
///
/// Precondition: `from.row() == to.row()`.
pub fn horizontal_clear(from: Coordinate, to: Coordinate, board: &Board) -> bool {
    debug_assert_eq!(from.row(), to.row(), "horizontal_clear requires one row");
    let row = from.row();
    let (lo, hi) = ordered(from.col(), to.col());
    for col in lo + 1..hi {
        if board.piece_at(Coordinate::new(col, row)).is_some() {
            return false;
        }
    }
    true
}

/// True iff every square strictly between `from` and `to` on their shared
/// column is empty. Adjacent squares are vacuously clear.
///
/// Precondition: `from.col() == to.col()`.
pub fn vertical_clear(from: Coordinate, to: Coordinate, board: &Board) -> bool {
    debug_assert_eq!(from.col(), to.col(), "vertical_clear requires one column");
    let col = from.col();
    let (lo, hi) = ordered(from.row(), to.row());
    for row in lo + 1..hi {
        if board.piece_at(Coordinate::new(col, row)).is_some() {
            return false;
        }
    }
    true
}

/// True iff every square strictly between `from` and `to` along their
/// diagonal is empty. Adjacent diagonal squares are vacuously clear.
///
/// Precondition: `is_diagonal(from, to)`.
pub fn diagonal_clear(from: Coordinate, to: Coordinate, board: &Board) -> bool {
    debug_assert!(is_diagonal(from, to), "diagonal_clear requires a diagonal");
    let col_step: i8 = if to.col() > from.col() { 1 } else { -1 };
    let row_step: i8 = if to.row() > from.row() { 1 } else { -1 };

    let mut col = from.col() as i8 + col_step;
    let mut row = from.row() as i8 + row_step;
    while col != to.col() as i8 && row != to.row() as i8 {
        if board.piece_at(Coordinate::new(col as u8, row as u8)).is_some() {
            return false;
        }
        col += col_step;
        row += row_step;
    }
    true
}

/// True iff `from` and `to` lie on a common diagonal (|Δcol| == |Δrow|).
///
/// A zero displacement counts as diagonal here; callers reject null moves
/// separately.
#[inline]
pub fn is_diagonal(from: Coordinate, to: Coordinate) -> bool {
    (from.col() as i8 - to.col() as i8).abs() == (from.row() as i8 - to.row() as i8).abs()
}

#[inline]
fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
