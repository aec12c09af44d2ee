//! Per-piece move legality.
//!
//! One predicate, `is_legal_move`, dispatches over the closed set of piece
//! kinds after a shared base rule (own colour moving, no self-capture, no
//! king capture outside attack scans). The predicate is pure: it never
//! mutates the board, including for castling — `Board::apply_move` performs
//! the rook relocation after validation succeeds.
//!
//! `check_mode` marks the attack-scan context, where the question shifts
//! from "may this piece move there" to "does this piece threaten that
//! square". It lifts the base rule's king-capture suppression (a piece
//! threatening the king's square is exactly what an attack scan tests),
//! short-circuits the King arm's own safety probe (a king "attacks" its
//! neighbourhood regardless of whether stepping there would be safe;
//! probing would recurse through the opposing king evaluating *its*
//! safety), and reduces the Pawn arm to its capture shape (the forward
//! diagonals threaten, the advance squares do not). Ordinary move
//! validation always passes `check_mode = false`.

use crate::board::Board;
use crate::path;
use crate::types::{Color, Coordinate, Piece, PieceKind};

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Can `piece` (standing on `from`) legally move to `to`?
pub fn is_legal_move(
    piece: &Piece,
    from: Coordinate,
    to: Coordinate,
    board: &Board,
    mover: Color,
    check_mode: bool,
) -> bool {
    if !passes_base_rule(piece, from, to, board, mover, check_mode) {
        return false;
    }

    let col_diff = (to.col() as i8 - from.col() as i8).abs();
    let row_diff = (to.row() as i8 - from.row() as i8).abs();

    match piece.kind {
        PieceKind::Pawn => pawn_move(piece, from, to, board, check_mode),
        PieceKind::Knight => {
            (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
        }
        PieceKind::Bishop => {
            path::is_diagonal(from, to) && path::diagonal_clear(from, to, board)
        }
        PieceKind::Rook => rook_move(from, to, board),
        PieceKind::Queen => {
            if path::is_diagonal(from, to) {
                path::diagonal_clear(from, to, board)
            } else {
                rook_move(from, to, board)
            }
        }
        PieceKind::King => {
            if row_diff <= 1 && col_diff <= 1 {
                if check_mode {
                    return true;
                }
                return !board.is_square_attacked(to, piece.color, true);
            }
            // Castling: a two-column king slide along its home row. Not a
            // capture shape, so it never participates in attack scans.
            if !check_mode && !piece.has_moved && row_diff == 0 && col_diff == 2 {
                return castling_valid(from, to, board, piece.color);
            }
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Shared base rule
// ---------------------------------------------------------------------------

/// Preconditions every kind inherits: the mover owns the piece, the move is
/// not null, the destination is not a friendly piece, and the destination is
/// not a king unless we are inside an attack scan.
fn passes_base_rule(
    piece: &Piece,
    from: Coordinate,
    to: Coordinate,
    board: &Board,
    mover: Color,
    check_mode: bool,
) -> bool {
    if mover != piece.color || from == to {
        return false;
    }
    if let Some(occupant) = board.piece_at(to) {
        if occupant.color == piece.color {
            return false;
        }
        if occupant.kind == PieceKind::King && !check_mode {
            return false;
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Pawn
// ---------------------------------------------------------------------------

fn pawn_move(
    piece: &Piece,
    from: Coordinate,
    to: Coordinate,
    board: &Board,
    check_mode: bool,
) -> bool {
    let dir = piece.color.pawn_direction();
    let one_forward = from.row() as i8 + dir;

    // Attack scans test the capture shape only: a pawn threatens its two
    // forward diagonals whether or not they are occupied, and never the
    // square it could merely advance to.
    if check_mode {
        return (to.col() as i8 - from.col() as i8).abs() == 1 && to.row() as i8 == one_forward;
    }

    // Straight advances require an empty destination.
    if to.col() == from.col() {
        if board.piece_at(to).is_some() {
            return false;
        }
        if to.row() as i8 == one_forward {
            return true;
        }
        // Two-square opening move: both intermediate and destination empty.
        if !piece.has_moved && to.row() as i8 == from.row() as i8 + 2 * dir {
            let intermediate = Coordinate::new(from.col(), one_forward as u8);
            return board.piece_at(intermediate).is_none();
        }
        return false;
    }

    // Diagonal, one square forward.
    if (to.col() as i8 - from.col() as i8).abs() == 1 && to.row() as i8 == one_forward {
        if let Some(occupant) = board.piece_at(to) {
            return occupant.color != piece.color;
        }
        // En passant: the destination is empty but the square beside the
        // origin holds an enemy pawn still inside its vulnerability window.
        let beside = Coordinate::new(to.col(), from.row());
        if let Some(neighbour) = board.piece_at(beside) {
            return neighbour.color != piece.color
                && neighbour.kind == PieceKind::Pawn
                && neighbour.en_passant_vulnerable;
        }
        return false;
    }

    false
}

// ---------------------------------------------------------------------------
// Rook (also the straight half of the Queen)
// ---------------------------------------------------------------------------

fn rook_move(from: Coordinate, to: Coordinate, board: &Board) -> bool {
    if from.row() == to.row() {
        path::horizontal_clear(from, to, board)
    } else if from.col() == to.col() {
        path::vertical_clear(from, to, board)
    } else {
        false
    }
}

// ---------------------------------------------------------------------------
// Castling validation
// ---------------------------------------------------------------------------

/// All castling preconditions, checked without mutating anything:
/// an unmoved own-colour rook in the corner the king slides toward, empty
/// squares strictly between king and rook, and no attacked square among the
/// king's origin, crossing, and destination squares.
pub fn castling_valid(from: Coordinate, to: Coordinate, board: &Board, color: Color) -> bool {
    let kingside = to.col() > from.col();
    let rook_col: u8 = if kingside { 7 } else { 0 };
    let row = from.row();

    match board.piece_at(Coordinate::new(rook_col, row)) {
        Some(rook)
            if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved => {}
        _ => return false,
    }

    let step: i8 = if kingside { 1 } else { -1 };

    // Every square strictly between king and rook must be empty.
    let mut col = from.col() as i8 + step;
    while col != rook_col as i8 {
        if board.piece_at(Coordinate::new(col as u8, row)).is_some() {
            return false;
        }
        col += step;
    }

    // The king may not castle out of, through, or into an attacked square.
    let mut col = from.col() as i8;
    loop {
        if board.is_square_attacked(Coordinate::new(col as u8, row), color, true) {
            return false;
        }
        if col == to.col() as i8 {
            break;
        }
        col += step;
    }

    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
