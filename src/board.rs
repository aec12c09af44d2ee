//! The 8×8 board: piece placement, derived queries (attacked squares, check,
//! checkmate, outcome), and the single gameplay mutation, `apply_move`.
//!
//! `Board` is a plain owned value. Queries take `&self`, `apply_move` takes
//! `&mut self`; the turn driver owns the board exclusively and serialises
//! calls to it. `apply_move` is all-or-nothing: on any error the board is
//! untouched.

use crate::rules;
use crate::types::{ChessError, Color, Coordinate, Outcome, Piece, PieceKind};

/// Display-facing board state: for each square, "empty" or kind + colour.
/// Row-major with row 0 (Black's home rank) first.
pub type Snapshot = [[Option<(Color, PieceKind)>; 8]; 8];

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// An 8×8 grid of optional piece occupants, indexed `squares[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Standard initial layout: Black on rows 0–1, White on rows 6–7.
    pub fn new() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Black, kind));
            board.squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        for col in 0..8 {
            board.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        board
    }

    /// A board with no pieces, for building test scenarios.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The occupant of a square, if any.
    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.squares[at.row() as usize][at.col() as usize]
    }

    /// Locate the king of a colour. `None` only on test boards built without
    /// one; a legal game always has exactly one king per side.
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        self.occupied_squares().find_map(|(at, piece)| {
            (piece.kind == PieceKind::King && piece.color == color).then_some(at)
        })
    }

    /// Is `square` attacked by any piece of the colour opposing `defender`?
    ///
    /// Scans every opposing piece and asks its legality predicate whether it
    /// could reach `square`. `check_mode` is forwarded into the predicates;
    /// king-safety callers pass `true` so that attacks on a king-occupied
    /// square are not suppressed by the no-king-capture base rule.
    pub fn is_square_attacked(&self, square: Coordinate, defender: Color, check_mode: bool) -> bool {
        self.occupied_squares().any(|(from, piece)| {
            piece.color != defender
                && rules::is_legal_move(&piece, from, square, self, piece.color, check_mode)
        })
    }

    /// Is the given side's king attacked? False when no king is on the board
    /// (possible only in test setups).
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color, true),
            None => false,
        }
    }

    /// Is the given side checkmated: in check with no legal response —
    /// no king move, block, or capture — that leaves the king safe?
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_escape(color)
    }

    /// Terminal-state query for the turn driver.
    pub fn outcome(&self) -> Outcome {
        if self.is_in_checkmate(Color::White) {
            Outcome::BlackWins
        } else if self.is_in_checkmate(Color::Black) {
            Outcome::WhiteWins
        } else {
            Outcome::Undetermined
        }
    }

    /// Display-facing state of every square.
    pub fn snapshot(&self) -> Snapshot {
        let mut grid: Snapshot = [[None; 8]; 8];
        for (at, piece) in self.occupied_squares() {
            grid[at.row() as usize][at.col() as usize] = Some((piece.color, piece.kind));
        }
        grid
    }

    /// Iterate all occupied squares with their pieces.
    fn occupied_squares(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| {
                let at = Coordinate::new(col, row);
                self.piece_at(at).map(|piece| (at, piece))
            })
        })
    }

    // -----------------------------------------------------------------------
    // Gameplay mutation
    // -----------------------------------------------------------------------

    /// Apply a move for `mover`, validating it against the occupant's
    /// legality predicate.
    ///
    /// On success the piece is relocated (capturing any enemy occupant, and
    /// performing the rook hop or en-passant removal for the compound moves)
    /// and its moved-flag set. On failure the board is left byte-for-byte
    /// unmodified.
    pub fn apply_move(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        mover: Color,
    ) -> Result<(), ChessError> {
        let piece = self.piece_at(from).ok_or(ChessError::InvalidSource(from))?;

        if !rules::is_legal_move(&piece, from, to, self, mover, false) {
            return Err(ChessError::IllegalMove {
                from,
                to,
                reason: format!("not a legal {} move for {mover}", piece.kind),
            });
        }

        // The opposing side's en-passant windows expire with this move.
        self.expire_en_passant(!mover);

        let double_push = piece.kind == PieceKind::Pawn
            && (to.row() as i8 - from.row() as i8).abs() == 2;

        self.apply_unchecked(from, to);

        if double_push {
            if let Some(pawn) = &mut self.squares[to.row() as usize][to.col() as usize] {
                pawn.en_passant_vulnerable = true;
            }
        }

        tracing::debug!(%from, %to, color = %mover, piece = %piece.kind, "applied move");
        Ok(())
    }

    /// Relocate a piece without consulting legality: clears the origin, sets
    /// the moved-flag, captures the destination occupant, and carries out
    /// the structural side effects of the compound moves (rook hop for
    /// castling, bypassed-pawn removal for en passant).
    ///
    /// Used by `apply_move` after validation and by the checkmate escape
    /// search on board clones.
    fn apply_unchecked(&mut self, from: Coordinate, to: Coordinate) {
        let mut piece = self.squares[from.row() as usize][from.col() as usize]
            .take()
            .expect("apply_unchecked requires an occupied origin");

        // En passant: a pawn landing diagonally on an empty square captures
        // the pawn it bypassed, which sits on the origin row.
        if piece.kind == PieceKind::Pawn
            && from.col() != to.col()
            && self.piece_at(to).is_none()
        {
            let bypassed = Coordinate::new(to.col(), from.row());
            self.squares[bypassed.row() as usize][bypassed.col() as usize] = None;
            tracing::debug!(captured = %bypassed, "en passant capture");
        }

        // Castling: a validated two-column king slide brings the rook to the
        // square adjacent to the king's destination, on the side it came from.
        if piece.kind == PieceKind::King && (to.col() as i8 - from.col() as i8).abs() == 2 {
            let kingside = to.col() > from.col();
            let rook_from = Coordinate::new(if kingside { 7 } else { 0 }, from.row());
            let rook_to = Coordinate::new(
                if kingside { to.col() - 1 } else { to.col() + 1 },
                from.row(),
            );
            let mut rook = self.squares[rook_from.row() as usize][rook_from.col() as usize]
                .take()
                .expect("castling validation guarantees the rook");
            rook.has_moved = true;
            self.squares[rook_to.row() as usize][rook_to.col() as usize] = Some(rook);
            tracing::debug!(%rook_from, %rook_to, "castling rook hop");
        }

        piece.has_moved = true;
        self.squares[to.row() as usize][to.col() as usize] = Some(piece);
    }

    /// Clear the en-passant vulnerability window on every pawn of a colour.
    fn expire_en_passant(&mut self, color: Color) {
        for row in &mut self.squares {
            for square in row.iter_mut() {
                if let Some(piece) = square {
                    if piece.color == color && piece.kind == PieceKind::Pawn {
                        piece.en_passant_vulnerable = false;
                    }
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Checkmate escape search
    // -----------------------------------------------------------------------

    /// Does any legal move by `color` leave its king out of check? Each
    /// candidate is tried on a clone of the board.
    fn has_escape(&self, color: Color) -> bool {
        for (from, piece) in self.occupied_squares() {
            if piece.color != color {
                continue;
            }
            for col in 0..8u8 {
                for row in 0..8u8 {
                    let to = Coordinate::new(col, row);
                    if !rules::is_legal_move(&piece, from, to, self, color, false) {
                        continue;
                    }
                    let mut trial = self.clone();
                    trial.apply_unchecked(from, to);
                    if !trial.is_in_check(color) {
                        tracing::trace!(%from, %to, "escape found");
                        return true;
                    }
                }
            }
        }
        false
    }

    // -----------------------------------------------------------------------
    // Test hooks — NOT part of gameplay
    // -----------------------------------------------------------------------

    /// Place a piece directly, bypassing legality. Test scaffolding only;
    /// gameplay goes through `apply_move`.
    pub fn place(&mut self, piece: Piece, at: Coordinate) {
        self.squares[at.row() as usize][at.col() as usize] = Some(piece);
    }

    /// Clear a square directly, bypassing legality. Test scaffolding only.
    pub fn clear_square(&mut self, at: Coordinate) {
        self.squares[at.row() as usize][at.col() as usize] = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Display (diagnostic grid, rank 8 at the top)
// ---------------------------------------------------------------------------

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let ch = match self.piece_at(Coordinate::new(col, row)) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                write!(f, "{ch}")?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
