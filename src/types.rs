//! Core value types: colours, piece kinds, coordinates, piece instances,
//! game outcomes, and the engine error taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The rank index pawns of this colour start on.
    /// Row 0 is Black's home rank, row 7 is White's.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Forward direction for pawns: White advances toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Single uppercase letter for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A board square as a (column, row) pair, each in 0..=7.
///
/// Column 0 is file 'a'. Row 0 is Black's home rank (rank 8), row 7 is
/// White's home rank (rank 1), so White pawns advance toward decreasing row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    col: u8,
    row: u8,
}

impl Coordinate {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < 8 && row < 8, "coordinate out of range: ({col},{row})");
        Coordinate { col, row }
    }

    /// Range-checked constructor; fails closed on out-of-range input.
    pub fn try_new(col: u8, row: u8) -> Result<Self, ChessError> {
        if col < 8 && row < 8 {
            Ok(Coordinate { col, row })
        } else {
            Err(ChessError::MalformedCoordinate(format!("({col},{row})")))
        }
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Parse a square name like "e4". Diagnostic/test convenience — move
    /// notation parsing proper belongs to the turn driver.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if col < 8 && rank < 8 {
            Some(Coordinate { col, row: 7 - rank })
        } else {
            None
        }
    }

    /// Square name like "e4".
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'1' + (7 - self.row)) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A piece instance on the board.
///
/// The same logical piece is relocated across moves; it is never destroyed
/// and recreated except on capture. `has_moved` gates the pawn double-step
/// and castling eligibility; `en_passant_vulnerable` is set for exactly the
/// window between a pawn's two-square opening move and the opposing side's
/// next completed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
    pub en_passant_vulnerable: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            has_moved: false,
            en_passant_vulnerable: false,
        }
    }

    /// Board-display letter (uppercase white, lowercase black).
    pub fn to_char(self) -> char {
        self.kind.to_char(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Terminal-state query result for the turn driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Undetermined,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "white_wins",
            Outcome::BlackWins => "black_wins",
            Outcome::Undetermined => "undetermined",
        }
    }

    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undetermined)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the rules engine.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// The move fails the relevant piece's legality predicate. Recoverable:
    /// the board is guaranteed unmodified and the caller may re-prompt.
    #[error("illegal move: {from} -> {to}: {reason}")]
    IllegalMove {
        from: Coordinate,
        to: Coordinate,
        reason: String,
    },

    /// No piece exists at the claimed origin square. A caller/input error,
    /// distinct from a rule violation.
    #[error("no piece at source square {0}")]
    InvalidSource(Coordinate),

    /// Coordinate input outside the 8×8 range.
    #[error("malformed coordinate: {0}")]
    MalformedCoordinate(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn pawn_geometry_per_color() {
        assert_eq!(Color::White.pawn_start_row(), 6);
        assert_eq!(Color::Black.pawn_start_row(), 1);
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
    }

    #[test]
    fn piece_kind_chars() {
        assert_eq!(PieceKind::King.to_char(Color::White), 'K');
        assert_eq!(PieceKind::King.to_char(Color::Black), 'k');
        assert_eq!(PieceKind::Knight.to_char(Color::White), 'N');
        assert_eq!(PieceKind::Pawn.to_char(Color::Black), 'p');
    }

    #[test]
    fn piece_kind_all_covers_every_kind() {
        assert_eq!(PieceKind::ALL.len(), 6);
        for kind in PieceKind::ALL {
            assert!(PieceKind::ALL.contains(&kind));
        }
    }

    #[test]
    fn coordinate_accessors() {
        let c = Coordinate::new(3, 5);
        assert_eq!(c.col(), 3);
        assert_eq!(c.row(), 5);
    }

    #[test]
    fn coordinate_try_new_rejects_out_of_range() {
        assert!(Coordinate::try_new(8, 0).is_err());
        assert!(Coordinate::try_new(0, 8).is_err());
        assert!(Coordinate::try_new(255, 255).is_err());
        assert!(Coordinate::try_new(7, 7).is_ok());
    }

    #[test]
    fn coordinate_from_algebraic() {
        // a8 is Black's corner: column 0, row 0.
        assert_eq!(Coordinate::from_algebraic("a8"), Some(Coordinate::new(0, 0)));
        // h1 is White's corner: column 7, row 7.
        assert_eq!(Coordinate::from_algebraic("h1"), Some(Coordinate::new(7, 7)));
        assert_eq!(Coordinate::from_algebraic("e4"), Some(Coordinate::new(4, 4)));
        assert_eq!(Coordinate::from_algebraic("e2"), Some(Coordinate::new(4, 6)));
    }

    #[test]
    fn coordinate_from_algebraic_invalid() {
        assert_eq!(Coordinate::from_algebraic(""), None);
        assert_eq!(Coordinate::from_algebraic("a"), None);
        assert_eq!(Coordinate::from_algebraic("a9"), None);
        assert_eq!(Coordinate::from_algebraic("i1"), None);
        assert_eq!(Coordinate::from_algebraic("abc"), None);
    }

    #[test]
    fn coordinate_algebraic_round_trip() {
        for col in 0..8 {
            for row in 0..8 {
                let c = Coordinate::new(col, row);
                assert_eq!(Coordinate::from_algebraic(&c.to_algebraic()), Some(c));
            }
        }
    }

    #[test]
    fn coordinate_display() {
        assert_eq!(Coordinate::new(4, 6).to_string(), "e2");
        assert_eq!(Coordinate::new(0, 0).to_string(), "a8");
    }

    #[test]
    fn new_piece_is_unmoved() {
        let p = Piece::new(Color::White, PieceKind::Rook);
        assert!(!p.has_moved);
        assert!(!p.en_passant_vulnerable);
        assert_eq!(p.to_char(), 'R');
    }

    #[test]
    fn outcome_strings() {
        assert_eq!(Outcome::WhiteWins.as_str(), "white_wins");
        assert_eq!(Outcome::BlackWins.as_str(), "black_wins");
        assert_eq!(Outcome::Undetermined.as_str(), "undetermined");
        assert!(Outcome::WhiteWins.is_decided());
        assert!(!Outcome::Undetermined.is_decided());
    }

    #[test]
    fn error_messages_name_the_squares() {
        let err = ChessError::IllegalMove {
            from: Coordinate::new(4, 6),
            to: Coordinate::new(4, 3),
            reason: "blocked path".into(),
        };
        assert_eq!(err.to_string(), "illegal move: e2 -> e5: blocked path");

        let err = ChessError::InvalidSource(Coordinate::new(0, 0));
        assert_eq!(err.to_string(), "no piece at source square a8");
    }

    #[test]
    fn color_serde_round_trip() {
        let json = serde_json::to_string(&Color::White).unwrap();
        assert_eq!(json, "\"White\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::White);
    }
}
