//! A chess rules engine.
//!
//! Models an 8×8 board of piece instances, validates candidate moves against
//! per-piece movement rules, detects check and checkmate, and supports the
//! two cross-piece rules, castling and en passant. The engine is consumed
//! in-process by a turn driver that owns the [`Board`], feeds it coordinate
//! pairs, and renders the [`Board::snapshot`] — parsing, display, and the
//! turn loop itself live outside this crate.
//!
//! All queries are pure; the only gameplay mutation is [`Board::apply_move`],
//! which either applies the whole move (including the rook hop of castling
//! and the bypassed-pawn removal of en passant) or fails leaving the board
//! untouched.

pub mod board;
pub mod path;
pub mod rules;
pub mod types;

pub use board::{Board, Snapshot};
pub use rules::is_legal_move;
pub use types::{ChessError, Color, Coordinate, Outcome, Piece, PieceKind};
