//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by board editing,
//! placement parsing, and game-session logic. The five rules queries
//! (`is_legal`, `is_in_check`, `has_legal_moves`, `is_checkmate`,
//! `is_stalemate`) are total boolean functions and never return errors;
//! `ChessErrors` covers the fallible surfaces around them.

use std::error::Error;
use std::fmt;

use crate::board_location::BoardLocation;

/// Unified error type for the crate.
///
/// Each variant corresponds to a specific, identifiable failure mode in
/// board manipulation, placement parsing, or session handling. Variants
/// carry contextual payloads where useful so callers can log or display
/// precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Attempted to offset a location from `BoardLocation` by `(d_row, d_col)`
    /// which would place it off the board.
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// A caller supplied a location outside the 8x8 board.
    LocationOffBoard(BoardLocation),

    /// Attempted to place a piece on a square that already holds one.
    BoardLocationOccupied(BoardLocation),

    /// Attempted to remove a piece from an empty square.
    CannotRemoveFromEmptyLocation(BoardLocation),

    /// Attempted to view or move from a square that is empty.
    TryToViewOrEditEmptySquare(BoardLocation),

    /// A single character in a placement string named no piece.
    InvalidPlacementToken(char),

    /// A placement string had malformed structure (wrong rank count or
    /// rank width). Payload: the original offending string.
    InvalidPlacementForm(String),

    /// No legal moves exist for the side to move. Indicates checkmate or
    /// stalemate was missed by an upstream terminal check.
    NoLegalMoves,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::TriedToMoveOutOfBounds((x, d_row, d_col)) => {
                write!(
                    f,
                    "offset ({d_row}, {d_col}) from ({}, {}) leaves the board",
                    x.0, x.1
                )
            }
            ChessErrors::LocationOffBoard(x) => {
                write!(f, "location ({}, {}) is off the board", x.0, x.1)
            }
            ChessErrors::BoardLocationOccupied(x) => {
                write!(f, "square ({}, {}) is already occupied", x.0, x.1)
            }
            ChessErrors::CannotRemoveFromEmptyLocation(x) => {
                write!(f, "cannot remove a piece from empty square ({}, {})", x.0, x.1)
            }
            ChessErrors::TryToViewOrEditEmptySquare(x) => {
                write!(f, "square ({}, {}) holds no piece", x.0, x.1)
            }
            ChessErrors::InvalidPlacementToken(token) => {
                write!(f, "invalid placement token '{token}'")
            }
            ChessErrors::InvalidPlacementForm(text) => {
                write!(f, "malformed placement string \"{text}\"")
            }
            ChessErrors::NoLegalMoves => {
                write!(f, "no legal moves available for the side to move")
            }
        }
    }
}

impl Error for ChessErrors {}
