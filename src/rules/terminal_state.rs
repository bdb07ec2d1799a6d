//! Terminal-state evaluation: legal-move existence, checkmate, stalemate.
//!
//! Exhaustively enumerates (source, destination) pairs in row-major order,
//! validates each with the move validator, and probes check safety on an
//! independent scratch copy of the board. The first safe move short-circuits
//! the enumeration; the live board is never touched.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::rules::check_detector::is_in_check;
use crate::rules::move_validator::is_legal;

/// The first full-legal move for `color` in row-major (source, destination)
/// scan order, or `None` when no legal move exists.
pub fn first_legal_move(
    board: &Board,
    color: Color,
) -> Option<(BoardLocation, BoardLocation)> {
    for (source, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for row in 0..8i8 {
            for col in 0..8i8 {
                let destination = (row, col);
                if !is_legal(piece, &source, &destination, board) {
                    continue;
                }
                let scratch = board.with_move_applied(source, destination);
                if !is_in_check(&scratch, color) {
                    return Some((source, destination));
                }
            }
        }
    }
    None
}

/// Returns true when `color` has at least one move that is rules-legal and
/// does not leave its own king in check.
pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    first_legal_move(board, color).is_some()
}

/// Checkmate: in check with no legal move.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_moves(board, color)
}

/// Stalemate: not in check, yet no legal move.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_legal_moves(board, color)
}

/// Every full-legal destination for the piece on `source`. Empty when the
/// square is empty. This is the query a selection UI needs to highlight
/// where a picked-up piece may go.
pub fn legal_moves_from(board: &Board, source: &BoardLocation) -> Vec<BoardLocation> {
    let Some(piece) = board.piece_at(source) else {
        return Vec::new();
    };

    let mut destinations = Vec::new();
    for row in 0..8i8 {
        for col in 0..8i8 {
            let destination = (row, col);
            if is_legal(piece, source, &destination, board)
                && !is_in_check(&board.with_move_applied(*source, destination), piece.color)
            {
                destinations.push(destination);
            }
        }
    }
    destinations
}

/// Every full-legal (source, destination) pair for `color`.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<(BoardLocation, BoardLocation)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .flat_map(|(source, _)| {
            legal_moves_from(board, &source)
                .into_iter()
                .map(move |destination| (source, destination))
        })
        .collect()
}
