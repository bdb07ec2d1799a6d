//! Check detection.
//!
//! A king is in check when any enemy piece could legally move onto its
//! square. This is a one-ply attack query: the attacker's own check exposure
//! is ignored, exactly as the rules of chess require.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::rules::move_validator::is_legal;

/// Locates the king of `color`, scanning in row-major order. A well-formed
/// board holds exactly one king per color; this does not validate that.
pub fn find_king(board: &Board, color: Color) -> Option<BoardLocation> {
    board
        .pieces()
        .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
        .map(|(location, _)| location)
}

/// Returns true when the king of `color` is attacked by at least one enemy
/// piece. A board with no king of `color` reads as "not in check"; callers
/// must not rely on this to validate board well-formedness.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_location) = find_king(board, color) else {
        return false;
    };

    board.pieces().any(|(location, piece)| {
        piece.color == color.opposite() && is_legal(piece, &location, &king_location, board)
    })
}
