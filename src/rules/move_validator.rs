//! Single-move legality, the rules-only contract.
//!
//! Decides whether one proposed move obeys the moving piece's movement and
//! occupancy rules on the given board snapshot. Pure function of its inputs;
//! whether the move exposes the mover's own king is layered on by callers
//! through the check detector.

use crate::board_location::{is_on_board, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::rules::moves_bishop::bishop_move_is_legal;
use crate::rules::moves_king::king_move_is_legal;
use crate::rules::moves_knight::knight_move_is_legal;
use crate::rules::moves_pawn::pawn_move_is_legal;
use crate::rules::moves_queen::queen_move_is_legal;
use crate::rules::moves_rook::rook_move_is_legal;

/// Returns true when `piece` may move from `source` to `destination` on
/// `board` under its movement and occupancy rules alone.
///
/// Total over all `(i8, i8)` inputs: off-board endpoints and the zero-length
/// move are illegal. A same-color piece on the destination is illegal for
/// every kind, before any per-kind rule runs.
pub fn is_legal(
    piece: Piece,
    source: &BoardLocation,
    destination: &BoardLocation,
    board: &Board,
) -> bool {
    if !is_on_board(source) || !is_on_board(destination) {
        return false;
    }
    if source == destination {
        return false;
    }
    if let Some(target) = board.piece_at(destination) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_is_legal(piece.color, source, destination, board),
        PieceKind::Knight => knight_move_is_legal(source, destination),
        PieceKind::Bishop => bishop_move_is_legal(source, destination, board),
        PieceKind::Rook => rook_move_is_legal(source, destination, board),
        PieceKind::Queen => queen_move_is_legal(source, destination, board),
        PieceKind::King => king_move_is_legal(source, destination),
    }
}
