use crate::board_location::{offset_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

/// Pawn movement rule for a single proposed move.
///
/// One straight step onto an empty square, a double step from the starting
/// rank over an empty intermediate square onto an empty destination, or a
/// one-square diagonal step only as a capture. No en passant, no promotion.
pub fn pawn_move_is_legal(
    color: Color,
    source: &BoardLocation,
    destination: &BoardLocation,
    board: &Board,
) -> bool {
    let forward = color.forward_direction();
    let row_delta = destination.0 - source.0;
    let col_delta = destination.1 - source.1;
    let destination_occupied = board.piece_at(destination).is_some();

    // Single straight advance.
    if col_delta == 0 && row_delta == forward && !destination_occupied {
        return true;
    }

    // Double advance from the starting rank; the jumped square must be empty.
    if col_delta == 0
        && row_delta == 2 * forward
        && source.0 == color.pawn_start_row()
        && !destination_occupied
    {
        if let Ok(jumped) = offset_location(source, forward, 0) {
            if board.piece_at(&jumped).is_none() {
                return true;
            }
        }
        return false;
    }

    // Diagonal step, legal only as a capture.
    col_delta.abs() == 1 && row_delta == forward && destination_occupied
}
