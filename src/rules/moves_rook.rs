use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::rules::shared::path_is_clear;

/// Rook movement rule: a pure horizontal or vertical line with every square
/// strictly between source and destination empty.
pub fn rook_move_is_legal(
    source: &BoardLocation,
    destination: &BoardLocation,
    board: &Board,
) -> bool {
    if source.0 != destination.0 && source.1 != destination.1 {
        return false;
    }
    path_is_clear(board, source, destination)
}
