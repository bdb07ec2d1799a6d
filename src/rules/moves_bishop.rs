use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::rules::shared::path_is_clear;

/// Bishop movement rule: a pure diagonal of nonzero length with every square
/// strictly between source and destination empty.
pub fn bishop_move_is_legal(
    source: &BoardLocation,
    destination: &BoardLocation,
    board: &Board,
) -> bool {
    let row_delta = destination.0 - source.0;
    let col_delta = destination.1 - source.1;
    if row_delta == 0 || row_delta.abs() != col_delta.abs() {
        return false;
    }
    path_is_clear(board, source, destination)
}
