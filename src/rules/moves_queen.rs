use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::rules::moves_bishop::bishop_move_is_legal;
use crate::rules::moves_rook::rook_move_is_legal;

/// Queen movement rule: the union of the rook and bishop rules.
pub fn queen_move_is_legal(
    source: &BoardLocation,
    destination: &BoardLocation,
    board: &Board,
) -> bool {
    rook_move_is_legal(source, destination, board)
        || bishop_move_is_legal(source, destination, board)
}
