use crate::board_location::BoardLocation;
use crate::game_state::board::Board;

/// Returns true when every square strictly between `source` and
/// `destination` is empty. The endpoints themselves are not inspected.
///
/// Assumes the two squares share a rank, file, or diagonal; the per-piece
/// rules establish that before calling.
pub fn path_is_clear(board: &Board, source: &BoardLocation, destination: &BoardLocation) -> bool {
    let row_step = (destination.0 - source.0).signum();
    let col_step = (destination.1 - source.1).signum();

    let mut row = source.0 + row_step;
    let mut col = source.1 + col_step;
    while (row, col) != *destination {
        if board.piece_at(&(row, col)).is_some() {
            return false;
        }
        row += row_step;
        col += col_step;
    }

    true
}
