use crate::board_location::BoardLocation;

/// Knight movement rule: the absolute (row, column) deltas must be a
/// permutation of (1, 2). Knights jump, so occupancy between source and
/// destination never matters.
pub fn knight_move_is_legal(source: &BoardLocation, destination: &BoardLocation) -> bool {
    let row_delta = (destination.0 - source.0).abs();
    let col_delta = (destination.1 - source.1).abs();
    (row_delta == 2 && col_delta == 1) || (row_delta == 1 && col_delta == 2)
}
