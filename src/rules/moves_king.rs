use crate::board_location::BoardLocation;

/// King movement rule: at most one square in any direction. No castling.
///
/// The zero-length move is rejected upstream by the validator, so this
/// predicate only sees distinct squares.
pub fn king_move_is_legal(source: &BoardLocation, destination: &BoardLocation) -> bool {
    (destination.0 - source.0).abs() <= 1 && (destination.1 - source.1).abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_square_in_any_direction() {
        let source = (4, 4);
        let mut targets = 0;
        for row in 0..8i8 {
            for col in 0..8i8 {
                if (row, col) != source && king_move_is_legal(&source, &(row, col)) {
                    targets += 1;
                }
            }
        }
        assert_eq!(targets, 8);
        assert!(!king_move_is_legal(&source, &(4, 6)));
        assert!(!king_move_is_legal(&source, &(2, 4)));
    }
}
