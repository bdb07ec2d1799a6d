use crate::chess_errors::ChessErrors;

/// A board coordinate as (row, column).
///
/// Row 0 is black's back rank, row 7 is white's back rank. Both indices
/// range over `0..=7` on a well-formed location.
pub type BoardLocation = (i8, i8);

/// Returns true when both coordinates fall on the board.
#[inline]
pub fn is_on_board(x: &BoardLocation) -> bool {
    (0..=7).contains(&x.0) && (0..=7).contains(&x.1)
}

/// Moves a board location by a row and column offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - The new board location if within
///   bounds, otherwise an error.
pub fn offset_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if !is_on_board(&y) {
        Err(ChessErrors::TriedToMoveOutOfBounds((*x, d_row, d_col)))
    } else {
        Ok(y)
    }
}
