//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! match-series binary in text environments.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;

// Indexed by [color][kind] in `index()` order.
const PIECE_GLYPHS: [[char; 6]; 2] = [
    ['♙', '♘', '♗', '♖', '♕', '♔'],
    ['♟', '♞', '♝', '♜', '♛', '♚'],
];

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 of the board prints as rank 8 at the top, matching the view from
/// white's side of the table.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank_label = char::from(b'8' - row as u8);
        out.push(rank_label);
        out.push(' ');

        for col in 0..8i8 {
            match board.piece_at(&(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    PIECE_GLYPHS[piece.color.index()][piece.kind.index()]
}
