//! Piece-placement parser for board construction.
//!
//! Reads the board field of Forsyth-Edwards Notation (eight rank groups
//! separated by '/', listed from black's back rank down) and produces a
//! `Board`. Only piece placement is understood; side-to-move, castling,
//! en passant, and the clocks are not part of this crate's model.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};

/// Builds a board from a placement string such as
/// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
///
/// Uppercase letters are white pieces, lowercase black; digits skip empty
/// squares. Every rank group must describe exactly eight columns.
pub fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
    }

    let mut board = Board::empty();
    for (row, row_text) in rows.iter().enumerate() {
        let mut col: i8 = 0;
        for token in row_text.chars() {
            if let Some(skip) = token.to_digit(10) {
                col += skip as i8;
                continue;
            }
            if col > 7 {
                return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
            }
            board.place_piece((row as i8, col), piece_from_token(token)?)?;
            col += 1;
        }
        if col != 8 {
            return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
        }
    }

    Ok(board)
}

fn piece_from_token(token: char) -> Result<Piece, ChessErrors> {
    let color = if token.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match token.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ChessErrors::InvalidPlacementToken(token)),
    };
    Ok(Piece::new(color, kind))
}
