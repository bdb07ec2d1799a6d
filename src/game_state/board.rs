//! 8x8 mailbox board state.
//!
//! `Board` is the central model of the crate: a plain grid of optional
//! pieces with value-equality semantics. Cloning is cheap and structural,
//! which makes the simulate-then-discard pattern used by check probing an
//! explicit, auditable operation.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Piece, PieceKind};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board snapshot. Row 0 is black's back rank, row 7 is white's.
///
/// The board never tracks whose turn it is; side-to-move belongs to the
/// owning `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// An empty board, for scenario construction.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial arrangement.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for col in 0..8i8 {
            let kind = BACK_RANK[col as usize];
            board.squares[0][col as usize] = Some(Piece::new(Color::Black, kind));
            board.squares[1][col as usize] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][col as usize] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][col as usize] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    /// The piece on a square, if any. The location must be on the board.
    #[inline]
    pub fn piece_at(&self, x: &BoardLocation) -> Option<Piece> {
        self.squares[x.0 as usize][x.1 as usize]
    }

    /// Places a piece on an empty square.
    pub fn place_piece(&mut self, x: BoardLocation, piece: Piece) -> Result<(), ChessErrors> {
        let square = &mut self.squares[x.0 as usize][x.1 as usize];
        if square.is_some() {
            return Err(ChessErrors::BoardLocationOccupied(x));
        }
        *square = Some(piece);
        Ok(())
    }

    /// Removes and returns the piece on a square.
    pub fn remove_piece(&mut self, x: BoardLocation) -> Result<Piece, ChessErrors> {
        self.squares[x.0 as usize][x.1 as usize]
            .take()
            .ok_or(ChessErrors::CannotRemoveFromEmptyLocation(x))
    }

    /// Moves the piece on `source` to `destination`, returning any captured
    /// piece. This is the only mutation a committed move performs.
    pub fn apply_move(
        &mut self,
        source: BoardLocation,
        destination: BoardLocation,
    ) -> Result<Option<Piece>, ChessErrors> {
        let piece = self.squares[source.0 as usize][source.1 as usize]
            .take()
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(source))?;
        Ok(self.squares[destination.0 as usize][destination.1 as usize].replace(piece))
    }

    /// An independent scratch copy with the move applied, for check-safety
    /// probing. Whatever sits on `source` (possibly nothing) lands on
    /// `destination`; the original board is never touched.
    pub fn with_move_applied(&self, source: BoardLocation, destination: BoardLocation) -> Board {
        let mut scratch = self.clone();
        let piece = scratch.squares[source.0 as usize][source.1 as usize].take();
        scratch.squares[destination.0 as usize][destination.1 as usize] = piece;
        scratch
    }

    /// Iterates over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                self.squares[row as usize][col as usize].map(|piece| ((row, col), piece))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_pieces() -> Result<(), ChessErrors> {
        let mut dut = Board::empty();
        dut.place_piece((3, 3), Piece::new(Color::White, PieceKind::Pawn))?;
        assert!(dut
            .place_piece((3, 3), Piece::new(Color::Black, PieceKind::Rook))
            .is_err());
        let removed = dut.remove_piece((3, 3))?;
        assert_eq!(removed.kind, PieceKind::Pawn);
        assert!(dut.remove_piece((3, 3)).is_err());
        Ok(())
    }

    #[test]
    fn new_game_matches_the_standard_arrangement() {
        let board = Board::new_game();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.piece_at(&(0, 4)),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(&(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        for col in 0..8i8 {
            assert_eq!(
                board.piece_at(&(6, col)),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
            assert_eq!(board.piece_at(&(4, col)), None);
        }
    }

    #[test]
    fn scratch_copies_never_touch_the_original() {
        let board = Board::new_game();
        let scratch = board.with_move_applied((6, 4), (4, 4));
        assert_eq!(board, Board::new_game());
        assert_ne!(scratch, board);
        assert_eq!(scratch.piece_at(&(6, 4)), None);
        assert_eq!(
            scratch.piece_at(&(4, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn apply_move_reports_captures() -> Result<(), ChessErrors> {
        let mut board = Board::empty();
        board.place_piece((4, 4), Piece::new(Color::White, PieceKind::Rook))?;
        board.place_piece((4, 7), Piece::new(Color::Black, PieceKind::Knight))?;
        let captured = board.apply_move((4, 4), (4, 7))?;
        assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(board.apply_move((4, 4), (4, 0)).is_err());
        Ok(())
    }
}
