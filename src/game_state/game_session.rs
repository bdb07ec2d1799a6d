//! Whole-game state machine driven by square clicks.
//!
//! `GameSession` owns the live board and the side to move. A presentation
//! layer translates pointer events into board locations and feeds them to
//! `click`; the session answers with what happened so the front end can
//! redraw, and parks itself in a terminal phase once the rules engine
//! reports checkmate or stalemate. Only `reset` leaves a terminal phase.

use crate::board_location::{is_on_board, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};
use crate::rules::check_detector::is_in_check;
use crate::rules::move_validator::is_legal;
use crate::rules::terminal_state::{is_checkmate, is_stalemate};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
}

/// Where the session stands between clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No piece is picked up; the next click may select one.
    AwaitingSelection,
    /// A piece of the side to move is picked up at this square.
    PieceSelected(BoardLocation),
    /// The game is over; clicks are ignored until `reset`.
    GameOver(GameOutcome),
}

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click hit nothing actionable (empty square, enemy piece, or a
    /// finished game).
    Ignored,
    /// A piece of the side to move was selected.
    Selected(BoardLocation),
    /// The candidate move was rejected and the selection dropped.
    Deselected,
    /// A move committed; the turn has passed to the opponent.
    Moved {
        source: BoardLocation,
        destination: BoardLocation,
        captured: Option<Piece>,
    },
    /// A move committed and ended the game.
    GameEnded(GameOutcome),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    phase: SessionPhase,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Fresh game: standard board, white to move.
    pub fn new() -> Self {
        GameSession {
            board: Board::new_game(),
            turn: Color::White,
            phase: SessionPhase::AwaitingSelection,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The outcome once the session is in a terminal phase.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            SessionPhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Discards the current game and starts over.
    pub fn reset(&mut self) {
        *self = GameSession::new();
    }

    /// Feeds one clicked square to the state machine.
    ///
    /// Selecting requires a piece of the side to move. With a piece
    /// selected, a click commits the move when it is rules-legal and a
    /// simulated copy shows the mover's own king stays safe; any other
    /// click drops the selection. After a commit the turn flips and the
    /// terminal-state evaluator decides whether the game is over.
    pub fn click(&mut self, location: BoardLocation) -> Result<ClickOutcome, ChessErrors> {
        if !is_on_board(&location) {
            return Err(ChessErrors::LocationOffBoard(location));
        }

        match self.phase {
            SessionPhase::GameOver(_) => Ok(ClickOutcome::Ignored),
            SessionPhase::AwaitingSelection => match self.board.piece_at(&location) {
                Some(piece) if piece.color == self.turn => {
                    self.phase = SessionPhase::PieceSelected(location);
                    Ok(ClickOutcome::Selected(location))
                }
                _ => Ok(ClickOutcome::Ignored),
            },
            SessionPhase::PieceSelected(source) => self.try_commit(source, location),
        }
    }

    fn try_commit(
        &mut self,
        source: BoardLocation,
        destination: BoardLocation,
    ) -> Result<ClickOutcome, ChessErrors> {
        self.phase = SessionPhase::AwaitingSelection;

        let piece = self
            .board
            .piece_at(&source)
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(source))?;

        let rules_legal = is_legal(piece, &source, &destination, &self.board);
        let king_safe = rules_legal
            && !is_in_check(&self.board.with_move_applied(source, destination), self.turn);
        if !king_safe {
            return Ok(ClickOutcome::Deselected);
        }

        let captured = self.board.apply_move(source, destination)?;
        self.turn = self.turn.opposite();

        if is_checkmate(&self.board, self.turn) {
            let outcome = match self.turn {
                Color::White => GameOutcome::BlackWinCheckmate,
                Color::Black => GameOutcome::WhiteWinCheckmate,
            };
            self.phase = SessionPhase::GameOver(outcome);
            return Ok(ClickOutcome::GameEnded(outcome));
        }
        if is_stalemate(&self.board, self.turn) {
            self.phase = SessionPhase::GameOver(GameOutcome::DrawStalemate);
            return Ok(ClickOutcome::GameEnded(GameOutcome::DrawStalemate));
        }

        Ok(ClickOutcome::Moved {
            source,
            destination,
            captured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    fn play(session: &mut GameSession, source: BoardLocation, destination: BoardLocation) {
        let selected = session.click(source).expect("selection click should succeed");
        assert!(matches!(selected, ClickOutcome::Selected(_)), "{selected:?}");
        let moved = session.click(destination).expect("move click should succeed");
        assert!(
            matches!(moved, ClickOutcome::Moved { .. } | ClickOutcome::GameEnded(_)),
            "{moved:?}"
        );
    }

    #[test]
    fn selection_requires_a_piece_of_the_side_to_move() -> Result<(), ChessErrors> {
        let mut session = GameSession::new();
        assert_eq!(session.click((4, 4))?, ClickOutcome::Ignored);
        assert_eq!(session.click((1, 0))?, ClickOutcome::Ignored);
        assert_eq!(session.click((6, 4))?, ClickOutcome::Selected((6, 4)));
        Ok(())
    }

    #[test]
    fn a_committed_move_flips_the_turn() -> Result<(), ChessErrors> {
        let mut session = GameSession::new();
        play(&mut session, (6, 4), (4, 4));
        assert_eq!(session.turn(), Color::Black);
        assert_eq!(session.board().piece_at(&(6, 4)), None);
        assert_eq!(
            session.board().piece_at(&(4, 4)).map(|piece| piece.kind),
            Some(PieceKind::Pawn)
        );
        Ok(())
    }

    #[test]
    fn an_illegal_destination_deselects() -> Result<(), ChessErrors> {
        let mut session = GameSession::new();
        session.click((6, 4))?;
        assert_eq!(session.click((3, 4))?, ClickOutcome::Deselected);
        assert_eq!(session.phase(), SessionPhase::AwaitingSelection);
        assert_eq!(session.turn(), Color::White);
        assert_eq!(session.board(), &Board::new_game());
        Ok(())
    }

    #[test]
    fn clicking_another_own_piece_deselects() -> Result<(), ChessErrors> {
        let mut session = GameSession::new();
        session.click((6, 4))?;
        assert_eq!(session.click((6, 5))?, ClickOutcome::Deselected);
        Ok(())
    }

    #[test]
    fn a_move_that_exposes_the_own_king_is_rejected() -> Result<(), ChessErrors> {
        let mut session = GameSession::new();
        // After 1. e4 e5 2. Qh5 the black f-pawn may not advance: it would
        // open the h5-e8 diagonal onto its own king.
        play(&mut session, (6, 4), (4, 4));
        play(&mut session, (1, 4), (3, 4));
        play(&mut session, (7, 3), (3, 7));
        session.click((1, 5))?;
        assert_eq!(session.click((2, 5))?, ClickOutcome::Deselected);
        assert_eq!(session.turn(), Color::Black);
        Ok(())
    }

    #[test]
    fn fools_mate_ends_the_session_in_checkmate() -> Result<(), ChessErrors> {
        let mut session = GameSession::new();
        play(&mut session, (6, 5), (5, 5));
        play(&mut session, (1, 4), (3, 4));
        play(&mut session, (6, 6), (4, 6));
        session.click((0, 3))?;
        let ending = session.click((4, 7))?;
        assert_eq!(ending, ClickOutcome::GameEnded(GameOutcome::BlackWinCheckmate));
        assert_eq!(session.phase(), SessionPhase::GameOver(GameOutcome::BlackWinCheckmate));
        assert_eq!(session.outcome(), Some(GameOutcome::BlackWinCheckmate));
        // Terminal phases ignore further clicks until reset.
        assert_eq!(session.click((6, 0))?, ClickOutcome::Ignored);
        session.reset();
        assert_eq!(session.turn(), Color::White);
        assert_eq!(session.board(), &Board::new_game());
        Ok(())
    }

    #[test]
    fn off_board_clicks_are_a_caller_error() {
        let mut session = GameSession::new();
        assert_eq!(
            session.click((8, 0)),
            Err(ChessErrors::LocationOffBoard((8, 0)))
        );
    }
}
