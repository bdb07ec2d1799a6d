//! Seeded random self-play harness.
//!
//! Drives a `GameSession` with uniformly chosen legal moves until the game
//! ends or a ply cap is reached. Used for integration smoke tests, the
//! match-series binary, and benchmarks; the seed makes every playout
//! reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::game_state::game_session::{ClickOutcome, GameOutcome, GameSession};
use crate::rules::terminal_state::all_legal_moves;

/// How a playout stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Finished(GameOutcome),
    PlyLimitReached,
}

#[derive(Debug, Clone, Copy)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig {
            seed: 0,
            max_plies: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub plies_played: u16,
    pub final_session: GameSession,
}

/// Plays one seeded random game from the starting position.
pub fn play_random_game(config: &PlayoutConfig) -> Result<PlayoutResult, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut session = GameSession::new();
    let mut plies: u16 = 0;

    while plies < config.max_plies {
        if let Some(outcome) = session.outcome() {
            return Ok(PlayoutResult {
                outcome: PlayoutOutcome::Finished(outcome),
                plies_played: plies,
                final_session: session,
            });
        }

        let candidates = all_legal_moves(session.board(), session.turn());
        // The session only stays live while the side to move has a legal
        // move, so an empty candidate list is an engine defect.
        let Some((source, destination)) = candidates.choose(&mut rng).copied() else {
            return Err(ChessErrors::NoLegalMoves);
        };

        let selected = session.click(source)?;
        debug_assert!(matches!(selected, ClickOutcome::Selected(_)));
        session.click(destination)?;
        plies += 1;
    }

    if let Some(outcome) = session.outcome() {
        return Ok(PlayoutResult {
            outcome: PlayoutOutcome::Finished(outcome),
            plies_played: plies,
            final_session: session,
        });
    }

    Ok(PlayoutResult {
        outcome: PlayoutOutcome::PlyLimitReached,
        plies_played: plies,
        final_session: session,
    })
}
