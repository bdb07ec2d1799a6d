//! Runs a short series of seeded random self-play games and prints each
//! outcome with the final board. A quick end-to-end exercise of the rules
//! engine and session state machine from the terminal.

use parlor_chess::game_state::game_session::GameOutcome;
use parlor_chess::utils::match_harness::{play_random_game, PlayoutConfig, PlayoutOutcome};
use parlor_chess::utils::render_board::render_board;

fn main() {
    let games: u64 = std::env::args()
        .nth(1)
        .and_then(|text| text.parse().ok())
        .unwrap_or(5);

    let mut white_wins = 0u32;
    let mut black_wins = 0u32;
    let mut stalemates = 0u32;
    let mut unfinished = 0u32;

    for seed in 0..games {
        let config = PlayoutConfig {
            seed,
            max_plies: 300,
        };
        match play_random_game(&config) {
            Ok(result) => {
                println!(
                    "game {seed}: {:?} after {} plies",
                    result.outcome, result.plies_played
                );
                match result.outcome {
                    PlayoutOutcome::Finished(GameOutcome::WhiteWinCheckmate) => {
                        white_wins += 1;
                        println!("{}", render_board(result.final_session.board()));
                    }
                    PlayoutOutcome::Finished(GameOutcome::BlackWinCheckmate) => {
                        black_wins += 1;
                        println!("{}", render_board(result.final_session.board()));
                    }
                    PlayoutOutcome::Finished(GameOutcome::DrawStalemate) => {
                        stalemates += 1;
                        println!("{}", render_board(result.final_session.board()));
                    }
                    PlayoutOutcome::PlyLimitReached => unfinished += 1,
                }
            }
            Err(error) => {
                eprintln!("game {seed} failed: {error}");
            }
        }
    }

    println!(
        "series: {games} games, white {white_wins}, black {black_wins}, \
         stalemate {stalemates}, ply-limit {unfinished}"
    );
}
