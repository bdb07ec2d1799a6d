use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parlor_chess::game_state::board::Board;
use parlor_chess::game_state::chess_types::Color;
use parlor_chess::rules::check_detector::is_in_check;
use parlor_chess::rules::terminal_state::{all_legal_moves, has_legal_moves};
use parlor_chess::utils::match_harness::{play_random_game, PlayoutConfig};
use parlor_chess::utils::placement_parser::parse_placement;

fn bench_rules_queries(c: &mut Criterion) {
    let startpos = Board::new_game();
    // Sparse late-game position: long sliding scans, few pieces.
    let endgame = parse_placement("4r2k/8/8/3Q4/8/8/8/4K3")
        .expect("endgame placement should parse");

    c.bench_function("is_in_check_startpos", |b| {
        b.iter(|| is_in_check(black_box(&startpos), Color::White))
    });

    c.bench_function("has_legal_moves_startpos", |b| {
        b.iter(|| has_legal_moves(black_box(&startpos), Color::White))
    });

    c.bench_function("all_legal_moves_endgame", |b| {
        b.iter(|| all_legal_moves(black_box(&endgame), Color::White))
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("random_playout_120_plies", |b| {
        b.iter(|| {
            play_random_game(black_box(&PlayoutConfig {
                seed: 0,
                max_plies: 120,
            }))
        })
    });
}

criterion_group!(benches, bench_rules_queries, bench_playout);
criterion_main!(benches);
