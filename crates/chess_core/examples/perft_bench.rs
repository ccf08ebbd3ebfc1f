//! Times `perft` over the regression positions.
//!
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! Given a FEN, only that position is counted and each root move's subtree
//! is listed first, which is how a movegen bug is narrowed down.

use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use chess_core::{Position, move_to_coord, perft, perft_divide};

const DEFAULT_DEPTH: u8 = 4;

const SUITE: [(&str, &str); 6] = [
    ("start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    ("kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
    ("rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    ("promotions", "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1"),
    ("checks", "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8"),
    ("middlegame", "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10"),
];

/// Nodes and wall time for one perft run.
fn timed(pos: &mut Position, depth: u8) -> (u64, Duration) {
    let start = Instant::now();
    let nodes = perft(pos, depth);
    (nodes, start.elapsed())
}

fn knps(nodes: u64, took: Duration) -> f64 {
    let secs = took.as_secs_f64();
    if secs == 0.0 { 0.0 } else { nodes as f64 / secs / 1000.0 }
}

fn divide(fen: &str, depth: u8) -> ExitCode {
    let mut pos = match Position::from_fen(fen) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut split = perft_divide(&mut pos, depth);
    split.sort_by_key(|(mv, _)| move_to_coord(*mv));
    for (mv, nodes) in &split {
        println!("{:<6}{nodes}", move_to_coord(*mv));
    }

    let (nodes, took) = timed(&mut pos, depth);
    println!("\n{} moves, {nodes} nodes, {took:.2?}, {:.0} knps", split.len(), knps(nodes, took));
    ExitCode::SUCCESS
}

fn suite(depth: u8) -> ExitCode {
    let mut nodes_sum = 0;
    let mut time_sum = Duration::ZERO;

    println!("perft depth {depth}");
    for (label, fen) in SUITE {
        let Ok(mut pos) = Position::from_fen(fen) else {
            eprintln!("{label}: unreadable FEN");
            return ExitCode::FAILURE;
        };
        let (nodes, took) = timed(&mut pos, depth);
        nodes_sum += nodes;
        time_sum += took;
        println!("  {label:<14}{nodes:>12}  {took:>10.2?}  {:>8.0} knps", knps(nodes, took));
    }
    println!("  {:<14}{nodes_sum:>12}  {time_sum:>10.2?}  {:>8.0} knps", "all", knps(nodes_sum, time_sum));
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let depth = args
        .next()
        .and_then(|d| d.parse().ok())
        .unwrap_or(DEFAULT_DEPTH);

    match args.next() {
        Some(fen) => divide(&fen, depth),
        None => suite(depth),
    }
}
