//! Standalone perft driver: counts leaf nodes at a fixed depth from a given
//! position, optionally broken down per root move or by move category.
//!
//! Usage:
//!   perft <depth> [fen...]                 total node count
//!   perft --divide <depth> [fen...]        per-root-move breakdown
//!   perft --breakdown <depth> [fen...]     captures/ep/castles/promotions/checks/mates
//!   perft --hashed <depth> [fen...]        total node count, transposition-memoized
//!
//! With no fen, the standard starting position is used.

use chessboard_core::board::Board;
use chessboard_core::logger;
use chessboard_core::moves::magic::loader::load_magic_tables;
use chessboard_core::moves::perft::{
    PerftCounters, perft, perft_divide, perft_count_with_breakdown, perft_hashed,
};
use std::collections::HashMap;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

fn main() -> ExitCode {
    logger::init_logging("logs/perft.log", "perft=info");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: perft [--divide|--breakdown|--hashed] <depth> [fen...]");
        return ExitCode::FAILURE;
    }

    let mut mode = Mode::Total;
    let mut rest = args.as_slice();
    match rest[0].as_str() {
        "--divide" => {
            mode = Mode::Divide;
            rest = &rest[1..];
        }
        "--breakdown" => {
            mode = Mode::Breakdown;
            rest = &rest[1..];
        }
        "--hashed" => {
            mode = Mode::Hashed;
            rest = &rest[1..];
        }
        _ => {}
    }

    let Some((depth_str, fen_parts)) = rest.split_first() else {
        eprintln!("missing depth argument");
        return ExitCode::FAILURE;
    };

    let depth: u32 = match depth_str.parse() {
        Ok(d) => d,
        Err(_) => {
            eprintln!("'{depth_str}' is not a valid depth");
            return ExitCode::FAILURE;
        }
    };

    let mut board = if fen_parts.is_empty() {
        Board::new()
    } else {
        match Board::from_str(&fen_parts.join(" ")) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("invalid fen: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let tables = load_magic_tables();
    let start = Instant::now();

    match mode {
        Mode::Total => {
            let nodes = perft(&mut board, &tables, depth);
            println!("{nodes}");
        }
        Mode::Divide => {
            perft_divide(&mut board, &tables, depth);
        }
        Mode::Breakdown => {
            let mut counters = PerftCounters::zero();
            perft_count_with_breakdown(&mut board, &tables, depth, &mut counters);
            print_breakdown(&counters);
        }
        Mode::Hashed => {
            let mut cache: HashMap<(u64, u32), u64> = HashMap::new();
            let nodes = perft_hashed(&mut board, &tables, depth, &mut cache);
            println!("{nodes}");
            eprintln!("cache entries: {}", cache.len());
        }
    }

    eprintln!("elapsed: {:.3}s", start.elapsed().as_secs_f64());
    ExitCode::SUCCESS
}

enum Mode {
    Total,
    Divide,
    Breakdown,
    Hashed,
}

fn print_breakdown(c: &PerftCounters) {
    println!("nodes:      {}", c.nodes);
    println!("captures:   {}", c.captures);
    println!("ep:         {}", c.ep_captures);
    println!("castles:    {}", c.castles);
    println!("promotions: {}", c.promotions);
    println!("checks:     {}", c.checks);
    println!("checkmates: {}", c.checkmates);
}
