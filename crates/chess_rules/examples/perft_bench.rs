//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth] [variant] [rows] [columns]
//!
//! Examples:
//!   # Default: depth 3, both variants on 8x8
//!   cargo flamegraph --example perft_bench -p chess_rules
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p chess_rules -- 4
//!
//!   # Single variant on a taller board
//!   cargo flamegraph --example perft_bench -p chess_rules -- 3 custom 10 8

use chess_rules::{Board, Side, Variant, perft};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
    let rows: u8 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(8);
    let columns: u8 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(8);

    let variants = match args.get(2).map(String::as_str) {
        Some("standard") => vec![Variant::Standard],
        Some("custom") => vec![Variant::Custom],
        Some(other) => {
            eprintln!("unknown variant {other:?}, expected standard or custom");
            std::process::exit(2);
        }
        None => vec![Variant::Standard, Variant::Custom],
    };

    println!("=== Perft Benchmark ===");
    println!("Depth: {depth}, board {rows}x{columns}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for variant in variants {
        let mut board = match Board::standard(rows, columns, variant) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        };

        print!("{:.<30}", format!("{variant:?}"));

        // Warm-up run at lower depth
        if depth > 2 {
            let _ = perft(&mut board, Side::White, depth.saturating_sub(2));
        }

        let start = Instant::now();
        let nodes = perft(&mut board, Side::White, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)", nps(nodes, elapsed));
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: std::time::Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
