//! Self-play runner for the rules engine
//!
//! This crate provides infrastructure for:
//! - Playing batches of games between two random players
//! - Summarising outcomes and game lengths
//! - Saving and reloading summaries as JSON
//!
//! # Usage
//!
//! ```bash
//! # Fifty custom-variant games with a fixed seed
//! cargo run -p selfplay -- --games 50 --variant custom --seed 7
//!
//! # Settings from a file, summary written out
//! cargo run -p selfplay -- --config selfplay.toml --out summary.json
//! ```

mod config;
mod match_runner;
mod summary;

pub use config::*;
pub use match_runner::*;
pub use summary::*;
