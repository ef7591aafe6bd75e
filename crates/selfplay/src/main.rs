//! Self-play CLI
//!
//! Plays random games on the rules engine and reports how they ended.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chess_rules::Variant;
use selfplay::{MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--games N] [--seed S] [--variant V] [--out FILE]");
    println!();
    println!("Options:");
    println!("  --config, -c FILE   TOML match settings (flags below override it)");
    println!("  --games, -g N       Number of games");
    println!("  --seed, -s S        Seed for reproducible games");
    println!("  --variant, -v V     standard | custom");
    println!("  --out, -o FILE      Write the summary as JSON");
    println!();
    println!("Logging is controlled by RUST_LOG, e.g. RUST_LOG=chess_rules=debug");
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    games: Option<u32>,
    seed: Option<u64>,
    variant: Option<Variant>,
    out: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "--help" | "-h" | "help") {
            parsed.help = true;
            i += 1;
            continue;
        }
        let Some(value) = args.get(i + 1) else {
            bail!("{flag} needs a value");
        };
        match flag {
            "--config" | "-c" => parsed.config = Some(PathBuf::from(value)),
            "--games" | "-g" => {
                parsed.games = Some(
                    value
                        .parse()
                        .with_context(|| format!("bad game count {value:?}"))?,
                )
            }
            "--seed" | "-s" => {
                parsed.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("bad seed {value:?}"))?,
                )
            }
            "--variant" | "-v" => {
                parsed.variant = Some(match value.to_lowercase().as_str() {
                    "standard" => Variant::Standard,
                    "custom" => Variant::Custom,
                    _ => bail!("unknown variant {value:?}, expected standard or custom"),
                })
            }
            "--out" | "-o" => parsed.out = Some(PathBuf::from(value)),
            _ => bail!("unknown option {flag:?}"),
        }
        i += 2;
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e:#}");
            print_usage();
            std::process::exit(2);
        }
    };
    if args.help {
        print_usage();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(variant) = args.variant {
        config.game.variant = variant;
    }

    println!(
        "=== Self-play: {} games, {:?} on {}x{} ===",
        config.games, config.game.variant, config.game.rows, config.game.columns
    );
    println!();

    let runner = MatchRunner::new(config);
    let summary = runner.run().context("could not set up the board")?;

    println!();
    summary.print_report();

    if let Some(out) = &args.out {
        summary
            .save(out)
            .with_context(|| format!("failed to write summary to {}", out.display()))?;
        println!("Summary written to {}", out.display());
    }

    Ok(())
}
