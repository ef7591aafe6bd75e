//! Match summary storage and reporting

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use chess_rules::{GameOutcome, Side};

use crate::config::MatchConfig;

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    Checkmate,
    Stalemate,
    /// Not stalemate by the king-mobility rule, yet nothing can move.
    NoLegalMoves,
    PlyLimit,
}

/// A single finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub end: GameEnd,
    pub plies: u32,
}

/// Totals for a whole match, plus every game's record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub config: MatchConfig,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid summary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatchSummary {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            white_wins: 0,
            black_wins: 0,
            draws: 0,
            games: Vec::new(),
        }
    }

    /// Add a finished game
    pub fn record(&mut self, game: GameRecord) {
        match game.outcome {
            GameOutcome::Won(Side::White) => self.white_wins += 1,
            GameOutcome::Won(Side::Black) => self.black_wins += 1,
            GameOutcome::Draw | GameOutcome::InProgress => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws
    }

    pub fn average_plies(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.games.iter().map(|g| g.plies as f64).sum::<f64>() / self.games.len() as f64
    }

    fn count_end(&self, end: GameEnd) -> usize {
        self.games.iter().filter(|g| g.end == end).count()
    }

    /// Save summary to JSON file
    pub fn save(&self, path: &Path) -> Result<(), SummaryError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SummaryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load summary from JSON file
    pub fn load(path: &Path) -> Result<Self, SummaryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SummaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let game = &self.config.game;
        report.push_str(&format!(
            "=== Self-play: {:?} on {}x{} ===\n\n",
            game.variant, game.rows, game.columns
        ));
        report.push_str(&format!(
            "Games: {}, ply limit {}, seed {}\n\n",
            self.total_games(),
            self.config.max_plies,
            self.config
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string())
        ));

        report.push_str(&format!("{:<16} {:>6}\n", "Result", "Count"));
        report.push_str(&"-".repeat(23));
        report.push('\n');
        report.push_str(&format!("{:<16} {:>6}\n", "White wins", self.white_wins));
        report.push_str(&format!("{:<16} {:>6}\n", "Black wins", self.black_wins));
        report.push_str(&format!("{:<16} {:>6}\n", "Draws", self.draws));
        report.push('\n');

        report.push_str(&format!("{:<16} {:>6}\n", "Ended by", "Count"));
        report.push_str(&"-".repeat(23));
        report.push('\n');
        for (label, end) in [
            ("Checkmate", GameEnd::Checkmate),
            ("Stalemate", GameEnd::Stalemate),
            ("No legal moves", GameEnd::NoLegalMoves),
            ("Ply limit", GameEnd::PlyLimit),
        ] {
            report.push_str(&format!("{:<16} {:>6}\n", label, self.count_end(end)));
        }
        report.push_str(&format!("\nAverage length: {:.1} plies\n", self.average_plies()));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
