//! Match runner for playing random players against each other

use chess_rules::{Game, GameError, GameOutcome, GameStatus, Side};
use random_player::RandomPlayer;
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::summary::{GameEnd, GameRecord, MatchSummary};

/// Runs a batch of self-play games
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every configured game and tally the results.
    ///
    /// Fails only if the configured board cannot hold the start position.
    pub fn run(&self) -> Result<MatchSummary, GameError> {
        let mut summary = MatchSummary::new(self.config.clone());
        let (mut white, mut black) = match self.config.seed {
            Some(seed) => (
                RandomPlayer::seeded(seed),
                RandomPlayer::seeded(seed.wrapping_add(1)),
            ),
            None => (RandomPlayer::new(), RandomPlayer::new()),
        };

        for game_num in 0..self.config.games {
            let record = self.play_game(&mut white, &mut black)?;
            summary.record(record);

            if self.config.verbose {
                let result = match record.outcome {
                    GameOutcome::Won(Side::White) => "1-0",
                    GameOutcome::Won(Side::Black) => "0-1",
                    GameOutcome::Draw | GameOutcome::InProgress => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({:?}, {} plies) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.games,
                    result,
                    record.end,
                    record.plies,
                    summary.white_wins,
                    summary.black_wins,
                    summary.draws
                );
            }
        }

        info!(
            games = summary.total_games(),
            white_wins = summary.white_wins,
            black_wins = summary.black_wins,
            draws = summary.draws,
            "match finished"
        );
        Ok(summary)
    }

    /// Play a single game from the configured start position
    pub fn play_game(
        &self,
        white: &mut RandomPlayer,
        black: &mut RandomPlayer,
    ) -> Result<GameRecord, GameError> {
        let mut game = Game::from_config(&self.config.game)?;
        game.refresh_status();

        let mut plies = 0;
        let end = loop {
            match game.status() {
                GameStatus::Checkmate => break GameEnd::Checkmate,
                GameStatus::Stalemate => break GameEnd::Stalemate,
                GameStatus::Continue | GameStatus::Check => {}
            }
            if plies >= self.config.max_plies {
                break GameEnd::PlyLimit;
            }

            let player = match game.side_to_move() {
                Side::White => &mut *white,
                Side::Black => &mut *black,
            };
            let Some((id, to)) = player.choose(&mut game) else {
                break GameEnd::NoLegalMoves;
            };
            game.play(id, to)?;
            plies += 1;
        };

        let outcome = match end {
            GameEnd::Checkmate => game.outcome(),
            GameEnd::Stalemate | GameEnd::NoLegalMoves | GameEnd::PlyLimit => GameOutcome::Draw,
        };
        debug!(?outcome, ?end, plies, "game finished");

        Ok(GameRecord {
            outcome,
            end,
            plies,
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
