//! Random move player
//!
//! Picks uniformly among every (piece, destination) pair the side to move can play.
//! Useful for:
//! - Driving self-play games without any evaluation
//! - Stress testing move generation and status detection

use chess_rules::{Coord, Game, PieceId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;


/// A player that moves at random. Seed it for reproducible games.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A legal move for the side to move, or `None` if it has none.
    pub fn choose(&mut self, game: &mut Game) -> Option<(PieceId, Coord)> {
        let moves: Vec<(PieceId, Coord)> = game
            .movable_pieces()
            .into_iter()
            .flat_map(|(id, dests)| dests.into_iter().map(move |to| (id, to)))
            .collect();

        moves.choose(&mut self.rng).copied()
    }
}
