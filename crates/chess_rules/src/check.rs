//! Check detection and end-of-game classification.
//!
//! Everything here works by simulation: a candidate move is played on the board through
//! `Board::simulate`, the attacker list is recomputed, and the guard puts the board back.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::movegen::{ALL_DIRECTIONS, candidate_moves, king_exposed, piece_moves};
use crate::piece::Piece;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Continue,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Enemy pieces, other than the king, whose candidate moves reach `side`'s king.
///
/// Returns an empty list when `side` has no king on the board.
pub fn attackers_of(board: &Board, side: Side) -> Vec<Piece> {
    let Some(king) = board.king(side) else {
        return Vec::new();
    };
    board
        .pieces()
        .filter(|p| p.side() != side && !p.is_king())
        .filter(|p| candidate_moves(board, **p).contains(&king.coord))
        .copied()
        .collect()
}

pub fn in_check(board: &Board, side: Side) -> bool {
    !attackers_of(board, side).is_empty()
}

/// True if some move by `side` leaves its king with no attackers.
pub fn can_defend(board: &mut Board, side: Side) -> bool {
    for defender in board.pieces_of(side) {
        for to in piece_moves(board, defender) {
            let sim = board.simulate(defender.coord, to);
            if attackers_of(&sim, side).is_empty() {
                return true;
            }
        }
    }
    false
}

/// Squares around `side`'s king it could stand on without being attacked.
///
/// Occupancy is ignored: a friendly piece on a neighbouring square is displaced for the
/// test. This is the mobility used for stalemate.
pub fn king_escapes(board: &mut Board, side: Side) -> Vec<Coord> {
    let Some(king) = board.king(side) else {
        return Vec::new();
    };
    let neighbours: Vec<Coord> = ALL_DIRECTIONS
        .iter()
        .filter_map(|&(df, dr)| board.offset(king.coord, df, dr))
        .collect();
    neighbours
        .into_iter()
        .filter(|&to| !king_exposed(board, king, to))
        .collect()
}

pub fn classify(board: &mut Board, side: Side) -> GameStatus {
    let Some(king) = board.king(side) else {
        return GameStatus::Continue;
    };

    if attackers_of(board, side).is_empty() {
        return if king_escapes(board, side).is_empty() {
            GameStatus::Stalemate
        } else {
            GameStatus::Continue
        };
    }

    if !piece_moves(board, king).is_empty() || can_defend(board, side) {
        GameStatus::Check
    } else {
        GameStatus::Checkmate
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
