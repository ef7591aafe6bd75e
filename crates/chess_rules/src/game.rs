use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::board::{Board, TurnRecord};
use crate::check::{GameStatus, classify};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::movegen::legal_moves;
use crate::types::*;

/// Result of a game, read off the last computed status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won(Side),
    Draw,
}

/// One game session: the board, whose turn it is, and the status computed for that side.
///
/// Turn order is driven by the caller: [`Game::apply_move`], then [`Game::advance_turn`],
/// then [`Game::refresh_status`]. [`Game::play`] does all three.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    status: GameStatus,
}

impl Game {
    /// Start position on a `rows x columns` board, White to move.
    pub fn new(rows: u8, columns: u8, variant: Variant) -> Result<Self, GameError> {
        let board = Board::standard(rows, columns, variant)?;
        Ok(Self::from_board(board, Side::White))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::new(config.rows, config.columns, config.variant)
    }

    /// Resume from an arbitrary position. Status starts as `Continue` until refreshed.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            status: GameStatus::Continue,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.status {
            GameStatus::Checkmate => GameOutcome::Won(self.side_to_move.other()),
            GameStatus::Stalemate => GameOutcome::Draw,
            GameStatus::Continue | GameStatus::Check => GameOutcome::InProgress,
        }
    }

    /// Legal destinations for the piece `id`.
    ///
    /// `None` if no such piece is on the board or it belongs to the side not on move.
    /// A piece that exists but cannot move gets `Some` of an empty list.
    pub fn legal_moves(&mut self, id: PieceId) -> Option<Vec<Coord>> {
        let piece = *self.board.get_by_id(id)?;
        if piece.side() != self.side_to_move {
            return None;
        }
        Some(legal_moves(&mut self.board, piece))
    }

    /// Every movable piece of the side to move with its legal destinations, board order.
    pub fn movable_pieces(&mut self) -> Vec<(PieceId, Vec<Coord>)> {
        self.board
            .pieces_of(self.side_to_move)
            .into_iter()
            .map(|p| (p.id, legal_moves(&mut self.board, p)))
            .filter(|(_, moves)| !moves.is_empty())
            .collect()
    }

    /// Moves `id` to `to`, capturing whatever stands there.
    ///
    /// Legality is not re-checked; pass a destination obtained from [`Game::legal_moves`].
    pub fn apply_move(&mut self, id: PieceId, to: Coord) -> Result<TurnRecord, GameError> {
        let from = self
            .board
            .get_by_id(id)
            .ok_or(GameError::PieceNotFound(id))?
            .coord;
        if !self.board.contains(to) {
            return Err(GameError::OffBoard(to));
        }
        let record = self.board.make_move(from, to);
        debug!(
            piece = %id,
            %from,
            %to,
            captured = ?record.captured.map(|p| p.id),
            "applied move"
        );
        Ok(record)
    }

    /// Index-based form: plays entry `entry` of a list returned by [`Game::legal_moves`].
    pub fn apply_move_at(
        &mut self,
        id: PieceId,
        entry: usize,
        moves: &[Coord],
    ) -> Result<TurnRecord, GameError> {
        let to = *moves.get(entry).ok_or(GameError::NoSuchEntry {
            entry,
            len: moves.len(),
        })?;
        self.apply_move(id, to)
    }

    pub fn advance_turn(&mut self) {
        self.side_to_move = self.side_to_move.other();
    }

    /// Recomputes the status for the side to move.
    pub fn refresh_status(&mut self) -> GameStatus {
        self.status = classify(&mut self.board, self.side_to_move);
        trace!(side = %self.side_to_move, status = ?self.status, "status refreshed");
        if self.status.is_terminal() {
            info!(side = %self.side_to_move, status = ?self.status, "game over");
        }
        self.status
    }

    /// Apply, hand the turn over and classify the new position.
    pub fn play(&mut self, id: PieceId, to: Coord) -> Result<(TurnRecord, GameStatus), GameError> {
        let record = self.apply_move(id, to)?;
        self.advance_turn();
        Ok((record, self.refresh_status()))
    }

    /// Takes back `record`, which must be the most recent move, and gives the turn back
    /// to the side that made it.
    pub fn undo(&mut self, record: &TurnRecord) {
        self.board.revert(record);
        self.side_to_move = record.moved.side();
        debug!(piece = %record.moved.id, from = %record.to, to = %record.from, "undid move");
        self.refresh_status();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
