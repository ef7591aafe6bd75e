use serde::{Deserialize, Serialize};

use crate::types::*;

/// A piece on a board. The `coord` always matches the cell the board stores it in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub coord: Coord,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind, number: u8, coord: Coord) -> Self {
        Self {
            id: PieceId::new(side, kind, number),
            coord,
        }
    }

    pub fn king(side: Side, coord: Coord) -> Self {
        Self::new(side, PieceKind::King, 0, coord)
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.id.side
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.id.kind
    }

    pub fn is_king(&self) -> bool {
        self.id.kind == PieceKind::King
    }
}
