use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Coord, PieceId};

/// Errors a caller can provoke through the game interface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no piece with id {0} on the board")]
    PieceNotFound(PieceId),

    #[error("coordinate {0} is off the board")]
    OffBoard(Coord),

    #[error("move entry {entry} out of range for {len} listed moves")]
    NoSuchEntry { entry: usize, len: usize },

    #[error("a {rows}x{columns} board cannot hold the start position (need at least 4x8)")]
    InvalidDimensions { rows: u8, columns: u8 },
}

/// A stored board whose cells do not describe a valid grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("a {rows}x{columns} board needs {expected} cells, found {found}")]
    CellCount {
        rows: u8,
        columns: u8,
        expected: usize,
        found: usize,
    },

    #[error("piece {id} is stored at {stored} but sits in cell {cell}")]
    Misplaced { id: PieceId, stored: Coord, cell: Coord },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePieceIdError {
    #[error("piece id must look like <side><tag><number>, got {0:?}")]
    Malformed(String),

    #[error("unknown side digit {0:?}")]
    Side(char),

    #[error("unknown piece tag {0:?}")]
    Tag(char),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
