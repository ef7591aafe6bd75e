//! Rules engine for chess on rectangular boards, with two custom pieces.
//!
//! The [`Leaper`](PieceKind::Leaper) steps one square orthogonally onto an empty square, or
//! jumps two squares orthogonally to capture. The [`Charger`](PieceKind::Charger) runs in any
//! of the eight directions until it captures an enemy, halts in front of an ally, or reaches
//! the edge.
//!
//! [`Game`] is the session-level entry point; the free functions in [`movegen`] and [`check`]
//! work directly on a [`Board`].

pub mod board;
pub mod check;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod piece;
pub mod types;

// Re-export the rules surface
pub use board::*;
pub use check::*;
pub use config::GameConfig;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use piece::Piece;
pub use types::*;
