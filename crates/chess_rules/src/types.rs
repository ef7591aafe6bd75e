use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePieceIdError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
    pub fn from_idx(idx: usize) -> Option<Side> {
        match idx {
            0 => Some(Side::Black),
            1 => Some(Side::White),
            _ => None,
        }
    }
    /// Rank delta of a pawn advance. Black starts on rank 0 and moves down the board.
    pub fn forward(self) -> i16 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    Leaper,
    Charger,
}

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::Leaper,
        PieceKind::Charger,
    ];

    /// One-character tag used in piece ids. Knight is `k`, King is `K`.
    pub fn tag(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'k',
            PieceKind::Pawn => 'p',
            PieceKind::Leaper => 'l',
            PieceKind::Charger => 'c',
        }
    }

    pub fn from_tag(tag: char) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

/// A board square. `file` indexes columns, `rank` indexes rows; rank 0 is Black's home edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub file: u8,
    pub rank: u8,
}

impl Coord {
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// Stable handle for a piece: side, kind and instance number.
///
/// Written as `<side><tag><number>`, e.g. `0p3` for Black pawn #3 or `1K0` for the White king.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub side: Side,
    pub kind: PieceKind,
    pub number: u8,
}

impl PieceId {
    pub const fn new(side: Side, kind: PieceKind, number: u8) -> Self {
        Self { side, kind, number }
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.side.idx(), self.kind.tag(), self.number)
    }
}

impl FromStr for PieceId {
    type Err = ParsePieceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(side_ch), Some(tag)) = (chars.next(), chars.next()) else {
            return Err(ParsePieceIdError::Malformed(s.to_string()));
        };
        let side = side_ch
            .to_digit(10)
            .and_then(|d| Side::from_idx(d as usize))
            .ok_or(ParsePieceIdError::Side(side_ch))?;
        let kind = PieceKind::from_tag(tag).ok_or(ParsePieceIdError::Tag(tag))?;
        // `u8::from_str` also takes a leading `+`, which would not survive a round trip.
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePieceIdError::Malformed(s.to_string()));
        }
        let number = digits
            .parse()
            .map_err(|_| ParsePieceIdError::Malformed(s.to_string()))?;
        Ok(PieceId { side, kind, number })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Knights and a queen.
    #[default]
    Standard,
    /// Leapers in place of knights, a charger in place of the queen.
    Custom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_id_text_round_trip() {
        for text in ["0p3", "1K0", "1c0", "0l12", "1p255"] {
            let id: PieceId = text.parse().unwrap();
            assert_eq!(id.to_string(), text);
        }
    }

    #[test]
    fn test_piece_id_rejects_non_digit_number() {
        for text in ["0p+3", "0p", "0p-1", "0p 3", "0p3x", "0p256"] {
            assert_eq!(
                text.parse::<PieceId>(),
                Err(ParsePieceIdError::Malformed(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_piece_id_rejects_bad_side_and_tag() {
        assert_eq!("2p0".parse::<PieceId>(), Err(ParsePieceIdError::Side('2')));
        assert_eq!("0x0".parse::<PieceId>(), Err(ParsePieceIdError::Tag('x')));
        assert!("".parse::<PieceId>().is_err());
    }
}
