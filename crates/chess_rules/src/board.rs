use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GridError};
use crate::piece::Piece;
use crate::types::*;

/// What stands on a square, seen from one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Ally,
    Enemy,
}

/// Everything needed to take a move back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub from: Coord,
    pub to: Coord,
    /// The mover as it stood on `from`.
    pub moved: Piece,
    pub captured: Option<Piece>,
}

/// Full copy of a board's cells, for callers keeping their own history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct BoardSnapshot {
    rows: u8,
    columns: u8,
    cells: Vec<Option<Piece>>,
}

/// Fixed-size grid of optional pieces. Cells are stored rank-major.
///
/// Every stored piece's `coord` names the cell it sits in; deserialization rejects
/// input that breaks this or has the wrong number of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Board {
    rows: u8,
    columns: u8,
    cells: Vec<Option<Piece>>,
}

/// Serialized form shared by [`Board`] and [`BoardSnapshot`], checked before use.
#[derive(Deserialize)]
struct RawGrid {
    rows: u8,
    columns: u8,
    cells: Vec<Option<Piece>>,
}

impl RawGrid {
    fn validate(&self) -> Result<(), GridError> {
        let expected = self.rows as usize * self.columns as usize;
        if self.cells.len() != expected {
            return Err(GridError::CellCount {
                rows: self.rows,
                columns: self.columns,
                expected,
                found: self.cells.len(),
            });
        }
        for (i, piece) in self.cells.iter().enumerate() {
            let Some(piece) = piece else { continue };
            let cell = Coord::new(
                (i % self.columns as usize) as u8,
                (i / self.columns as usize) as u8,
            );
            if piece.coord != cell {
                return Err(GridError::Misplaced {
                    id: piece.id,
                    stored: piece.coord,
                    cell,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<RawGrid> for Board {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        raw.validate()?;
        Ok(Board {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
        })
    }
}

impl TryFrom<RawGrid> for BoardSnapshot {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        raw.validate()?;
        Ok(BoardSnapshot {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
        })
    }
}

impl Board {
    pub fn new(rows: u8, columns: u8) -> Self {
        Board {
            rows,
            columns,
            cells: vec![None; rows as usize * columns as usize],
        }
    }

    /// Start position. Black occupies ranks 0 and 1, White the last two ranks.
    pub fn standard(rows: u8, columns: u8, variant: Variant) -> Result<Self, GameError> {
        if rows < 4 || columns < 8 {
            return Err(GameError::InvalidDimensions { rows, columns });
        }
        let mut b = Board::new(rows, columns);

        let (minor, major) = match variant {
            Variant::Standard => (PieceKind::Knight, PieceKind::Queen),
            Variant::Custom => (PieceKind::Leaper, PieceKind::Charger),
        };
        // (file, kind, instance number)
        let back = [
            (0, PieceKind::Rook, 0),
            (1, minor, 0),
            (2, PieceKind::Bishop, 0),
            (3, major, 0),
            (4, PieceKind::King, 0),
            (5, PieceKind::Bishop, 1),
            (6, minor, 1),
            (7, PieceKind::Rook, 1),
        ];

        for side in [Side::Black, Side::White] {
            let (home, pawn_rank) = match side {
                Side::Black => (0, 1),
                Side::White => (rows - 1, rows - 2),
            };
            for file in 0..8 {
                let at = Coord::new(file, pawn_rank);
                b.place(Piece::new(side, PieceKind::Pawn, file, at), at);
            }
            for (file, kind, number) in back {
                let at = Coord::new(file, home);
                b.place(Piece::new(side, kind, number, at), at);
            }
        }
        Ok(b)
    }

    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.file < self.columns && c.rank < self.rows
    }

    /// Bounds-checked coordinate from signed components.
    pub fn coord(&self, file: i16, rank: i16) -> Option<Coord> {
        if (0..self.columns as i16).contains(&file) && (0..self.rows as i16).contains(&rank) {
            Some(Coord::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn offset(&self, from: Coord, df: i16, dr: i16) -> Option<Coord> {
        self.coord(from.file as i16 + df, from.rank as i16 + dr)
    }

    fn index(&self, c: Coord) -> usize {
        assert!(
            self.contains(c),
            "coordinate {c} is off the {}x{} board",
            self.rows,
            self.columns
        );
        c.rank as usize * self.columns as usize + c.file as usize
    }

    pub fn get(&self, c: Coord) -> Option<&Piece> {
        self.cells[self.index(c)].as_ref()
    }

    /// Linear scan for the piece carrying `id`.
    pub fn get_by_id(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|p| p.id == id)
    }

    /// Puts `piece` on `c`, replacing any occupant, and moves its coordinate along.
    pub fn place(&mut self, mut piece: Piece, c: Coord) {
        let i = self.index(c);
        piece.coord = c;
        self.cells[i] = Some(piece);
    }

    pub fn remove(&mut self, c: Coord) -> Option<Piece> {
        let i = self.index(c);
        self.cells[i].take()
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// All pieces, rank by rank.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten()
    }

    pub fn pieces_of(&self, side: Side) -> Vec<Piece> {
        self.pieces().filter(|p| p.side() == side).copied().collect()
    }

    pub fn king(&self, side: Side) -> Option<Piece> {
        self.pieces()
            .find(|p| p.side() == side && p.is_king())
            .copied()
    }

    pub fn occupancy(&self, c: Coord, side: Side) -> Occupancy {
        match self.get(c) {
            None => Occupancy::Empty,
            Some(p) if p.side() == side => Occupancy::Ally,
            Some(_) => Occupancy::Enemy,
        }
    }

    pub fn make_move(&mut self, from: Coord, to: Coord) -> TurnRecord {
        let moved = self.remove(from).expect("no piece on from-square");
        let captured = self.remove(to);
        self.place(moved, to);
        TurnRecord {
            from,
            to,
            moved,
            captured,
        }
    }

    pub fn revert(&mut self, record: &TurnRecord) {
        self.remove(record.to);
        if let Some(captured) = record.captured {
            self.place(captured, record.to);
        }
        self.place(record.moved, record.from);
    }

    /// Plays `from -> to` until the returned guard is dropped.
    ///
    /// The guard dereferences to the board in its simulated state, and dropping it
    /// restores both touched cells. Nested simulations must be dropped before the
    /// outer one, which the borrow checker enforces.
    ///
    /// Crate-internal: changes made through the guard beyond the simulated move are not
    /// undone. Outside the crate use [`Board::make_move`] with [`Board::revert`], or
    /// [`Board::snapshot`] with [`Board::restore`].
    ///
    /// ```compile_fail
    /// use chess_rules::{Board, Coord, Variant};
    ///
    /// let mut b = Board::standard(8, 8, Variant::Standard).unwrap();
    /// let _sim = b.simulate(Coord::new(4, 6), Coord::new(4, 4));
    /// ```
    pub(crate) fn simulate(&mut self, from: Coord, to: Coord) -> Simulation<'_> {
        let record = self.make_move(from, to);
        Simulation {
            board: self,
            record,
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: BoardSnapshot) {
        assert!(
            snapshot.rows == self.rows && snapshot.columns == self.columns,
            "snapshot of a {}x{} board restored onto a {}x{} board",
            snapshot.rows,
            snapshot.columns,
            self.rows,
            self.columns
        );
        assert_eq!(snapshot.cells.len(), self.cells.len(), "snapshot cell count");
        self.cells = snapshot.cells;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..self.rows {
            for file in 0..self.columns {
                if file > 0 {
                    f.write_str(" ")?;
                }
                match self.get(Coord::new(file, rank)) {
                    Some(p) => write!(f, "{}{}", p.side().idx(), p.kind().tag())?,
                    None => f.write_str("..")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A move applied for inspection only; reverted on drop.
pub(crate) struct Simulation<'a> {
    board: &'a mut Board,
    record: TurnRecord,
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Simulation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.revert(&self.record);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
