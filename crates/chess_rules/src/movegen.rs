use crate::board::{Board, Occupancy};
use crate::check::attackers_of;
use crate::piece::Piece;
use crate::types::*;

/// Longest ray a sliding piece or charger examines.
pub const MAX_RAY_STEPS: i16 = 7;

// (file delta, rank delta); rank 0 is the north edge.
const EAST: (i16, i16) = (1, 0);
const SOUTH_EAST: (i16, i16) = (1, 1);
const NORTH_EAST: (i16, i16) = (1, -1);
const WEST: (i16, i16) = (-1, 0);
const SOUTH_WEST: (i16, i16) = (-1, 1);
const NORTH_WEST: (i16, i16) = (-1, -1);
const SOUTH: (i16, i16) = (0, 1);
const NORTH: (i16, i16) = (0, -1);

pub(crate) const ALL_DIRECTIONS: [(i16, i16); 8] = [
    EAST, SOUTH_EAST, NORTH_EAST, WEST, SOUTH_WEST, NORTH_WEST, SOUTH, NORTH,
];
const ORTHOGONAL: [(i16, i16); 4] = [EAST, WEST, SOUTH, NORTH];
const DIAGONAL: [(i16, i16); 4] = [SOUTH_EAST, NORTH_EAST, SOUTH_WEST, NORTH_WEST];
const LEAPER_DIRECTIONS: [(i16, i16); 4] = [EAST, SOUTH, WEST, NORTH];
const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// Moves of `piece` that do not leave its own king attacked.
pub fn legal_moves(board: &mut Board, piece: Piece) -> Vec<Coord> {
    let side = piece.side();
    let mut out = piece_moves(board, piece);
    // Filter illegal moves in-place by playing them on the board.
    out.retain(|&to| {
        let sim = board.simulate(piece.coord, to);
        attackers_of(&sim, side).is_empty()
    });
    out
}

/// Candidate moves, with king steps into attacked squares removed.
pub fn piece_moves(board: &mut Board, piece: Piece) -> Vec<Coord> {
    let mut out = candidate_moves(board, piece);
    if piece.is_king() {
        out.retain(|&to| !king_exposed(board, piece, to));
    }
    out
}

/// Geometric destinations only: bounds and occupancy, no check look-ahead.
pub fn candidate_moves(board: &Board, piece: Piece) -> Vec<Coord> {
    let mut out = Vec::with_capacity(16);
    let from = piece.coord;
    let side = piece.side();
    match piece.kind() {
        PieceKind::King => gen_king(board, from, side, &mut out),
        PieceKind::Queen => gen_slider(board, from, side, &ALL_DIRECTIONS, &mut out),
        PieceKind::Rook => gen_slider(board, from, side, &ORTHOGONAL, &mut out),
        PieceKind::Bishop => gen_slider(board, from, side, &DIAGONAL, &mut out),
        PieceKind::Knight => gen_knight(board, from, side, &mut out),
        PieceKind::Pawn => gen_pawn(board, from, side, &mut out),
        PieceKind::Leaper => gen_leaper(board, from, side, &mut out),
        PieceKind::Charger => gen_charger(board, from, side, &mut out),
    }
    out
}

/// True if `king` standing on `to` would be attacked.
///
/// Kings never appear in attacker lists, so the enemy king is tested by adjacency here.
pub(crate) fn king_exposed(board: &mut Board, king: Piece, to: Coord) -> bool {
    let side = king.side();
    let sim = board.simulate(king.coord, to);
    !attackers_of(&sim, side).is_empty() || enemy_king_adjacent(&sim, to, side)
}

fn enemy_king_adjacent(board: &Board, at: Coord, side: Side) -> bool {
    ALL_DIRECTIONS.iter().any(|&(df, dr)| {
        board
            .offset(at, df, dr)
            .and_then(|c| board.get(c))
            .is_some_and(|p| p.is_king() && p.side() != side)
    })
}

fn gen_king(board: &Board, from: Coord, side: Side, out: &mut Vec<Coord>) {
    for (df, dr) in ALL_DIRECTIONS {
        if let Some(to) = board.offset(from, df, dr)
            && board.occupancy(to, side) != Occupancy::Ally
        {
            out.push(to);
        }
    }
}

fn gen_knight(board: &Board, from: Coord, side: Side, out: &mut Vec<Coord>) {
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(to) = board.offset(from, df, dr)
            && board.occupancy(to, side) != Occupancy::Ally
        {
            out.push(to);
        }
    }
}

/// Rays are walked in lock-step, nearest squares first; each ray closes on its own blocker.
fn gen_slider(board: &Board, from: Coord, side: Side, dirs: &[(i16, i16)], out: &mut Vec<Coord>) {
    let mut open = [true; 8];
    for step in 1..=MAX_RAY_STEPS {
        for (i, &(df, dr)) in dirs.iter().enumerate() {
            if !open[i] {
                continue;
            }
            let Some(to) = board.offset(from, df * step, dr * step) else {
                open[i] = false;
                continue;
            };
            match board.occupancy(to, side) {
                Occupancy::Empty => out.push(to),
                Occupancy::Enemy => {
                    out.push(to);
                    open[i] = false;
                }
                Occupancy::Ally => open[i] = false,
            }
        }
    }
}

fn gen_pawn(board: &Board, from: Coord, side: Side, out: &mut Vec<Coord>) {
    let dir = side.forward();
    let start_rank: i16 = match side {
        Side::Black => 1,
        Side::White => board.rows() as i16 - 2,
    };

    // forward 1
    if let Some(to) = board.offset(from, 0, dir)
        && board.occupancy(to, side) == Occupancy::Empty
    {
        out.push(to);
    }

    // diagonal captures, east then west
    for df in [1, -1] {
        if let Some(to) = board.offset(from, df, dir)
            && board.occupancy(to, side) == Occupancy::Enemy
        {
            out.push(to);
        }
    }

    // forward 2 from start
    if from.rank as i16 == start_rank
        && let Some(mid) = board.offset(from, 0, dir)
        && let Some(to) = board.offset(from, 0, 2 * dir)
        && board.occupancy(mid, side) == Occupancy::Empty
        && board.occupancy(to, side) == Occupancy::Empty
    {
        out.push(to);
    }
}

fn gen_leaper(board: &Board, from: Coord, side: Side, out: &mut Vec<Coord>) {
    for (df, dr) in LEAPER_DIRECTIONS {
        let Some(step) = board.offset(from, df, dr) else {
            continue;
        };
        if board.occupancy(step, side) == Occupancy::Empty {
            out.push(step);
        }
        // Two squares out it may only capture, jumping whatever is in between.
        if let Some(leap) = board.offset(from, 2 * df, 2 * dr)
            && board.occupancy(leap, side) == Occupancy::Enemy
        {
            out.push(leap);
        }
    }
}

fn gen_charger(board: &Board, from: Coord, side: Side, out: &mut Vec<Coord>) {
    for (df, dr) in ALL_DIRECTIONS {
        if let Some(to) = charge(board, from, side, df, dr) {
            out.push(to);
        }
    }
}

/// Where a charger heading `(df, dr)` comes to rest, if anywhere.
///
/// It runs until something stops it: an enemy is captured in place, an ally halts it one
/// square short, the edge halts it on the last square. A ray cut off by `MAX_RAY_STEPS`
/// before any of these yields nothing.
fn charge(board: &Board, from: Coord, side: Side, df: i16, dr: i16) -> Option<Coord> {
    let mut reached = None;
    for step in 1..=MAX_RAY_STEPS + 1 {
        let Some(to) = board.offset(from, df * step, dr * step) else {
            return reached;
        };
        if step > MAX_RAY_STEPS {
            return None;
        }
        match board.occupancy(to, side) {
            Occupancy::Enemy => return Some(to),
            Occupancy::Ally => return reached,
            Occupancy::Empty => reached = Some(to),
        }
    }
    None
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
