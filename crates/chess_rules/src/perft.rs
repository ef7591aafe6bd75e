use crate::{board::Board, movegen::legal_moves, types::Side};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, `side` moving first.
pub fn perft(board: &mut Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for piece in board.pieces_of(side) {
        for to in legal_moves(board, piece) {
            if depth == 1 {
                nodes += 1;
                continue;
            }
            let mut sim = board.simulate(piece.coord, to);
            nodes += perft(&mut sim, side.other(), depth - 1);
        }
    }
    nodes
}
