//! End-of-game detection through the session interface.
//!
//! Covers:
//! - Checkmate, including a full game from the start position
//! - Stalemate
//! - Check given by the custom pieces

use chess_rules::{Board, Coord, Game, GameOutcome, GameStatus, Piece, PieceId, Side, Variant};

fn id(s: &str) -> PieceId {
    s.parse().unwrap()
}

fn position(pieces: &[(&str, u8, u8)], to_move: Side) -> Game {
    let mut board = Board::new(8, 8);
    for &(name, file, rank) in pieces {
        let at = Coord::new(file, rank);
        let pid = id(name);
        board.place(Piece::new(pid.side, pid.kind, pid.number, at), at);
    }
    let mut game = Game::from_board(board, to_move);
    game.refresh_status();
    game
}

/// Plays entry `entry` of the piece's legal move list, the way a numbered move menu would.
fn play_entry(game: &mut Game, piece: &str, entry: usize) -> GameStatus {
    let pid = id(piece);
    let moves = game.legal_moves(pid).expect("piece should belong to the side to move");
    game.apply_move_at(pid, entry, &moves).unwrap();
    game.advance_turn();
    game.refresh_status()
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_fools_mate() {
    let mut game = Game::new(8, 8, Variant::Standard).unwrap();

    assert_eq!(play_entry(&mut game, "1p5", 0), GameStatus::Continue);
    assert_eq!(game.board().get_by_id(id("1p5")).unwrap().coord, Coord::new(5, 5));

    assert_eq!(play_entry(&mut game, "0p4", 1), GameStatus::Continue);
    assert_eq!(game.board().get_by_id(id("0p4")).unwrap().coord, Coord::new(4, 3));

    assert_eq!(play_entry(&mut game, "1p6", 1), GameStatus::Continue);
    assert_eq!(game.board().get_by_id(id("1p6")).unwrap().coord, Coord::new(6, 4));

    assert_eq!(
        game.legal_moves(id("0Q0")),
        Some(vec![Coord::new(4, 1), Coord::new(5, 2), Coord::new(6, 3), Coord::new(7, 4)])
    );
    assert_eq!(play_entry(&mut game, "0Q0", 3), GameStatus::Checkmate);

    assert_eq!(game.side_to_move(), Side::White);
    assert_eq!(game.outcome(), GameOutcome::Won(Side::Black));
    assert!(game.movable_pieces().is_empty());
}

#[test]
fn test_rook_mate_on_edge() {
    let game = position(&[("0K0", 7, 3), ("1K0", 5, 3), ("1r0", 7, 7)], Side::Black);
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.outcome(), GameOutcome::Won(Side::White));
}

#[test]
fn test_rook_and_knight_mate() {
    let game = position(
        &[("0K0", 7, 1), ("0p6", 6, 1), ("1k0", 4, 1), ("1r0", 7, 3)],
        Side::Black,
    );
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn test_check_is_not_mate_when_king_can_step_aside() {
    let mut game = position(&[("0K0", 4, 0), ("1r0", 4, 7), ("1K0", 0, 7)], Side::Black);
    assert_eq!(game.status(), GameStatus::Check);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(
        game.legal_moves(id("0K0")),
        Some(vec![Coord::new(5, 0), Coord::new(5, 1), Coord::new(3, 0), Coord::new(3, 1)])
    );
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let game = position(&[("0K0", 7, 0), ("1K0", 5, 1), ("1Q0", 6, 2)], Side::Black);
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert_eq!(game.outcome(), GameOutcome::Draw);
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let game = position(&[("0K0", 5, 0), ("1K0", 5, 2), ("1p5", 5, 1)], Side::Black);
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn test_stalemate_with_pinned_bishop() {
    let mut game = position(
        &[("0K0", 0, 0), ("0b0", 1, 0), ("1K0", 1, 2), ("1r0", 7, 0)],
        Side::Black,
    );
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert_eq!(game.legal_moves(id("0b0")), Some(vec![]));
}

// =============================================================================
// Custom Piece Checks
// =============================================================================

#[test]
fn test_charger_gives_check_down_open_file() {
    let game = position(&[("0K0", 4, 0), ("1c0", 4, 5), ("1K0", 0, 7)], Side::Black);
    assert_eq!(game.status(), GameStatus::Check);
}

#[test]
fn test_charger_stopped_by_own_piece_gives_no_check() {
    let game = position(
        &[("0K0", 4, 0), ("1p4", 4, 1), ("1c0", 4, 5), ("1K0", 0, 7)],
        Side::Black,
    );
    assert_eq!(game.status(), GameStatus::Continue);
}

#[test]
fn test_leaper_checks_over_a_blocker() {
    let mut game = position(
        &[("0K0", 4, 0), ("0p4", 4, 1), ("1l0", 4, 2), ("1K0", 0, 7)],
        Side::Black,
    );
    assert_eq!(game.status(), GameStatus::Check);
    // Taking the leaper with the pawn is impossible, so the king must step away.
    let king_moves = game.legal_moves(id("0K0")).unwrap();
    assert!(!king_moves.is_empty());
    assert!(!king_moves.contains(&Coord::new(4, 1)));
}
