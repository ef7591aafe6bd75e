use super::*;
use crate::piece::Piece;

fn id(s: &str) -> PieceId {
    s.parse().unwrap()
}

#[test]
fn test_new_game_white_to_move() {
    let game = Game::new(8, 8, Variant::Standard).unwrap();
    assert_eq!(game.side_to_move(), Side::White);
    assert_eq!(game.status(), GameStatus::Continue);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(game.board().pieces().count(), 32);
}

#[test]
fn test_new_game_rejects_small_board() {
    assert_eq!(
        Game::new(3, 3, Variant::Standard).unwrap_err(),
        GameError::InvalidDimensions { rows: 3, columns: 3 }
    );
}

#[test]
fn test_from_config() {
    let cfg = GameConfig {
        rows: 10,
        columns: 8,
        variant: Variant::Custom,
    };
    let game = Game::from_config(&cfg).unwrap();
    assert_eq!(game.board().rows(), 10);
    assert!(game.board().get_by_id(id("1c0")).is_some());
}

#[test]
fn test_legal_moves_lookup() {
    let mut game = Game::new(8, 8, Variant::Standard).unwrap();
    assert_eq!(
        game.legal_moves(id("1p0")),
        Some(vec![Coord::new(0, 5), Coord::new(0, 4)])
    );
    // Exists but boxed in.
    assert_eq!(game.legal_moves(id("1r0")), Some(vec![]));
    // Not this side's turn.
    assert_eq!(game.legal_moves(id("0p0")), None);
    // No such piece.
    assert_eq!(game.legal_moves(id("1p9")), None);
}

#[test]
fn test_movable_pieces_at_start() {
    let mut game = Game::new(8, 8, Variant::Standard).unwrap();
    let movable = game.movable_pieces();
    assert_eq!(movable.len(), 10);
    assert_eq!(movable.iter().map(|(_, m)| m.len()).sum::<usize>(), 20);
    assert!(movable.iter().all(|(id, _)| id.side == Side::White));
}

#[test]
fn test_play_hands_over_turn() {
    let mut game = Game::new(8, 8, Variant::Standard).unwrap();
    let (record, status) = game.play(id("1p4"), Coord::new(4, 4)).unwrap();
    assert_eq!(record.from, Coord::new(4, 6));
    assert_eq!(record.captured, None);
    assert_eq!(status, GameStatus::Continue);
    assert_eq!(game.side_to_move(), Side::Black);
    assert_eq!(game.board().get_by_id(id("1p4")).unwrap().coord, Coord::new(4, 4));
}

#[test]
fn test_apply_move_errors() {
    let mut game = Game::new(8, 8, Variant::Standard).unwrap();
    assert_eq!(
        game.apply_move(id("1Q3"), Coord::new(0, 0)),
        Err(GameError::PieceNotFound(id("1Q3")))
    );
    assert_eq!(
        game.apply_move(id("1p0"), Coord::new(8, 3)),
        Err(GameError::OffBoard(Coord::new(8, 3)))
    );
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn test_apply_move_at_entry() {
    let mut game = Game::new(8, 8, Variant::Standard).unwrap();
    let moves = game.legal_moves(id("1k0")).unwrap();
    assert_eq!(
        game.apply_move_at(id("1k0"), 2, &moves),
        Err(GameError::NoSuchEntry { entry: 2, len: 2 })
    );
    let record = game.apply_move_at(id("1k0"), 1, &moves).unwrap();
    assert_eq!(record.to, Coord::new(0, 5));
}

#[test]
fn test_undo_restores_position_and_turn() {
    let mut game = Game::new(8, 8, Variant::Standard).unwrap();
    let start = game.board().clone();
    let (first, _) = game.play(id("1p3"), Coord::new(3, 4)).unwrap();
    let (second, _) = game.play(id("0p4"), Coord::new(4, 3)).unwrap();
    let (capture, _) = game.play(id("1p3"), Coord::new(4, 3)).unwrap();
    assert_eq!(capture.captured.map(|p| p.id), Some(id("0p4")));

    game.undo(&capture);
    game.undo(&second);
    game.undo(&first);
    assert_eq!(game.board(), &start);
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn test_outcome_follows_status() {
    let mut b = Board::new(8, 8);
    b.place(Piece::king(Side::Black, Coord::new(7, 3)), Coord::new(7, 3));
    b.place(Piece::king(Side::White, Coord::new(5, 3)), Coord::new(5, 3));
    let rook = Piece::new(Side::White, PieceKind::Rook, 0, Coord::new(7, 7));
    b.place(rook, rook.coord);

    let mut game = Game::from_board(b, Side::Black);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(game.refresh_status(), GameStatus::Checkmate);
    assert_eq!(game.outcome(), GameOutcome::Won(Side::White));
}
