use super::*;
use crate::board::CastleSide;

fn play_all(game: &mut Game, moves: &[&str]) {
    for txt in moves {
        game.play_coord(txt)
            .unwrap_or_else(|e| panic!("{txt} should be legal: {e}"));
    }
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert!(game.status().is_over());
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_canonical_stalemate() {
    // White king a1, black king a3, black queen b3, White to move
    let pos = Position::from_fen("8/8/8/8/8/kq6/8/K7 w - - 0 1").unwrap();
    assert_eq!(classify(&pos), GameStatus::Stalemate);
    assert!(classify(&pos).is_draw());
}

#[test]
fn test_check_with_escape() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").unwrap();
    assert_eq!(classify(&pos), GameStatus::Check);
    assert!(!classify(&pos).is_over());
}

#[test]
fn test_threefold_repetition() {
    let mut game = Game::new();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    play_all(&mut game, &shuffle);
    assert_eq!(game.repetitions(), 2);
    assert_eq!(game.status(), GameStatus::Ongoing);
    play_all(&mut game, &shuffle);
    assert_eq!(game.repetitions(), 3);
    assert_eq!(game.status(), GameStatus::DrawRepetition);
}

#[test]
fn test_repetition_needs_same_castling_rights() {
    // Same squares after the rook trip, but White has lost the h1 right
    let mut game = Game::from_position(
        Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap(),
    );
    play_all(&mut game, &["h1h2", "a8a7", "h2h1", "a7a8"]);
    assert_eq!(game.repetitions(), 1);
    play_all(&mut game, &["h1h2", "a8a7", "h2h1", "a7a8"]);
    assert_eq!(game.repetitions(), 2);
}

#[test]
fn test_fifty_move_status() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4R3/4K3 w - - 100 80").unwrap();
    assert_eq!(classify(&pos), GameStatus::DrawFiftyMove);
}

#[test]
fn test_insufficient_material_status() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4KN2 w - - 0 1").unwrap();
    assert_eq!(classify(&pos), GameStatus::DrawInsufficientMaterial);
}

#[test]
fn test_rook_round_trip_does_not_restore_rights() {
    let mut game = Game::from_position(
        Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap(),
    );
    play_all(&mut game, &["h1h3", "e8d8", "h3h1", "d8e8"]);
    let rights = game.position().castling;
    assert!(!rights.kingside(Color::White));
    assert!(rights.queenside(Color::White));
    // Black's king walked, so both of its rights are gone too
    assert!(!rights.kingside(Color::Black));
    assert!(!rights.queenside(Color::Black));
    assert!(
        game.legal_moves()
            .iter()
            .all(|m| m.special != Some(Special::CastleKingside))
    );
}

#[test]
fn test_capture_on_corner_revokes_right() {
    // Bishop takes the h8 rook that never moved
    let mut game = Game::from_position(
        Position::from_fen("r3k2r/8/8/8/8/8/1B6/R3K2R w KQkq - 0 1").unwrap(),
    );
    let mv = game.play_coord("b2h8").unwrap();
    assert!(mv.capture);
    let rights = game.position().castling;
    assert!(!rights.has(Color::Black, CastleSide::Kingside));
    assert!(rights.has(Color::Black, CastleSide::Queenside));
    assert!(rights.kingside(Color::White) && rights.queenside(Color::White));
}

#[test]
fn test_illegal_move_rejected() {
    let mut game = Game::new();
    let err = game.play(Move::new(coord_to_sq("e2").unwrap(), coord_to_sq("e5").unwrap()));
    assert_eq!(
        err,
        Err(ChessError::InvalidMove {
            mv: "e2e5".to_string()
        })
    );
    // Moving the opponent's piece is just as illegal
    assert!(game.play_coord("e7e5").is_err());
    assert_eq!(game.position(), &Position::startpos());
}

#[test]
fn test_play_resolves_caller_built_move() {
    let mut game = Game::from_position(
        Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap(),
    );
    let played = game
        .play(Move::new(coord_to_sq("e1").unwrap(), coord_to_sq("g1").unwrap()))
        .unwrap();
    assert_eq!(played.special, Some(Special::CastleKingside));
    assert_eq!(
        game.position().piece_at(coord_to_sq("f1").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
}

#[test]
fn test_undo_restores_position_and_history() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "d7d5", "e4d5"]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.undo().map(move_to_coord), Some("e4d5".to_string()));
    assert_eq!(game.undo().map(move_to_coord), Some("d7d5".to_string()));
    assert_eq!(game.undo().map(move_to_coord), Some("e2e4".to_string()));
    assert_eq!(game.undo(), None);
    assert_eq!(game.position(), &Position::startpos());
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_legal_moves_from_ignores_opponent_pieces() {
    let game = Game::new();
    assert!(game.legal_moves_from(coord_to_sq("e7").unwrap()).is_empty());
    assert_eq!(game.legal_moves_from(coord_to_sq("b1").unwrap()).len(), 2);
}
