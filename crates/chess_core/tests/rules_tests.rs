//! Rules behaviour seen from outside the crate: the three requests a caller
//! makes (query legal moves, apply a move, classify) on well-known positions.

use chess_core::{
    CastleSide, ChessError, Color, Game, GameStatus, Position, Special, classify, coord_to_sq,
    legal_moves, legal_moves_from, parse_coord_move, perft,
};

fn s(name: &str) -> u8 {
    coord_to_sq(name).unwrap()
}

#[test]
fn start_position_has_twenty_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 20);
    let doubles = moves
        .iter()
        .filter(|m| m.special == Some(Special::DoublePawnPush))
        .count();
    assert_eq!(doubles, 8);
}

#[test]
fn shallow_perft_from_start() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 1), 20);
    assert_eq!(perft(&mut pos, 2), 400);
}

#[test]
fn pinned_bishop_cannot_leave_the_pin_line() {
    // Bishop d2 pinned by the queen on a5 against the king on e1
    let pos = Position::from_fen("4k3/8/8/q7/8/8/3B4/4K3 w - - 0 1").unwrap();
    let mut targets: Vec<u8> = legal_moves_from(&pos, s("d2")).iter().map(|m| m.to).collect();
    targets.sort();
    let mut expected = vec![s("a5"), s("b4"), s("c3")];
    expected.sort();
    assert_eq!(targets, expected);
}

#[test]
fn en_passant_is_offered_for_one_reply_only() {
    let mut game = Game::from_position(
        Position::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap(),
    );
    let ep_moves = |g: &Game| {
        g.legal_moves_from(s("e5"))
            .into_iter()
            .filter(|m| m.special == Some(Special::EnPassant))
            .count()
    };

    game.play_coord("d7d5").unwrap();
    assert_eq!(ep_moves(&game), 1);

    game.play_coord("e1e2").unwrap();
    game.play_coord("e8e7").unwrap();
    assert_eq!(ep_moves(&game), 0);
}

#[test]
fn castling_rights_only_go_away() {
    let mut game = Game::from_position(
        Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap(),
    );
    game.play_coord("a1a2").unwrap();
    game.play_coord("h8h7").unwrap();
    game.play_coord("a2a1").unwrap();
    game.play_coord("h7h8").unwrap();

    let rights = game.position().castling;
    assert!(!rights.has(Color::White, CastleSide::Queenside));
    assert!(rights.has(Color::White, CastleSide::Kingside));
    assert!(!rights.has(Color::Black, CastleSide::Kingside));
    assert!(rights.has(Color::Black, CastleSide::Queenside));
    assert!(game.play_coord("e1c1").is_err());
    assert!(game.play_coord("e1g1").is_ok());
}

#[test]
fn castling_through_check_is_illegal() {
    // Black rook on f8 covers f1
    let pos = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(matches!(
        parse_coord_move(&pos, "e1g1"),
        Err(ChessError::InvalidMove { .. })
    ));
    assert!(parse_coord_move(&pos, "e1c1").is_ok());
}

#[test]
fn fools_mate_and_canonical_stalemate() {
    let mut game = Game::new();
    for txt in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.play_coord(txt).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Checkmate);

    let stalemate = Position::from_fen("8/8/8/8/8/kq6/8/K7 w - - 0 1").unwrap();
    assert_eq!(classify(&stalemate), GameStatus::Stalemate);
}

#[test]
fn missing_king_is_never_in_check() {
    let pos = Position::from_fen("8/8/8/8/8/8/q7/8 w - - 0 1").unwrap();
    assert!(!pos.in_check(Color::White));
}
