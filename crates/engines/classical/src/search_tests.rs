use super::*;
use chess_core::{Game, legal_moves, parse_coord_move};

fn fen(text: &str) -> Position {
    Position::from_fen(text).unwrap()
}

fn coord(pos: &Position, txt: &str) -> Move {
    parse_coord_move(pos, txt).unwrap()
}

#[test]
fn test_pick_best_move_start_position() {
    let pos = Position::startpos();
    let result = pick_best_move(&pos, Color::White, 3, &[]);
    let mv = result.best_move.unwrap();
    assert!(legal_moves(&pos).contains(&mv));
    assert!(result.nodes > 20);
}

#[test]
fn test_takes_hanging_queen() {
    let pos = fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    for depth in 1..=3 {
        assert_eq!(
            best_move(&pos, Color::White, depth),
            Some(coord(&pos, "d2d5")),
            "depth {depth}"
        );
    }
}

#[test]
fn test_black_takes_hanging_queen() {
    let pos = fen("4k3/3r4/8/8/3Q4/8/8/4K3 b - - 0 1");
    for depth in 1..=3 {
        assert_eq!(
            best_move(&pos, Color::Black, depth),
            Some(coord(&pos, "d7d4")),
            "depth {depth}"
        );
    }
}

#[test]
fn test_finds_back_rank_mate() {
    let pos = fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let result = pick_best_move(&pos, Color::White, 2, &[]);
    assert_eq!(result.best_move, Some(coord(&pos, "e1e8")));
    assert_eq!(result.score, MATE_SCORE + 1);
}

#[test]
fn test_deeper_search_keeps_the_fastest_mate() {
    let pos = fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let result = pick_best_move(&pos, Color::White, 3, &[]);
    assert_eq!(result.best_move, Some(coord(&pos, "e1e8")));
    assert_eq!(result.score, MATE_SCORE + 2);
}

#[test]
fn test_black_finds_fools_mate() {
    let mut game = Game::new();
    for txt in ["f2f3", "e7e5", "g2g4"] {
        game.play_coord(txt).unwrap();
    }
    let pos = game.position();
    let result = pick_best_move(pos, Color::Black, 2, game.history());
    assert_eq!(result.best_move, Some(coord(pos, "d8h4")));
    assert_eq!(result.score, -(MATE_SCORE + 1));
}

#[test]
fn test_checkmated_root_has_no_move() {
    let pos = fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    let result = pick_best_move(&pos, Color::Black, 3, &[]);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, MATE_SCORE + 3);
}

#[test]
fn test_stalemated_root_has_no_move() {
    let pos = fen("8/8/8/8/8/kq6/8/K7 w - - 0 1");
    let result = pick_best_move(&pos, Color::White, 2, &[]);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn test_depth_zero_still_moves() {
    let pos = fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    assert_eq!(best_move(&pos, Color::White, 0), Some(coord(&pos, "d2d5")));
}

#[test]
fn test_searches_for_side_not_to_move() {
    let pos = Position::startpos();
    let mv = best_move(&pos, Color::Black, 1).unwrap();
    assert_eq!(pos.piece_at(mv.from).map(|pc| pc.color), Some(Color::Black));
}

#[test]
fn test_order_moves_puts_big_captures_first() {
    let pos = fen("4k3/8/8/1p3q2/3N4/8/8/4K3 w - - 0 1");
    let mut moves = legal_moves(&pos);
    order_moves(&pos, &mut moves);
    assert_eq!(moves[0], coord(&pos, "d4f5"));
    assert_eq!(moves[1], coord(&pos, "d4b5"));
    assert!(moves[2..].iter().all(|m| !m.capture));
}

#[test]
fn test_losing_side_heads_for_fifty_move_draw() {
    // Only the king move keeps the clock running to 100
    let pos = fen("k7/8/8/8/8/P7/q7/7K w - - 99 80");
    let result = pick_best_move(&pos, Color::White, 1, &[]);
    assert_eq!(result.best_move, Some(coord(&pos, "h1g1")));
    assert_eq!(result.score, 0);
}

#[test]
fn test_losing_side_heads_for_repetition() {
    let pos = fen("k7/8/8/8/8/P7/q7/7K w - - 0 1");
    let after = pos.apply_move(coord(&pos, "h1g1"));
    let (p, q) = (pos.repetition_key(), after.repetition_key());

    let without = pick_best_move(&pos, Color::White, 1, &[p]);
    assert!(without.score < -500);

    let history = [p, q, p, q, p];
    let with = pick_best_move(&pos, Color::White, 1, &history);
    assert_eq!(with.best_move, Some(coord(&pos, "h1g1")));
    assert_eq!(with.score, 0);
}
