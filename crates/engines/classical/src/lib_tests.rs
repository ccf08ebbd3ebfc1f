use super::*;
use chess_core::{Game, legal_moves, parse_coord_move};

#[test]
fn classical_engine_returns_legal_move() {
    let mut engine = ClassicalEngine::new();
    let pos = Position::startpos();

    let result = engine.search(&pos, SearchLimits::depth(2));

    assert!(legal_moves(&pos).contains(&result.best_move.unwrap()));
    assert_eq!(result.depth, 2);
    assert_eq!(engine.nodes(), result.nodes);
}

#[test]
fn classical_engine_handles_checkmate() {
    let mut engine = ClassicalEngine::new();
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    let result = engine.search(&pos, SearchLimits::depth(2));

    assert!(result.best_move.is_none());
    assert!(result.score > MATE_SCORE);
}

#[test]
fn classical_engine_uses_game_history() {
    let pos = Position::from_fen("k7/8/8/8/8/P7/q7/7K w - - 0 1").unwrap();
    let mut game = Game::from_position(pos);
    for txt in ["h1g1", "a2b2", "g1h1", "b2a2", "h1g1", "a2b2", "g1h1", "b2a2"] {
        game.play_coord(txt).unwrap();
    }
    assert_eq!(game.repetitions(), 3);

    let mut engine = ClassicalEngine::new();
    let limits = SearchLimits::depth(1).with_history(game.history());
    let result = engine.search(game.position(), limits);

    let kg1 = parse_coord_move(game.position(), "h1g1").unwrap();
    assert_eq!(result.best_move, Some(kg1));
    assert_eq!(result.score, 0);
}
