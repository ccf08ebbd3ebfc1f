use super::*;
use chess_core::{coord_to_sq, legal_moves, parse_coord_move};

fn fen(text: &str) -> Position {
    Position::from_fen(text).unwrap()
}

const MATED: &str = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";
const STALEMATE: &str = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1";
// Knight on d4 can take a pawn on b5 or a queen on f5
const TWO_CAPTURES: &str = "4k3/8/8/1p3q2/3N4/8/8/4K3 w - - 0 1";

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(7);
    let pos = Position::startpos();

    let result = engine.search(&pos, SearchLimits::depth(1));

    assert!(legal_moves(&pos).contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_is_reproducible_with_seed() {
    let pos = Position::startpos();
    let picks = |seed| {
        let mut engine = RandomEngine::with_seed(seed);
        (0..10)
            .map(|_| engine.search(&pos, SearchLimits::depth(1)).best_move)
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(42), picks(42));
}

#[test]
fn random_engine_spreads_choices() {
    let pos = Position::startpos();
    let mut engine = RandomEngine::with_seed(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(engine.search(&pos, SearchLimits::depth(1)).best_move);
    }
    assert!(seen.len() > 10);
}

#[test]
fn engines_handle_checkmate_and_stalemate() {
    for text in [MATED, STALEMATE] {
        let pos = fen(text);
        let limits = SearchLimits::depth(1);
        assert!(RandomEngine::with_seed(1).search(&pos, limits.clone()).best_move.is_none());
        assert!(CaptureEngine::with_seed(1).search(&pos, limits.clone()).best_move.is_none());
        assert!(GreedyEngine::new().search(&pos, limits).best_move.is_none());
    }
}

#[test]
fn capture_engine_always_captures_when_possible() {
    let pos = fen(TWO_CAPTURES);
    let mut engine = CaptureEngine::with_seed(11);
    for _ in 0..20 {
        let mv = engine.search(&pos, SearchLimits::depth(1)).best_move.unwrap();
        assert!(mv.capture);
        assert_eq!(mv.from, coord_to_sq("d4").unwrap());
    }
}

#[test]
fn capture_engine_falls_back_to_any_move() {
    let pos = Position::startpos();
    let mut engine = CaptureEngine::with_seed(5);
    let mv = engine.search(&pos, SearchLimits::depth(1)).best_move.unwrap();
    assert!(legal_moves(&pos).contains(&mv));
}

#[test]
fn greedy_engine_takes_most_valuable_piece() {
    let pos = fen(TWO_CAPTURES);
    assert_eq!(
        GreedyEngine::choose(&pos),
        Some(parse_coord_move(&pos, "d4f5").unwrap())
    );
}

#[test]
fn greedy_engine_counts_en_passant_as_pawn() {
    // Only capture on offer is en passant
    let pos = fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1");
    let mv = GreedyEngine::choose(&pos).unwrap();
    assert!(mv.is_en_passant());
    assert_eq!(victim_value(&pos, &mv), 100);
}

#[test]
fn greedy_engine_heads_for_centre() {
    // From the start the nearest centre landing squares are d4/e4 (distance
    // 2); d2d4 is generated before e2e4
    let pos = Position::startpos();
    assert_eq!(
        GreedyEngine::choose(&pos),
        Some(parse_coord_move(&pos, "d2d4").unwrap())
    );
}

#[test]
fn centre_distance_values() {
    assert_eq!(centre_distance(coord_to_sq("d4").unwrap()), 2);
    assert_eq!(centre_distance(coord_to_sq("e5").unwrap()), 2);
    assert_eq!(centre_distance(coord_to_sq("a1").unwrap()), 14);
    assert_eq!(centre_distance(coord_to_sq("h8").unwrap()), 14);
    assert_eq!(centre_distance(coord_to_sq("c3").unwrap()), 6);
}
