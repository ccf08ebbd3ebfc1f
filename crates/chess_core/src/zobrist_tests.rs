use super::*;
use crate::notation::parse_coord_move;

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = std::collections::HashSet::new();
    for color in 0..2 {
        for piece in 0..6 {
            for sq in 0..64 {
                assert!(seen.insert(ZOBRIST.pieces[color][piece][sq]), "Duplicate piece key");
            }
        }
    }
    assert!(seen.insert(ZOBRIST.black_to_move), "Side to move key collision");
    for rights in ZOBRIST.castling {
        for k in rights {
            assert!(seen.insert(k), "Castling key collision");
        }
    }
    for k in ZOBRIST.en_passant {
        assert!(seen.insert(k), "En passant key collision");
    }
}

#[test]
fn test_key_returns_after_knight_shuffle() {
    let mut pos = Position::startpos();
    let start = pos.repetition_key();
    for txt in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        let mv = parse_coord_move(&pos, txt).unwrap();
        pos.make_move(mv);
    }
    assert_eq!(pos.repetition_key(), start);
}

#[test]
fn test_key_depends_on_side_to_move() {
    let white = Position::startpos();
    let mut black = white.clone();
    black.side_to_move = Color::Black;
    assert_ne!(white.repetition_key(), black.repetition_key());
}

#[test]
fn test_key_depends_on_castling_and_en_passant() {
    let base = Position::from_fen("r3k2r/8/8/8/4Pp2/8/8/R3K2R b KQkq - 0 1").unwrap();
    let no_rights = Position::from_fen("r3k2r/8/8/8/4Pp2/8/8/R3K2R b Kkq - 0 1").unwrap();
    let with_ep = Position::from_fen("r3k2r/8/8/8/4Pp2/8/8/R3K2R b KQkq e3 0 1").unwrap();
    assert_ne!(base.repetition_key(), no_rights.repetition_key());
    assert_ne!(base.repetition_key(), with_ep.repetition_key());
}
