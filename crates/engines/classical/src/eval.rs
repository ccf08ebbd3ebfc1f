//! Static evaluation: material, piece-square tables, mobility and a check
//! penalty. Scores are in centipawns and always from White's point of view.

use chess_core::{Color, PieceKind, Position, file_of, legal_moves_for, rank_of};

/// Centipawns per legal move of difference between the sides.
const MOBILITY_WEIGHT: i32 = 10;
/// Charged to a side whose king is currently attacked.
const CHECK_PENALTY: i32 = 50;

// Tables are laid out as printed on a diagram from White's side: the first
// row is rank 8, the last row rank 1.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

fn table(kind: PieceKind) -> &'static [i32; 64] {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Table entry for a piece of `color` on `sq`. Black reads the table
/// upside down, so both sides see their own back rank as the last row.
pub fn square_bonus(kind: PieceKind, color: Color, sq: u8) -> i32 {
    let (file, rank) = (file_of(sq) as usize, rank_of(sq) as usize);
    let idx = match color {
        Color::White => (7 - rank) * 8 + file,
        Color::Black => rank * 8 + file,
    };
    table(kind)[idx]
}

/// Evaluates the position for White.
///
/// Returns a score in centipawns:
/// - Positive = White is better
/// - Negative = Black is better
pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0i32;

    for (sq, pc) in pos.board.pieces() {
        let value = pc.kind.value() + square_bonus(pc.kind, pc.color, sq);
        match pc.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    let white_moves = legal_moves_for(pos, Color::White).len() as i32;
    let black_moves = legal_moves_for(pos, Color::Black).len() as i32;
    score += (white_moves - black_moves) * MOBILITY_WEIGHT;

    if pos.in_check(Color::White) {
        score -= CHECK_PENALTY;
    }
    if pos.in_check(Color::Black) {
        score += CHECK_PENALTY;
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
