//! Attack and check oracle.
//!
//! Answers "can a piece of this color reach that square in one move" from
//! piece geometry alone. Nothing here filters for legality: a pinned piece
//! still attacks, which is exactly what check detection needs.

use crate::{
    board::{Board, Position},
    types::*,
};

/// True if any piece of color `by` attacks `target` on `board`.
pub fn is_square_attacked(board: &Board, target: u8, by: Color) -> bool {
    let tf = file_of(target);
    let tr = rank_of(target);

    // A pawn attacking `target` stands one rank behind it from its own side.
    let pr = tr - by.forward();
    for df in [-1, 1] {
        if holds(board, sq(tf + df, pr), by, &[PieceKind::Pawn]) {
            return true;
        }
    }

    for (df, dr) in KNIGHT_OFFSETS {
        if holds(board, sq(tf + df, tr + dr), by, &[PieceKind::Knight]) {
            return true;
        }
    }

    for (df, dr) in KING_OFFSETS {
        if holds(board, sq(tf + df, tr + dr), by, &[PieceKind::King]) {
            return true;
        }
    }

    let diagonal = [PieceKind::Bishop, PieceKind::Queen];
    let straight = [PieceKind::Rook, PieceKind::Queen];
    DIAGONALS
        .iter()
        .any(|&dir| holds(board, first_blocker(board, target, dir), by, &diagonal))
        || ORTHOGONALS
            .iter()
            .any(|&dir| holds(board, first_blocker(board, target, dir), by, &straight))
}

/// True if `c`'s king is attacked. A board without that king is never in check.
pub fn in_check(pos: &Position, c: Color) -> bool {
    match pos.king_sq(c) {
        Some(ksq) => is_square_attacked(&pos.board, ksq, c.other()),
        None => false,
    }
}

/// Walks from `from` (exclusive) along `dir` and returns the first occupied square.
pub fn first_blocker(board: &Board, from: u8, (df, dr): (i8, i8)) -> Option<u8> {
    let mut f = file_of(from) + df;
    let mut r = rank_of(from) + dr;
    while let Some(s) = sq(f, r) {
        if board.piece_at(s).is_some() {
            return Some(s);
        }
        f += df;
        r += dr;
    }
    None
}

fn holds(board: &Board, s: Option<u8>, color: Color, kinds: &[PieceKind]) -> bool {
    s.and_then(|s| board.piece_at(s))
        .is_some_and(|pc| pc.color == color && kinds.contains(&pc.kind))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
