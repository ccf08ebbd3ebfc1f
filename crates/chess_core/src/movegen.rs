use crate::{
    attacks,
    board::{CastleSide, Position, king_home},
    types::*,
};

/// Generate all legal moves for the side to move, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves for the side to move into the provided buffer,
/// reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    let mover = pos.side_to_move;
    for from in 0..64u8 {
        if let Some(pc) = pos.piece_at(from) {
            if pc.color == mover {
                gen_piece(pos, from, pc, out);
            }
        }
    }
    retain_legal(pos, mover, out);
}

/// All legal moves for `color`, whether or not it is that side's turn.
///
/// When `color` is not to move there is no en-passant target for it, so the
/// count reflects only ordinary moves and castling.
pub fn legal_moves_for(pos: &Position, color: Color) -> Vec<Move> {
    let mut tmp = pos.clone();
    if tmp.side_to_move != color {
        tmp.side_to_move = color;
        tmp.en_passant = None;
    }
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Legal moves of the piece on `from`. Empty if the square is empty.
pub fn legal_moves_from(pos: &Position, from: u8) -> Vec<Move> {
    let Some(pc) = pos.piece_at(from) else {
        return Vec::new();
    };
    let mut out = pseudo_legal_moves(pos, from);
    let mut tmp = pos.clone();
    retain_legal(&mut tmp, pc.color, &mut out);
    out
}

/// Moves the piece on `from` could make by its movement pattern alone,
/// ignoring whether its own king is left in check.
pub fn pseudo_legal_moves(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    if let Some(pc) = pos.piece_at(from) {
        gen_piece(pos, from, pc, &mut out);
    }
    out
}

// Play each candidate and drop those that leave the mover's king attacked.
fn retain_legal(pos: &mut Position, mover: Color, out: &mut Vec<Move>) {
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = attacks::in_check(pos, mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn gen_piece(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c = pc.color;
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, c, out),
        PieceKind::Knight => gen_steps(pos, from, c, out, &KNIGHT_OFFSETS),
        PieceKind::Bishop => gen_slider(pos, from, c, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(pos, from, c, out, &ORTHOGONALS),
        PieceKind::Queen => {
            gen_slider(pos, from, c, out, &DIAGONALS);
            gen_slider(pos, from, c, out, &ORTHOGONALS);
        }
        PieceKind::King => {
            gen_steps(pos, from, c, out, &KING_OFFSETS);
            gen_castle(pos, from, c, out);
        }
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();

    // forward 1
    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(Move::new(from, to), c, out);

            // forward 2 from start
            if r == c.pawn_start_rank() {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2).with_special(Special::DoublePawnPush));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => push_pawn_move(Move::capture(from, to), c, out),
            Some(_) => {}
            None if pos.en_passant == Some(to) && pos.side_to_move == c => {
                // The pawn being taken stands beside us, on the square it skipped to.
                let victim = sq(f + df, r).and_then(|s| pos.piece_at(s));
                if victim == Some(Piece::new(c.other(), PieceKind::Pawn)) {
                    out.push(Move::capture(from, to).with_special(Special::EnPassant));
                }
            }
            None => {}
        }
    }
}

// A pawn arriving on the last rank fans out into one move per promotion choice.
fn push_pawn_move(mv: Move, c: Color, out: &mut Vec<Move>) {
    if rank_of(mv.to) == c.promotion_rank() {
        for pk in PieceKind::PROMOTIONS {
            out.push(mv.with_special(Special::Promotion(pk)));
        }
    } else {
        out.push(mv);
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::capture(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::capture(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    if from != king_home(c) {
        return;
    }

    // Can't castle out of check.
    let enemy = c.other();
    if attacks::is_square_attacked(&pos.board, from, enemy) {
        return;
    }

    for side in CastleSide::ALL {
        if !pos.castling.has(c, side) {
            continue;
        }
        let rook_sq = side.rook_home(c);
        if pos.piece_at(rook_sq) != Some(Piece::new(c, PieceKind::Rook)) {
            continue;
        }

        // Every square strictly between king and rook must be empty.
        let (lo, hi) = (from.min(rook_sq), from.max(rook_sq));
        if (lo + 1..hi).any(|s| pos.piece_at(s).is_some()) {
            continue;
        }

        // The king may not pass through or land on an attacked square.
        let king_to = side.king_target(c);
        let (lo, hi) = (from.min(king_to), from.max(king_to));
        if (lo..=hi)
            .filter(|&s| s != from)
            .any(|s| attacks::is_square_attacked(&pos.board, s, enemy))
        {
            continue;
        }

        out.push(Move::new(from, king_to).with_special(side.special()));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
