//! Coordinate move text (`e2e4`, `e7e8q`).
//!
//! Parsing always resolves against the legal move list so the capture flag
//! and special tag come out right.

use crate::{
    board::Position,
    error::{ChessError, Result},
    movegen::legal_moves,
    types::*,
};

pub fn move_to_coord(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promotion() {
        s.push(p.to_char());
    }
    s
}

pub fn parse_square(txt: &str) -> Result<u8> {
    coord_to_sq(txt).ok_or_else(|| ChessError::InvalidSquare {
        text: txt.to_string(),
    })
}

/// Parses `txt` and returns the matching legal move of `pos`.
///
/// A promotion without a suffix resolves to the queen.
pub fn parse_coord_move(pos: &Position, txt: &str) -> Result<Move> {
    let bad_text = || ChessError::InvalidMoveText {
        text: txt.to_string(),
    };
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(bad_text());
    }
    let from = parse_square(&txt[0..2])?;
    let to = parse_square(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(k) if PieceKind::PROMOTIONS.contains(&k) => Some(k),
            _ => return Err(bad_text()),
        },
    };

    resolve(pos, from, to, promo).ok_or_else(|| ChessError::InvalidMove {
        mv: txt.to_string(),
    })
}

/// Finds the legal move of `pos` going `from` -> `to` with the requested
/// promotion piece (queen when `promo` is None and the move promotes).
pub fn resolve(pos: &Position, from: u8, to: u8, promo: Option<PieceKind>) -> Option<Move> {
    let wanted = promo.unwrap_or(PieceKind::Queen);
    legal_moves(pos).into_iter().find(|m| {
        m.from == from && m.to == to && m.promotion().is_none_or(|k| k == wanted)
    })
}
