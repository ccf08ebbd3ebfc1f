//! Heuristic Move Choosers
//!
//! One-ply engines for the easy difficulty levels. None of them look past
//! the move they play:
//! - [`RandomEngine`] picks uniformly among all legal moves
//! - [`CaptureEngine`] picks a random capture when there is one
//! - [`GreedyEngine`] takes the most valuable piece it can, otherwise
//!   heads for the centre

use std::cmp::Reverse;

use chess_core::{
    Engine, Move, PieceKind, Position, SearchLimits, SearchResult, file_of, legal_moves_into,
    rank_of,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

#[cfg(test)]
mod lib_tests;

fn generate(pos: &Position) -> Vec<Move> {
    let mut pos_copy = pos.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut pos_copy, &mut moves);
    moves
}

fn one_ply(best_move: Option<Move>) -> SearchResult {
    SearchResult {
        best_move,
        score: 0,
        depth: 1,
        nodes: 1,
    }
}

/// Value of the piece `mv` removes, 0 for a quiet move.
pub fn victim_value(pos: &Position, mv: &Move) -> i32 {
    if mv.is_en_passant() {
        return PieceKind::Pawn.value();
    }
    if !mv.capture {
        return 0;
    }
    pos.piece_at(mv.to).map_or(0, |pc| pc.kind.value())
}

/// Distance of `sq` from the middle of the board, doubled so it stays an
/// integer: 2 for the four centre squares, 14 for a corner.
pub fn centre_distance(sq: u8) -> i32 {
    let (file, rank) = (file_of(sq) as i32, rank_of(sq) as i32);
    (2 * file - 7).abs() + (2 * rank - 7).abs()
}

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible choices, for tests and self-play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        let moves = generate(pos);
        one_ply(moves.choose(&mut self.rng).copied())
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

/// Plays a random capture if one exists, else any random move.
#[derive(Debug, Clone)]
pub struct CaptureEngine {
    rng: StdRng,
}

impl CaptureEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CaptureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for CaptureEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        let moves = generate(pos);
        let captures: Vec<Move> = moves.iter().copied().filter(|m| m.capture).collect();
        trace!(captures = captures.len(), moves = moves.len(), "capture engine");

        let pool = if captures.is_empty() { &moves } else { &captures };
        one_ply(pool.choose(&mut self.rng).copied())
    }

    fn name(&self) -> &str {
        "Capture v1.0"
    }
}

/// Takes the most valuable piece on offer; with nothing to take, plays the
/// move landing closest to the centre. Ties go to the earlier move in
/// generator order, so the choice is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn choose(pos: &Position) -> Option<Move> {
        let moves = generate(pos);
        let best_capture = moves
            .iter()
            .filter(|m| m.capture)
            .min_by_key(|m| Reverse(victim_value(pos, m)));
        match best_capture {
            Some(mv) => Some(*mv),
            None => moves.iter().min_by_key(|m| centre_distance(m.to)).copied(),
        }
    }
}

impl Engine for GreedyEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        one_ply(Self::choose(pos))
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
