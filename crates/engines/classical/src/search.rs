//! Minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes, so every score in here is from
//! White's point of view, the same as [`evaluate`].

use std::cmp::Reverse;

use chess_core::{Color, Move, PieceKind, Position, legal_moves_into, move_to_coord};
use tracing::{debug, trace, warn};

use crate::eval::evaluate;

/// Base score of a checkmate. The remaining depth is added on top so a mate
/// found closer to the root scores further from zero.
pub const MATE_SCORE: i32 = 100_000;

const INFINITY: i32 = MATE_SCORE * 2;

/// What the root search settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found (None if the side has no legal moves)
    pub best_move: Option<Move>,
    /// Score of that move for White
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Best move for `color` at `depth` plies, or None when it has no legal move.
pub fn best_move(pos: &Position, color: Color, depth: u8) -> Option<Move> {
    pick_best_move(pos, color, depth, &[]).best_move
}

/// Searches the position and returns the best move with its score.
///
/// # Arguments
/// * `pos` - The position to search
/// * `color` - The side to choose a move for. If it is not the side to move,
///   the search runs as though it were, with no en-passant target
/// * `depth` - Search depth in plies. Zero is treated as one
/// * `history` - Repetition keys of the game so far, ending with `pos`
pub fn pick_best_move(pos: &Position, color: Color, depth: u8, history: &[u64]) -> SearchOutcome {
    let depth = if depth == 0 {
        warn!("search requested at depth 0, searching one ply instead");
        1
    } else {
        depth
    };

    let mut root = pos.clone();
    let mut keys = Vec::with_capacity(history.len() + depth as usize + 1);
    if root.side_to_move == color {
        keys.extend_from_slice(history);
    } else {
        root.side_to_move = color;
        root.en_passant = None;
    }
    if keys.last() != Some(&root.repetition_key()) {
        keys.push(root.repetition_key());
    }

    let mut nodes = 1u64;
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut root, &mut moves);

    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            score: no_move_score(&root, depth),
            nodes,
        };
    }
    order_moves(&root, &mut moves);

    let maximizing = color == Color::White;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best = moves[0];
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        let undo = root.make_move(mv);
        keys.push(root.repetition_key());

        let score = minimax(&mut root, depth - 1, alpha, beta, &mut keys, &mut nodes);

        keys.pop();
        root.unmake_move(mv, undo);
        trace!(mv = %move_to_coord(mv), score, "root move");

        // Strictly better only, so ties keep the earlier move in search order.
        if maximizing {
            if score > best_score {
                best_score = score;
                best = mv;
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best = mv;
            }
            beta = beta.min(best_score);
        }
    }

    debug!(
        color = ?color,
        depth,
        nodes,
        best = %move_to_coord(best),
        score = best_score,
        "search finished"
    );

    SearchOutcome {
        best_move: Some(best),
        score: best_score,
        nodes,
    }
}

/// Recursive minimax with alpha-beta bounds. `history` ends with the key of
/// `pos` and is restored before returning.
fn minimax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    history: &mut Vec<u64>,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    if moves.is_empty() {
        return no_move_score(pos, depth);
    }

    // Immediate draw conditions
    let current = history.last().copied().unwrap_or_else(|| pos.repetition_key());
    if history.iter().filter(|&&k| k == current).count() >= 3
        || pos.is_fifty_move_draw()
        || pos.is_insufficient_material()
    {
        return 0;
    }

    if depth == 0 {
        return evaluate(pos);
    }

    order_moves(pos, &mut moves);

    let maximizing = pos.side_to_move == Color::White;
    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        let undo = pos.make_move(mv);
        history.push(pos.repetition_key());

        let score = minimax(pos, depth - 1, alpha, beta, history, nodes);

        history.pop();
        pos.unmake_move(mv, undo);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Score of a node whose side to move has nothing to play: a depth-biased
/// mate against that side, or zero for stalemate.
fn no_move_score(pos: &Position, depth: u8) -> i32 {
    if !pos.in_check(pos.side_to_move) {
        return 0;
    }
    let mate = MATE_SCORE + depth as i32;
    match pos.side_to_move {
        Color::White => -mate,
        Color::Black => mate,
    }
}

/// Captures first, most valuable victim first. The sort is stable, so quiet
/// moves keep generator order.
pub fn order_moves(pos: &Position, moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(victim_value(pos, mv)));
}

fn victim_value(pos: &Position, mv: &Move) -> i32 {
    if mv.is_en_passant() {
        return PieceKind::Pawn.value();
    }
    if !mv.capture {
        return 0;
    }
    pos.piece_at(mv.to).map_or(0, |pc| pc.kind.value())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
