use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Counts the leaf positions reachable in exactly `depth` plies.
///
/// One move buffer per ply is allocated up front and reused, and every move
/// is played and taken back on the same position.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(pos, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = pos.make_move(mv);
            nodes += inner(pos, depth - 1, rest);
            pos.unmake_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Per-root-move node counts, for narrowing down a perft mismatch.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(pos, &mut roots);
    roots
        .into_iter()
        .map(|mv| {
            let undo = pos.make_move(mv);
            let nodes = perft(pos, depth.saturating_sub(1));
            pos.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}
