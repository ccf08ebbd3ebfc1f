//! Position keys for repetition detection.
//!
//! Two positions repeat only when the pieces, the side to move, the castling
//! rights and the en-passant target all match, so every one of those feeds
//! the key. Keys are XOR sums of fixed pseudo-random values.

use crate::{
    board::{CastleSide, Position},
    types::{Color, Piece, file_of},
};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// Mixed in when Black is to move
    pub black_to_move: u64,
    /// Indexed by [color][kingside, queenside]
    pub castling: [[u64; 2]; 2],
    /// Indexed by the file of the en-passant target
    pub en_passant: [u64; 8],
}

impl ZobristKeys {
    /// Fills the table from a splitmix64 stream with a fixed seed, so keys
    /// are identical across runs and builds.
    pub const fn new() -> Self {
        const fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        }

        let mut state = 0x5EED_C0DE_2024_0001u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut c = 0;
        while c < 2 {
            let mut k = 0;
            while k < 6 {
                let mut s = 0;
                while s < 64 {
                    pieces[c][k][s] = splitmix64(&mut state);
                    s += 1;
                }
                k += 1;
            }
            c += 1;
        }

        let black_to_move = splitmix64(&mut state);

        let mut castling = [[0u64; 2]; 2];
        let mut i = 0;
        while i < 4 {
            castling[i / 2][i % 2] = splitmix64(&mut state);
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut f = 0;
        while f < 8 {
            en_passant[f] = splitmix64(&mut state);
            f += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Global keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// Key of the (board, side, castling rights, en-passant target) tuple.
pub fn repetition_key(pos: &Position) -> u64 {
    let mut key = pos
        .board
        .pieces()
        .fold(0u64, |k, (s, pc)| k ^ ZOBRIST.piece_key(pc, s));

    if pos.side_to_move == Color::Black {
        key ^= ZOBRIST.black_to_move;
    }
    for c in Color::ALL {
        for (i, side) in CastleSide::ALL.into_iter().enumerate() {
            if pos.castling.has(c, side) {
                key ^= ZOBRIST.castling[c.idx()][i];
            }
        }
    }
    if let Some(ep) = pos.en_passant {
        key ^= ZOBRIST.en_passant[file_of(ep) as usize];
    }
    key
}

impl Position {
    /// See [`repetition_key`].
    pub fn repetition_key(&self) -> u64 {
        repetition_key(self)
    }
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
