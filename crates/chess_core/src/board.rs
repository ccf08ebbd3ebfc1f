use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    attacks,
    error::{ChessError, Result},
    movegen,
    types::*,
};

/// The 64 squares, indexed a1 = 0 .. h8 = 63.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Option<Piece>>", try_from = "Vec<Option<Piece>>")]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|p| (i as u8, p)))
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.squares.to_vec()
    }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = String;

    fn try_from(squares: Vec<Option<Piece>>) -> std::result::Result<Self, Self::Error> {
        let squares: [Option<Piece>; 64] = squares
            .try_into()
            .map_err(|v: Vec<_>| format!("expected 64 squares, got {}", v.len()))?;
        Ok(Board { squares })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let ch = sq(file, rank)
                    .and_then(|s| self.piece_at(s))
                    .map_or('.', Piece::to_char);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    fn idx(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }

    /// Corner the rook starts on.
    pub fn rook_home(self, c: Color) -> u8 {
        let file = match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        };
        (c.back_rank() as u8) * 8 + file
    }

    /// Square the rook lands on after castling.
    pub fn rook_target(self, c: Color) -> u8 {
        let file = match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        };
        (c.back_rank() as u8) * 8 + file
    }

    /// Square the king lands on after castling.
    pub fn king_target(self, c: Color) -> u8 {
        let file = match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        };
        (c.back_rank() as u8) * 8 + file
    }

    pub fn special(self) -> Special {
        match self {
            CastleSide::Kingside => Special::CastleKingside,
            CastleSide::Queenside => Special::CastleQueenside,
        }
    }
}

/// Square the king starts on.
pub fn king_home(c: Color) -> u8 {
    (c.back_rank() as u8) * 8 + 4
}

/// Per-color castling availability. Rights can only be revoked, never restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    rights: [[bool; 2]; 2],
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        rights: [[true; 2]; 2],
    };
    pub const NONE: CastlingRights = CastlingRights {
        rights: [[false; 2]; 2],
    };

    pub fn has(&self, c: Color, side: CastleSide) -> bool {
        self.rights[c.idx()][side.idx()]
    }
    pub fn kingside(&self, c: Color) -> bool {
        self.has(c, CastleSide::Kingside)
    }
    pub fn queenside(&self, c: Color) -> bool {
        self.has(c, CastleSide::Queenside)
    }

    pub fn revoke(&mut self, c: Color, side: CastleSide) {
        self.rights[c.idx()][side.idx()] = false;
    }
    pub fn revoke_all(&mut self, c: Color) {
        self.rights[c.idx()] = [false; 2];
    }

    /// Drops every right tied to `sq`: a king's home square drops both of
    /// that color's rights, a rook corner drops its own.
    pub fn revoke_touching(&mut self, sq: u8) {
        for c in Color::ALL {
            if sq == king_home(c) {
                self.revoke_all(c);
            }
            for side in CastleSide::ALL {
                if sq == side.rook_home(c) {
                    self.revoke(c, side);
                }
            }
        }
    }

    // Only setup code may grant a right.
    fn grant(&mut self, c: Color, side: CastleSide) {
        self.rights[c.idx()][side.idx()] = true;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything `make_move` overwrites, so `unmake_move` can put it back.
#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Option<Piece>, // None when the from-square was empty
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights::ALL;

        // Pawns
        for f in 0..8 {
            p.board
                .set_piece(8 + f, Some(Piece::new(Color::White, PieceKind::Pawn)));
            p.board
                .set_piece(48 + f, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board
                .set_piece(f as u8, Some(Piece::new(Color::White, kind)));
            p.board
                .set_piece(56 + f as u8, Some(Piece::new(Color::Black, kind)));
        }
        p
    }

    /// A board with no pieces, White to move and no castling rights.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Sets up a position from Forsyth-Edwards placement text.
    ///
    /// Reads the board, side to move, castling and en-passant fields; the two
    /// clock fields are optional.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(ChessError::fen("expected at least 4 fields"));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = Board::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::fen("board section needs 8 ranks"));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let pc = Piece::from_char(ch)
                        .ok_or_else(|| ChessError::fen(format!("invalid piece char '{ch}'")))?;
                    let s = sq(file, rank)
                        .ok_or_else(|| ChessError::fen(format!("rank '{rank_str}' too long")))?;
                    board.set_piece(s, Some(pc));
                    file += 1;
                }
                if file > 8 {
                    return Err(ChessError::fen(format!("rank '{rank_str}' too long")));
                }
            }
            if file != 8 {
                return Err(ChessError::fen(format!("rank '{rank_str}' too short")));
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(ChessError::fen(format!("invalid side to move '{stm_part}'"))),
        };

        let mut castling = CastlingRights::NONE;
        if castle_part != "-" {
            for c in castle_part.chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::Kingside),
                    'Q' => (Color::White, CastleSide::Queenside),
                    'k' => (Color::Black, CastleSide::Kingside),
                    'q' => (Color::Black, CastleSide::Queenside),
                    _ => return Err(ChessError::fen(format!("invalid castling char '{c}'"))),
                };
                castling.grant(color, side);
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            Some(
                coord_to_sq(ep_part)
                    .ok_or_else(|| ChessError::fen(format!("invalid en-passant '{ep_part}'")))?,
            )
        };

        let halfmove_clock: u32 = halfmove_part
            .parse()
            .map_err(|_| ChessError::fen(format!("invalid halfmove clock '{halfmove_part}'")))?;
        let fullmove_number: u32 = fullmove_part
            .parse()
            .map_err(|_| ChessError::fen(format!("invalid fullmove number '{fullmove_part}'")))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.board.king_sq(c)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board.piece_at(sq)
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board.set_piece(sq, pc);
    }

    pub fn in_check(&self, c: Color) -> bool {
        attacks::in_check(self, c)
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        attacks::is_square_attacked(&self.board, target, by)
    }

    /// Half-move clock has reached 100 (fifty moves by each side).
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Piece-count heuristic: bare kings, a single minor piece, or one
    /// bishop each on same-coloured squares.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut bishop_shades = [None::<u8>; 2];
        for (s, pc) in self.board.pieces() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => minors += 1,
                PieceKind::Bishop => {
                    minors += 1;
                    bishop_shades[pc.color.idx()] = Some(((file_of(s) + rank_of(s)) % 2) as u8);
                }
            }
        }
        match minors {
            0 | 1 => true,
            2 => matches!(bishop_shades, [Some(a), Some(b)] if a == b),
            _ => false,
        }
    }

    /// Plays `mv` in place and returns what is needed to take it back.
    ///
    /// Assumes `mv` came from the move generator. Special effects are also
    /// recognised from geometry, so a caller-built move (a king stepping two
    /// files, a pawn reaching the last rank) behaves the same as a tagged one.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let prev_ep = self.en_passant;

        let mut undo = Undo {
            captured: None,
            castling: self.castling,
            en_passant: prev_ep,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            moved_piece: None,
            rook_move: None,
            ep_captured_sq: None,
        };

        self.en_passant = None;

        let Some(moved) = self.piece_at(from) else {
            // Empty from-square: only the turn passes.
            self.side_to_move = self.side_to_move.other();
            return undo;
        };
        undo.moved_piece = Some(moved);
        undo.captured = self.piece_at(to);

        let is_pawn = moved.kind == PieceKind::Pawn;
        let mut reset_hmc = is_pawn || undo.captured.is_some();

        // En-passant: the victim sits behind the target square, not on it.
        let ep_capture = mv.is_en_passant()
            || (is_pawn
                && undo.captured.is_none()
                && file_of(from) != file_of(to)
                && prev_ep == Some(to));
        if ep_capture {
            if let Some(cs) = sq(file_of(to), rank_of(to) - moved.color.forward()) {
                undo.captured = self.piece_at(cs);
                self.set_piece(cs, None);
                undo.ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        // Castling rook move
        let king_hop = (file_of(to) - file_of(from)).abs() == 2;
        if moved.kind == PieceKind::King && (mv.is_castle() || king_hop) {
            let side = if file_of(to) > file_of(from) {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            let (rf, rt) = (side.rook_home(moved.color), side.rook_target(moved.color));
            if let Some(rook) = self.piece_at(rf) {
                self.set_piece(rf, None);
                self.set_piece(rt, Some(rook));
                undo.rook_move = Some((rf, rt));
            }
        }

        if is_pawn && rank_of(to) == moved.color.promotion_rank() {
            let kind = mv.promotion().unwrap_or(PieceKind::Queen);
            self.set_piece(to, Some(Piece::new(moved.color, kind)));
        }

        // A king leaving home, a rook leaving its corner, or anything landing
        // on a corner ends the matching rights.
        if moved.kind == PieceKind::King {
            self.castling.revoke_all(moved.color);
        }
        self.castling.revoke_touching(from);
        self.castling.revoke_touching(to);

        if is_pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let Some(moved) = undo.moved_piece else {
            return;
        };

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // Restoring the original piece also reverts a promotion.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(moved));

        match undo.ep_captured_sq {
            Some(cs) => self.set_piece(cs, undo.captured),
            None => self.set_piece(mv.to, undo.captured),
        }
    }

    /// Successor position after `mv`, leaving `self` untouched.
    pub fn apply_move(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }

    /// Like [`Position::apply_move`], but first checks that `mv` is legal here.
    pub fn try_apply(&self, mv: Move) -> Result<Position> {
        if !movegen::legal_moves(self).contains(&mv) {
            return Err(ChessError::InvalidMove {
                mv: crate::notation::move_to_coord(mv),
            });
        }
        Ok(self.apply_move(mv))
    }

    /// Same position with colours swapped and ranks mirrored.
    pub fn color_flipped(&self) -> Position {
        let flip = |s: u8| (7 - rank_of(s) as u8) * 8 + file_of(s) as u8;

        let mut board = Board::empty();
        for (s, pc) in self.board.pieces() {
            board.set_piece(flip(s), Some(Piece::new(pc.color.other(), pc.kind)));
        }

        let mut castling = CastlingRights::NONE;
        for c in Color::ALL {
            for side in CastleSide::ALL {
                if self.castling.has(c, side) {
                    castling.grant(c.other(), side);
                }
            }
        }

        Position {
            board,
            side_to_move: self.side_to_move.other(),
            castling,
            en_passant: self.en_passant.map(flip),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
