// src/board/fen.rs
// FEN parsing and serialization. Only the first four space-separated fields
// (piece placement, side to move, castling rights, en passant target) are
// load-bearing for search; halfmove clock and fullmove number are consumed
// when present and default otherwise.

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use super::{Board, Color, Piece};
use crate::square::Square;

impl Board {
    /// Loads `self` from a FEN string, overwriting all existing state.
    ///
    /// `ply` (move-tree depth within the current search call) is not part of
    /// FEN and is always reset to zero here; it lives on the search context,
    /// not on the board.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or("FEN missing piece placement field")?;
        let side = fields.next().ok_or("FEN missing side-to-move field")?;
        let castling = fields.next().ok_or("FEN missing castling field")?;
        let ep = fields.next().ok_or("FEN missing en passant field")?;
        let halfmove = fields.next();
        let fullmove = fields.next();

        *self = Board::new_empty();

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(format!(
                "FEN piece placement must have 8 ranks, found {}",
                ranks.len()
            ));
        }

        // FEN ranks run from rank 8 down to rank 1; our square index has
        // rank 1 at the bottom, so rank_idx 0 in this loop is board rank 8.
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let board_rank = 7 - rank_idx;
            let mut file = 0usize;
            for ch in rank_str.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    file += digit as usize;
                    if file > 8 {
                        return Err(format!("FEN rank overflows files: {}", rank_str));
                    }
                    continue;
                }
                if file >= 8 {
                    return Err(format!("FEN rank overflows files: {}", rank_str));
                }
                let (piece, color) = CHAR_TO_PC[ch as usize]
                    .ok_or_else(|| format!("invalid FEN piece glyph: {}", ch))?;
                let sq_idx = board_rank * 8 + file;
                let bb = self.bb(color, piece) | (1u64 << sq_idx);
                self.set_bb(color, piece, bb);
                file += 1;
            }
            if file != 8 {
                return Err(format!("FEN rank does not cover 8 files: {}", rank_str));
            }
        }

        self.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("invalid side-to-move field: {}", other)),
        };

        self.castling_rights = 0;
        if castling != "-" {
            for ch in castling.chars() {
                self.castling_rights |= match ch {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("invalid castling glyph: {}", other)),
                };
            }
        }

        self.en_passant = if ep == "-" {
            None
        } else {
            Some(Square::from_algebraic(ep)?)
        };

        self.halfmove_clock = match halfmove {
            Some(s) => s
                .parse()
                .map_err(|_| format!("invalid halfmove clock: {}", s))?,
            None => 0,
        };
        self.fullmove_number = match fullmove {
            Some(s) => s
                .parse()
                .map_err(|_| format!("invalid fullmove number: {}", s))?,
            None => 1,
        };

        self.history.clear();
        self.refresh_zobrist();
        self.validate()?;

        Ok(())
    }

    /// Serializes the current position to a FEN string (all six fields).
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(64);

        for board_rank in (0..8).rev() {
            let mut empty_run = 0u8;
            for file in 0..8 {
                let sq = Square::from_index((board_rank * 8 + file) as u8);
                match self.piece_at(sq) {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        out.push(PC_TO_CHAR[idx]);
                    }
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if board_rank != 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.castling_rights == 0 {
            out.push('-');
        } else {
            if self.castling_rights & CASTLE_WK != 0 {
                out.push('K');
            }
            if self.castling_rights & CASTLE_WQ != 0 {
                out.push('Q');
            }
            if self.castling_rights & CASTLE_BK != 0 {
                out.push('k');
            }
            if self.castling_rights & CASTLE_BQ != 0 {
                out.push('q');
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));

        out
    }
}
