//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    /// Parse a FEN string.
    ///
    /// The halfmove clock and fullmove number may be omitted, defaulting to
    /// 0 and 1. The parsed board is structurally validated: each side must
    /// have exactly one king and pawns may not stand on the back ranks.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Piece placement, rank 8 down to rank 1.
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut squares = [None; 64];
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let rank = Rank::from_index(7 - rank_index as u8).ok_or(FenError::WrongRankCount {
                found: ranks.len(),
            })?;
            let mut file_index: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as u8;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(FenError::InvalidPieceChar { character: c })?;

                    let Some(file) = File::from_index(file_index) else {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: file_index as usize + 1,
                        });
                    };
                    squares[Square::new(rank, file).index()] = Some(piece);
                    file_index += 1;
                }
            }

            if file_index != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index as usize,
                });
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?,
            )
        };

        let halfmove_clock = match fields.get(4) {
            Some(s) => s.parse::<u32>().map_err(|_| FenError::InvalidMoveCounter {
                field: "halfmove clock",
                found: s.to_string(),
            })?,
            None => 0,
        };

        let fullmove_number = match fields.get(5) {
            Some(s) => s.parse::<u32>().map_err(|_| FenError::InvalidMoveCounter {
                field: "fullmove number",
                found: s.to_string(),
            })?,
            None => 1,
        };

        let board = Board::from_raw(
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        );
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Piece placement
        for rank_index in (0u8..8).rev() {
            let rank = Rank::from_index(rank_index).ok_or(fmt::Error)?;
            let mut empty_count = 0u8;

            for file in File::ALL {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank_index > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.side_to_move())?;
        write!(f, " {}", self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

/// Return `true` if `fen` parses into a valid board.
pub fn is_valid_fen(fen: &str) -> bool {
    fen.parse::<Board>().is_ok()
}

/// Parse a FEN string, falling back to the starting position on error.
///
/// The failure is reported through a `tracing` diagnostic rather than the
/// return type; use [`str::parse`] directly when the caller must see the
/// error.
pub fn parse_fen_safe(fen: &str) -> Board {
    match fen.parse::<Board>() {
        Ok(board) => board,
        Err(error) => {
            warn!(%fen, %error, "invalid FEN, falling back to the starting position");
            Board::starting_position()
        }
    }
}
