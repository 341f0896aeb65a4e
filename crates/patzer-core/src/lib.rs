//! Core chess types: board representation, move generation, and notation.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod make_move;
mod movegen;
mod offsets;
mod perft;
mod piece;
mod piece_kind;
mod rank;
mod san;
mod square;
pub mod zobrist;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::{is_valid_fen, parse_fen_safe, STARTING_FEN};
pub use file::File;
pub use movegen::{generate_legal, generate_pseudo_legal, is_checkmate, is_stalemate};
pub use offsets::{castle_geometry, step, CastleGeometry};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use san::{move_to_coord, move_to_san, parse_coord, parse_san};
pub use square::Square;
