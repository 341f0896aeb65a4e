//! Move notation: coordinate strings and Standard Algebraic Notation.
//!
//! Parsing always resolves against the legal moves of the given board, so a
//! successfully parsed move carries its capture and promotion data and is
//! safe to feed straight into `make_move`.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::movegen::generate_legal;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Render a move in coordinate notation: source, destination, and an
/// optional lowercase promotion letter ("e2e4", "e7e8q").
pub fn move_to_coord(mv: Move) -> String {
    mv.to_string()
}

/// Parse coordinate notation against the board's legal moves.
///
/// Returns `None` for malformed input and for moves that are not legal in
/// this position.
pub fn parse_coord(board: &Board, s: &str) -> Option<Move> {
    if !(4..=5).contains(&s.len()) {
        return None;
    }
    let from = Square::from_algebraic(&s[0..2])?;
    let to = Square::from_algebraic(&s[2..4])?;
    let promotion = match s.as_bytes().get(4) {
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return None,
        None => None,
    };

    generate_legal(board)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
}

/// Render a move in Standard Algebraic Notation.
///
/// Castling renders as "O-O"/"O-O-O"; captures mark "x"; promotions append
/// "=Q" style suffixes; ambiguous piece moves are disambiguated by file,
/// then rank, then the full square. Check and mate suffixes are left to the
/// caller, which knows the resulting position.
pub fn move_to_san(board: &Board, mv: Move) -> String {
    match mv.kind {
        MoveKind::CastleKing => return "O-O".to_string(),
        MoveKind::CastleQueen => return "O-O-O".to_string(),
        _ => {}
    }

    let mut san = String::new();
    let kind = mv.piece.kind();

    if let Some(letter) = kind.san_letter() {
        san.push(letter);
        san.push_str(&disambiguation(board, mv));
    } else if mv.is_capture() {
        // Pawn captures always name the originating file.
        san.push(mv.from.file().to_char());
    }

    if mv.is_capture() {
        san.push('x');
    }

    san.push_str(&mv.to.to_string());

    if let Some(promote_to) = mv.promotion {
        san.push('=');
        if let Some(letter) = promote_to.san_letter() {
            san.push(letter);
        }
    }

    san
}

/// Parse SAN against the board's legal moves.
///
/// Trailing check/mate/annotation characters ("+", "#", "!", "?") are
/// ignored. Returns `None` when the string matches no legal move.
pub fn parse_san(board: &Board, s: &str) -> Option<Move> {
    let stripped = s.trim_end_matches(['+', '#', '!', '?']);
    if stripped.is_empty() {
        return None;
    }

    generate_legal(board)
        .into_iter()
        .find(|&mv| move_to_san(board, mv) == stripped)
}

/// Minimal disambiguation prefix for a non-pawn move.
///
/// Scans for other legal moves of the same piece kind to the same square:
/// prefer the file when it is unique, then the rank, then the full square.
fn disambiguation(board: &Board, mv: Move) -> String {
    let rivals: Vec<Square> = generate_legal(board)
        .into_iter()
        .filter(|other| {
            other.piece.kind() == mv.piece.kind() && other.to == mv.to && other.from != mv.from
        })
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let same_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
    let same_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());

    if !same_file {
        mv.from.file().to_string()
    } else if !same_rank {
        mv.from.rank().to_string()
    } else {
        mv.from.to_string()
    }
}
