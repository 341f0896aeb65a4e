//! Piece activity: bishop pair and rooks on open files.

use patzer_core::{Board, Color, PieceKind};

/// Bonus for holding two or more bishops.
const BISHOP_PAIR_BONUS: i32 = 30;
/// Bonus per rook on a file with no pawns of either color.
const OPEN_FILE_ROOK_BONUS: i32 = 20;

fn side_activity(board: &Board, color: Color) -> i32 {
    let mut score = 0;

    if board.count(color, PieceKind::Bishop) >= 2 {
        score += BISHOP_PAIR_BONUS;
    }

    let mut pawn_files = [false; 8];
    for (sq, piece) in board.pieces() {
        if piece.kind() == PieceKind::Pawn {
            pawn_files[sq.file().index()] = true;
        }
    }

    for (sq, piece) in board.pieces() {
        if piece.color() == color
            && piece.kind() == PieceKind::Rook
            && !pawn_files[sq.file().index()]
        {
            score += OPEN_FILE_ROOK_BONUS;
        }
    }

    score
}

/// Piece activity score, White minus Black, in centipawns.
pub fn piece_activity(board: &Board) -> i32 {
    side_activity(board, Color::White) - side_activity(board, Color::Black)
}
