//! Sliding piece move generation: bishops, rooks, and queens.

use crate::board::Board;
use crate::chess_move::Move;
use crate::offsets::{step, BISHOP_DIRECTIONS, KING_OFFSETS, ROOK_DIRECTIONS};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate all pseudo-legal slider moves from `sq`.
///
/// Each ray stops at the board edge, at the first enemy piece (yielding a
/// capture), or just before the first friendly piece.
pub(super) fn generate(board: &Board, sq: Square, piece: Piece, moves: &mut Vec<Move>) {
    let directions: &[i32] = match piece.kind() {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        _ => &KING_OFFSETS,
    };

    for &delta in directions {
        let mut current = sq;
        while let Some(target) = step(current, delta) {
            match board.piece_at(target) {
                None => moves.push(Move::normal(sq, target, piece)),
                Some(occupant) => {
                    if occupant.color() != piece.color() {
                        moves.push(Move::capture(sq, target, piece, occupant.kind()));
                    }
                    break;
                }
            }
            current = target;
        }
    }
}
