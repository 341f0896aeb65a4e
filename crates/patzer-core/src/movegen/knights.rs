//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::offsets::{step, KNIGHT_OFFSETS};
use crate::piece::Piece;
use crate::square::Square;

/// Generate all pseudo-legal knight moves from `sq`.
pub(super) fn generate(board: &Board, sq: Square, piece: Piece, moves: &mut Vec<Move>) {
    for delta in KNIGHT_OFFSETS {
        let Some(target) = step(sq, delta) else {
            continue;
        };
        match board.piece_at(target) {
            None => moves.push(Move::normal(sq, target, piece)),
            Some(occupant) if occupant.color() != piece.color() => {
                moves.push(Move::capture(sq, target, piece, occupant.kind()));
            }
            Some(_) => {}
        }
    }
}
