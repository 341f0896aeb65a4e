//! King move generation, including castling.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::offsets::{castle_geometry, step, KING_OFFSETS};
use crate::piece::Piece;
use crate::square::Square;

/// Generate all pseudo-legal king moves from `sq`.
///
/// Castling is emitted only when the right is held, the king stands on its
/// home square and is not in check, the squares between king and rook are
/// empty, and no square the king crosses is attacked.
pub(super) fn generate(board: &Board, sq: Square, piece: Piece, moves: &mut Vec<Move>) {
    for delta in KING_OFFSETS {
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

    let color = piece.color();
    let enemy = !color;
    for side in CastleSide::ALL {
        if !board.castling().has(color, side) {
            continue;
        }
        let geometry = castle_geometry(color, side);
        if sq != geometry.king_from {
            continue;
        }
        if board.is_square_attacked(sq, enemy) {
            continue;
        }
        if geometry.empty.iter().any(|&s| board.piece_at(s).is_some()) {
            continue;
        }
        if geometry
            .safe
            .iter()
            .any(|&s| board.is_square_attacked(s, enemy))
        {
            continue;
        }
        moves.push(Move::castle(sq, geometry.king_to, piece, side));
    }
}
