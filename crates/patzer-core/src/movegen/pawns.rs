//! Pawn move generation: pushes, captures, en passant, promotions.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::offsets::{step, NORTH, NORTH_EAST, NORTH_WEST, SOUTH, SOUTH_EAST, SOUTH_WEST};
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// Push one pawn destination, expanding to four moves on the last rank.
fn push_pawn_move(
    moves: &mut Vec<Move>,
    from: Square,
    to: Square,
    piece: Piece,
    victim: Option<crate::piece_kind::PieceKind>,
) {
    if to.rank() == Rank::promotion_rank(piece.color()) {
        for promote_to in Move::PROMOTION_KINDS {
            moves.push(Move::promotion(from, to, piece, promote_to, victim));
        }
    } else {
        match victim {
            Some(kind) => moves.push(Move::capture(from, to, piece, kind)),
            None => moves.push(Move::normal(from, to, piece)),
        }
    }
}

/// Generate all pseudo-legal pawn moves from `sq`.
pub(super) fn generate(board: &Board, sq: Square, piece: Piece, moves: &mut Vec<Move>) {
    let color = piece.color();
    let (forward, captures) = match color {
        Color::White => (NORTH, [NORTH_EAST, NORTH_WEST]),
        Color::Black => (SOUTH, [SOUTH_EAST, SOUTH_WEST]),
    };

    // Single push, then the double push from the starting rank.
    if let Some(one) = step(sq, forward)
        && board.piece_at(one).is_none()
    {
        push_pawn_move(moves, sq, one, piece, None);

        if sq.rank() == Rank::pawn_rank(color)
            && let Some(two) = step(one, forward)
            && board.piece_at(two).is_none()
        {
            moves.push(Move::normal(sq, two, piece));
        }
    }

    // Diagonal captures and en passant.
    for delta in captures {
        let Some(target) = step(sq, delta) else {
            continue;
        };
        if let Some(occupant) = board.piece_at(target) {
            if occupant.color() != color {
                push_pawn_move(moves, sq, target, piece, Some(occupant.kind()));
            }
        } else if board.en_passant() == Some(target) {
            moves.push(Move::en_passant(sq, target, piece));
        }
    }
}
