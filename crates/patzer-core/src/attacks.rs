//! Attacked-square detection on the mailbox board.

use crate::board::Board;
use crate::color::Color;
use crate::offsets::{
    step, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, NORTH_EAST, NORTH_WEST,
    ROOK_DIRECTIONS, SOUTH_EAST, SOUTH_WEST,
};
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by`.
    ///
    /// Checks in cheapest-first order: pawns, knights, king, then the
    /// orthogonal and diagonal rays.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // A pawn of `by` attacks `sq` from one rank behind it, diagonally.
        let pawn_sources = match by {
            Color::White => [SOUTH_EAST, SOUTH_WEST],
            Color::Black => [NORTH_EAST, NORTH_WEST],
        };
        for delta in pawn_sources {
            if let Some(from) = step(sq, delta)
                && self.has_piece(from, by, PieceKind::Pawn)
            {
                return true;
            }
        }

        for delta in KNIGHT_OFFSETS {
            if let Some(from) = step(sq, delta)
                && self.has_piece(from, by, PieceKind::Knight)
            {
                return true;
            }
        }

        for delta in KING_OFFSETS {
            if let Some(from) = step(sq, delta)
                && self.has_piece(from, by, PieceKind::King)
            {
                return true;
            }
        }

        self.ray_attack(sq, by, &ROOK_DIRECTIONS, PieceKind::Rook)
            || self.ray_attack(sq, by, &BISHOP_DIRECTIONS, PieceKind::Bishop)
    }

    /// Return `true` if the king of `color` is attacked.
    ///
    /// An ill-formed board with no king of `color` reports no check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, !color),
            None => false,
        }
    }

    #[inline]
    fn has_piece(&self, sq: Square, color: Color, kind: PieceKind) -> bool {
        self.piece_at(sq)
            .is_some_and(|p| p.color() == color && p.kind() == kind)
    }

    /// Walk each ray direction until a blocker; the first piece decides.
    fn ray_attack(&self, sq: Square, by: Color, directions: &[i32; 4], slider: PieceKind) -> bool {
        for &delta in directions {
            let mut current = sq;
            while let Some(target) = step(current, delta) {
                if let Some(piece) = self.piece_at(target) {
                    if piece.color() == by
                        && (piece.kind() == slider || piece.kind() == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = target;
            }
        }
        false
    }
}
