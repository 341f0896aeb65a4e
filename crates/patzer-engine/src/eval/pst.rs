//! Piece-square tables for all six piece types.
//!
//! Tables are defined from White's perspective in index order: entry 0 is
//! A1, entry 7 is H1, entry 8 is A2, ..., entry 63 is H8. Lookups for Black
//! use the vertically mirrored square. The king has separate middlegame and
//! endgame tables; every other piece uses one table for the whole game.

use patzer_core::{Board, Color, PieceKind, Square};

#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
    // Rank 1
      0,   0,   0,   0,   0,   0,   0,   0,
    // Rank 2
      5,  10,  10, -20, -20,  10,  10,   5,
    // Rank 3
      5,  -5, -10,   0,   0, -10,  -5,   5,
    // Rank 4
      0,   0,   0,  20,  20,   0,   0,   0,
    // Rank 5
      5,   5,  10,  25,  25,  10,   5,   5,
    // Rank 6
     10,  10,  20,  30,  30,  20,  10,  10,
    // Rank 7
     50,  50,  50,  50,  50,  50,  50,  50,
    // Rank 8
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MIDGAME_PST: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

#[rustfmt::skip]
const KING_ENDGAME_PST: [i32; 64] = [
    -50, -30, -30, -30, -30, -30, -30, -50,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -50, -40, -30, -20, -20, -30, -40, -50,
];

/// Look up the table value for a piece on a square.
///
/// Black lookups mirror the square vertically so both colors read the same
/// White-oriented tables.
pub fn pst_value(kind: PieceKind, color: Color, sq: Square, endgame: bool) -> i32 {
    let index = match color {
        Color::White => sq.index(),
        Color::Black => sq.mirror().index(),
    };
    match kind {
        PieceKind::Pawn => PAWN_PST[index],
        PieceKind::Knight => KNIGHT_PST[index],
        PieceKind::Bishop => BISHOP_PST[index],
        PieceKind::Rook => ROOK_PST[index],
        PieceKind::Queen => QUEEN_PST[index],
        PieceKind::King => {
            if endgame {
                KING_ENDGAME_PST[index]
            } else {
                KING_MIDGAME_PST[index]
            }
        }
    }
}

/// Sum of piece-square values for every piece, White minus Black.
pub fn positioning(board: &Board, endgame: bool) -> i32 {
    let mut score = 0;
    for (sq, piece) in board.pieces() {
        let value = pst_value(piece.kind(), piece.color(), sq, endgame);
        match piece.color() {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::{positioning, pst_value};
    use patzer_core::{Board, Color, PieceKind, Square};

    #[test]
    fn central_knight_beats_rim_knight() {
        let center = pst_value(PieceKind::Knight, Color::White, Square::E4, false);
        let rim = pst_value(PieceKind::Knight, Color::White, Square::A4, false);
        assert!(center > rim);
        assert_eq!(rim, -30);
        assert_eq!(
            pst_value(PieceKind::Knight, Color::White, Square::A1, false),
            -50
        );
    }

    #[test]
    fn seventh_rank_pawn_values() {
        assert_eq!(pst_value(PieceKind::Pawn, Color::White, Square::E7, false), 50);
        assert_eq!(pst_value(PieceKind::Pawn, Color::Black, Square::E2, false), 50);
    }

    #[test]
    fn central_pawn_push_square() {
        assert_eq!(pst_value(PieceKind::Pawn, Color::White, Square::D4, false), 20);
        assert_eq!(pst_value(PieceKind::Pawn, Color::White, Square::E2, false), -20);
    }

    #[test]
    fn black_lookup_mirrors_white() {
        for kind in PieceKind::ALL {
            for sq in Square::all() {
                assert_eq!(
                    pst_value(kind, Color::White, sq, false),
                    pst_value(kind, Color::Black, sq.mirror(), false),
                    "mirror mismatch for {kind:?} on {sq}"
                );
            }
        }
    }

    #[test]
    fn castled_king_likes_the_corner_in_middlegame() {
        let corner = pst_value(PieceKind::King, Color::White, Square::G1, false);
        let center = pst_value(PieceKind::King, Color::White, Square::E4, false);
        assert_eq!(corner, 30);
        assert!(corner > center);
    }

    #[test]
    fn endgame_king_likes_the_center() {
        let corner = pst_value(PieceKind::King, Color::White, Square::G1, true);
        let center = pst_value(PieceKind::King, Color::White, Square::E4, true);
        assert_eq!(center, 40);
        assert!(center > corner);
    }

    #[test]
    fn starting_position_is_symmetric() {
        assert_eq!(positioning(&Board::starting_position(), false), 0);
    }

    #[test]
    fn developed_knight_improves_positioning() {
        // After Nf3 the knight stands on a +10 square instead of -40.
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1"
            .parse()
            .unwrap();
        assert_eq!(positioning(&board, false), 50);
    }
}
