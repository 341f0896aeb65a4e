//! King safety: shelter bonuses and attacked-neighborhood penalties.

use patzer_core::{step, Board, Color, File, Rank};

/// Bonus for a king tucked behind its castled position.
const CASTLED_BONUS: i32 = 30;
/// Penalty for a king still sitting on a center file of the home rank.
const EXPOSED_CENTER_PENALTY: i32 = 20;
/// Penalty per attacked square around the king.
const ATTACKED_NEIGHBOR_PENALTY: i32 = 10;

/// Offsets covering the 3x3 block centered on the king, own square included.
const NEIGHBORHOOD: [i32; 9] = [0, 8, -8, 1, -1, 9, 7, -7, -9];

fn side_king_safety(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_square(color) else {
        return 0;
    };
    let mut score = 0;

    if king.rank() == Rank::home_rank(color) {
        let file = king.file();
        if file <= File::FileB || file >= File::FileG {
            score += CASTLED_BONUS;
        } else if file == File::FileD || file == File::FileE {
            score -= EXPOSED_CENTER_PENALTY;
        }
    }

    let enemy = !color;
    for delta in NEIGHBORHOOD {
        let target = if delta == 0 { Some(king) } else { step(king, delta) };
        if let Some(sq) = target
            && board.is_square_attacked(sq, enemy)
        {
            score -= ATTACKED_NEIGHBOR_PENALTY;
        }
    }

    score
}

/// King safety score, White minus Black, in centipawns.
pub fn king_safety(board: &Board) -> i32 {
    side_king_safety(board, Color::White) - side_king_safety(board, Color::Black)
}

#[cfg(test)]
mod tests {
    use super::king_safety;
    use patzer_core::Board;

    #[test]
    fn starting_position_is_level() {
        assert_eq!(king_safety(&Board::starting_position()), 0);
    }

    #[test]
    fn castled_king_beats_centered_king() {
        // White castled short; Black's king remains on e8. Pawn shields are
        // otherwise identical, so only the shelter terms differ.
        let castled: Board = "4k3/pppppppp/8/8/8/8/PPPPPPPP/6K1 w - - 0 1".parse().unwrap();
        assert!(
            king_safety(&castled) > 0,
            "castled White king should score above the centered Black king"
        );
    }

    #[test]
    fn attacked_neighborhood_costs_points() {
        // A rook glares at the squares beside the exposed king.
        let safe: Board = "4k3/8/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        let harassed: Board = "4k3/8/8/8/8/8/1r6/K7 w - - 0 1".parse().unwrap();
        assert!(king_safety(&harassed) < king_safety(&safe));
    }

    #[test]
    fn symmetric_castling_cancels() {
        let board: Board = "5rk1/pppppppp/8/8/8/8/PPPPPPPP/5RK1 w - - 0 1".parse().unwrap();
        assert_eq!(king_safety(&board), 0);
    }
}
