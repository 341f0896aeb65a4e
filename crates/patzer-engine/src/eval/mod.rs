//! Static position evaluation.
//!
//! All component scores are centipawns from White's point of view: positive
//! numbers favor White. The search negates as needed for the side to move.

pub mod activity;
pub mod center;
pub mod king_safety;
pub mod material;
pub mod mobility;
pub mod pawns;
pub mod phase;
pub mod pst;

use patzer_core::{generate_legal, Board, Color};

/// Score for a checkmated side (sign applied for the loser).
pub const MATE_SCORE: i32 = 100_000;

/// Score for a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Per-component evaluation scores, all from White's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    /// Piece values, signed by color.
    pub material: i32,
    /// Piece-square table bonuses.
    pub positioning: i32,
    /// Legal-move count difference.
    pub mobility: i32,
    /// Castled bonus, exposed-king penalties, attacked neighborhood.
    pub king_safety: i32,
    /// Occupation and attack of the center squares.
    pub center: i32,
    /// Doubled and isolated pawn penalties.
    pub pawn_structure: i32,
    /// Bishop pair and open-file rooks.
    pub activity: i32,
}

impl Breakdown {
    /// Sum of every component.
    pub fn total(&self) -> i32 {
        self.material
            + self.positioning
            + self.mobility
            + self.king_safety
            + self.center
            + self.pawn_structure
            + self.activity
    }
}

/// Compute the per-component evaluation of a position.
///
/// Does not detect mate or stalemate; callers that need terminal scores use
/// [`evaluate`].
pub fn evaluation_breakdown(board: &Board) -> Breakdown {
    let endgame = phase::is_endgame(board);
    Breakdown {
        material: material::material(board),
        positioning: pst::positioning(board, endgame),
        mobility: mobility::mobility(board),
        king_safety: king_safety::king_safety(board),
        center: center::center_control(board),
        pawn_structure: pawns::pawn_structure(board),
        activity: activity::piece_activity(board),
    }
}

/// Evaluate a position in centipawns from White's point of view.
///
/// A side to move with no legal moves scores `-MATE_SCORE` (signed for
/// White's view) when in check, and [`DRAW_SCORE`] otherwise.
pub fn evaluate(board: &Board) -> i32 {
    if generate_legal(board).is_empty() {
        let mover = board.side_to_move();
        if board.is_in_check(mover) {
            return match mover {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        return DRAW_SCORE;
    }

    evaluation_breakdown(board).total()
}
