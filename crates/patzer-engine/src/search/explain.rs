//! Human-readable explanation lines for a search result.

use patzer_core::{Color, Move};

use crate::eval::{Breakdown, MATE_SCORE};
use crate::search::negamax::MATE_THRESHOLD;

/// Thresholds for the advantage buckets, in centipawns.
const WINNING_ADVANTAGE: i32 = 200;
const SLIGHT_ADVANTAGE: i32 = 50;
/// Component magnitudes worth calling out.
const MATERIAL_NOTE: i32 = 100;
const KING_SAFETY_NOTE: i32 = 30;
const CENTER_NOTE: i32 = 20;
const MOBILITY_NOTE: i32 = 30;

fn leader(score: i32) -> &'static str {
    if score > 0 {
        Color::White.name()
    } else {
        Color::Black.name()
    }
}

/// Build the explanation lines for an evaluation and its breakdown.
///
/// `evaluation` is in centipawns from White's point of view.
pub fn explain(evaluation: i32, breakdown: &Breakdown, best_move: Option<&Move>) -> Vec<String> {
    let mut lines = Vec::new();

    if evaluation.abs() >= MATE_THRESHOLD {
        let moves_to_mate = (MATE_SCORE - evaluation.abs() + 1) / 2;
        lines.push(format!(
            "Checkmate for {} in {} moves",
            leader(evaluation),
            moves_to_mate
        ));
    } else if evaluation.abs() > WINNING_ADVANTAGE {
        lines.push(format!("{} has a winning advantage", leader(evaluation)));
    } else if evaluation.abs() > SLIGHT_ADVANTAGE {
        lines.push(format!("{} has a slight advantage", leader(evaluation)));
    } else {
        lines.push("The position is roughly equal".to_string());
    }

    if breakdown.material.abs() > MATERIAL_NOTE {
        lines.push(format!(
            "{} is up {:.1} pawns worth of material",
            leader(breakdown.material),
            breakdown.material.abs() as f64 / 100.0
        ));
    }
    if breakdown.king_safety.abs() > KING_SAFETY_NOTE {
        lines.push(format!("{} has better king safety", leader(breakdown.king_safety)));
    }
    if breakdown.center.abs() > CENTER_NOTE {
        lines.push(format!("{} controls the center", leader(breakdown.center)));
    }
    if breakdown.mobility.abs() > MOBILITY_NOTE {
        lines.push(format!("{} has better piece mobility", leader(breakdown.mobility)));
    }

    if let Some(mv) = best_move {
        if mv.is_castle() {
            lines.push("Castles for king safety".to_string());
        }
        if let Some(victim) = mv.captured {
            lines.push(format!("Captures {}", victim.name()));
        }
        if let Some(promote_to) = mv.promotion {
            lines.push(format!("Promotes pawn to {}", promote_to.name()));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::explain;
    use crate::eval::{Breakdown, MATE_SCORE};
    use patzer_core::{Color, Move, Piece, PieceKind, Square};

    fn quiet_breakdown() -> Breakdown {
        Breakdown::default()
    }

    #[test]
    fn equal_position_says_so() {
        let lines = explain(10, &quiet_breakdown(), None);
        assert_eq!(lines, vec!["The position is roughly equal"]);
    }

    #[test]
    fn advantage_buckets() {
        let lines = explain(300, &quiet_breakdown(), None);
        assert_eq!(lines[0], "White has a winning advantage");
        let lines = explain(-300, &quiet_breakdown(), None);
        assert_eq!(lines[0], "Black has a winning advantage");
        let lines = explain(100, &quiet_breakdown(), None);
        assert_eq!(lines[0], "White has a slight advantage");
        let lines = explain(-100, &quiet_breakdown(), None);
        assert_eq!(lines[0], "Black has a slight advantage");
    }

    #[test]
    fn mate_line_counts_full_moves() {
        // Mate in 1 ply: ceil(1 / 2) = 1 move.
        let lines = explain(MATE_SCORE - 1, &quiet_breakdown(), None);
        assert_eq!(lines[0], "Checkmate for White in 1 moves");
        // Mated in 5 plies: ceil(5 / 2) = 3 moves.
        let lines = explain(-(MATE_SCORE - 5), &quiet_breakdown(), None);
        assert_eq!(lines[0], "Checkmate for Black in 3 moves");
    }

    #[test]
    fn material_note_uses_pawn_units() {
        let breakdown = Breakdown {
            material: -320,
            ..Breakdown::default()
        };
        let lines = explain(-280, &breakdown, None);
        assert!(lines.contains(&"Black is up 3.2 pawns worth of material".to_string()));
    }

    #[test]
    fn component_notes_fire_past_thresholds() {
        let breakdown = Breakdown {
            king_safety: 40,
            center: 25,
            mobility: -35,
            ..Breakdown::default()
        };
        let lines = explain(0, &breakdown, None);
        assert!(lines.contains(&"White has better king safety".to_string()));
        assert!(lines.contains(&"White controls the center".to_string()));
        assert!(lines.contains(&"Black has better piece mobility".to_string()));
    }

    #[test]
    fn move_specific_lines() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let capture = Move::capture(Square::E4, Square::D5, pawn, PieceKind::Knight);
        let lines = explain(0, &quiet_breakdown(), Some(&capture));
        assert!(lines.contains(&"Captures knight".to_string()));

        let promo = Move::promotion(Square::E7, Square::E8, pawn, PieceKind::Queen, None);
        let lines = explain(0, &quiet_breakdown(), Some(&promo));
        assert!(lines.contains(&"Promotes pawn to queen".to_string()));

        let king = Piece::new(Color::White, PieceKind::King);
        let castle = Move::castle(
            Square::E1,
            Square::G1,
            king,
            patzer_core::CastleSide::KingSide,
        );
        let lines = explain(0, &quiet_breakdown(), Some(&castle));
        assert!(lines.contains(&"Castles for king safety".to_string()));
    }
}
