//! Square-index deltas and castling geometry for the mailbox board.
//!
//! All offsets are signed deltas between rank-major square indices
//! (`index = rank * 8 + file`). Stepping by an offset can silently wrap
//! around a board edge, so [`step`] validates every move by file distance.

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::square::Square;

/// One rank up (toward rank 8).
pub const NORTH: i32 = 8;
/// One rank down (toward rank 1).
pub const SOUTH: i32 = -8;
/// One file right (toward the h-file).
pub const EAST: i32 = 1;
/// One file left (toward the a-file).
pub const WEST: i32 = -1;
/// Diagonals.
pub const NORTH_EAST: i32 = 9;
pub const NORTH_WEST: i32 = 7;
pub const SOUTH_EAST: i32 = -7;
pub const SOUTH_WEST: i32 = -9;

/// The eight knight offsets.
pub const KNIGHT_OFFSETS: [i32; 8] = [17, 15, -15, -17, 10, -6, 6, -10];

/// The eight king offsets (orthogonal + diagonal).
pub const KING_OFFSETS: [i32; 8] = [
    NORTH, SOUTH, EAST, WEST, NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST,
];

/// Ray directions for rooks (and the orthogonal half of queens).
pub const ROOK_DIRECTIONS: [i32; 4] = [NORTH, SOUTH, EAST, WEST];

/// Ray directions for bishops (and the diagonal half of queens).
pub const BISHOP_DIRECTIONS: [i32; 4] = [NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST];

/// Step from `sq` by a signed index delta.
///
/// Returns `None` when the target index leaves the board or the step wraps
/// around an edge. A legitimate single step or knight jump changes the file
/// by at most 2; a wrapped step lands 6 or 7 files away, so the file-distance
/// check rejects exactly the wrap-arounds.
#[inline]
pub fn step(sq: Square, delta: i32) -> Option<Square> {
    let target = sq.index() as i32 + delta;
    if !(0..64).contains(&target) {
        return None;
    }
    let target = Square::from_index(target as u8)?;
    let file_distance = (sq.file().index() as i32 - target.file().index() as i32).abs();
    if file_distance > 2 {
        return None;
    }
    Some(target)
}

/// Walk a ray from `sq` in direction `delta`, yielding squares until the edge.
pub fn ray(sq: Square, delta: i32) -> impl Iterator<Item = Square> {
    std::iter::successors(step(sq, delta), move |&current| step(current, delta))
}

/// Fixed geometry of one castling move.
pub struct CastleGeometry {
    /// King's starting square.
    pub king_from: Square,
    /// King's destination square.
    pub king_to: Square,
    /// Rook's starting corner.
    pub rook_from: Square,
    /// Rook's destination (the square the king crossed).
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub empty: &'static [Square],
    /// Squares the king crosses (destination included) that must not be attacked.
    pub safe: &'static [Square],
}

static WHITE_KING_SIDE: CastleGeometry = CastleGeometry {
    king_from: Square::E1,
    king_to: Square::G1,
    rook_from: Square::H1,
    rook_to: Square::F1,
    empty: &[Square::F1, Square::G1],
    safe: &[Square::F1, Square::G1],
};

static WHITE_QUEEN_SIDE: CastleGeometry = CastleGeometry {
    king_from: Square::E1,
    king_to: Square::C1,
    rook_from: Square::A1,
    rook_to: Square::D1,
    empty: &[Square::B1, Square::C1, Square::D1],
    safe: &[Square::D1, Square::C1],
};

static BLACK_KING_SIDE: CastleGeometry = CastleGeometry {
    king_from: Square::E8,
    king_to: Square::G8,
    rook_from: Square::H8,
    rook_to: Square::F8,
    empty: &[Square::F8, Square::G8],
    safe: &[Square::F8, Square::G8],
};

static BLACK_QUEEN_SIDE: CastleGeometry = CastleGeometry {
    king_from: Square::E8,
    king_to: Square::C8,
    rook_from: Square::A8,
    rook_to: Square::D8,
    empty: &[Square::B8, Square::C8, Square::D8],
    safe: &[Square::D8, Square::C8],
};

/// Look up the castling geometry for a color and side.
pub fn castle_geometry(color: Color, side: CastleSide) -> &'static CastleGeometry {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => &WHITE_KING_SIDE,
        (Color::White, CastleSide::QueenSide) => &WHITE_QUEEN_SIDE,
        (Color::Black, CastleSide::KingSide) => &BLACK_KING_SIDE,
        (Color::Black, CastleSide::QueenSide) => &BLACK_QUEEN_SIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_in_the_open() {
        assert_eq!(step(Square::E4, NORTH), Some(Square::E5));
        assert_eq!(step(Square::E4, SOUTH), Some(Square::E3));
        assert_eq!(step(Square::E4, EAST), Some(Square::F4));
        assert_eq!(step(Square::E4, WEST), Some(Square::D4));
        assert_eq!(step(Square::E4, NORTH_EAST), Some(Square::F5));
        assert_eq!(step(Square::E4, SOUTH_WEST), Some(Square::D3));
    }

    #[test]
    fn step_off_the_top_and_bottom() {
        assert_eq!(step(Square::E8, NORTH), None);
        assert_eq!(step(Square::E1, SOUTH), None);
    }

    #[test]
    fn step_rejects_horizontal_wrap() {
        assert_eq!(step(Square::H4, EAST), None);
        assert_eq!(step(Square::A4, WEST), None);
        assert_eq!(step(Square::H4, NORTH_EAST), None);
        assert_eq!(step(Square::A4, NORTH_WEST), None);
        assert_eq!(step(Square::H4, SOUTH_EAST), None);
        assert_eq!(step(Square::A4, SOUTH_WEST), None);
    }

    #[test]
    fn knight_from_corner_has_two_targets() {
        let targets: Vec<_> = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&d| step(Square::A1, d))
            .collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::B3));
        assert!(targets.contains(&Square::C2));
    }

    #[test]
    fn knight_from_center_has_eight_targets() {
        let targets: Vec<_> = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&d| step(Square::E4, d))
            .collect();
        assert_eq!(targets.len(), 8);
    }

    #[test]
    fn knight_rejects_wraps_from_edge_files() {
        // Every surviving target of an edge-file knight is a real knight move.
        for start in [Square::A4, Square::B4, Square::G4, Square::H4] {
            for &d in &KNIGHT_OFFSETS {
                if let Some(target) = step(start, d) {
                    let df = (start.file().index() as i32 - target.file().index() as i32).abs();
                    let dr = (start.rank().index() as i32 - target.rank().index() as i32).abs();
                    assert!(
                        (df == 1 && dr == 2) || (df == 2 && dr == 1),
                        "{start} + {d} gave non-knight target {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn king_from_corner_has_three_targets() {
        let targets: Vec<_> = KING_OFFSETS
            .iter()
            .filter_map(|&d| step(Square::H1, d))
            .collect();
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn ray_stops_at_edge() {
        let squares: Vec<_> = ray(Square::E4, NORTH).collect();
        assert_eq!(
            squares,
            vec![Square::E5, Square::E6, Square::E7, Square::E8]
        );

        let squares: Vec<_> = ray(Square::E4, SOUTH_EAST).collect();
        assert_eq!(squares, vec![Square::F3, Square::G2, Square::H1]);
    }

    #[test]
    fn castle_geometry_squares() {
        let wk = castle_geometry(Color::White, CastleSide::KingSide);
        assert_eq!(wk.king_from, Square::E1);
        assert_eq!(wk.king_to, Square::G1);
        assert_eq!(wk.rook_from, Square::H1);
        assert_eq!(wk.rook_to, Square::F1);

        let bq = castle_geometry(Color::Black, CastleSide::QueenSide);
        assert_eq!(bq.king_to, Square::C8);
        assert_eq!(bq.rook_from, Square::A8);
        assert_eq!(bq.rook_to, Square::D8);
        assert_eq!(bq.empty.len(), 3);
        assert_eq!(bq.safe.len(), 2);
    }
}
