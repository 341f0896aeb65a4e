//! Difficulty and style presets, and the human-like move selection layer.
//!
//! The search itself always plays the best move it finds. This layer sits
//! on top and, with preset probabilities, swaps that move for a plausible
//! second-rate alternative, so lower difficulties feel like a fallible
//! opponent instead of a throttled engine.

use rand::Rng;
use tracing::debug;

use patzer_core::{generate_legal, Board, Color, Move, Rank};

use crate::eval::evaluate;
use crate::search::{SearchOptions, SearchResult, Searcher};

/// Playing strength presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Search limits and error rates for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    /// Iterative-deepening depth cap.
    pub max_depth: u32,
    /// Time budget per move, in milliseconds.
    pub max_time_ms: u64,
    /// Chance of playing a deliberately weaker move.
    pub mistake_probability: f64,
    /// Chance of playing one of the worst moves outright.
    pub blunder_probability: f64,
    /// Number of runner-up moves considered when making a mistake.
    pub candidate_pool: usize,
    /// Half-width of the uniform noise added to move scores, in centipawns.
    pub eval_noise: i32,
}

impl Difficulty {
    /// All difficulties, weakest first.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// The preset configuration for this difficulty.
    pub const fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Beginner => DifficultyConfig {
                max_depth: 2,
                max_time_ms: 500,
                mistake_probability: 0.40,
                blunder_probability: 0.15,
                candidate_pool: 5,
                eval_noise: 150,
            },
            Difficulty::Easy => DifficultyConfig {
                max_depth: 3,
                max_time_ms: 1_000,
                mistake_probability: 0.25,
                blunder_probability: 0.05,
                candidate_pool: 4,
                eval_noise: 80,
            },
            Difficulty::Medium => DifficultyConfig {
                max_depth: 4,
                max_time_ms: 2_000,
                mistake_probability: 0.10,
                blunder_probability: 0.02,
                candidate_pool: 3,
                eval_noise: 40,
            },
            Difficulty::Hard => DifficultyConfig {
                max_depth: 5,
                max_time_ms: 3_000,
                mistake_probability: 0.03,
                blunder_probability: 0.0,
                candidate_pool: 2,
                eval_noise: 15,
            },
            Difficulty::Expert => DifficultyConfig {
                max_depth: 6,
                max_time_ms: 5_000,
                mistake_probability: 0.0,
                blunder_probability: 0.0,
                candidate_pool: 1,
                eval_noise: 0,
            },
        }
    }

    /// Parse a difficulty name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name.to_ascii_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }
}

/// Playing style presets, applied as per-move score biases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Aggressive,
    Defensive,
    Balanced,
}

/// Score adjustments a style applies when ranking candidate moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBias {
    /// Added when the move captures.
    pub capture: i32,
    /// Added when the destination lies in the central sixteen squares.
    pub center: i32,
    /// Added when the move develops a piece off the back rank.
    pub activity: i32,
}

impl Style {
    /// The bias constants for this style.
    pub const fn bias(self) -> StyleBias {
        match self {
            Style::Aggressive => StyleBias {
                capture: 40,
                center: 10,
                activity: 15,
            },
            Style::Defensive => StyleBias {
                capture: -20,
                center: 5,
                activity: -5,
            },
            Style::Balanced => StyleBias {
                capture: 0,
                center: 0,
                activity: 0,
            },
        }
    }

    /// Parse a style name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Style> {
        match name.to_ascii_lowercase().as_str() {
            "aggressive" => Some(Style::Aggressive),
            "defensive" => Some(Style::Defensive),
            "balanced" => Some(Style::Balanced),
            _ => None,
        }
    }
}

/// One-ply evaluation of a move from the mover's point of view.
fn one_ply_score(board: &Board, mv: Move) -> i32 {
    let child = board.make_move(mv);
    let white_view = evaluate(&child);
    match board.side_to_move() {
        Color::White => white_view,
        Color::Black => -white_view,
    }
}

/// The style bias for one move on one board.
fn style_bonus(board: &Board, mv: Move, style: Style) -> i32 {
    let bias = style.bias();
    let mut bonus = 0;

    if mv.is_capture() {
        bonus += bias.capture;
    }

    let file = mv.to.file().index();
    let rank = mv.to.rank().index();
    if (2..=5).contains(&file) && (2..=5).contains(&rank) {
        bonus += bias.center;
    }

    let home = Rank::home_rank(board.side_to_move());
    if mv.from.rank() == home && mv.to.rank() != home {
        bonus += bias.activity;
    }

    bonus
}

impl Searcher {
    /// Choose a move for the computer side at the given difficulty and
    /// style.
    ///
    /// Runs a normal search under the difficulty's limits, then possibly
    /// rewrites the chosen move: a blunder picks among the three worst
    /// moves, a mistake picks from the runners-up behind the top-rated
    /// move, with style bias and evaluation noise muddying the ranking.
    pub fn calculate_ai_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        style: Style,
    ) -> SearchResult {
        let config = difficulty.config();
        let opts = SearchOptions {
            max_depth: config.max_depth,
            max_time_ms: config.max_time_ms,
            difficulty,
            style,
            mistake_probability: None,
        };
        self.calculate_ai_move_with_options(board, &opts)
    }

    /// [`calculate_ai_move`](Self::calculate_ai_move) with full control
    /// over the search options, including the mistake probability override.
    pub fn calculate_ai_move_with_options(
        &mut self,
        board: &Board,
        opts: &SearchOptions,
    ) -> SearchResult {
        let config = opts.difficulty.config();
        let style = opts.style;
        let mut result = self.search(board, opts);

        let legal = generate_legal(board);
        if legal.len() <= 1 {
            return result;
        }

        if self.rng.random::<f64>() < config.blunder_probability {
            let blunder = self.pick_blunder(board, &legal);
            debug!(%blunder, "difficulty layer substituted a blunder");
            result.best_move = Some(blunder);
            result.pv = vec![blunder];
            result
                .explanation
                .push("AI made an inaccurate move".to_string());
            return result;
        }

        let mistake_probability = opts
            .mistake_probability
            .unwrap_or(config.mistake_probability);
        if self.rng.random::<f64>() < mistake_probability {
            let mistake = self.pick_mistake(board, &legal, style, &config);
            debug!(%mistake, "difficulty layer substituted a suboptimal move");
            result.best_move = Some(mistake);
            result.pv = vec![mistake];
            result
                .explanation
                .push("AI played a slightly suboptimal move".to_string());
            return result;
        }

        result
    }

    /// Pick uniformly from the three lowest-scoring moves.
    fn pick_blunder(&mut self, board: &Board, legal: &[Move]) -> Move {
        let mut scored: Vec<(Move, i32)> = legal
            .iter()
            .map(|&mv| (mv, one_ply_score(board, mv)))
            .collect();
        scored.sort_by_key(|&(_, score)| score);
        let pool = scored.len().min(3);
        scored[self.rng.random_range(0..pool)].0
    }

    /// Skip the top-rated move and pick from the runners-up, weighting
    /// earlier (stronger) candidates more heavily.
    fn pick_mistake(
        &mut self,
        board: &Board,
        legal: &[Move],
        style: Style,
        config: &DifficultyConfig,
    ) -> Move {
        let noise = config.eval_noise;
        let mut scored: Vec<(Move, i32)> = legal
            .iter()
            .map(|&mv| {
                let jitter = if noise > 0 {
                    self.rng.random_range(-noise..=noise)
                } else {
                    0
                };
                (mv, one_ply_score(board, mv) + style_bonus(board, mv, style) + jitter)
            })
            .collect();
        scored.sort_by_key(|&(_, score)| -score);

        let pool: Vec<Move> = scored
            .iter()
            .skip(1)
            .take(config.candidate_pool.max(1))
            .map(|&(mv, _)| mv)
            .collect();

        // Triangular weighting: candidate i gets weight pool_len - i.
        let total: usize = (1..=pool.len()).sum();
        let mut ticket = self.rng.random_range(0..total);
        for (i, &mv) in pool.iter().enumerate() {
            let weight = pool.len() - i;
            if ticket < weight {
                return mv;
            }
            ticket -= weight;
        }
        pool[pool.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, Style};

    #[test]
    fn difficulty_configs_scale_monotonically() {
        let mut previous_depth = 0;
        let mut previous_mistake = 1.1;
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            assert!(config.max_depth > previous_depth);
            assert!(config.mistake_probability < previous_mistake);
            previous_depth = config.max_depth;
            previous_mistake = config.mistake_probability;
        }
    }

    #[test]
    fn expert_never_errs() {
        let config = Difficulty::Expert.config();
        assert_eq!(config.mistake_probability, 0.0);
        assert_eq!(config.blunder_probability, 0.0);
        assert_eq!(config.eval_noise, 0);
        assert_eq!(config.candidate_pool, 1);
    }

    #[test]
    fn beginner_is_the_sloppiest() {
        let config = Difficulty::Beginner.config();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.mistake_probability, 0.40);
        assert_eq!(config.blunder_probability, 0.15);
        assert_eq!(config.candidate_pool, 5);
        assert_eq!(config.eval_noise, 150);
    }

    #[test]
    fn names_roundtrip() {
        for difficulty in Difficulty::ALL {
            let name = format!("{difficulty:?}");
            assert_eq!(Difficulty::from_name(&name), Some(difficulty));
        }
        assert_eq!(Difficulty::from_name("EXPERT"), Some(Difficulty::Expert));
        assert_eq!(Difficulty::from_name("grandmaster"), None);
        assert_eq!(Style::from_name("aggressive"), Some(Style::Aggressive));
        assert_eq!(Style::from_name("casual"), None);
    }

    #[test]
    fn balanced_style_is_neutral() {
        let bias = Style::Balanced.bias();
        assert_eq!(bias.capture, 0);
        assert_eq!(bias.center, 0);
        assert_eq!(bias.activity, 0);
    }

    #[test]
    fn aggressive_style_rewards_captures() {
        assert!(Style::Aggressive.bias().capture > 0);
        assert!(Style::Defensive.bias().capture < 0);
    }
}
