//! Search driver: iterative deepening over the alpha-beta core.

pub mod control;
pub mod explain;
pub mod heuristics;
pub mod negamax;
pub mod ordering;
pub mod tt;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use patzer_core::{generate_legal, Board, Color, Move};

use crate::difficulty::{Difficulty, Style};
use crate::eval::{evaluate, evaluation_breakdown, Breakdown};
use control::SearchControl;
use explain::explain;
use heuristics::{HistoryTable, KillerTable};
use negamax::{alphabeta, SearchContext, INF, MATE_THRESHOLD};
use tt::{TranspositionTable, TtStats, DEFAULT_TT_MEGABYTES};

/// Options for one search call.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum iterative-deepening depth, at least 1 for a useful search.
    pub max_depth: u32,
    /// Soft time budget in milliseconds; 0 means unlimited.
    pub max_time_ms: u64,
    /// Difficulty preset, consumed by the move-selection layer.
    pub difficulty: Difficulty,
    /// Style preset, consumed by the move-selection layer.
    pub style: Style,
    /// Override for the difficulty's mistake probability.
    pub mistake_probability: Option<f64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_time_ms: 2_000,
            difficulty: Difficulty::Medium,
            style: Style::Balanced,
            mistake_probability: None,
        }
    }
}

impl SearchOptions {
    /// Options with a fixed depth and no time limit, for deterministic runs.
    pub fn fixed_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            max_time_ms: 0,
            ..Self::default()
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only when the position has no legal moves.
    pub best_move: Option<Move>,
    /// Evaluation in centipawns from White's point of view.
    pub evaluation: i32,
    /// Per-component evaluation of the root position.
    pub breakdown: Breakdown,
    /// Principal variation from the highest completed depth.
    pub pv: Vec<Move>,
    /// Deepest fully completed iteration.
    pub depth: u32,
    /// Total nodes visited.
    pub nodes: u64,
    /// Wall time spent searching.
    pub elapsed_ms: u64,
    /// Human-readable notes about the evaluation and chosen move.
    pub explanation: Vec<String>,
}

/// Iterative-deepening searcher.
///
/// Owns the transposition table, the killer and history tables, and the
/// random source for the difficulty layer. The transposition table and
/// history persist across searches; killers are cleared per call. A
/// `Searcher` must not be shared between concurrent searches.
pub struct Searcher {
    pub(crate) tt: TranspositionTable,
    pub(crate) killers: KillerTable,
    pub(crate) history: HistoryTable,
    pub(crate) rng: SmallRng,
    stop: Arc<AtomicBool>,
}

impl Searcher {
    /// Create a searcher with the default transposition table size.
    pub fn new() -> Self {
        Self::with_tt_megabytes(DEFAULT_TT_MEGABYTES)
    }

    /// Create a searcher with a transposition table of the given size.
    pub fn with_tt_megabytes(megabytes: usize) -> Self {
        Self {
            tt: TranspositionTable::new(megabytes),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            rng: SmallRng::from_os_rng(),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a searcher whose difficulty layer draws from a fixed seed.
    /// Searches themselves are deterministic either way.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Handle for requesting cancellation from another thread. Setting the
    /// flag makes the in-flight search return the best move from the most
    /// recent completed depth.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Transposition table counters, for observability.
    pub fn tt_stats(&self) -> TtStats {
        self.tt.stats()
    }

    /// Drop all cached search state (transposition table and history).
    pub fn reset(&mut self) {
        self.tt.clear();
        self.history = HistoryTable::new();
        self.killers.clear();
    }

    /// Run an iterative-deepening search.
    ///
    /// Deepens from 1 to `opts.max_depth`, keeping the best move of the
    /// last iteration that completed within the time budget. If not even
    /// depth 1 completed, the first legal move is returned with a warning
    /// line in the explanation.
    pub fn search(&mut self, board: &Board, opts: &SearchOptions) -> SearchResult {
        self.stop.store(false, Ordering::Release);
        self.killers.clear();
        let control = SearchControl::new(opts.max_time_ms, Arc::clone(&self.stop));

        let mut nodes: u64 = 0;
        let mut best_move: Option<Move> = None;
        let mut best_pv: Vec<Move> = Vec::new();
        let mut completed_depth: u32 = 0;
        let mut evaluation: i32 = 0;

        for depth in 1..=opts.max_depth {
            let mut ctx = SearchContext {
                nodes,
                control: &control,
                tt: &mut self.tt,
                killers: &mut self.killers,
                history: &mut self.history,
            };
            let mut pv = Vec::new();
            let score = alphabeta(board, depth as i32, -INF, INF, 0, &mut pv, &mut ctx);
            nodes = ctx.nodes;

            // A timed-out iteration is discarded, except the very first:
            // the engine must always have some move to offer.
            if control.stopped() && depth > 1 {
                break;
            }

            if !pv.is_empty() {
                best_move = Some(pv[0]);
                best_pv = pv;
                completed_depth = depth;
                evaluation = signed_to_white(score, board.side_to_move());
                debug!(depth, score, nodes, "search iteration completed");
            }

            if score.abs() >= MATE_THRESHOLD {
                break;
            }
        }

        let mut fallback = false;
        if best_move.is_none() {
            evaluation = evaluate(board);
            if let Some(&first) = generate_legal(board).first() {
                best_move = Some(first);
                best_pv = vec![first];
                fallback = true;
            }
        }

        let breakdown = evaluation_breakdown(board);
        let mut explanation = explain(evaluation, &breakdown, best_move.as_ref());
        if fallback {
            explanation.push("Search did not complete; playing the first legal move".to_string());
        }

        SearchResult {
            best_move,
            evaluation,
            breakdown,
            pv: best_pv,
            depth: completed_depth,
            nodes,
            elapsed_ms: control.elapsed().as_millis() as u64,
            explanation,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher").field("tt", &self.tt).finish()
    }
}

/// Convert a negamax score (side to move's view) to White's view.
fn signed_to_white(score: i32, side_to_move: Color) -> i32 {
    match side_to_move {
        Color::White => score,
        Color::Black => -score,
    }
}
