//! Negamax alpha-beta search with quiescence.

use patzer_core::{generate_legal, zobrist, Board, Color, Move};

use crate::eval::{evaluate, DRAW_SCORE, MATE_SCORE};
use crate::search::control::SearchControl;
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::ordering::{order_captures, order_moves};
use crate::search::tt::{Bound, TranspositionTable};

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 1_000_000;

/// Scores at or above this threshold indicate a forced mate.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 100;

/// Mutable search state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    pub nodes: u64,
    pub control: &'a SearchControl,
    pub tt: &'a mut TranspositionTable,
    pub killers: &'a mut KillerTable,
    pub history: &'a mut HistoryTable,
}

impl SearchContext<'_> {
    #[inline]
    fn should_abort(&self) -> bool {
        self.control.should_stop(self.nodes)
    }
}

/// Static evaluation from the side to move's point of view.
#[inline]
fn relative_eval(board: &Board) -> i32 {
    match board.side_to_move() {
        Color::White => evaluate(board),
        Color::Black => -evaluate(board),
    }
}

/// Quiescence search: resolve capture sequences before trusting the static
/// evaluation, so the search never stops in the middle of an exchange.
pub(super) fn quiesce(board: &Board, mut alpha: i32, beta: i32, ctx: &mut SearchContext) -> i32 {
    ctx.nodes += 1;
    if ctx.should_abort() {
        return 0;
    }

    // Stand pat: the side to move may decline every capture.
    let stand_pat = relative_eval(board);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut captures: Vec<Move> = generate_legal(board)
        .into_iter()
        .filter(|mv| mv.is_capture())
        .collect();
    order_captures(&mut captures);

    for mv in captures {
        let child = board.make_move(mv);
        let score = -quiesce(&child, -beta, -alpha, ctx);
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Negamax alpha-beta with transposition table, killers, and history.
///
/// `pv` receives the principal variation of this subtree whenever the node
/// raises alpha. A search aborted by the stop flag returns 0; the driver
/// discards any iteration that tripped the flag.
pub(super) fn alphabeta(
    board: &Board,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    ply: i32,
    pv: &mut Vec<Move>,
    ctx: &mut SearchContext,
) -> i32 {
    if ctx.should_abort() {
        return 0;
    }

    // Transposition cutoff. Skipped at the root: the driver needs a move,
    // not just a score.
    let hash = zobrist::hash(board);
    let tt_entry = ctx.tt.probe(hash);
    if ply > 0
        && let Some(entry) = tt_entry
        && entry.depth as i32 >= depth
    {
        match entry.bound {
            Bound::Exact => return entry.score,
            Bound::LowerBound if entry.score >= beta => return beta,
            Bound::UpperBound if entry.score <= alpha => return alpha,
            _ => {}
        }
    }

    if depth <= 0 {
        return quiesce(board, alpha, beta, ctx);
    }

    ctx.nodes += 1;

    let mut moves = generate_legal(board);
    if moves.is_empty() {
        return if board.is_in_check(board.side_to_move()) {
            // Prefer faster mates: closer to the root scores worse for the
            // side being mated.
            -MATE_SCORE + ply
        } else {
            DRAW_SCORE
        };
    }

    if board.halfmove_clock() >= 100 {
        return DRAW_SCORE;
    }

    let hash_move = tt_entry.and_then(|entry| entry.best_move);
    order_moves(&mut moves, hash_move, ctx.killers, ctx.history, ply as usize);

    let mut best_score = -INF;
    let mut best_move = None;
    let mut local_pv: Vec<Move> = Vec::new();
    let mut bound = Bound::UpperBound;

    for mv in moves {
        let child = board.make_move(mv);
        let mut child_pv = Vec::new();
        let score = -alphabeta(&child, depth - 1, -beta, -alpha, ply + 1, &mut child_pv, ctx);

        if ctx.control.stopped() {
            return 0;
        }

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
            local_pv.clear();
            local_pv.push(mv);
            local_pv.extend_from_slice(&child_pv);
        }

        if score > alpha {
            alpha = score;
            bound = Bound::Exact;
            pv.clear();
            pv.extend_from_slice(&local_pv);
        }

        if alpha >= beta {
            bound = Bound::LowerBound;
            if mv.is_quiet() {
                ctx.killers.store(ply as usize, mv);
                ctx.history
                    .update(mv.piece.color(), mv.piece.kind(), mv.to, depth);
            }
            break;
        }
    }

    ctx.tt.store(hash, depth as i16, best_score, bound, best_move);
    best_score
}
