//! Move selection engines.
//!
//! [`RandomPlay`] picks uniformly from the legal moves and is the baseline
//! opponent. [`AlphaBeta`] runs a fixed-depth negamax search with alpha-beta
//! pruning over the material evaluation.
//!
//! The search mutates the board it is given in place, restoring a saved copy
//! after each child, so the caller's board is bit-identical when the search
//! returns. `Board` is `Copy`, which makes save and restore whole-value
//! assignments that carry the castling flags and en-passant window along with
//! the piece placement.

use std::time::Instant;

use rand::seq::SliceRandom;
use tracing::debug;

use crate::ai::evaluation::{evaluate, INF, MATE};
use crate::engine::board::Board;
use crate::engine::game::Game;
use crate::engine::movegen;
use crate::engine::types::{ChessError, Color, Move};

/// Anything that can pick a move for the side to move in a game.
pub trait MoveSelector {
    fn select(&self, game: &Game) -> Result<Move, ChessError>;

    /// Human-readable engine name, for logs and UIs.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// RandomPlay
// ---------------------------------------------------------------------------

/// Uniformly random legal move. Useful as a baseline and for smoke tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlay;

impl MoveSelector for RandomPlay {
    fn select(&self, game: &Game) -> Result<Move, ChessError> {
        let moves = game.legal_moves();
        moves
            .choose(&mut rand::thread_rng())
            .copied()
            .ok_or(ChessError::NoLegalMoves(game.side_to_move()))
    }

    fn name(&self) -> &str {
        "random"
    }
}

// ---------------------------------------------------------------------------
// AlphaBeta
// ---------------------------------------------------------------------------

/// Counters reported by a completed search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior and leaf nodes visited.
    pub nodes: u64,
    /// Depth the search was run at.
    pub depth: u32,
    /// Score of the chosen move, from the searching side's perspective.
    pub score: i32,
    /// Wall-clock search time in milliseconds.
    pub time_ms: u64,
}

/// Fixed-depth negamax with alpha-beta pruning.
#[derive(Clone, Copy, Debug)]
pub struct AlphaBeta {
    depth: u32,
}

impl AlphaBeta {
    pub fn new(depth: u32) -> Self {
        AlphaBeta { depth: depth.max(1) }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Search the position and return the best move with search counters.
    ///
    /// Returns `(None, stats)` when `side` has no legal moves. The board is
    /// left exactly as it was passed in.
    pub fn search(&self, board: &mut Board, side: Color) -> (Option<Move>, SearchStats) {
        let start = Instant::now();
        let mut stats = SearchStats {
            depth: self.depth,
            ..SearchStats::default()
        };

        let moves = movegen::legal_moves(board, side);
        let mut best: Option<Move> = None;
        let mut best_score = -INF;

        // Each root child gets a fresh full window; pruning happens only
        // inside the subtrees.
        for mv in moves {
            let saved = *board;
            board.apply(mv);
            let score = -negamax(board, self.depth - 1, !side, -INF, INF, &mut stats.nodes);
            *board = saved;

            if score > best_score || best.is_none() {
                best_score = score;
                best = Some(mv);
            }
        }

        if best.is_some() {
            stats.score = best_score;
        }
        stats.time_ms = start.elapsed().as_millis() as u64;
        debug!(
            side = %side,
            depth = stats.depth,
            nodes = stats.nodes,
            score = stats.score,
            time_ms = stats.time_ms,
            best = %best.map(|m| m.to_string()).unwrap_or_default(),
            "search finished"
        );
        (best, stats)
    }
}

impl MoveSelector for AlphaBeta {
    fn select(&self, game: &Game) -> Result<Move, ChessError> {
        let mut board = *game.board();
        let side = game.side_to_move();
        let (best, _) = self.search(&mut board, side);
        best.ok_or(ChessError::NoLegalMoves(side))
    }

    fn name(&self) -> &str {
        "alpha-beta"
    }
}

/// One-shot convenience wrapper around [`AlphaBeta::search`].
pub fn choose_best_move(board: &mut Board, side: Color, depth: u32) -> Result<Move, ChessError> {
    let (best, _) = AlphaBeta::new(depth).search(board, side);
    best.ok_or(ChessError::NoLegalMoves(side))
}

/// Negamax with alpha-beta pruning.
///
/// Leaves return the static evaluation; positions with no legal moves score
/// `-MATE` when the side to move is in check and 0 (draw) otherwise. Each
/// child move is applied to the live board and undone by restoring the saved
/// copy before the next sibling is tried.
fn negamax(
    board: &mut Board,
    depth: u32,
    side: Color,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return evaluate(board);
    }

    let moves = movegen::legal_moves(board, side);
    if moves.is_empty() {
        return if board.is_in_check(side) { -MATE } else { 0 };
    }

    let mut best = -INF;
    for mv in moves {
        let saved = *board;
        board.apply(mv);
        let score = -negamax(board, depth - 1, !side, -beta, -alpha, nodes);
        *board = saved;

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
