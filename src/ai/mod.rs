//! Move selection: a random baseline and alpha-beta negamax search.

pub mod engine;
pub mod evaluation;

pub use engine::{choose_best_move, AlphaBeta, MoveSelector, RandomPlay, SearchStats};
pub use evaluation::{evaluate, INF, MATE};
