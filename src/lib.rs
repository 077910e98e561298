//! woodpusher: a chess rules engine and adversarial search library.
//!
//! The crate is split into two layers:
//!   - [`engine`]: board representation, attack detection, fully legal move
//!     generation (check, castling, en passant, promotion), and a stateful
//!     [`engine::Game`] controller.
//!   - [`ai`]: move selection, as a random baseline and a depth-limited
//!     negamax search with alpha-beta pruning over a material-only
//!     evaluation.
//!
//! Moves cross the crate boundary in coordinate notation ("e2e4", "e7e8=Q");
//! parsing richer notations, rendering, and interactive loops are left to the
//! embedding application.

pub mod ai;
pub mod engine;

pub use ai::{choose_best_move, AlphaBeta, MoveSelector, RandomPlay, SearchStats};
pub use engine::{Board, ChessError, Color, Game, GameStatus, Move, Piece, PieceType, Square};
