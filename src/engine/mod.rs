//! Chess rules: board state, attack detection, legal move generation, and
//! the stateful game controller.

pub mod attacks;
pub mod board;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::{Board, CastlingState};
pub use game::Game;
pub use movegen::{legal_moves, legal_moves_from};
pub use types::{ChessError, Color, GameStatus, Move, Piece, PieceType, Square};
