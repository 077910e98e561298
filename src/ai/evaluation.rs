//! Static position evaluation.
//!
//! Material count only: every piece contributes its centipawn value, White
//! positive and Black negative. The score is always from White's point of
//! view; search negates it as needed.

use crate::engine::board::Board;
use crate::engine::types::Color;

/// Score bound that dominates any reachable evaluation.
pub const INF: i32 = 1_000_000;

/// Score for a checkmated side. Matches the king's material value so that
/// "king lost" and "mate found" rank the same.
pub const MATE: i32 = 20_000;

/// Material balance in centipawns, from White's perspective.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for (_, piece) in board.pieces() {
        let value = piece.kind.value();
        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }
    score
}
