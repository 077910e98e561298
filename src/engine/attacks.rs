//! Attack detection over the mailbox board.
//!
//! `is_attacked` answers "could any piece of this color capture on this
//! square in one pseudo-legal step?". It deliberately ignores whether the
//! attacking piece's own king would be exposed. Recursing into legality
//! here would loop back through the move generator, which itself relies on
//! attack detection for its legality filter.

use crate::engine::board::Board;
use crate::engine::types::{Color, Piece, PieceType, Square};

/// The eight knight jumps as (row, col) deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The four orthogonal ray directions (rook, queen).
pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal ray directions (bishop, queen).
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight king steps.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Is `target` attacked by any piece of color `by`?
///
/// Read-only; callable on the live board or any scratch copy.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    // Pawns capture diagonally toward their direction of travel, so an
    // attacking pawn sits one rank behind the target: opposite the
    // direction it advances.
    for dc in [-1, 1] {
        if let Some(sq) = target.offset(-by.pawn_direction(), dc) {
            if board.piece_at(sq) == Some(Piece::new(by, PieceType::Pawn)) {
                return true;
            }
        }
    }

    // Knights.
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(sq) = target.offset(dr, dc) {
            if board.piece_at(sq) == Some(Piece::new(by, PieceType::Knight)) {
                return true;
            }
        }
    }

    // Rook / queen along ranks and files: walk each ray to the first
    // occupied square and credit the attack only if that blocker matches.
    if ray_hits(board, target, by, &ORTHOGONAL_DIRS, PieceType::Rook) {
        return true;
    }

    // Bishop / queen along diagonals.
    if ray_hits(board, target, by, &DIAGONAL_DIRS, PieceType::Bishop) {
        return true;
    }

    // Enemy king on an adjacent square.
    for (dr, dc) in KING_OFFSETS {
        if let Some(sq) = target.offset(dr, dc) {
            if board.piece_at(sq) == Some(Piece::new(by, PieceType::King)) {
                return true;
            }
        }
    }

    false
}

/// Walk each ray from `target`; the first blocker on a ray attacks iff it
/// is `by`'s `slider` or queen.
fn ray_hits(
    board: &Board,
    target: Square,
    by: Color,
    dirs: &[(i8, i8); 4],
    slider: PieceType,
) -> bool {
    for &(dr, dc) in dirs {
        let mut sq = target;
        while let Some(next) = sq.offset(dr, dc) {
            sq = next;
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceType::Queen) {
                    return true;
                }
                break;
            }
        }
    }
    false
}

/// Is `side`'s king in check?
///
/// A missing king reports "in check" rather than panicking, so callers
/// treat king-gone positions as lost instead of crashing mid-search.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    match board.king_square(side) {
        Some(king) => is_attacked(board, king, !side),
        None => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
