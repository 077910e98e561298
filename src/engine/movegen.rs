//! Legal move generation.
//!
//! Pipeline:
//!   1. Generate pseudo-legal moves per piece rule, scanning the board
//!      row-major from a8.
//!   2. Filter: apply each candidate to a scratch copy of the board and keep
//!      it only if the mover's own king is not in check afterwards.
//!
//! The hypothetical-application filter handles pins and discovered checks
//! without any dedicated pin analysis, at the price of one board copy per
//! candidate. Callers must not rely on any ordering beyond the board-scan
//! order, and must treat an empty result as checkmate or stalemate rather
//! than indexing into it.

use crate::engine::attacks;
use crate::engine::board::Board;
use crate::engine::types::{Color, Move, Piece, PieceType, Square};

// =========================================================================
// Public API
// =========================================================================

/// Generate all legal moves for `side`.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    for (sq, piece) in board.pieces() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceType::Pawn => pawn_moves(board, side, sq, &mut pseudo),
            PieceType::Knight => knight_moves(board, side, sq, &mut pseudo),
            PieceType::Bishop => {
                slider_moves(board, side, sq, &attacks::DIAGONAL_DIRS, &mut pseudo)
            }
            PieceType::Rook => {
                slider_moves(board, side, sq, &attacks::ORTHOGONAL_DIRS, &mut pseudo)
            }
            PieceType::Queen => {
                slider_moves(board, side, sq, &attacks::ORTHOGONAL_DIRS, &mut pseudo);
                slider_moves(board, side, sq, &attacks::DIAGONAL_DIRS, &mut pseudo);
            }
            PieceType::King => king_moves(board, side, sq, &mut pseudo),
        }
    }

    // Legality filter: the mover's king must survive the move. The scratch
    // copy is discarded, never written back, so the live board (and its
    // castling/en-passant state) is untouched.
    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        let mut probe = *board;
        probe.apply(mv);
        if !attacks::is_in_check(&probe, side) {
            legal.push(mv);
        }
    }
    legal
}

/// Legal moves originating from a specific square.
pub fn legal_moves_from(board: &Board, side: Color, from: Square) -> Vec<Move> {
    legal_moves(board, side)
        .into_iter()
        .filter(|m| m.from == from)
        .collect()
}

// =========================================================================
// Pawn moves
// =========================================================================

fn pawn_moves(board: &Board, side: Color, from: Square, moves: &mut Vec<Move>) {
    let dir = side.pawn_direction();
    let (start_row, promo_row): (u8, u8) = match side {
        Color::White => (6, 0),
        Color::Black => (1, 7),
    };

    // Single push onto an empty square; two squares from the start row when
    // both the intermediate and destination squares are empty.
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            push_pawn_move(from, one, promo_row, moves);

            if from.row == start_row {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }

        // Diagonal captures onto enemy-occupied squares.
        for dc in [-1, 1] {
            if let Some(to) = from.offset(dir, dc) {
                if let Some(target) = board.piece_at(to) {
                    if target.color != side {
                        push_pawn_move(from, to, promo_row, moves);
                    }
                }
            }
        }

        // En-passant capture onto the recorded target square.
        if let Some(ep) = board.en_passant {
            for dc in [-1, 1] {
                if from.offset(dir, dc) == Some(ep) {
                    moves.push(Move::new(from, ep));
                }
            }
        }
    }
}

/// Push a pawn move, promoting when landing on the far rank. The generator
/// only ever offers queen promotions.
fn push_pawn_move(from: Square, to: Square, promo_row: u8, moves: &mut Vec<Move>) {
    if to.row == promo_row {
        moves.push(Move::with_promotion(from, to, PieceType::Queen));
    } else {
        moves.push(Move::new(from, to));
    }
}

// =========================================================================
// Knight moves
// =========================================================================

fn knight_moves(board: &Board, side: Color, from: Square, moves: &mut Vec<Move>) {
    for (dr, dc) in attacks::KNIGHT_OFFSETS {
        if let Some(to) = from.offset(dr, dc) {
            if board.piece_at(to).map_or(true, |p| p.color != side) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

// =========================================================================
// Slider moves (bishop, rook, queen)
// =========================================================================

fn slider_moves(
    board: &Board,
    side: Color,
    from: Square,
    dirs: &[(i8, i8); 4],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in dirs {
        let mut sq = from;
        while let Some(to) = sq.offset(dr, dc) {
            sq = to;
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(target) => {
                    if target.color != side {
                        moves.push(Move::new(from, to));
                    }
                    break; // Rays never continue past any occupied square.
                }
            }
        }
    }
}

// =========================================================================
// King moves (including castling)
// =========================================================================

fn king_moves(board: &Board, side: Color, from: Square, moves: &mut Vec<Move>) {
    for (dr, dc) in attacks::KING_OFFSETS {
        if let Some(to) = from.offset(dr, dc) {
            if board.piece_at(to).map_or(true, |p| p.color != side) {
                moves.push(Move::new(from, to));
            }
        }
    }

    castling_moves(board, side, from, moves);
}

/// Castling: king on its home square and unmoved, the relevant rook present
/// on its corner and unmoved, the squares strictly between them empty, and
/// none of the king's start, transit, and end squares attacked. Everything
/// is checked on the live, un-mutated board.
fn castling_moves(board: &Board, side: Color, from: Square, moves: &mut Vec<Move>) {
    let row = side.back_row();
    if from != Square::new(row, 4) || board.castling.king_moved[side.index()] {
        return;
    }
    let them = !side;
    let rook = Piece::new(side, PieceType::Rook);

    // Kingside: e → g, rook on the h-file.
    if !board.castling.kingside_rook_moved[side.index()]
        && board.piece_at(Square::new(row, 7)) == Some(rook)
        && board.piece_at(Square::new(row, 5)).is_none()
        && board.piece_at(Square::new(row, 6)).is_none()
        && !board.is_square_attacked(Square::new(row, 4), them)
        && !board.is_square_attacked(Square::new(row, 5), them)
        && !board.is_square_attacked(Square::new(row, 6), them)
    {
        moves.push(Move::new(from, Square::new(row, 6)));
    }

    // Queenside: e → c, rook on the a-file; b-file must also be empty even
    // though the king never crosses it.
    if !board.castling.queenside_rook_moved[side.index()]
        && board.piece_at(Square::new(row, 0)) == Some(rook)
        && board.piece_at(Square::new(row, 1)).is_none()
        && board.piece_at(Square::new(row, 2)).is_none()
        && board.piece_at(Square::new(row, 3)).is_none()
        && !board.is_square_attacked(Square::new(row, 4), them)
        && !board.is_square_attacked(Square::new(row, 3), them)
        && !board.is_square_attacked(Square::new(row, 2), them)
    {
        moves.push(Move::new(from, Square::new(row, 2)));
    }
}

// =========================================================================
// Tests
// =========================================================================
