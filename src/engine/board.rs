//! Mailbox board representation and the move applier.
//!
//! `Board` stores piece placement as an 8×8 grid (row 0 = rank 8), the six
//! castling bookkeeping flags (king moved, queenside rook moved, kingside
//! rook moved, per color), and the en-passant target square. The whole value
//! is `Copy`, so saving and restoring state around a speculative move is a
//! plain assignment that can never leave a flag or the en-passant target
//! behind.

use crate::engine::attacks;
use crate::engine::types::{Color, Move, Piece, PieceType, Square};

// ---------------------------------------------------------------------------
// CastlingState
// ---------------------------------------------------------------------------

/// Has-moved flags controlling castling rights, indexed by `Color::index()`.
///
/// A flag records that the piece left its home square at some point; it is
/// never cleared, so castling rights once forfeited stay forfeited even if
/// a rook later returns to its corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingState {
    pub king_moved: [bool; 2],
    pub queenside_rook_moved: [bool; 2],
    pub kingside_rook_moved: [bool; 2],
}

impl CastlingState {
    #[inline]
    pub fn can_castle_kingside(&self, color: Color) -> bool {
        !self.king_moved[color.index()] && !self.kingside_rook_moved[color.index()]
    }

    #[inline]
    pub fn can_castle_queenside(&self, color: Color) -> bool {
        !self.king_moved[color.index()] && !self.queenside_rook_moved[color.index()]
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A complete position: piece placement plus castling and en-passant state.
///
/// The side to move is not part of the board; the move generator, attack
/// oracle, and search all take it as an explicit parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],

    /// Castling bookkeeping for both sides.
    pub castling: CastlingState,

    /// En-passant target square (the square the capturing pawn lands on).
    /// Valid for exactly one subsequent move.
    pub en_passant: Option<Square>,
}

impl Board {
    /// Create an empty board with no pieces and fresh castling state.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            castling: CastlingState::default(),
            en_passant: None,
        }
    }

    /// Standard starting position.
    pub fn starting() -> Self {
        use PieceType::*;
        let mut board = Board::empty();

        const BACK_RANK: [PieceType; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.put_piece(Square::new(0, col as u8), Piece::new(Color::Black, kind));
            board.put_piece(Square::new(7, col as u8), Piece::new(Color::White, kind));
        }
        for col in 0..8 {
            board.put_piece(Square::new(1, col), Piece::new(Color::Black, Pawn));
            board.put_piece(Square::new(6, col), Piece::new(Color::White, Pawn));
        }

        board
    }

    // -----------------------------------------------------------------------
    // Piece manipulation (low-level)
    // -----------------------------------------------------------------------

    /// What piece (if any) is on a given square?
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize]
    }

    /// Place a piece on a square, replacing whatever was there.
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.grid[sq.row as usize][sq.col as usize] = Some(piece);
    }

    /// Remove the piece (if any) from a square.
    #[inline]
    pub fn clear_square(&mut self, sq: Square) {
        self.grid[sq.row as usize][sq.col as usize] = None;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Find the king square for the given color. `None` only in degenerate
    /// positions (a captured king during speculative play).
    pub fn king_square(&self, color: Color) -> Option<Square> {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::new(row, col);
                if self.piece_at(sq) == Some(Piece::new(color, PieceType::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Iterate over all occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|p| (sq, p))
            })
        })
    }

    /// Is `sq` attacked by any piece of color `by`?
    #[inline]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        attacks::is_attacked(self, sq, by)
    }

    /// Is `side`'s king currently in check?
    #[inline]
    pub fn is_in_check(&self, side: Color) -> bool {
        attacks::is_in_check(self, side)
    }

    // -----------------------------------------------------------------------
    // Move applier
    // -----------------------------------------------------------------------

    /// Apply a move to the board, updating castling flags and the en-passant
    /// target.
    ///
    /// The caller is responsible for supplying a move that is at least
    /// pseudo-legal for this board; legality (own king safety) is the move
    /// generator's concern. Three move shapes are recognized in order:
    /// castling (king moving two columns), en-passant capture (pawn moving
    /// diagonally onto an empty square), and everything else (normal move,
    /// direct capture, promotion).
    pub fn apply(&mut self, mv: Move) {
        // The en-passant window lasts exactly one move. Clear it before
        // anything else; a double push below re-establishes it.
        self.en_passant = None;

        let piece = match self.piece_at(mv.from) {
            Some(p) => p,
            None => {
                debug_assert!(false, "apply called with empty origin {}", mv.from);
                return;
            }
        };
        let color = piece.color;

        // --- Castling: king moves exactly two columns ---
        if piece.kind == PieceType::King && mv.from.col.abs_diff(mv.to.col) == 2 {
            self.clear_square(mv.from);
            self.put_piece(mv.to, piece);

            let rook = Piece::new(color, PieceType::Rook);
            if mv.to.col > mv.from.col {
                // Kingside: rook hops from the h-file to just left of the king.
                self.clear_square(Square::new(mv.from.row, 7));
                self.put_piece(Square::new(mv.from.row, mv.to.col - 1), rook);
                self.castling.kingside_rook_moved[color.index()] = true;
            } else {
                // Queenside: rook hops from the a-file to just right of the king.
                self.clear_square(Square::new(mv.from.row, 0));
                self.put_piece(Square::new(mv.from.row, mv.to.col + 1), rook);
                self.castling.queenside_rook_moved[color.index()] = true;
            }
            self.castling.king_moved[color.index()] = true;
            return;
        }

        // --- En-passant capture: pawn steps diagonally onto an empty square ---
        if piece.kind == PieceType::Pawn
            && mv.from.col.abs_diff(mv.to.col) == 1
            && self.piece_at(mv.to).is_none()
        {
            self.clear_square(mv.from);
            self.put_piece(mv.to, piece);
            // The captured pawn sits one rank behind the landing square.
            let behind = (mv.to.row as i8 - color.pawn_direction()) as u8;
            self.clear_square(Square::new(behind, mv.to.col));
            return;
        }

        // --- Normal move / direct capture / promotion ---
        self.clear_square(mv.from);
        let landing = match mv.promotion {
            Some(kind) => Piece::new(color, kind),
            None => piece,
        };
        self.put_piece(mv.to, landing);

        match piece.kind {
            PieceType::King => {
                self.castling.king_moved[color.index()] = true;
            }
            PieceType::Rook => {
                // Only a rook leaving its home corner forfeits that wing.
                if mv.from.row == color.back_row() {
                    if mv.from.col == 0 {
                        self.castling.queenside_rook_moved[color.index()] = true;
                    }
                    if mv.from.col == 7 {
                        self.castling.kingside_rook_moved[color.index()] = true;
                    }
                }
            }
            PieceType::Pawn => {
                // A two-square advance opens the en-passant window on the
                // intermediate square.
                if mv.from.row.abs_diff(mv.to.row) == 2 {
                    let mid = (mv.from.row + mv.to.row) / 2;
                    self.en_passant = Some(Square::new(mid, mv.from.col));
                }
            }
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Board display (8×8 text grid)
    // -----------------------------------------------------------------------

    /// Render the board as an 8-line string (rank 8 at top), for debugging.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for row in 0..8u8 {
            s.push((b'0' + (8 - row)) as char);
            s.push(' ');
            for col in 0..8u8 {
                let ch = match self.piece_at(Square::new(row, col)) {
                    Some(p) => p.kind.to_char(p.color),
                    None => '.',
                };
                s.push(ch);
                if col < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
