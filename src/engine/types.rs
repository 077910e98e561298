use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Index for array lookups: White=0, Black=1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction a pawn of this color advances in, as a row delta
    /// (row 0 is rank 8, so White moves toward smaller row indices).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Back-rank row for this color (White: row 7, Black: row 0).
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceType
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Material value in centipawns. The king carries a large finite value so
    /// that a lost king and a forced mate sit on the same scale.
    pub fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 100,
            PieceType::Knight => 320,
            PieceType::Bishop => 330,
            PieceType::Rook => 500,
            PieceType::Queen => 900,
            PieceType::King => 20_000,
        }
    }

    /// Single uppercase letter for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a piece letter; uppercase is White, lowercase is Black.
    pub fn from_char(c: char) -> Option<(Color, PieceType)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        Some((color, piece))
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "pawn"),
            PieceType::Knight => write!(f, "knight"),
            PieceType::Bishop => write!(f, "bishop"),
            PieceType::Rook => write!(f, "rook"),
            PieceType::Queen => write!(f, "queen"),
            PieceType::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A colored piece occupying a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.to_char(self.color))
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A square on the board, addressed as (row, col) with row 0 = rank 8 and
/// col 0 = file a. Algebraic "e4" therefore maps to row 8 − 4 = 4, col 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "square out of range: ({row}, {col})");
        Square { row, col }
    }

    /// Offset by a (row, col) delta, returning `None` off the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Parse algebraic notation like "e4".
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'0');
        if col < 8 && (1..=8).contains(&rank) {
            Some(Square::new(8 - rank, col))
        } else {
            None
        }
    }

    /// Convert to algebraic notation like "e4".
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'0' + (8 - self.row)) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// A chess move: from-square, to-square, and optional promotion kind.
///
/// A plain value object: castling and en-passant capture are recognized by
/// the applier from board context, not encoded in the move itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: Square, to: Square, promotion: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Parse coordinate notation: "e2e4", or "e7e8=Q" with a promotion
    /// suffix. The promotion letter is case-insensitive; pawns and kings are
    /// not valid promotion targets.
    pub fn from_coord(s: &str) -> Result<Self, ChessError> {
        // The notation is ASCII by definition; the guard also keeps the
        // byte-offset slices below from splitting a multi-byte character.
        if !s.is_ascii() || s.len() < 4 {
            return Err(ChessError::InvalidCoord(s.to_string()));
        }
        let from = Square::from_algebraic(&s[0..2])
            .ok_or_else(|| ChessError::InvalidSquare(s[0..2].to_string()))?;
        let to = Square::from_algebraic(&s[2..4])
            .ok_or_else(|| ChessError::InvalidSquare(s[2..4].to_string()))?;

        let promotion = match &s[4..] {
            "" => None,
            suffix => {
                // Exactly "=" plus one letter; trailing garbage is rejected
                // rather than ignored.
                let letter = suffix
                    .strip_prefix('=')
                    .filter(|rest| rest.len() == 1)
                    .and_then(|rest| rest.chars().next())
                    .ok_or_else(|| ChessError::InvalidCoord(s.to_string()))?;
                let (_, kind) = PieceType::from_char(letter)
                    .ok_or_else(|| ChessError::InvalidPromotion(letter.to_string()))?;
                if matches!(kind, PieceType::Pawn | PieceType::King) {
                    return Err(ChessError::InvalidPromotion(letter.to_string()));
                }
                Some(kind)
            }
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char(Color::White))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// Current status of a game, from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the chess engine.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error("invalid move: {from} -> {to}: {reason}")]
    InvalidMove {
        from: String,
        to: String,
        reason: String,
    },

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid coordinate move: {0}")]
    InvalidCoord(String),

    #[error("invalid promotion piece: {0}")]
    InvalidPromotion(String),

    #[error("game is already over: {0}")]
    GameOver(String),

    #[error("no legal moves for {0}")]
    NoLegalMoves(Color),

    #[error("no moves to undo")]
    NothingToUndo,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn color_pawn_direction() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
    }

    #[test]
    fn color_back_row() {
        assert_eq!(Color::White.back_row(), 7);
        assert_eq!(Color::Black.back_row(), 0);
    }

    #[test]
    fn piece_type_values() {
        assert_eq!(PieceType::Pawn.value(), 100);
        assert_eq!(PieceType::Knight.value(), 320);
        assert_eq!(PieceType::Bishop.value(), 330);
        assert_eq!(PieceType::Rook.value(), 500);
        assert_eq!(PieceType::Queen.value(), 900);
        assert_eq!(PieceType::King.value(), 20_000);
    }

    #[test]
    fn piece_type_char_round_trip() {
        for pt in PieceType::ALL {
            let wc = pt.to_char(Color::White);
            let bc = pt.to_char(Color::Black);
            assert!(wc.is_ascii_uppercase());
            assert!(bc.is_ascii_lowercase());
            assert_eq!(PieceType::from_char(wc), Some((Color::White, pt)));
            assert_eq!(PieceType::from_char(bc), Some((Color::Black, pt)));
        }
    }

    #[test]
    fn piece_type_from_char_invalid() {
        assert_eq!(PieceType::from_char('x'), None);
        assert_eq!(PieceType::from_char('1'), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::new(7, 0)));
        assert_eq!(Square::from_algebraic("h1"), Some(Square::new(7, 7)));
        assert_eq!(Square::from_algebraic("a8"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::new(0, 7)));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::new(4, 4)));
    }

    #[test]
    fn square_algebraic_round_trip() {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::new(row, col);
                assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
            }
        }
    }

    #[test]
    fn square_from_algebraic_invalid() {
        assert_eq!(Square::from_algebraic(""), None);
        assert_eq!(Square::from_algebraic("a"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("abc"), None);
    }

    #[test]
    fn square_offset() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.offset(-1, 0), Square::from_algebraic("e5"));
        assert_eq!(e4.offset(1, 1), Square::from_algebraic("f3"));
        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn move_display() {
        let m = Move::new(
            Square::from_algebraic("e2").unwrap(),
            Square::from_algebraic("e4").unwrap(),
        );
        assert_eq!(m.to_string(), "e2e4");

        let promo = Move::with_promotion(
            Square::from_algebraic("e7").unwrap(),
            Square::from_algebraic("e8").unwrap(),
            PieceType::Queen,
        );
        assert_eq!(promo.to_string(), "e7e8=Q");
    }

    #[test]
    fn move_from_coord() {
        let m = Move::from_coord("e2e4").unwrap();
        assert_eq!(m.from, Square::from_algebraic("e2").unwrap());
        assert_eq!(m.to, Square::from_algebraic("e4").unwrap());
        assert_eq!(m.promotion, None);
    }

    #[test]
    fn move_from_coord_promotion() {
        let m = Move::from_coord("e7e8=Q").unwrap();
        assert_eq!(m.promotion, Some(PieceType::Queen));
        // Lowercase letter also accepted.
        let m = Move::from_coord("a2a1=n").unwrap();
        assert_eq!(m.promotion, Some(PieceType::Knight));
    }

    #[test]
    fn move_coord_round_trip() {
        for coord in ["e2e4", "g8f6", "e7e8=Q", "a2a1=R"] {
            let m = Move::from_coord(coord).unwrap();
            assert_eq!(m.to_string(), coord);
        }
    }

    #[test]
    fn move_from_coord_invalid() {
        assert!(Move::from_coord("").is_err());
        assert!(Move::from_coord("e2").is_err());
        assert!(Move::from_coord("e2e9").is_err());
        assert!(Move::from_coord("i2e4").is_err());
        assert!(Move::from_coord("e7e8Q").is_err());
        assert!(Move::from_coord("e7e8=K").is_err());
        assert!(Move::from_coord("e7e8=P").is_err());
        assert!(Move::from_coord("e7e8=").is_err());
    }

    #[test]
    fn move_from_coord_non_ascii() {
        // Multi-byte characters must produce an error, not a slicing panic,
        // wherever they land in the string.
        for coord in ["aée4", "é2e4", "e2é4", "e7e8=Ω", "♞b1c3"] {
            assert!(
                matches!(
                    Move::from_coord(coord),
                    Err(ChessError::InvalidCoord(_) | ChessError::InvalidSquare(_))
                ),
                "{coord:?} should be rejected"
            );
        }
    }

    #[test]
    fn move_from_coord_rejects_trailing_garbage() {
        assert!(Move::from_coord("e7e8=Qx").is_err());
        assert!(Move::from_coord("e7e8=Qxx").is_err());
        assert!(Move::from_coord("e2e4=").is_err());
        assert!(Move::from_coord("e2e4x").is_err());
    }

    #[test]
    fn game_status_strings() {
        assert_eq!(GameStatus::Active.as_str(), "active");
        assert_eq!(GameStatus::Check.as_str(), "check");
        assert_eq!(GameStatus::Checkmate.as_str(), "checkmate");
        assert_eq!(GameStatus::Stalemate.as_str(), "stalemate");
    }

    #[test]
    fn game_status_is_game_over() {
        assert!(!GameStatus::Active.is_game_over());
        assert!(!GameStatus::Check.is_game_over());
        assert!(GameStatus::Checkmate.is_game_over());
        assert!(GameStatus::Stalemate.is_game_over());
    }
}
