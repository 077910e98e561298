//! Stateful game controller.
//!
//! [`Game`] owns a [`Board`], the side to move, the current status, and the
//! move history. All mutation goes through [`Game::make_move`], which accepts
//! only moves drawn from the legal move set, so a `Game` can never reach an
//! illegal position.

use tracing::{debug, info};

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{ChessError, Color, GameStatus, Move, Square};

/// One completed turn: the board as it stood before the move was applied.
/// Keeping whole board snapshots makes undo a plain assignment; at one `Copy`
/// board per ply the history stays small for any realistic game length.
#[derive(Clone, Copy, Debug)]
struct Turn {
    board_before: Board,
    mv: Move,
}

/// A chess game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    history: Vec<Turn>,
}

impl Game {
    /// Start a new game from the standard initial position, White to move.
    pub fn new() -> Self {
        Game::from_board(Board::starting(), Color::White)
    }

    /// Start from an arbitrary position. The caller is responsible for the
    /// position being reachable; the status is computed immediately, so a
    /// mated or stalemated position is reported as over from the first query.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            status: GameStatus::Active,
            history: Vec::new(),
        };
        game.status = game.compute_status();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Moves played so far, in order.
    pub fn moves_played(&self) -> Vec<Move> {
        self.history.iter().map(|t| t.mv).collect()
    }

    /// All legal moves for the side to move. Empty iff the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(&self.board, self.side_to_move)
    }

    /// Legal moves for the side to move starting from `from`.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        movegen::legal_moves_from(&self.board, self.side_to_move, from)
    }

    /// Play a move for the side to move.
    ///
    /// The move must be a member of the current legal move set; anything else
    /// is rejected without touching the board. On success the move is
    /// applied, the turn passes, and the new status string is returned.
    pub fn make_move(&mut self, mv: Move) -> Result<String, ChessError> {
        if self.is_over() {
            return Err(ChessError::GameOver(self.status.to_string()));
        }

        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::InvalidMove {
                from: mv.from.to_string(),
                to: mv.to.to_string(),
                reason: format!("not a legal move for {}", self.side_to_move),
            });
        }

        self.history.push(Turn {
            board_before: self.board,
            mv,
        });
        self.board.apply(mv);
        self.side_to_move = !self.side_to_move;
        self.status = self.compute_status();

        debug!(%mv, status = %self.status, "move played");
        if self.is_over() {
            info!(status = %self.status, moves = self.history.len(), "game over");
        }

        Ok(self.status.to_string())
    }

    /// Parse a coordinate-notation move ("e2e4", "e7e8=Q") and play it.
    pub fn make_move_coord(&mut self, coord: &str) -> Result<String, ChessError> {
        let mv = Move::from_coord(coord)?;
        self.make_move(mv)
    }

    /// Take back the most recent move, restoring board, turn, and status.
    pub fn undo_move(&mut self) -> Result<Move, ChessError> {
        let turn = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        self.board = turn.board_before;
        self.side_to_move = !self.side_to_move;
        self.status = self.compute_status();
        Ok(turn.mv)
    }

    /// Status for the side to move: no legal moves means checkmate when in
    /// check and stalemate otherwise; with moves available, check or active.
    fn compute_status(&self) -> GameStatus {
        let in_check = self.board.is_in_check(self.side_to_move);
        if self.legal_moves().is_empty() {
            if in_check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            }
        } else if in_check {
            GameStatus::Check
        } else {
            GameStatus::Active
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
