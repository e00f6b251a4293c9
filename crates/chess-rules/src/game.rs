//! Game state management: apply/undo, legality filtering, terminal detection.

use crate::movegen::{pseudo_legal_moves, square_under_attack};
use crate::Board;
use chess_model::{Color, Move, MoveList, PieceKind, Square};
use thiserror::Error;

/// Error type for guarded move submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not in the current legal-move list.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The origin square holds no piece of the side to move.
    #[error("no {side} piece on {square}")]
    NotMoversPiece { square: Square, side: Color },
}

/// A chess game in progress: board, side to move, and move history.
///
/// The engine applies moves without legality checks ([`apply_move`]
/// expects a move drawn from [`legal_moves`]) and reverses them from the
/// snapshots each [`Move`] carries. Checkmate and stalemate are detected
/// as a side effect of [`legal_moves`] and cached in flags; the flags are
/// stale between calls, so refresh them after every apply or undo before
/// trusting them.
///
/// [`apply_move`]: GameState::apply_move
/// [`legal_moves`]: GameState::legal_moves
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    checkmate: bool,
    stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a game in the standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Creates a game from a constructed position.
    ///
    /// Both kings must be on the board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        GameState {
            board,
            side_to_move,
            history: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Restarts the game from the standard starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the number of plies played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns true if the last [`legal_moves`](GameState::legal_moves)
    /// call found checkmate.
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Returns true if the last [`legal_moves`](GameState::legal_moves)
    /// call found stalemate.
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Returns true if the game has reached a terminal position.
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }

    /// Executes a move: clears the origin, places the mover on the
    /// destination (over any captured piece), logs the move, and flips the
    /// side to move. The board's king cache follows king moves.
    ///
    /// No legality check happens here; apply only moves drawn from
    /// [`legal_moves`](GameState::legal_moves), or use
    /// [`submit`](GameState::submit). Applying a move whose snapshot is
    /// stale relative to the current board corrupts the position.
    pub fn apply_move(&mut self, m: Move) {
        self.board.set(m.from(), None);
        self.board.set(m.to(), Some(m.piece()));
        self.history.push(m);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Reverses the most recent move, restoring board, side to move, and
    /// king cache from the move's snapshots. Returns the undone move, or
    /// `None` if there is no history (a no-op, not an error).
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let m = self.history.pop()?;
        self.board.set(m.from(), Some(m.piece()));
        self.board.set(m.to(), m.captured());
        self.side_to_move = self.side_to_move.opposite();
        // Clearing the destination cannot move the cache back, so restore
        // it explicitly for king moves.
        debug_assert!(
            m.piece().kind != PieceKind::King
                || self.board.king_square(m.piece().color) == m.from()
        );
        Some(m)
    }

    /// Returns all legal moves for the side to move and refreshes the
    /// checkmate/stalemate flags.
    ///
    /// Each pseudo-legal candidate is simulated on the live board, tested
    /// for leaving the mover's own king attacked, and reverted; board and
    /// history are exactly as before when this returns. An empty result
    /// means checkmate when the mover is in check, stalemate otherwise.
    pub fn legal_moves(&mut self) -> MoveList {
        let mover = self.side_to_move;
        let mut moves = pseudo_legal_moves(&self.board, mover);

        let board = &mut self.board;
        moves.retain(|&m| {
            board.set(m.from(), None);
            board.set(m.to(), Some(m.piece()));
            let safe = !square_under_attack(board, board.king_square(mover), mover.opposite());
            board.set(m.from(), Some(m.piece()));
            board.set(m.to(), m.captured());
            safe
        });

        if moves.is_empty() {
            self.checkmate = self.in_check();
            self.stalemate = !self.checkmate;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }

    /// Returns true if the side to move's king is currently attacked.
    pub fn in_check(&self) -> bool {
        square_under_attack(
            &self.board,
            self.board.king_square(self.side_to_move),
            self.side_to_move.opposite(),
        )
    }

    /// Guarded move entry for callers holding two picked squares: builds a
    /// candidate move from the current board, matches it by identity key
    /// against the legal list, and applies the matched move.
    ///
    /// Returns the applied move (with its authoritative snapshots) so the
    /// caller can render it.
    pub fn submit(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let side = self.side_to_move;
        match self.board.piece_at(from) {
            Some(piece) if piece.color == side => {}
            _ => return Err(MoveError::NotMoversPiece { square: from, side }),
        }
        let candidate = self.board.move_between(from, to);
        let legal = self.legal_moves();
        let m = legal
            .find(candidate)
            .ok_or_else(|| MoveError::IllegalMove(candidate.notation()))?;
        self.apply_move(m);
        Ok(m)
    }
}
