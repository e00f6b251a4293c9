//! Two-player chess rules engine.
//!
//! This crate owns the board state, generates the legal moves for the side
//! to move, applies and reverses moves, and detects check, checkmate, and
//! stalemate. It has no opinion on rendering, input, or search; callers
//! drive it through [`GameState`].
//!
//! Castling, en passant, promotion, and draw-by-rule detection are out of
//! scope.
//!
//! # Example
//!
//! ```
//! use chess_model::Square;
//! use chess_rules::GameState;
//!
//! let mut game = GameState::new();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let played = game.submit(
//!     Square::from_algebraic("e2").unwrap(),
//!     Square::from_algebraic("e4").unwrap(),
//! ).unwrap();
//! assert_eq!(played.notation(), "e2e4");
//!
//! game.undo_last_move();
//! assert_eq!(game.ply_count(), 0);
//! ```

mod board;
mod game;
pub mod movegen;

pub use board::Board;
pub use game::{GameState, MoveError};
pub use movegen::{is_king_attacked, pseudo_legal_moves, square_under_attack};
