//! Value types for chess.
//!
//! This crate provides the fundamental types used by the rules engine:
//! - [`Color`], [`PieceKind`], and [`Piece`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] and [`MoveList`] for move representation

mod color;
mod mov;
mod movelist;
mod piece;
mod square;

pub use color::Color;
pub use mov::Move;
pub use movelist::MoveList;
pub use piece::{Piece, PieceKind};
pub use square::Square;
