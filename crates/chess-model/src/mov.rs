//! Move representation.

use crate::{Piece, Square};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single ply: origin and destination squares plus a snapshot of the
/// piece that moved and the piece (if any) standing on the destination.
///
/// The snapshots are taken when the move is constructed, so a later board
/// mutation cannot change what an already-built move records. This is what
/// makes undo possible without consulting anything but the move itself.
///
/// # Equality
///
/// Two moves compare equal iff their [identity keys](Move::key) are equal.
/// The key encodes only the coordinates, not which piece moved or was
/// captured, so equality is purely geometric. This is intentional: a caller
/// can build a move from two user-picked squares and match it against the
/// generated legal-move list without knowing piece identity in advance.
#[derive(Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
}

impl Move {
    /// Creates a move with the given square pair and board snapshot data.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
        }
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the piece that moved, as recorded at construction time.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Returns the captured piece, if the destination was occupied when
    /// this move was constructed.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Returns true if this move captures a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns the coordinate-derived identity key:
    /// `start_row * 1000 + start_col * 100 + end_row * 10 + end_col`.
    ///
    /// With all coordinates in 0-7 the encoding is one base-10 digit per
    /// coordinate, so every valid square pair gets a distinct key.
    #[inline]
    pub const fn key(self) -> u16 {
        self.from.row() as u16 * 1000
            + self.from.col() as u16 * 100
            + self.to.row() as u16 * 10
            + self.to.col() as u16
    }

    /// Renders plain coordinate notation: start square then end square
    /// (e.g., "e2e4").
    pub fn notation(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
