//! Move list container.

use crate::Move;

/// An ordered list of moves.
///
/// Generation order is the row-major board scan and is deterministic, but
/// carries no meaning beyond reproducibility.
#[derive(Clone, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if the list contains a move equal to `m`.
    ///
    /// Move equality is by identity key, so this matches any move between
    /// the same square pair regardless of piece snapshots.
    #[inline]
    pub fn contains(&self, m: Move) -> bool {
        self.moves.contains(&m)
    }

    /// Finds the list's own move equal to `m`, if any.
    #[inline]
    pub fn find(&self, m: Move) -> Option<Move> {
        self.moves.iter().copied().find(|&candidate| candidate == m)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
