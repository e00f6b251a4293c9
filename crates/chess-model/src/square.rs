//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by (row, column).
///
/// Row 0 is black's home rank (rank 8) and row 7 is white's (rank 1),
/// matching the standard orientation with white at the bottom. Columns
/// run from 0 (file a) to 7 (file h).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column.
    ///
    /// Out-of-range coordinates are a caller bug; this panics in debug
    /// builds rather than producing an off-board square.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Creates a square from signed coordinates, returning `None` when
    /// either falls off the board. Used when stepping by move offsets.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the square offset by (row delta, column delta), or `None`
    /// if the result is off-board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return None,
        };
        let row = match bytes[1] {
            b'1'..=b'8' => b'8' - bytes[1],
            _ => return None,
        };
        Some(Square { row, col })
    }

    /// Returns the row (0-7, top to bottom).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7, left to right).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the file character ('a'-'h') for this square's column.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank character ('1'-'8') for this square's row.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
