//! Board state representation.

use chess_model::{Color, Move, Piece, PieceKind, Square};
use std::fmt;

/// An 8x8 board of optional pieces.
///
/// Row 0 is black's home rank, row 7 white's, matching [`Square`]'s
/// orientation. The board also caches each color's king square so check
/// testing does not have to scan the grid; the cache is refreshed whenever
/// [`set`](Board::set) places a king.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    /// King squares indexed by [`Color::index`]. Meaningful only once a
    /// king of that color has been placed; during play exactly one king
    /// of each color is always on the board.
    kings: [Square; 2],
}

impl Board {
    /// Creates an empty board.
    ///
    /// The king cache holds the starting-position squares until kings are
    /// actually placed; put both kings on the board before generating moves.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            kings: [Square::new(7, 4), Square::new(0, 4)],
        }
    }

    /// Creates the standard starting position.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back_rank.iter().enumerate() {
            let col = col as u8;
            board.set(Square::new(0, col), Some(Piece::new(Color::Black, kind)));
            board.set(
                Square::new(1, col),
                Some(Piece::new(Color::Black, PieceKind::Pawn)),
            );
            board.set(
                Square::new(6, col),
                Some(Piece::new(Color::White, PieceKind::Pawn)),
            );
            board.set(Square::new(7, col), Some(Piece::new(Color::White, kind)));
        }
        board
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Places a piece on (or clears) the given square.
    ///
    /// Placing a king updates that color's cached king square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
        if let Some(piece) = piece {
            if piece.kind == PieceKind::King {
                self.kings[piece.color.index()] = sq;
            }
        }
    }

    /// Returns the cached square of the given color's king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Builds a [`Move`] between two squares, snapshotting the mover and
    /// any captured piece from this board.
    ///
    /// This is how a caller turns two user-picked squares into a candidate
    /// move to match against the legal list. The origin square must be
    /// occupied.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty; constructing a move without a mover is a
    /// caller bug.
    pub fn move_between(&self, from: Square, to: Square) -> Move {
        let piece = self
            .piece_at(from)
            .unwrap_or_else(|| panic!("no piece on {} to move", from));
        Move::new(from, to, piece, self.piece_at(to))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{})", self)
    }
}

impl fmt::Display for Board {
    /// Renders the board as eight rows of piece characters, '.' for empty,
    /// rank 8 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for square in row {
                match square {
                    Some(piece) => write!(f, "{}", piece.to_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
