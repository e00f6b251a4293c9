//! Pseudo-legal move generation and attack testing.
//!
//! "Pseudo-legal" means a move satisfies its piece's movement geometry and
//! board occupancy rules but may still leave the mover's own king attacked;
//! that filtering happens in [`GameState::legal_moves`](crate::GameState::legal_moves).
//!
//! The attack test ([`square_under_attack`]) is built on the pseudo-legal
//! generator only. It must never consult the legality filter, which would
//! recurse back into the attack test.

use crate::Board;
use chess_model::{Color, MoveList, PieceKind, Square};

/// Knight jump offsets.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
];

/// King step offsets.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Orthogonal ray directions (rook).
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Diagonal ray directions (bishop).
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Generates all pseudo-legal moves for `side`.
///
/// The board is scanned row-major (row 0 first, column 0 first within a
/// row); emission order within a piece is fixed by its offset tables. The
/// order carries no meaning but is deterministic.
pub fn pseudo_legal_moves(board: &Board, side: Color) -> MoveList {
    let mut moves = MoveList::new();
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square::new(row, col);
            let Some(piece) = board.piece_at(sq) else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => pawn_moves(board, sq, side, &mut moves),
                PieceKind::Knight => leaper_moves(board, sq, side, &KNIGHT_OFFSETS, &mut moves),
                PieceKind::Bishop => ray_moves(board, sq, side, &BISHOP_DIRECTIONS, &mut moves),
                PieceKind::Rook => ray_moves(board, sq, side, &ROOK_DIRECTIONS, &mut moves),
                PieceKind::Queen => {
                    // A queen is the union of rook and bishop geometry.
                    ray_moves(board, sq, side, &ROOK_DIRECTIONS, &mut moves);
                    ray_moves(board, sq, side, &BISHOP_DIRECTIONS, &mut moves);
                }
                PieceKind::King => leaper_moves(board, sq, side, &KING_OFFSETS, &mut moves),
            }
        }
    }
    moves
}

/// Returns true if any pseudo-legal move of `by` lands on `sq`.
pub fn square_under_attack(board: &Board, sq: Square, by: Color) -> bool {
    pseudo_legal_moves(board, by)
        .into_iter()
        .any(|m| m.to() == sq)
}

/// Returns true if `color`'s king square is attacked by the opponent.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    square_under_attack(board, board.king_square(color), color.opposite())
}

/// Pawn moves: forward advances onto empty squares (double only from the
/// home row, and only when the single-advance square is already empty)
/// plus diagonal captures onto enemy-occupied squares. No en passant, no
/// promotion.
fn pawn_moves(board: &Board, from: Square, side: Color, moves: &mut MoveList) {
    let dir = side.pawn_row_delta();

    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            moves.push(board.move_between(from, one));
            if from.row() == side.pawn_home_row() {
                let two = from
                    .offset(2 * dir, 0)
                    .expect("double advance from the home row is on-board");
                if board.piece_at(two).is_none() {
                    moves.push(board.move_between(from, two));
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if let Some(piece) = board.piece_at(target) {
                if piece.color != side {
                    moves.push(board.move_between(from, target));
                }
            }
        }
    }
}

/// Single-step moves for knights and kings: each offset is legal if it
/// lands on-board and not on an ally.
fn leaper_moves(
    board: &Board,
    from: Square,
    side: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        let Some(target) = from.offset(dr, dc) else {
            continue;
        };
        match board.piece_at(target) {
            Some(piece) if piece.color == side => {}
            _ => moves.push(board.move_between(from, target)),
        }
    }
}

/// Sliding moves: step outward along each direction until blocked. An empty
/// square is a move and the ray continues; an enemy piece is a capture and
/// the ray stops; an ally or the board edge stops the ray without a move.
fn ray_moves(
    board: &Board,
    from: Square,
    side: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in directions {
        let mut target = from;
        while let Some(next) = target.offset(dr, dc) {
            target = next;
            match board.piece_at(target) {
                None => moves.push(board.move_between(from, target)),
                Some(piece) => {
                    if piece.color != side {
                        moves.push(board.move_between(from, target));
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_model::{Move, Piece};

    fn place(board: &mut Board, notation: &str, piece_char: char) {
        let sq = Square::from_algebraic(notation).unwrap();
        board.set(sq, Piece::from_char(piece_char));
    }

    fn has_move(moves: &MoveList, from: &str, to: &str) -> bool {
        let from = Square::from_algebraic(from).unwrap();
        let to = Square::from_algebraic(to).unwrap();
        moves.into_iter().any(|m| m.from() == from && m.to() == to)
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::starting();
        assert_eq!(pseudo_legal_moves(&board, Color::White).len(), 20);
        assert_eq!(pseudo_legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn generation_order_is_deterministic() {
        let board = Board::starting();
        let a: Vec<Move> = pseudo_legal_moves(&board, Color::White)
            .into_iter()
            .copied()
            .collect();
        let b: Vec<Move> = pseudo_legal_moves(&board, Color::White)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn pawn_single_and_double_advance() {
        let board = Board::starting();
        let moves = pseudo_legal_moves(&board, Color::White);
        assert!(has_move(&moves, "e2", "e3"));
        assert!(has_move(&moves, "e2", "e4"));
        // Triple advance is never generated.
        assert!(!has_move(&moves, "e2", "e5"));
    }

    #[test]
    fn blocked_pawn_generates_nothing_forward() {
        let mut board = Board::starting();
        // Block e2 with a black knight on e3.
        place(&mut board, "e3", 'n');
        let moves = pseudo_legal_moves(&board, Color::White);
        assert!(!has_move(&moves, "e2", "e3"));
        // The double advance requires the single square to be empty first.
        assert!(!has_move(&moves, "e2", "e4"));
        // But the pawns on d2 and f2 can now capture the knight.
        assert!(has_move(&moves, "d2", "e3"));
        assert!(has_move(&moves, "f2", "e3"));
    }

    #[test]
    fn pawn_double_blocked_at_destination_only() {
        let mut board = Board::starting();
        place(&mut board, "e4", 'n');
        let moves = pseudo_legal_moves(&board, Color::White);
        assert!(has_move(&moves, "e2", "e3"));
        assert!(!has_move(&moves, "e2", "e4"));
    }

    #[test]
    fn pawn_never_captures_forward() {
        let mut board = Board::empty();
        place(&mut board, "e1", 'K');
        place(&mut board, "e8", 'k');
        place(&mut board, "c4", 'P');
        place(&mut board, "c5", 'n');
        let moves = pseudo_legal_moves(&board, Color::White);
        assert!(!has_move(&moves, "c4", "c5"));
    }

    #[test]
    fn pawn_diagonal_requires_enemy() {
        let mut board = Board::empty();
        place(&mut board, "e1", 'K');
        place(&mut board, "e8", 'k');
        place(&mut board, "d4", 'P');
        let moves = pseudo_legal_moves(&board, Color::White);
        // Empty diagonals are never generated (no en passant).
        assert!(!has_move(&moves, "d4", "c5"));
        assert!(!has_move(&moves, "d4", "e5"));
    }

    #[test]
    fn black_pawn_moves_down_board() {
        let board = Board::starting();
        let moves = pseudo_legal_moves(&board, Color::Black);
        assert!(has_move(&moves, "e7", "e6"));
        assert!(has_move(&moves, "e7", "e5"));
    }

    #[test]
    fn knight_from_corner() {
        let mut board = Board::empty();
        place(&mut board, "e1", 'K');
        place(&mut board, "e8", 'k');
        place(&mut board, "a1", 'N');
        let moves = pseudo_legal_moves(&board, Color::White);
        assert!(has_move(&moves, "a1", "b3"));
        assert!(has_move(&moves, "a1", "c2"));
        let knight_moves = moves
            .into_iter()
            .filter(|m| m.from() == Square::from_algebraic("a1").unwrap())
            .count();
        assert_eq!(knight_moves, 2);
    }

    #[test]
    fn knight_cannot_land_on_ally() {
        let board = Board::starting();
        let moves = pseudo_legal_moves(&board, Color::White);
        // b1 knight: a3 and c3 are open, d2 holds an allied pawn.
        assert!(has_move(&moves, "b1", "a3"));
        assert!(has_move(&moves, "b1", "c3"));
        assert!(!has_move(&moves, "b1", "d2"));
    }

    #[test]
    fn bishop_ray_stops_at_ally() {
        let mut board = Board::empty();
        place(&mut board, "e1", 'K');
        place(&mut board, "e8", 'k');
        place(&mut board, "c1", 'B');
        place(&mut board, "e3", 'P');
        let moves = pseudo_legal_moves(&board, Color::White);
        // Adjacent empty square is reachable, the ally square and beyond are not.
        assert!(has_move(&moves, "c1", "d2"));
        assert!(!has_move(&moves, "c1", "e3"));
        assert!(!has_move(&moves, "c1", "f4"));
    }

    #[test]
    fn bishop_ray_captures_enemy_and_stops() {
        let mut board = Board::empty();
        place(&mut board, "e1", 'K');
        place(&mut board, "e8", 'k');
        place(&mut board, "c1", 'B');
        place(&mut board, "e3", 'p');
        let moves = pseudo_legal_moves(&board, Color::White);
        assert!(has_move(&moves, "c1", "d2"));
        assert!(has_move(&moves, "c1", "e3"));
        assert!(!has_move(&moves, "c1", "f4"));
    }

    #[test]
    fn rook_open_file_reaches_king_square() {
        let mut board = Board::empty();
        place(&mut board, "a1", 'R');
        place(&mut board, "a8", 'k');
        place(&mut board, "h1", 'K');
        assert!(square_under_attack(
            &board,
            Square::from_algebraic("a8").unwrap(),
            Color::White
        ));
        assert!(is_king_attacked(&board, Color::Black));
        assert!(!is_king_attacked(&board, Color::White));
    }

    #[test]
    fn rook_blocked_file_is_no_check() {
        let mut board = Board::empty();
        place(&mut board, "a1", 'R');
        place(&mut board, "a4", 'n');
        place(&mut board, "a8", 'k');
        place(&mut board, "h1", 'K');
        assert!(!is_king_attacked(&board, Color::Black));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let mut board = Board::empty();
        place(&mut board, "a1", 'K');
        place(&mut board, "h8", 'k');
        place(&mut board, "d4", 'Q');
        let queen_from = Square::from_algebraic("d4").unwrap();
        let moves = pseudo_legal_moves(&board, Color::White);
        let queen_moves = moves
            .into_iter()
            .filter(|m| m.from() == queen_from)
            .count();
        // 14 orthogonal plus 13 diagonal, minus a1 which holds the ally
        // king; the h8 ray ends with a capture of the enemy king square.
        assert_eq!(queen_moves, 26);
        assert!(has_move(&moves, "d4", "d8"));
        assert!(has_move(&moves, "d4", "h4"));
        assert!(has_move(&moves, "d4", "g7"));
        assert!(has_move(&moves, "d4", "h8"));
    }

    #[test]
    fn king_single_steps_only() {
        let mut board = Board::empty();
        place(&mut board, "e4", 'K');
        place(&mut board, "a8", 'k');
        let moves = pseudo_legal_moves(&board, Color::White);
        let king_from = Square::from_algebraic("e4").unwrap();
        let king_moves = moves.into_iter().filter(|m| m.from() == king_from).count();
        assert_eq!(king_moves, 8);
        // No distance-2 castling move is ever generated.
        assert!(!has_move(&moves, "e4", "g4"));
    }

    #[test]
    fn capture_records_victim() {
        let mut board = Board::empty();
        place(&mut board, "e1", 'K');
        place(&mut board, "e8", 'k');
        place(&mut board, "a1", 'R');
        place(&mut board, "a5", 'q');
        let moves = pseudo_legal_moves(&board, Color::White);
        let capture = moves
            .into_iter()
            .find(|m| m.to() == Square::from_algebraic("a5").unwrap())
            .unwrap();
        assert_eq!(
            capture.captured(),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }
}
