//! Destination generation, one generator per piece kind.
//!
//! Generators take the board by shared reference and never consult whose
//! turn it is beyond the mover color they are handed. They ignore check
//! entirely: a destination is anything the piece could physically reach.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::king::king_destinations;
pub use self::knights::knight_destinations;
pub use self::pawns::pawn_destinations;
pub use self::sliders::{bishop_destinations, queen_destinations, rook_destinations};

/// Capacity of a [`SquareList`]. A lone queen reaches at most 27 squares.
const CAPACITY: usize = 32;

/// Stack-allocated list of destination squares.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Option<Square>; CAPACITY],
    len: u8,
}

impl SquareList {
    /// Create an empty list.
    pub const fn new() -> SquareList {
        SquareList {
            squares: [None; CAPACITY],
            len: 0,
        }
    }

    /// Push a square onto the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < CAPACITY);
        self.squares[self.len as usize] = Some(sq);
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `sq` is in the list.
    pub fn contains(&self, sq: Square) -> bool {
        self.iter().any(|s| s == sq)
    }

    /// Iterate over the squares in generation order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares[..self.len()].iter().flatten().copied()
    }

    /// Append every square of `other`.
    pub fn extend_from(&mut self, other: &SquareList) {
        for sq in other.iter() {
            self.push(sq);
        }
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Return `true` if `piece` exists and belongs to the side opposing `color`.
#[inline]
pub fn is_opponent(piece: Option<Piece>, color: Color) -> bool {
    piece.is_some_and(|p| p.color() != color)
}

/// Return `true` if a piece of `color` could land on `sq`: it is empty or
/// holds an opposing piece.
#[inline]
pub fn is_empty_or_opponent(board: &Board, sq: Square, color: Color) -> bool {
    board.color_on(sq) != Some(color)
}

/// Generate the destinations of whatever piece stands on `from`, moving as
/// that piece's own color. An empty square has no destinations.
pub fn destinations(board: &Board, from: Square) -> SquareList {
    let Some(piece) = board.get(from) else {
        return SquareList::new();
    };
    let color = piece.color();
    let list = match piece.kind() {
        PieceKind::King => king_destinations(from, board, color),
        PieceKind::Queen => queen_destinations(from, board, color),
        PieceKind::Rook => rook_destinations(from, board, color),
        PieceKind::Bishop => bishop_destinations(from, board, color),
        PieceKind::Knight => knight_destinations(from, board, color),
        PieceKind::Pawn => pawn_destinations(from, board, color),
    };
    trace!(%from, ?piece, count = list.len(), "generated destinations");
    list
}

/// Every move available to `color`, ordered by source square then by
/// generation order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() == color)
        .flat_map(|(from, _)| {
            destinations(board, from)
                .iter()
                .map(move |to| Move::new(from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    pub(crate) fn board(placement: &str) -> Board {
        placement.parse().unwrap()
    }

    pub(crate) fn sorted(list: SquareList) -> Vec<String> {
        let mut names: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn square_list_basics() {
        let mut list = SquareList::new();
        assert!(list.is_empty());
        list.push(sq("e4"));
        list.push(sq("d5"));
        assert_eq!(list.len(), 2);
        assert!(list.contains(sq("d5")));
        assert!(!list.contains(sq("a1")));
        assert_eq!(format!("{list:?}"), "[Square(e4), Square(d5)]");
    }

    #[test]
    fn opponent_helpers() {
        assert!(is_opponent(Some(Piece::BLACK_PAWN), Color::White));
        assert!(!is_opponent(Some(Piece::WHITE_PAWN), Color::White));
        assert!(!is_opponent(None, Color::White));

        let b = Board::starting_position();
        assert!(is_empty_or_opponent(&b, sq("e4"), Color::White));
        assert!(is_empty_or_opponent(&b, sq("e7"), Color::White));
        assert!(!is_empty_or_opponent(&b, sq("e2"), Color::White));
    }

    #[test]
    fn empty_square_has_no_destinations() {
        assert!(destinations(&Board::starting_position(), sq("e4")).is_empty());
    }

    #[test]
    fn opening_move_count() {
        // 16 pawn moves and 4 knight moves for either side.
        let b = Board::starting_position();
        assert_eq!(legal_moves(&b, Color::White).len(), 20);
        assert_eq!(legal_moves(&b, Color::Black).len(), 20);
    }

    #[test]
    fn destinations_never_include_origin() {
        let positions = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "4k3/8/8/3qQ3/3Bb3/8/8/4K3",
            "r3k2r/1p4p1/2n2N2/3pP3/3Pp3/2N2n2/1P4P1/R3K2R",
        ];
        for placement in positions {
            let b = board(placement);
            for (from, _) in b.pieces() {
                let list = destinations(&b, from);
                assert!(!list.contains(from), "{from} lists itself in {placement}");
                for to in list.iter() {
                    assert_ne!(b.color_on(to), b.color_on(from), "{from}->{to} lands on own piece");
                }
            }
        }
    }

    #[test]
    fn dispatch_uses_piece_color() {
        let b = board("8/8/8/8/8/8/4p3/8");
        assert_eq!(sorted(destinations(&b, sq("e2"))), vec!["e1"]);
    }
}
