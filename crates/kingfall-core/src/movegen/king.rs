//! King destinations.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{SquareList, is_empty_or_opponent};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

/// One step in any direction onto an empty or opposing square. No castling.
pub fn king_destinations(from: Square, board: &Board, color: Color) -> SquareList {
    let mut list = SquareList::new();
    for (d_rank, d_file) in KING_OFFSETS {
        if let Some(to) = from.offset(d_rank, d_file) {
            if is_empty_or_opponent(board, to, color) {
                list.push(to);
            }
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::king_destinations;
    use crate::color::Color;
    use crate::movegen::tests::{board, sorted, sq};

    #[test]
    fn open_board_has_eight() {
        let b = board("8/8/8/8/3K4/8/8/8");
        let list = king_destinations(sq("d4"), &b, Color::White);
        assert_eq!(
            sorted(list),
            vec!["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"]
        );
    }

    #[test]
    fn corner_has_three() {
        let b = board("8/8/8/8/8/8/8/K7");
        assert_eq!(sorted(king_destinations(sq("a1"), &b, Color::White)), vec!["a2", "b1", "b2"]);
    }

    #[test]
    fn own_pieces_excluded_opponents_included() {
        let b = board("8/8/8/2pPp3/3K4/8/8/8");
        let list = king_destinations(sq("d4"), &b, Color::White);
        assert!(list.contains(sq("c5")));
        assert!(list.contains(sq("e5")));
        assert!(!list.contains(sq("d5")));
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn starting_king_is_boxed_in() {
        let b = crate::board::Board::starting_position();
        assert!(king_destinations(sq("e1"), &b, Color::White).is_empty());
    }
}
