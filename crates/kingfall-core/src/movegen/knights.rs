//! Knight destinations.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{SquareList, is_empty_or_opponent};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The eight L-shaped jumps. Intervening pieces never block a knight.
pub fn knight_destinations(from: Square, board: &Board, color: Color) -> SquareList {
    let mut list = SquareList::new();
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_rank, d_file) {
            if is_empty_or_opponent(board, to, color) {
                list.push(to);
            }
        }
    }
    list
}
