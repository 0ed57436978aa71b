//! Pawn destinations.

use crate::board::Board;
use crate::color::Color;
use crate::rank::Rank;
use crate::square::Square;

use super::{SquareList, is_opponent};

/// Pawn moves without en passant or promotion.
///
/// - one step forward onto an empty square;
/// - two steps from the home rank when both squares ahead are empty;
/// - one step diagonally forward only to capture.
pub fn pawn_destinations(from: Square, board: &Board, color: Color) -> SquareList {
    let mut list = SquareList::new();
    let forward = color.forward();

    if let Some(single) = from.offset(forward, 0) {
        if board.is_empty(single) {
            list.push(single);
            if from.rank() == Rank::pawn_home(color) {
                if let Some(double) = single.offset(forward, 0) {
                    if board.is_empty(double) {
                        list.push(double);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        if let Some(target) = from.offset(forward, d_file) {
            if is_opponent(board.get(target), color) {
                list.push(target);
            }
        }
    }

    list
}
