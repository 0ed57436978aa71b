//! Sliding piece (rook, bishop, queen) destinations.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::SquareList;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray outward until the edge or the first occupied square. An
/// opposing piece ends the ray and is included; an own piece ends it and is not.
fn walk_rays(
    from: Square,
    board: &Board,
    color: Color,
    directions: &[(i8, i8)],
    list: &mut SquareList,
) {
    for &(d_rank, d_file) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_rank, d_file) {
            match board.color_on(to) {
                None => list.push(to),
                Some(owner) if owner != color => {
                    list.push(to);
                    break;
                }
                Some(_) => break,
            }
            current = to;
        }
    }
}

pub fn rook_destinations(from: Square, board: &Board, color: Color) -> SquareList {
    let mut list = SquareList::new();
    walk_rays(from, board, color, &ROOK_DIRECTIONS, &mut list);
    list
}

pub fn bishop_destinations(from: Square, board: &Board, color: Color) -> SquareList {
    let mut list = SquareList::new();
    walk_rays(from, board, color, &BISHOP_DIRECTIONS, &mut list);
    list
}

/// Rook rays followed by bishop rays. The direction sets are disjoint, so no
/// square appears twice.
pub fn queen_destinations(from: Square, board: &Board, color: Color) -> SquareList {
    let mut list = rook_destinations(from, board, color);
    list.extend_from(&bishop_destinations(from, board, color));
    list
}
