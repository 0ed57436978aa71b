//! Piece-placement strings (the first field of FEN) for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// Placement string of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    /// Parse ranks 8 down to 1, separated by `/`. Digits 1-8 skip that many
    /// empty squares. Kings are not required.
    fn from_str(placement: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != Rank::COUNT {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        let ranks_top_down = ranks.iter().enumerate().zip(Rank::ALL.into_iter().rev());
        for ((rank_index, rank_str), rank) in ranks_top_down {
            let mut file_index: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as usize;
                    continue;
                }

                let piece = Piece::from_glyph(c)
                    .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let file = File::ALL.get(file_index).copied().ok_or(PlacementError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                })?;
                board.set(Square::new(rank, file), Some(piece));
                file_index += 1;
            }

            if file_index != File::COUNT {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: file_index,
                });
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::ALL {
                match self.get(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::board::Board;
    use crate::error::PlacementError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_placement_matches_setup() {
        let board: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(Board::starting_position().to_string(), STARTING_PLACEMENT);
    }

    #[test]
    fn sparse_position() {
        let board: Board = "4k3/8/8/8/3Q4/8/8/4K3".parse().unwrap();
        assert_eq!(board.piece_count(), 3);
        assert_eq!(board.get(Square::from_algebraic("d4").unwrap()), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.get(Square::from_algebraic("e8").unwrap()), Some(Piece::BLACK_KING));
        assert_eq!(board.to_string(), "4k3/8/8/8/3Q4/8/8/4K3");
    }

    #[test]
    fn kingless_board_is_accepted() {
        let board: Board = "8/8/8/8/8/8/8/R7".parse().unwrap();
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn debug_shows_placement() {
        let board: Board = "8/8/8/8/8/8/8/R7".parse().unwrap();
        assert_eq!(format!("{board:?}"), "Board(\"8/8/8/8/8/8/8/R7\")");
    }

    #[test]
    fn wrong_rank_count() {
        let err = "8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::WrongRankCount { found: 3 });
    }

    #[test]
    fn rank_too_long() {
        let err = "9/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::InvalidPieceChar { character: '9' });

        let err = "8p/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::BadRankLength { rank_index: 0, length: 9 });
    }

    #[test]
    fn rank_too_short() {
        let err = "8/8/8/8/8/8/8/7".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::BadRankLength { rank_index: 7, length: 7 });
    }

    #[test]
    fn invalid_piece_char() {
        let err = "8/8/8/8/8/8/8/X7".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::InvalidPieceChar { character: 'X' });
    }
}
