//! Board squares, stored as a rank-major index.

use std::fmt;

use crate::file::File;
use crate::rank::Rank;

/// A square on the board.
///
/// Index = rank * 8 + file, so a1 = 0, b1 = 1, ..., h8 = 63. A `Square` is
/// always on the board; stepping off the edge yields `None` instead.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from zero-based `(rank, file)` coordinates, returning
    /// `None` unless both are in `0..8`.
    #[inline]
    pub const fn from_coords(rank: i8, file: i8) -> Option<Square> {
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square(rank as u8 * 8 + file as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse a square in algebraic form, e.g. `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(rank, file))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based rank coordinate.
    #[inline]
    pub const fn rank_index(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Zero-based file coordinate.
    #[inline]
    pub const fn file_index(self) -> i8 {
        (self.0 % 8) as i8
    }

    pub const fn rank(self) -> Rank {
        match Rank::from_index(self.0 / 8) {
            Some(rank) => rank,
            None => Rank::Rank8,
        }
    }

    pub const fn file(self) -> File {
        match File::from_index(self.0 % 8) {
            Some(file) => file,
            None => File::FileH,
        }
    }

    /// The square `d_rank` ranks and `d_file` files away, if it is on the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        Square::from_coords(self.rank_index() + d_rank, self.file_index() + d_file)
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn new_and_accessors() {
        let sq = Square::new(Rank::Rank2, File::FileE);
        assert_eq!(sq.rank(), Rank::Rank2);
        assert_eq!(sq.file(), File::FileE);
        assert_eq!(sq.rank_index(), 1);
        assert_eq!(sq.file_index(), 4);
        assert_eq!(sq.index(), 12);
    }

    #[test]
    fn rank_file_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.rank(), sq.file()), sq);
            assert_eq!(Square::from_coords(sq.rank_index(), sq.file_index()), Some(sq));
        }
    }

    #[test]
    fn from_coords_rejects_out_of_range() {
        assert!(Square::from_coords(-1, 0).is_none());
        assert!(Square::from_coords(0, -1).is_none());
        assert!(Square::from_coords(8, 0).is_none());
        assert!(Square::from_coords(0, 8).is_none());
        assert!(Square::from_coords(7, 7).is_some());
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!(a1.offset(1, 1), Square::from_algebraic("b2"));
        assert!(a1.offset(-1, 0).is_none());
        assert!(a1.offset(0, -1).is_none());

        let h8 = Square::from_algebraic("h8").unwrap();
        assert!(h8.offset(1, 0).is_none());
        assert!(h8.offset(0, 1).is_none());
        assert_eq!(h8.offset(-2, -1), Square::from_algebraic("g6"));
    }

    #[test]
    fn algebraic_notation() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.rank_index(), 3);
        assert_eq!(e4.file_index(), 4);
        assert_eq!(format!("{e4}"), "e4");
        assert_eq!(format!("{}", Square::from_index(0).unwrap()), "a1");
        assert_eq!(format!("{}", Square::from_index(63).unwrap()), "h8");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("E2").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    fn debug_shows_algebraic() {
        let sq = Square::from_algebraic("e4").unwrap();
        assert_eq!(format!("{sq:?}"), "Square(e4)");
    }
}
