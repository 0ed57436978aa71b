//! A move from one square to another, in the 4-character coordinate form.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoveError;
use crate::square::Square;

/// A requested move: the piece on `from` goes to `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parse `<file><rank><file><rank>`, e.g. `"e2e4"`.
    ///
    /// Length and every character are checked before any coordinate is
    /// computed, so malformed input can never address a square off the board.
    pub fn from_coords(s: &str) -> Result<Move, ParseMoveError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(ParseMoveError::WrongLength { found: chars.len() });
        }
        let parse = |half: &[char]| {
            let half: String = half.iter().collect();
            Square::from_algebraic(&half).ok_or(ParseMoveError::InvalidSquare { found: half })
        };
        Ok(Move::new(parse(&chars[..2])?, parse(&chars[2..])?))
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        Move::from_coords(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::error::ParseMoveError;
    use crate::square::Square;

    #[test]
    fn parses_coordinates() {
        let mv = Move::from_coords("e2e4").unwrap();
        assert_eq!(mv.from(), Square::from_coords(1, 4).unwrap());
        assert_eq!(mv.to(), Square::from_coords(3, 4).unwrap());
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn corners() {
        let mv: Move = "a1h8".parse().unwrap();
        assert_eq!(mv.from(), Square::from_coords(0, 0).unwrap());
        assert_eq!(mv.to(), Square::from_coords(7, 7).unwrap());
    }

    #[test]
    fn wrong_length() {
        assert_eq!(Move::from_coords("e2e"), Err(ParseMoveError::WrongLength { found: 3 }));
        assert_eq!(Move::from_coords("e2e45"), Err(ParseMoveError::WrongLength { found: 5 }));
        assert_eq!(Move::from_coords(""), Err(ParseMoveError::WrongLength { found: 0 }));
    }

    #[test]
    fn non_ascii_is_rejected() {
        assert!(matches!(
            Move::from_coords("é2e4"),
            Err(ParseMoveError::InvalidSquare { .. })
        ));
        assert!(matches!(
            Move::from_coords("e2é4"),
            Err(ParseMoveError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn bad_squares() {
        assert!(matches!(
            Move::from_coords("i2e4"),
            Err(ParseMoveError::InvalidSquare { .. })
        ));
        assert!(matches!(
            Move::from_coords("e0e4"),
            Err(ParseMoveError::InvalidSquare { .. })
        ));
        assert!(matches!(
            Move::from_coords("e2e9"),
            Err(ParseMoveError::InvalidSquare { .. })
        ));
        assert!(matches!(
            Move::from_coords("E2E4"),
            Err(ParseMoveError::InvalidSquare { .. })
        ));
    }
}
