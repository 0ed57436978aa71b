//! The board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on all 64 squares, indexed by [`Square::index()`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.set(Square::new(Rank::Rank1, file), Some(Piece::new(kind, Color::White)));
            board.set(Square::new(Rank::Rank2, file), Some(Piece::WHITE_PAWN));
            board.set(Square::new(Rank::Rank7, file), Some(Piece::BLACK_PAWN));
            board.set(Square::new(Rank::Rank8, file), Some(Piece::new(kind, Color::Black)));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Overwrite a square. No bookkeeping is done for whatever was there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    /// Return `true` if the given square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Return `true` if a king of `color` is still on the board.
    pub fn king_present(&self, color: Color) -> bool {
        let king = Piece::new(PieceKind::King, color);
        self.squares.iter().any(|&piece| piece == Some(king))
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|piece| piece.is_some()).count()
    }

    /// Iterate over every occupied square and its piece, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper that renders a board as the framed ASCII grid shown to players.
///
/// Rank 8 is printed first. White pieces are uppercase, Black lowercase and
/// empty squares `-`.
pub struct PrettyBoard<'a>(&'a Board);

const FILE_LABELS: &str = "  a b c d e f g h";
const FRAME: &str = " +----------------+";

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "{FILE_LABELS}")?;
        writeln!(f, "{FRAME}")?;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}|")?;
            for file in File::ALL {
                let c = board.get(Square::new(rank, file)).map_or('-', Piece::glyph);
                write!(f, "{c} ")?;
            }
            writeln!(f, "|{rank}")?;
        }
        writeln!(f, "{FRAME}")?;
        write!(f, "{FILE_LABELS}")
    }
}
