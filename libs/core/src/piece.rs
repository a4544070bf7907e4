use std::fmt::{self, Display, Formatter};

/// Occupancy of a single board square: one of six white pieces, six black
/// pieces, or empty.
///
/// Each piece has three representations that stay in correspondence by table
/// position: a signed integer code (`1..=6`, `0`, `-1..=-6`), the ASCII
/// letter used in the raw board payload (`PNBRQK.pnbrqk`, uppercase white,
/// lowercase black, `.` empty), and a display glyph.
///
/// # Examples
///
/// ```
/// use chesslink_core::Piece;
///
/// assert_eq!(Some(Piece::WhiteQueen), Piece::from_char('Q'));
/// assert_eq!('q', Piece::BlackQueen.to_char());
/// assert_eq!(0, Piece::Empty.code());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Piece {
    /// A white pawn (`P`).
    WhitePawn,
    /// A white knight (`N`).
    WhiteKnight,
    /// A white bishop (`B`).
    WhiteBishop,
    /// A white rook (`R`).
    WhiteRook,
    /// A white queen (`Q`).
    WhiteQueen,
    /// A white king (`K`).
    WhiteKing,
    /// An unoccupied square (`.`).
    Empty,
    /// A black pawn (`p`).
    BlackPawn,
    /// A black knight (`n`).
    BlackKnight,
    /// A black bishop (`b`).
    BlackBishop,
    /// A black rook (`r`).
    BlackRook,
    /// A black queen (`q`).
    BlackQueen,
    /// A black king (`k`).
    BlackKing,
}

/// All pieces in table order; variant discriminants index into the
/// representation tables below.
const PIECES: [Piece; 13] = [
    Piece::WhitePawn,
    Piece::WhiteKnight,
    Piece::WhiteBishop,
    Piece::WhiteRook,
    Piece::WhiteQueen,
    Piece::WhiteKing,
    Piece::Empty,
    Piece::BlackPawn,
    Piece::BlackKnight,
    Piece::BlackBishop,
    Piece::BlackRook,
    Piece::BlackQueen,
    Piece::BlackKing,
];

const CODES: [i8; 13] = [1, 2, 3, 4, 5, 6, 0, -1, -2, -3, -4, -5, -6];

const LETTERS: [char; 13] = [
    'P', 'N', 'B', 'R', 'Q', 'K', '.', 'p', 'n', 'b', 'r', 'q', 'k',
];

// Filled glyphs for white pieces, outlined for black; filled symbols render
// more reliably on common terminal fonts.
const GLYPHS: [char; 13] = [
    '♟', '♞', '♝', '♜', '♛', '♚', ' ', '♙', '♘', '♗', '♖', '♕', '♔',
];

impl Piece {
    /// Returns the signed integer code: positive white, negative black,
    /// zero empty.
    pub fn code(self) -> i8 {
        CODES[self as usize]
    }

    /// Returns the ASCII letter used in the raw board payload.
    pub fn to_char(self) -> char {
        LETTERS[self as usize]
    }

    /// Returns the glyph used when displaying a position.
    pub fn glyph(self) -> char {
        GLYPHS[self as usize]
    }

    /// Looks up a piece by its raw payload letter.
    pub fn from_char(letter: char) -> Option<Piece> {
        LETTERS.iter().position(|&l| l == letter).map(|i| PIECES[i])
    }

    /// Looks up a piece by its signed integer code.
    pub fn from_code(code: i8) -> Option<Piece> {
        CODES.iter().position(|&c| c == code).map(|i| PIECES[i])
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
