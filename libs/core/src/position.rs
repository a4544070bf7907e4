use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::piece::Piece;

/// Errors related to decoding a raw board payload into a [`Position`].
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum PositionError {
    /// Raw payload length didn't match the 64 squares of the board.
    #[error("Raw board payload was {actual} characters: expected {expected}")]
    WrongLength {
        /// The expected character count.
        expected: usize,

        /// The actual character count received.
        actual: usize,
    },

    /// Raw payload contained a character outside the piece table.
    #[error("Unknown piece character {0:?} in raw board payload")]
    UnknownPiece(char),
}

/// An 8×8 grid of [`Piece`]s, decoded from the board's status payload.
///
/// Coordinates are zero-based: `x` walks the files a–h and `y` walks the
/// ranks 1–8, so `(4, 0)` is e1. The device transmits squares rank-major
/// with the files reversed within each rank; [`from_raw`] applies that
/// mirroring so callers only ever see logical coordinates.
///
/// # Examples
///
/// ```
/// use chesslink_core::{Piece, Position};
///
/// let position = Position::starting();
/// assert_eq!(Piece::WhiteKing, position.get(4, 0));
/// assert_eq!(Piece::BlackQueen, position.get(3, 7));
/// assert_eq!(Piece::Empty, position.get(4, 3));
/// ```
///
/// [`from_raw`]: #method.from_raw
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [[Piece; 8]; 8],
}

impl Position {
    /// Creates an empty position.
    pub fn new() -> Self {
        Position {
            squares: [[Piece::Empty; 8]; 8],
        }
    }

    /// The standard chess starting position, as reported by a freshly set-up
    /// board.
    pub fn starting() -> Self {
        const WHITE_BACK: [Piece; 8] = [
            Piece::WhiteRook,
            Piece::WhiteKnight,
            Piece::WhiteBishop,
            Piece::WhiteQueen,
            Piece::WhiteKing,
            Piece::WhiteBishop,
            Piece::WhiteKnight,
            Piece::WhiteRook,
        ];
        const BLACK_BACK: [Piece; 8] = [
            Piece::BlackRook,
            Piece::BlackKnight,
            Piece::BlackBishop,
            Piece::BlackQueen,
            Piece::BlackKing,
            Piece::BlackBishop,
            Piece::BlackKnight,
            Piece::BlackRook,
        ];

        let mut position = Position::new();
        for x in 0..8 {
            position.squares[0][x] = WHITE_BACK[x];
            position.squares[1][x] = Piece::WhitePawn;
            position.squares[6][x] = Piece::BlackPawn;
            position.squares[7][x] = BLACK_BACK[x];
        }
        position
    }

    /// Decodes the 64-character raw status payload into a `Position`.
    ///
    /// Decoding is all-or-nothing: a single unrecognized character fails the
    /// whole payload and no partial grid is produced.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::WrongLength`] if the payload isn't exactly
    /// 64 characters and [`PositionError::UnknownPiece`] if a character
    /// isn't in the piece table.
    ///
    /// # Examples
    ///
    /// ```
    /// use chesslink_core::{Piece, Position};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// #
    /// let cleared = Position::from_raw(&".".repeat(64))?;
    /// assert_eq!(Piece::Empty, cleared.get(0, 0));
    /// #
    /// # Ok(()) }
    /// ```
    pub fn from_raw(raw: &str) -> Result<Self, PositionError> {
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() != 64 {
            return Err(PositionError::WrongLength {
                expected: 64,
                actual: chars.len(),
            });
        }

        let mut squares = [[Piece::Empty; 8]; 8];
        for (y, row) in squares.iter_mut().enumerate() {
            for (x, square) in row.iter_mut().enumerate() {
                let character = chars[raw_index(x, y)];
                *square = Piece::from_char(character).ok_or(PositionError::UnknownPiece(character))?;
            }
        }
        Ok(Position { squares })
    }

    /// Renders the position back into the device's raw payload order.
    ///
    /// This is the exact inverse of [`from_raw`].
    ///
    /// [`from_raw`]: #method.from_raw
    pub fn to_raw(&self) -> String {
        let mut chars = ['.'; 64];
        for (y, row) in self.squares.iter().enumerate() {
            for (x, square) in row.iter().enumerate() {
                chars[raw_index(x, y)] = square.to_char();
            }
        }
        chars.iter().collect()
    }

    /// Returns the piece on square `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 8 or greater.
    pub fn get(&self, x: usize, y: usize) -> Piece {
        self.squares[y][x]
    }

    /// Places a piece on square `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 8 or greater.
    pub fn set(&mut self, x: usize, y: usize, piece: Piece) {
        self.squares[y][x] = piece;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Display for Position {
    /// Formats the position as a bordered grid with rank 8 at the top.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +------------------------+")?;
        for y in (0..8).rev() {
            write!(f, "{} |", y + 1)?;
            for x in 0..8 {
                write!(f, " {} ", self.squares[y][x].glyph())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +------------------------+")?;
        write!(f, "    A  B  C  D  E  F  G  H")
    }
}

/// Maps logical square `(x, y)` to its index in the raw payload.
///
/// The device sends rank-major blocks with the files reversed within each
/// rank. Getting this backwards mirrors the board, so it lives here as its
/// own function with its own tests.
fn raw_index(x: usize, y: usize) -> usize {
    7 - x + y * 8
}
