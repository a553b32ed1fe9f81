use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A square on the chessboard, ranging from A1 to H8.
///
/// Files (columns) are labeled A-H and ranks (rows) 1-8. File 0 is the
/// leftmost column as the pieces are set up, rank 0 is White's back rank.
/// The board is indexed as follows:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 8 56 57 58 59 60 61 62 63
/// 7 48 49 50 51 52 53 54 55
/// 6 40 41 42 43 44 45 46 47
/// 5 32 33 34 35 36 37 38 39
/// 4 24 25 26 27 28 29 30 31
/// 3 16 17 18 19 20 21 22 23
/// 2 08 09 10 11 12 13 14 15
/// 1 00 01 02 03 04 05 06 07
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Error type for square-related operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// File or rank outside 0-7
    #[error("square ({file}, {rank}) is off the board: file and rank must be 0-7")]
    OutOfRange { file: u32, rank: u32 },
    /// Invalid square string format (must be 2 characters)
    #[error("invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl Square {
    /// Creates a `Square` from file and rank coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either `file` or `rank` is >= 8. Coordinates handed to the
    /// board always come from its own bounded loops, so an out-of-range value
    /// is a programming error.
    #[inline]
    pub fn new(file: u8, rank: u8) -> Square {
        assert!(file < BOARD_SIZE as u8, "Invalid file: {file}");
        assert!(rank < BOARD_SIZE as u8, "Invalid rank: {rank}");
        Self::from_index_unchecked(rank as usize * BOARD_SIZE + file as usize)
    }

    /// Creates a `Square` from untrusted file and rank coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::OutOfRange`] if either coordinate is >= 8.
    pub fn try_new(file: u32, rank: u32) -> Result<Square, SquareError> {
        if file >= BOARD_SIZE as u32 || rank >= BOARD_SIZE as u32 {
            return Err(SquareError::OutOfRange { file, rank });
        }
        Ok(Self::new(file as u8, rank as u8))
    }

    /// Converts the `Square` into a `usize` index (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn from_index_unchecked(index: usize) -> Square {
        debug_assert!(
            index < TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index:?}"
        );
        // SAFETY: `Square` is `repr(u8)` with 64 contiguous variants starting at 0.
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts a board index into a `Square`.
    ///
    /// # Returns
    /// `Some(Square)` if the index is valid (0-63), `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        if index < TOTAL_SQUARES {
            Some(Self::from_index_unchecked(index))
        } else {
            None
        }
    }

    /// Returns the file (column) of this square, 0 for file A.
    #[inline]
    pub fn file(self) -> u8 {
        (self.index() % BOARD_SIZE) as u8
    }

    /// Returns the rank (row) of this square, 0 for rank 1.
    #[inline]
    pub fn rank(self) -> u8 {
        (self.index() / BOARD_SIZE) as u8
    }

    /// Returns an iterator over all 64 squares in index order, A1 to H8.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_index_unchecked)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as "a1" or "H8".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let lower = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&lower) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        Ok(Square::new(lower as u8 - b'a', rank_char as u8 - b'1'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.file() + b'a') as char;
        let rank = (self.rank() + b'1') as char;
        write!(f, "{file}{rank}")
    }
}
