use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::Color;
use crate::piece::{Piece, PieceType};
use crate::square::{BOARD_SIZE, Square, TOTAL_SQUARES};

/// Character used for an empty square in the board string.
pub const EMPTY_CHAR: char = '-';

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardStringError {
    #[error("board string must describe 64 squares, found {0}")]
    Length(usize),
    #[error("invalid character '{ch}' at square index {index}")]
    InvalidChar { index: usize, ch: char },
}

/// An 8x8 grid of optional pieces plus the currently selected square.
///
/// Cells are indexed `[file][rank]`. The grid size never changes; pieces
/// are only ever replaced wholesale through [`Board::set`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    selected: Option<Square>,
}

impl Default for Board {
    /// Creates a board with the standard chess starting position.
    fn default() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in PieceType::BACK_RANK.into_iter().enumerate() {
                board.set_at(file as u8, color.back_rank(), Some(Piece::new(kind, color)));
                board.set_at(
                    file as u8,
                    color.pawn_rank(),
                    Some(Piece::new(PieceType::Pawn, color)),
                );
            }
        }
        board
    }
}

impl Board {
    /// Creates a new `Board` with the standard starting position: White's
    /// back rank on rank 0 and pawns on rank 1, Black's pawns on rank 6 and
    /// back rank on rank 7, nothing selected.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no pieces and nothing selected.
    pub fn empty() -> Board {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
            selected: None,
        }
    }

    /// Creates a `Board` from its string representation.
    ///
    /// The string holds one character per square from A1 to H8: a piece
    /// letter (upper case for White, lower case for Black) or `-` for an
    /// empty square. ASCII whitespace is skipped, so the layout may be split
    /// over several lines. The selection is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStringError`] if the string does not describe exactly
    /// 64 squares or contains an unknown character.
    pub fn from_string(board_string: &str) -> Result<Board, BoardStringError> {
        let mut board = Board::empty();
        let mut count = 0;
        for c in board_string.chars().filter(|c| !c.is_ascii_whitespace()) {
            if count < TOTAL_SQUARES {
                let piece = if c == EMPTY_CHAR {
                    None
                } else {
                    Some(Piece::from_char(c).ok_or(BoardStringError::InvalidChar {
                        index: count,
                        ch: c,
                    })?)
                };
                if let Some(sq) = Square::from_index(count) {
                    board.set(sq, piece);
                }
            }
            count += 1;
        }
        if count != TOTAL_SQUARES {
            return Err(BoardStringError::Length(count));
        }
        Ok(board)
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.file() as usize][sq.rank() as usize]
    }

    /// Replaces the content of `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.file() as usize][sq.rank() as usize] = piece;
    }

    /// Returns the piece at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `file` or `rank` is >= 8.
    pub fn get_at(&self, file: u8, rank: u8) -> Option<Piece> {
        self.get(Square::new(file, rank))
    }

    /// Replaces the content at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `file` or `rank` is >= 8.
    pub fn set_at(&mut self, file: u8, rank: u8, piece: Option<Piece>) {
        self.set(Square::new(file, rank), piece);
    }

    /// Returns the selected square. This is a display hint only; the board
    /// does not check that the square is still occupied.
    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn set_selected(&mut self, selected: Option<Square>) {
        self.selected = selected;
    }

    /// Iterates over every square in index order with its content.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::iter().map(|sq| (sq, self.get(sq)))
    }

    /// Returns the number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.iter().filter(|(_, piece)| piece.is_some()).count()
    }
}

impl FromStr for Board {
    type Err = BoardStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    /// Writes the 64-character board string, A1 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, piece) in self.iter() {
            let c = piece.map_or(EMPTY_CHAR, Piece::to_char);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
