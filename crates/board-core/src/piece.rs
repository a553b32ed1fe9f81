//! Piece kinds, pieces and the display glyph table.

use std::fmt;

use crate::color::Color;

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
    Pawn,
}

/// Display glyphs per piece type, indexed by `PieceType as usize` then
/// `Color::index()`.
static GLYPHS: [[char; 2]; 6] = [
    ['♖', '♜'],
    ['♘', '♞'],
    ['♗', '♝'],
    ['♔', '♚'],
    ['♕', '♛'],
    ['♙', '♟'],
];

/// Upper-case letters per piece type, same order as `GLYPHS`.
static LETTERS: [char; 6] = ['R', 'N', 'B', 'K', 'Q', 'P'];

impl PieceType {
    /// All piece types in declaration order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::King,
        PieceType::Queen,
        PieceType::Pawn,
    ];

    /// Back-rank layout from file 0 to file 7.
    pub const BACK_RANK: [PieceType; 8] = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Returns the shared glyph pair for this piece type, white glyph first.
    #[inline]
    pub fn glyphs(self) -> &'static [char; 2] {
        &GLYPHS[self.index()]
    }

    /// Returns the glyph drawn for this piece type in the given color.
    #[inline]
    pub fn glyph(self, color: Color) -> char {
        self.glyphs()[color.index()]
    }

    /// Returns the upper-case letter of this piece type (`N` for knight).
    pub fn letter(self) -> char {
        LETTERS[self.index()]
    }

    /// Looks a piece type up by letter, ignoring case.
    pub fn from_letter(c: char) -> Option<PieceType> {
        let upper = c.to_ascii_uppercase();
        LETTERS
            .iter()
            .position(|&l| l == upper)
            .map(|i| PieceType::ALL[i])
    }
}

/// A piece on the board.
///
/// Pieces are plain values. Moving a piece replaces the content of the
/// destination square with a copy and clears the source square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceType, color: Color) -> Self {
        Self { kind, color }
    }

    /// Returns the color-specific display glyph.
    #[inline]
    pub fn glyph(self) -> char {
        self.kind.glyph(self.color)
    }

    /// Converts the piece to its letter form: upper case for white, lower
    /// case for black.
    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Parses the letter form written by [`Piece::to_char`].
    pub fn from_char(c: char) -> Option<Piece> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let kind = PieceType::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_per_color() {
        assert_eq!(PieceType::King.glyph(Color::White), '♔');
        assert_eq!(PieceType::King.glyph(Color::Black), '♚');
        assert_eq!(PieceType::Pawn.glyph(Color::White), '♙');
        assert_eq!(PieceType::Pawn.glyph(Color::Black), '♟');
        assert_eq!(Piece::new(PieceType::Knight, Color::Black).glyph(), '♞');
    }

    #[test]
    fn test_glyph_table_is_shared() {
        let a = PieceType::Queen.glyphs();
        let b = Piece::new(PieceType::Queen, Color::White).kind.glyphs();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut seen = Vec::new();
        for kind in PieceType::ALL {
            for color in Color::ALL {
                let g = kind.glyph(color);
                assert!(!seen.contains(&g), "duplicate glyph {g}");
                seen.push(g);
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_char_conversion() {
        for kind in PieceType::ALL {
            for color in Color::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_char('N').map(|p| p.kind), Some(PieceType::Knight));
        assert_eq!(Piece::from_char('k').map(|p| p.color), Some(Color::Black));
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('-'), None);
    }
}
