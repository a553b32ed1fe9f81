use std::fmt;

/// The side a piece belongs to.
///
/// * `White` - The first player, whose back rank is rank 0.
/// * `Black` - The second player, whose back rank is rank 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, first player first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Index into per-color tables: `White` is 0, `Black` is 1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The rank holding this side's king, queen and minor pieces at the start.
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The rank holding this side's pawns at the start.
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}
