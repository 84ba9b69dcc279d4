//! Knight identities and cell contents.
//!
//! Each of the nine cells holds either nothing or one of four distinguishable
//! knights. The numeric discriminant doubles as the base-5 digit used when
//! fingerprinting a board.

/// The contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Piece {
    Empty = 0,
    BlackA = 1,
    BlackB = 2,
    WhiteA = 3,
    WhiteB = 4,
}

/// The four knights, in discriminant order.
pub const ALL_KNIGHTS: [Piece; 4] = [Piece::BlackA, Piece::BlackB, Piece::WhiteA, Piece::WhiteB];

impl Piece {
    /// Returns the base-5 digit for this cell value.
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Returns true for the empty cell.
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Returns the single-character glyph used by the board printer and layout notation.
    pub const fn glyph(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::BlackA => 'B',
            Piece::BlackB => 'b',
            Piece::WhiteA => 'W',
            Piece::WhiteB => 'w',
        }
    }

    /// Parses a piece from its single-character glyph.
    pub fn from_glyph(c: char) -> Option<Piece> {
        match c {
            '.' => Some(Piece::Empty),
            'B' => Some(Piece::BlackA),
            'b' => Some(Piece::BlackB),
            'W' => Some(Piece::WhiteA),
            'w' => Some(Piece::WhiteB),
            _ => None,
        }
    }
}
