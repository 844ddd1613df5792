//! Board coordinates and their text form ("A5" style).

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

/// Zero-based (row, column) position on the board. Rows display as letters
/// `A`-`J`, columns as 1-based numbers `1`-`10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbors that stay on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            (row + 1 < BOARD_SIZE).then(|| Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            (col + 1 < BOARD_SIZE).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Reasons a coordinate string is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCoordError {
    /// Empty input or a lone row letter.
    TooShort,
    /// First character is not a row letter `A`-`J`.
    InvalidRow,
    /// Remainder is not a number in `1`-`10`.
    InvalidColumn,
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::TooShort => write!(f, "Coordinate is too short"),
            ParseCoordError::InvalidRow => write!(f, "Row must be a letter A-J"),
            ParseCoordError::InvalidColumn => write!(f, "Column must be a number 1-10"),
        }
    }
}

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse "A5" style input: case-insensitive row letter, then a 1-based
    /// column number. Trailing garbage after the number rejects.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row_ch = chars
            .next()
            .ok_or(ParseCoordError::TooShort)?
            .to_ascii_uppercase();
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(ParseCoordError::TooShort);
        }
        if !row_ch.is_ascii_uppercase() || row_ch as usize - 'A' as usize >= BOARD_SIZE {
            return Err(ParseCoordError::InvalidRow);
        }
        let col: usize = rest.parse().map_err(|_| ParseCoordError::InvalidColumn)?;
        if col < 1 || col > BOARD_SIZE {
            return Err(ParseCoordError::InvalidColumn);
        }
        Ok(Coord::new(row_ch as usize - 'A' as usize, col - 1))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}
