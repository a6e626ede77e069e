use crate::board::Board;
use std::fmt::Formatter;
use std::str::{Chars, FromStr};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Location {
    row: i8,
    col: i8,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

impl Location {
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    pub fn from_rc(row: i8, col: i8) -> Option<Self> {
        Self::new().shift(row, col)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index > i8::MAX as usize {
            return None;
        }
        let row = index as i8 / Board::COLS;
        let col = index as i8 % Board::COLS;
        Self::from_rc(row, col)
    }

    pub fn from_chars(chars: &mut Chars<'_>) -> Option<Self> {
        let col = chars.next()?.to_ascii_lowercase() as u8;
        let row = chars.next()? as u8;
        Self::from_rc(row.wrapping_sub(b'0') as i8, col.wrapping_sub(b'a') as i8)
    }

    pub fn shift_row(&self, delta: i8) -> Option<Self> {
        let row = self.row + delta;
        if 0 > row || row >= Board::ROWS {
            return None;
        }
        Some(Self { row, col: self.col })
    }

    pub fn shift_col(&self, delta: i8) -> Option<Self> {
        let col = self.col + delta;
        if 0 > col || col >= Board::COLS {
            return None;
        }
        Some(Self { row: self.row, col })
    }

    pub fn shift(&self, row: i8, col: i8) -> Option<Self> {
        self.shift_row(row)?.shift_col(col)
    }

    pub fn index(&self) -> usize {
        (self.row * Board::COLS + self.col) as usize
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    /// Whether `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: Location) -> bool {
        let row_diff = (self.row - other.row).abs();
        let col_diff = (self.col - other.col).abs();
        (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row)
    }
}

impl FromStr for Location {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (Self::from_chars(&mut chars), chars.next()) {
            (Some(location), None) => Ok(location),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let from = Location::from_chars(&mut chars).ok_or(())?;
        let to = Location::from_chars(&mut chars).ok_or(())?;
        if chars.next().is_some() {
            return Err(());
        }
        Ok(Self { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for index in 0..(Board::ROWS * Board::COLS) as usize {
            let location = Location::from_index(index).unwrap();
            assert_eq!(location.index(), index);
        }
        assert_eq!(Location::from_index((Board::ROWS * Board::COLS) as usize), None);
    }

    #[test]
    fn parse_and_display() {
        let location: Location = "d2".parse().unwrap();
        assert_eq!((location.row(), location.col()), (2, 3));
        assert_eq!(location.to_string(), "d2");

        let mv: Move = "a0a1".parse().unwrap();
        assert_eq!(mv.from, Location::from_rc(0, 0).unwrap());
        assert_eq!(mv.to, Location::from_rc(1, 0).unwrap());

        assert!("h0".parse::<Location>().is_err());
        assert!("a9".parse::<Location>().is_err());
        assert!("a0a1x".parse::<Move>().is_err());
    }

    #[test]
    fn adjacency() {
        let center = Location::from_rc(4, 3).unwrap();
        assert!(center.is_adjacent(Location::from_rc(3, 3).unwrap()));
        assert!(center.is_adjacent(Location::from_rc(4, 4).unwrap()));
        assert!(!center.is_adjacent(Location::from_rc(3, 4).unwrap()));
        assert!(!center.is_adjacent(center));
    }
}
