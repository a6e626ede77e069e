use crate::location::{Location, Move};
use crate::piece::{Piece, Side};
use crate::square::Terrain;
use std::fmt::Formatter;
use std::ops::{Index, IndexMut};

/// Occupancy arena for the 9x7 Jungle board. Terrain is derived from the
/// coordinate (see [`Terrain::at`]); this owns only the live pieces and the
/// two captured-piece lists.
#[derive(Clone)]
pub struct Board {
    pieces: Vec<Option<Piece>>,
    captured_red: Vec<Piece>,
    captured_green: Vec<Piece>,
}

impl Board {
    pub const ROWS: i8 = 9;
    pub const COLS: i8 = 7;

    pub const OPENING: &'static str = "l5t/1d3c1/r1p1w1e/7/7/7/E1W1P1R/1C3D1/T5L";

    pub fn new() -> Self {
        Self {
            pieces: vec![None; (Self::ROWS * Self::COLS) as usize],
            captured_red: Vec::new(),
            captured_green: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Option<Self> {
        let mut board = Self::new();
        let mut row = 0;
        let mut col = 0;

        for current in fen.chars() {
            match current {
                ' ' => break,
                '/' => {
                    if col != Self::COLS {
                        return None;
                    }
                    col = 0;
                    row += 1;
                    if row >= Self::ROWS {
                        return None;
                    }
                }
                '1'..='7' => col += current.to_digit(10).unwrap() as i8,
                _ => {
                    let piece = Piece::from_fen_char(current)?;
                    board[Location::from_rc(row, col)?] = Some(piece);
                    col += 1;
                }
            }
        }

        if row != Self::ROWS - 1 || col != Self::COLS {
            return None;
        }
        Some(board)
    }

    pub fn opening() -> Self {
        Self::from_fen(Self::OPENING).unwrap()
    }

    pub fn fen(&self) -> String {
        let mut result = String::new();
        for row in 0..Self::ROWS {
            if row != 0 {
                result.push('/');
            }

            let mut empty = 0;
            for col in 0..Self::COLS {
                match self[Location::from_rc(row, col).unwrap()] {
                    Some(piece) => {
                        if empty != 0 {
                            result.push(char::from_digit(empty, 10).unwrap());
                            empty = 0;
                        }
                        result.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty != 0 {
                result.push(char::from_digit(empty, 10).unwrap());
            }
        }
        result
    }

    pub fn terrain(&self, location: Location) -> Terrain {
        Terrain::at(location)
    }

    /// Applies an already validated move, returning the moved piece and the
    /// capture if one happened. The capture is also recorded on the moving
    /// side's captured list.
    pub fn play(&mut self, mv: Move) -> (Piece, Option<Piece>) {
        let piece = self[mv.from].take().expect("source must hold a piece");
        let capture = self[mv.to].replace(piece);

        if let Some(capture) = capture {
            match piece.side() {
                Side::Red => self.captured_red.push(capture),
                Side::Green => self.captured_green.push(capture),
            }
        }

        (piece, capture)
    }

    /// Pieces the given side has taken from its opponent.
    pub fn captured_by(&self, side: Side) -> &[Piece] {
        match side {
            Side::Red => &self.captured_red,
            Side::Green => &self.captured_green,
        }
    }

    pub fn iter_pieces(&self, side: Side) -> impl Iterator<Item = (Location, Piece)> + '_ {
        self.pieces.iter().enumerate().filter_map(move |(index, piece)| {
            let piece = (*piece)?;
            (piece.side() == side).then(|| (Location::from_index(index).unwrap(), piece))
        })
    }

    pub fn count_pieces(&self, side: Side) -> usize {
        self.iter_pieces(side).count()
    }

    /// Enemy piece sitting in a den, if any: the mover's side and the den
    /// owner, for the den-capture terminal check.
    pub fn den_intruder(&self) -> Option<(Side, Side)> {
        for den in [Location::from_rc(0, 3).unwrap(), Location::from_rc(8, 3).unwrap()] {
            let owner = self.terrain(den).owner().unwrap();
            if let Some(piece) = self[den] {
                if piece.side() != owner {
                    return Some((piece.side(), owner));
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Location> for Board {
    type Output = Option<Piece>;
    fn index(&self, index: Location) -> &Self::Output {
        &self.pieces[index.index()]
    }
}

impl IndexMut<Location> for Board {
    fn index_mut(&mut self, index: Location) -> &mut Self::Output {
        &mut self.pieces[index.index()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::ROWS {
            write!(f, "{row} ")?;
            for col in 0..Self::COLS {
                let location = Location::from_rc(row, col).unwrap();
                if let Some(piece) = self[location] {
                    write!(f, "{} ", piece)?;
                } else {
                    write!(f, "{} ", self.terrain(location).marker())?;
                }
            }
            writeln!(f)?;
        }
        for char in 'a'..='g' {
            write!(f, "  {char}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::AnimalKind;

    #[test]
    fn opening_fen_round_trip() {
        let board = Board::opening();
        assert_eq!(board.fen(), Board::OPENING);
        assert_eq!(board.count_pieces(Side::Red), 8);
        assert_eq!(board.count_pieces(Side::Green), 8);
    }

    #[test]
    fn rejects_malformed_fen() {
        assert!(Board::from_fen("l5t").is_none());
        assert!(Board::from_fen("8/7/7/7/7/7/7/7/7").is_none());
        assert!(Board::from_fen("x6/7/7/7/7/7/7/7/7").is_none());
    }

    #[test]
    fn play_records_capture() {
        let mut board = Board::new();
        let from = Location::from_rc(4, 3).unwrap();
        let to = Location::from_rc(4, 4).unwrap();
        board[from] = Some(Piece::from_kind(AnimalKind::Lion, Side::Red));
        board[to] = Some(Piece::from_kind(AnimalKind::Wolf, Side::Green));

        let (piece, capture) = board.play(Move { from, to });
        assert_eq!(piece.kind(), AnimalKind::Lion);
        assert_eq!(capture.map(|piece| piece.kind()), Some(AnimalKind::Wolf));
        assert_eq!(board[from], None);
        assert_eq!(board[to], Some(piece));
        assert_eq!(board.captured_by(Side::Red).len(), 1);
        assert!(board.captured_by(Side::Green).is_empty());
    }
}
