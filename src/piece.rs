use std::fmt::{Display, Formatter};
use std::num::NonZeroI8;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Red,
    Green,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Red => Side::Green,
            Side::Green => Side::Red,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Green => "green",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(i8)]
pub enum AnimalKind {
    Rat,
    Cat,
    Dog,
    Wolf,
    Leopard,
    Tiger,
    Lion,
    Elephant,
}

impl AnimalKind {
    pub const ALL: [AnimalKind; 8] = [
        AnimalKind::Rat,
        AnimalKind::Cat,
        AnimalKind::Dog,
        AnimalKind::Wolf,
        AnimalKind::Leopard,
        AnimalKind::Tiger,
        AnimalKind::Lion,
        AnimalKind::Elephant,
    ];

    pub fn rank(&self) -> i8 {
        *self as i8 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimalKind::Rat => "rat",
            AnimalKind::Cat => "cat",
            AnimalKind::Dog => "dog",
            AnimalKind::Wolf => "wolf",
            AnimalKind::Leopard => "leopard",
            AnimalKind::Tiger => "tiger",
            AnimalKind::Lion => "lion",
            AnimalKind::Elephant => "elephant",
        }
    }

    /// Whether this animal may stand in river cells.
    pub fn is_aquatic(&self) -> bool {
        matches!(self, AnimalKind::Rat)
    }

    /// Whether this animal may leap over the river, and along which axes.
    pub fn can_leap(&self, horizontal: bool) -> bool {
        match self {
            AnimalKind::Lion => true,
            AnimalKind::Tiger => !horizontal,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Piece {
    data: NonZeroI8,
}

impl Piece {
    pub fn from_fen_char(value: char) -> Option<Self> {
        let kind = match value.to_ascii_lowercase() {
            'r' => AnimalKind::Rat,
            'c' => AnimalKind::Cat,
            'd' => AnimalKind::Dog,
            'w' => AnimalKind::Wolf,
            'p' => AnimalKind::Leopard,
            't' => AnimalKind::Tiger,
            'l' => AnimalKind::Lion,
            'e' => AnimalKind::Elephant,
            _ => return None,
        };

        let side = if value.is_ascii_uppercase() { Side::Red } else { Side::Green };
        Some(Self::from_kind(kind, side))
    }

    pub fn from_kind(kind: AnimalKind, side: Side) -> Self {
        let data = NonZeroI8::new(kind as i8 + 1).unwrap();
        let data = if side == Side::Red { data } else { -data };
        Self { data }
    }

    pub fn side(&self) -> Side {
        if self.data.is_positive() {
            Side::Red
        } else {
            Side::Green
        }
    }

    pub fn kind(&self) -> AnimalKind {
        let data = self.data.abs().get() - 1;
        unsafe { std::mem::transmute(data) }
    }

    pub fn rank(&self) -> i8 {
        self.kind().rank()
    }

    pub fn fen_char(&self) -> char {
        let result = match self.kind() {
            AnimalKind::Rat => 'r',
            AnimalKind::Cat => 'c',
            AnimalKind::Dog => 'd',
            AnimalKind::Wolf => 'w',
            AnimalKind::Leopard => 'p',
            AnimalKind::Tiger => 't',
            AnimalKind::Lion => 'l',
            AnimalKind::Elephant => 'e',
        };
        if self.side() == Side::Red {
            result.to_ascii_uppercase()
        } else {
            result
        }
    }

    pub fn animal_char(&self) -> char {
        match self.kind() {
            AnimalKind::Rat => '🐭',
            AnimalKind::Cat => '🐱',
            AnimalKind::Dog => '🐶',
            AnimalKind::Wolf => '🐺',
            AnimalKind::Leopard => '🐆',
            AnimalKind::Tiger => '🐯',
            AnimalKind::Lion => '🦁',
            AnimalKind::Elephant => '🐘',
        }
    }

    pub fn display(&self, unicode: bool) -> impl Display {
        let s = if unicode {
            self.animal_char().to_string()
        } else {
            let c = self.fen_char();
            format!("{c}{c}")
        };
        match self.side() {
            Side::Red => format!("\x1B[31m{s}\x1B[0m"),
            Side::Green => format!("\x1B[32m{s}\x1B[0m"),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_round_trip() {
        for kind in AnimalKind::ALL {
            for side in [Side::Red, Side::Green] {
                let piece = Piece::from_kind(kind, side);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.side(), side);
                assert_eq!(Piece::from_fen_char(piece.fen_char()), Some(piece));
            }
        }
    }

    #[test]
    fn rank_ordering() {
        let ranks: Vec<i8> = AnimalKind::ALL.iter().map(|kind| kind.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
