use crate::board::Board;
use crate::location::Location;
use crate::piece::{Piece, Side};

/// Terrain of a board cell. The layout is fixed at the classic Jungle board,
/// so terrain is a pure function of the coordinate rather than stored state.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Terrain {
    Normal,
    River,
    Trap(Side),
    Den(Side),
}

impl Terrain {
    pub fn at(location: Location) -> Terrain {
        let (row, col) = (location.row(), location.col());
        debug_assert!(row < Board::ROWS && col < Board::COLS);

        match (row, col) {
            (0, 3) => Terrain::Den(Side::Green),
            (8, 3) => Terrain::Den(Side::Red),
            (0, 2) | (0, 4) | (1, 3) => Terrain::Trap(Side::Green),
            (8, 2) | (8, 4) | (7, 3) => Terrain::Trap(Side::Red),
            (3..=5, 1 | 2 | 4 | 5) => Terrain::River,
            _ => Terrain::Normal,
        }
    }

    pub fn is_river(&self) -> bool {
        matches!(self, Terrain::River)
    }

    pub fn is_land(&self) -> bool {
        !self.is_river()
    }

    /// Owning side of a trap or den, `None` for plain terrain.
    pub fn owner(&self) -> Option<Side> {
        match self {
            Terrain::Trap(side) | Terrain::Den(side) => Some(*side),
            _ => None,
        }
    }

    /// Whether the given piece may stand on this cell at all. River cells
    /// admit only aquatic animals; a den never admits its own side.
    pub fn can_enter(&self, piece: Piece) -> bool {
        match self {
            Terrain::Normal | Terrain::Trap(_) => true,
            Terrain::River => piece.kind().is_aquatic(),
            Terrain::Den(side) => *side != piece.side(),
        }
    }

    /// Marker drawn for an empty cell of this terrain.
    pub fn marker(&self) -> &'static str {
        match self {
            Terrain::Normal => "  ",
            Terrain::River => "~~",
            Terrain::Trap(_) => "##",
            Terrain::Den(_) => "@@",
        }
    }
}
