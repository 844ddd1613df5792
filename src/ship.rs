//! Ship classes and placed-ship records.

use crate::config::FLEET;
use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Class of ship: a closed set, behavior varies only by length and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipClass {
    Battleship,
    Destroyer,
}

impl ShipClass {
    /// Number of board cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipClass::Battleship => 5,
            ShipClass::Destroyer => 4,
        }
    }

    /// Display name used in sunk messages.
    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Battleship => "Battleship",
            ShipClass::Destroyer => "Destroyer",
        }
    }

    /// Classify a board identifier back to its class via the fleet table.
    /// Handles same-class ships carrying different identifiers.
    pub fn for_identifier(id: char) -> Option<ShipClass> {
        FLEET
            .iter()
            .find(|(ch, _)| *ch == id)
            .map(|&(_, class)| class)
    }
}

/// One vessel: class, unique board identifier, and the ordered coordinates
/// it occupies once placed. Sunk state is derived from board cells, never
/// stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    identifier: char,
    cells: Vec<Coord>,
}

impl Ship {
    /// Create an unplaced ship; placement fills in its cells.
    pub fn new(class: ShipClass, identifier: char) -> Self {
        Self {
            class,
            identifier,
            cells: Vec::new(),
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn identifier(&self) -> char {
        self.identifier
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    /// Coordinates occupied on the board this ship was placed on. Empty
    /// until placed.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub(crate) fn set_cells(&mut self, cells: Vec<Coord>) {
        self.cells = cells;
    }
}
