//! Board state: a 10x10 grid of cell markers plus placement logic.

use core::fmt;

use rand::Rng;

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Marker held by one board cell. Cells move monotonically
/// Water -> Ship(id) -> Hit -> Sunk, or Water -> Miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    /// Live ship segment, tagged with the owning ship's identifier.
    Ship(char),
    Hit,
    Miss,
    Sunk,
}

impl Cell {
    pub fn is_water(self) -> bool {
        matches!(self, Cell::Water)
    }

    /// True for a ship segment that has not been hit yet.
    pub fn is_live_ship(self) -> bool {
        matches!(self, Cell::Ship(_))
    }
}

/// One 10x10 grid of cell markers. Four boards exist per game: each side's
/// fleet board (ground truth) and each side's shot-tracking board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An all-water board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Water; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Reset every cell to water.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Water; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Marker at `coord`.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Whether a ship of `len` cells fits at `anchor` with `orientation`:
    /// fully on the board and over water only.
    pub fn can_place(&self, anchor: Coord, orientation: Orientation, len: usize) -> bool {
        let fits = match orientation {
            Orientation::Horizontal => anchor.col + len <= BOARD_SIZE,
            Orientation::Vertical => anchor.row + len <= BOARD_SIZE,
        };
        fits && span(anchor, orientation, len).all(|c| self.cell(c).is_water())
    }

    /// Write `ship` onto the board at `anchor` and record the occupied
    /// coordinates on the ship.
    pub fn place(
        &mut self,
        ship: &mut Ship,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let len = ship.class().length();
        let fits = match orientation {
            Orientation::Horizontal => anchor.col + len <= BOARD_SIZE,
            Orientation::Vertical => anchor.row + len <= BOARD_SIZE,
        };
        if !fits {
            return Err(GameError::ShipOutOfBounds);
        }
        if !span(anchor, orientation, len).all(|c| self.cell(c).is_water()) {
            return Err(GameError::ShipOverlaps);
        }
        let cells: Vec<Coord> = span(anchor, orientation, len).collect();
        for &c in &cells {
            self.set(c, Cell::Ship(ship.identifier()));
        }
        ship.set_cells(cells);
        Ok(())
    }

    /// Draw random anchors and orientations until one yields a valid
    /// placement for a ship of `len` cells. Unbounded retry: a valid spot
    /// always exists for this fleet on a 10x10 board.
    pub fn random_placement<R: Rng>(&self, rng: &mut R, len: usize) -> (Coord, Orientation) {
        loop {
            let anchor = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.can_place(anchor, orientation, len) {
                return (anchor, orientation);
            }
        }
    }

    /// Victory check against this fleet board: true when no live ship
    /// segment remains. Scans the full board each call, nothing cached.
    pub fn cleared(&self) -> bool {
        !self
            .cells
            .iter()
            .flatten()
            .any(|cell| cell.is_live_ship())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn span(anchor: Coord, orientation: Orientation, len: usize) -> impl Iterator<Item = Coord> {
    (0..len).map(move |i| match orientation {
        Orientation::Horizontal => Coord::new(anchor.row, anchor.col + i),
        Orientation::Vertical => Coord::new(anchor.row + i, anchor.col),
    })
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Water => '~',
                    Cell::Ship(id) => *id,
                    Cell::Hit => 'H',
                    Cell::Miss => 'M',
                    Cell::Sunk => 'S',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
