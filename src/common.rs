//! Common types: shot outcomes and board errors.

use core::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit an undepleted ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot sank a ship, carrying its class name.
    Sunk(&'static str),
}

/// Errors returned by board and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The shooter has already targeted this coordinate.
    AlreadyTargeted,
    /// Ship placement runs off the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Specified fleet index is out of range.
    InvalidIndex,
    /// A board cell names a ship missing from the fleet.
    UnknownShip(char),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AlreadyTargeted => write!(f, "Coordinate was already targeted"),
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::InvalidIndex => write!(f, "Fleet index is out of range"),
            GameError::UnknownShip(id) => write!(f, "No ship in the fleet has identifier '{}'", id),
        }
    }
}

impl std::error::Error for GameError {}
