use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 3;

/// Fixed fleet: one board identifier character per ship, paired with its
/// class. Identifiers are unique even between ships of the same class so a
/// board cell always names exactly one vessel.
pub const FLEET: [(char, ShipClass); NUM_SHIPS] = [
    ('B', ShipClass::Battleship),
    ('D', ShipClass::Destroyer),
    ('E', ShipClass::Destroyer),
];

pub const TOTAL_SHIP_CELLS: usize =
    FLEET[0].1.length() + FLEET[1].1.length() + FLEET[2].1.length();
