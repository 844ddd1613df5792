//! Targeting logic for the computer opponent.
//!
//! Stateless per turn: candidates come solely from the shot-tracking board,
//! with no memory of which ship is being hunted or its orientation. Every
//! hit cell on the board contributes candidates equally.

use rand::Rng;

use crate::board::{Board, Cell};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Water neighbors of every hit on the tracking board, deduplicated in
/// scan order. Cells already marked hit, miss or sunk never qualify.
pub fn hunt_candidates(tracking: &Board) -> Vec<Coord> {
    let mut candidates = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col);
            if tracking.cell(coord) != Cell::Hit {
                continue;
            }
            for n in coord.neighbors() {
                if tracking.cell(n).is_water() && !candidates.contains(&n) {
                    candidates.push(n);
                }
            }
        }
    }
    candidates
}

/// Choose the next target: uniformly among hunt candidates when any exist,
/// otherwise a uniformly random untargeted cell.
pub fn select_target<R: Rng>(rng: &mut R, tracking: &Board) -> Coord {
    let candidates = hunt_candidates(tracking);
    if !candidates.is_empty() {
        log::debug!("hunting near hits, {} candidate cells", candidates.len());
        return candidates[rng.random_range(0..candidates.len())];
    }
    loop {
        let coord = Coord::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        if tracking.cell(coord).is_water() {
            return coord;
        }
    }
}
