//! Core game engine: four boards, two fleets, shared shot resolution.

use rand::Rng;

use crate::ai;
use crate::board::{Board, Cell};
use crate::common::{GameError, ShotOutcome};
use crate::config::{FLEET, NUM_SHIPS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Owns all game state for one session: the two ground-truth fleet boards,
/// the two shot-tracking boards, both fleets, and the random source used
/// for placement and computer targeting.
pub struct GameEngine<R: Rng> {
    rng: R,
    player_board: Board,
    player_shots: Board,
    computer_board: Board,
    computer_shots: Board,
    player_fleet: Vec<Ship>,
    computer_fleet: Vec<Ship>,
}

impl<R: Rng> GameEngine<R> {
    /// Fresh engine with empty boards and unplaced fleets. The random
    /// source is injected so seeded games are reproducible.
    pub fn new(rng: R) -> Self {
        let mut engine = Self {
            rng,
            player_board: Board::new(),
            player_shots: Board::new(),
            computer_board: Board::new(),
            computer_shots: Board::new(),
            player_fleet: Vec::new(),
            computer_fleet: Vec::new(),
        };
        engine.reset();
        engine
    }

    /// Reset to a fully blank game: all four boards water, both fleets
    /// rebuilt with no recorded positions. Idempotent.
    pub fn reset(&mut self) {
        self.player_board.clear();
        self.player_shots.clear();
        self.computer_board.clear();
        self.computer_shots.clear();
        self.player_fleet = build_fleet();
        self.computer_fleet = build_fleet();
    }

    /// Randomly place both fleets on their ground-truth boards. The two
    /// placements are drawn independently.
    pub fn deploy_fleets(&mut self) -> Result<(), GameError> {
        place_fleet(&mut self.rng, &mut self.player_board, &mut self.player_fleet)?;
        place_fleet(
            &mut self.rng,
            &mut self.computer_board,
            &mut self.computer_fleet,
        )?;
        Ok(())
    }

    /// Manually place one player ship, for deterministic setups.
    pub fn place_player_ship(
        &mut self,
        index: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let ship = self
            .player_fleet
            .get_mut(index)
            .ok_or(GameError::InvalidIndex)?;
        self.player_board.place(ship, anchor, orientation)
    }

    /// Manually place one computer ship, for deterministic setups.
    pub fn place_computer_ship(
        &mut self,
        index: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let ship = self
            .computer_fleet
            .get_mut(index)
            .ok_or(GameError::InvalidIndex)?;
        self.computer_board.place(ship, anchor, orientation)
    }

    /// Resolve a player shot against the computer fleet.
    pub fn player_shot(&mut self, coord: Coord) -> Result<ShotOutcome, GameError> {
        resolve_shot(
            &mut self.computer_board,
            &mut self.player_shots,
            &self.computer_fleet,
            coord,
        )
    }

    /// Run one computer turn: pick a target with the hunt heuristic, then
    /// resolve it against the player fleet. Returns the chosen coordinate
    /// alongside the outcome.
    pub fn computer_shot(&mut self) -> Result<(Coord, ShotOutcome), GameError> {
        let coord = ai::select_target(&mut self.rng, &self.computer_shots);
        let outcome = resolve_shot(
            &mut self.player_board,
            &mut self.computer_shots,
            &self.player_fleet,
            coord,
        )?;
        Ok((coord, outcome))
    }

    /// Evaluate the game status, recomputed from board state each call.
    pub fn status(&self) -> GameStatus {
        if self.computer_board.cleared() {
            GameStatus::Won
        } else if self.player_board.cleared() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Player fleet board (ground truth for the player's ships).
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// What the player has learned about the computer fleet.
    pub fn player_shots(&self) -> &Board {
        &self.player_shots
    }

    /// Computer fleet board (ground truth for the computer's ships).
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Mirror of the shots fired at the player, read by the hunt heuristic.
    pub fn computer_shots(&self) -> &Board {
        &self.computer_shots
    }

    pub fn player_fleet(&self) -> &[Ship] {
        &self.player_fleet
    }

    pub fn computer_fleet(&self) -> &[Ship] {
        &self.computer_fleet
    }
}

fn build_fleet() -> Vec<Ship> {
    FLEET
        .iter()
        .map(|&(id, class)| Ship::new(class, id))
        .collect()
}

fn place_fleet<R: Rng>(
    rng: &mut R,
    board: &mut Board,
    fleet: &mut [Ship],
) -> Result<(), GameError> {
    debug_assert_eq!(fleet.len(), NUM_SHIPS);
    for ship in fleet {
        let (anchor, orientation) = board.random_placement(rng, ship.class().length());
        board.place(ship, anchor, orientation)?;
        log::debug!(
            "placed {} '{}' at {} {:?}",
            ship.name(),
            ship.identifier(),
            anchor,
            orientation
        );
    }
    Ok(())
}

/// Shared shot contract for both shooters. `target` is the ground-truth
/// board being fired at, `tracking` the shooter's own record of past shots,
/// `fleet` the fleet living on `target`.
pub fn resolve_shot(
    target: &mut Board,
    tracking: &mut Board,
    fleet: &[Ship],
    coord: Coord,
) -> Result<ShotOutcome, GameError> {
    if !tracking.cell(coord).is_water() {
        return Err(GameError::AlreadyTargeted);
    }
    match target.cell(coord) {
        Cell::Water => {
            tracking.set(coord, Cell::Miss);
            target.set(coord, Cell::Miss);
            Ok(ShotOutcome::Miss)
        }
        Cell::Ship(id) => {
            let ship = fleet
                .iter()
                .find(|s| s.identifier() == id)
                .ok_or(GameError::UnknownShip(id))?;
            tracking.set(coord, Cell::Hit);
            target.set(coord, Cell::Hit);
            if ship.cells().iter().all(|&c| target.cell(c) == Cell::Hit) {
                // Only this ship's cells flip to sunk; hits on other,
                // still-floating ships keep their hit marks.
                for &c in ship.cells() {
                    target.set(c, Cell::Sunk);
                    tracking.set(c, Cell::Sunk);
                }
                Ok(ShotOutcome::Sunk(ship.name()))
            } else {
                Ok(ShotOutcome::Hit)
            }
        }
        // Unreachable given the tracking precondition; reject without
        // touching either board.
        Cell::Hit | Cell::Miss | Cell::Sunk => Err(GameError::AlreadyTargeted),
    }
}
