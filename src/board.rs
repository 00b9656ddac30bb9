//! Fleet board: ship placement rules, shot resolution and queries.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, CellState, Coordinate, ShotResult};
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS, PLACEMENT_RESTARTS};
use crate::ship::{Orientation, Ship, ShipClass};

/// Cell set sized for the game board.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// One player's grid and the ships placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[CellState; GRID_SIZE]; GRID_SIZE],
    ships: Vec<Ship>,
    // cells of every placed ship plus their eight neighbours
    exclusion: BB,
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; GRID_SIZE]; GRID_SIZE],
            ships: Vec::new(),
            exclusion: BB::new(),
        }
    }

    /// Reset to an empty board for a new match.
    pub fn clear(&mut self) {
        self.grid = [[CellState::Empty; GRID_SIZE]; GRID_SIZE];
        self.ships.clear();
        self.exclusion.clear_all();
    }

    fn check_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        if !ship.fits() {
            return Err(BoardError::OutOfBounds);
        }
        for cell in ship.cells() {
            if self.cell(cell) != CellState::Empty {
                return Err(BoardError::Overlaps);
            }
            if self.exclusion.contains(cell) {
                return Err(BoardError::TooClose);
            }
        }
        Ok(())
    }

    /// Returns `true` iff `ship` lies on the board, covers only empty cells and
    /// touches no other ship, diagonals included.
    pub fn can_place(&self, ship: &Ship) -> bool {
        self.check_placement(ship).is_ok()
    }

    /// Commit `ship` if it can be placed. Nothing changes on error.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.check_placement(&ship)?;
        let footprint: BB = ship.cells().collect();
        for cell in footprint.iter() {
            self.grid[cell.row as usize][cell.col as usize] = CellState::ShipPresent;
        }
        self.exclusion |= footprint.dilate();
        // fresh ship: hits start at zero even if the caller passed a used one
        self.ships
            .push(Ship::new(ship.class(), ship.start(), ship.orientation()));
        Ok(())
    }

    /// Place a ship of `class` at `start` with `orientation`.
    pub fn place(
        &mut self,
        class: ShipClass,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.place_ship(Ship::new(class, start, orientation))
    }

    /// Draw one random placement of `class`, anywhere on the grid.
    fn random_ship<R: Rng + ?Sized>(rng: &mut R, class: ShipClass) -> Ship {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let start = Coordinate::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        Ship::new(class, start, orientation)
    }

    /// Try to place the whole fleet in one pass, `PLACEMENT_ATTEMPTS` draws per ship.
    fn try_place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        'fleet: for class in FLEET {
            for _ in 0..PLACEMENT_ATTEMPTS {
                if self.place_ship(Self::random_ship(rng, class)).is_ok() {
                    continue 'fleet;
                }
            }
            debug!("no room for {} after {} draws", class, PLACEMENT_ATTEMPTS);
            return false;
        }
        true
    }

    /// Clear the board and place the standard fleet at random. A ship that
    /// cannot be placed within its draw budget restarts the whole fleet; after
    /// `PLACEMENT_RESTARTS` restarts the board is left empty and an error is
    /// returned.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for restart in 0..=PLACEMENT_RESTARTS {
            self.clear();
            if self.try_place_fleet(rng) {
                if restart > 0 {
                    debug!("fleet placed after {} restarts", restart);
                }
                return Ok(());
            }
        }
        self.clear();
        Err(BoardError::FleetPlacementFailed {
            restarts: PLACEMENT_RESTARTS,
        })
    }

    /// Fire at `coord`. Out-of-range or repeated shots return `Invalid` and
    /// change nothing.
    pub fn shoot(&mut self, coord: Coordinate) -> ShotResult {
        if !coord.is_valid() {
            return ShotResult::Invalid;
        }
        let cell = &mut self.grid[coord.row as usize][coord.col as usize];
        match *cell {
            CellState::Miss | CellState::Hit => ShotResult::Invalid,
            CellState::Empty => {
                *cell = CellState::Miss;
                ShotResult::Miss
            }
            CellState::ShipPresent => {
                *cell = CellState::Hit;
                let Some(ship) = self.ships.iter_mut().find(|s| s.contains(coord)) else {
                    // grid and ship list disagree; treat the cell as water
                    *cell = CellState::Miss;
                    return ShotResult::Miss;
                };
                ship.register_hit(coord);
                if !ship.is_sunk() {
                    return ShotResult::Hit;
                }
                trace!("{} sunk at {}", ship.class().name(), coord);
                if self.all_ships_sunk() {
                    ShotResult::Win
                } else {
                    ShotResult::Sunk
                }
            }
        }
    }

    /// State of the cell at `coord`; off-grid coordinates read as `Empty`.
    pub fn cell(&self, coord: Coordinate) -> CellState {
        if coord.is_valid() {
            self.grid[coord.row as usize][coord.col as usize]
        } else {
            CellState::Empty
        }
    }

    pub fn is_attacked(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_attacked()
    }

    /// Number of ships still afloat.
    pub fn remaining_ship_count(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn count_cells(&self, state: CellState) -> usize {
        self.grid.iter().flatten().filter(|&&c| c == state).count()
    }

    pub fn total_hits(&self) -> usize {
        self.count_cells(CellState::Hit)
    }

    pub fn total_misses(&self) -> usize {
        self.count_cells(CellState::Miss)
    }

    /// Text view of the grid; ships are drawn only when `reveal` is set.
    pub fn view(&self, reveal: bool) -> BoardView<'_> {
        BoardView { board: self, reveal }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ ships: {:?} }}", self.ships)?;
        write!(f, "{}", self.view(true))
    }
}

/// Display adapter returned by [`Board::view`].
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{}", (b'A' + r) as char)?;
            for c in 0..BOARD_SIZE {
                let ch = match self.board.cell(Coordinate::new(r, c)) {
                    CellState::Empty => '~',
                    CellState::ShipPresent if self.reveal => 'S',
                    CellState::ShipPresent => '~',
                    CellState::Miss => 'o',
                    CellState::Hit => 'X',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
