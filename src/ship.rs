//! Ship classes and placed-ship geometry.

use core::fmt;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step (row, col) along this orientation.
    pub const fn step(self) -> (u8, u8) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Class of ship; determines its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipClass {
    /// Ship's length in cells.
    pub const fn size(self) -> u8 {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }

    /// Ship's name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.size())
    }
}

/// A ship anchored at `start`, covering `size` consecutive cells along its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    class: ShipClass,
    start: Coordinate,
    orientation: Orientation,
    hits: u8,
}

impl Ship {
    /// Describe a ship without checking it against any board.
    pub const fn new(class: ShipClass, start: Coordinate, orientation: Orientation) -> Self {
        Ship {
            class,
            start,
            orientation,
            hits: 0,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn size(&self) -> u8 {
        self.class.size()
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> u8 {
        self.hits
    }

    /// Occupied cells, starting at `start`. Cells past the board edge are
    /// still yielded so callers can reject the placement.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let start = self.start;
        (0..self.size()).map(move |i| {
            Coordinate::new(
                start.row.saturating_add(dr * i),
                start.col.saturating_add(dc * i),
            )
        })
    }

    /// Returns `true` if every occupied cell lies on the board.
    pub fn fits(&self) -> bool {
        self.cells().all(|c| c.is_valid())
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Register a hit at `coord`. Returns `true` if the ship occupies it.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        if !self.contains(coord) {
            return false;
        }
        if self.hits < self.size() {
            self.hits += 1;
        }
        true
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.size()
    }
}
