use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Standard fleet in placement order.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::Carrier,
    ShipClass::Battleship,
    ShipClass::Cruiser,
    ShipClass::Submarine,
    ShipClass::Destroyer,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws tried for a single ship before the whole fleet is restarted.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

/// Whole-fleet restarts allowed before random placement gives up.
pub const PLACEMENT_RESTARTS: usize = 100;
