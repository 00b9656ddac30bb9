use seabattle::{Coordinate, Orientation, Ship, ShipClass, FLEET, TOTAL_SHIP_CELLS};

#[test]
fn test_fleet_sizes() {
    let sizes: Vec<u8> = FLEET.iter().map(|class| class.size()).collect();
    assert_eq!(sizes, vec![5, 4, 3, 3, 2]);
    let total: usize = FLEET.iter().map(|class| class.size() as usize).sum();
    assert_eq!(total, TOTAL_SHIP_CELLS);
    assert_eq!(ShipClass::Submarine.name(), "Submarine");
}

#[test]
fn test_cells_follow_orientation() {
    let ship = Ship::new(ShipClass::Battleship, Coordinate::new(2, 1), Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(2, 1),
            Coordinate::new(3, 1),
            Coordinate::new(4, 1),
            Coordinate::new(5, 1)
        ]
    );
    assert!(ship.contains(Coordinate::new(4, 1)));
    assert!(!ship.contains(Coordinate::new(6, 1)));

    let ship = Ship::new(ShipClass::Cruiser, Coordinate::new(0, 7), Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 7),
            Coordinate::new(0, 8),
            Coordinate::new(0, 9)
        ]
    );
    assert!(ship.fits());
}

#[test]
fn test_fits_detects_overhang() {
    let ship = Ship::new(ShipClass::Cruiser, Coordinate::new(0, 8), Orientation::Horizontal);
    assert!(!ship.fits());
    let ship = Ship::new(ShipClass::Destroyer, Coordinate::new(9, 0), Orientation::Vertical);
    assert!(!ship.fits());
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(ShipClass::Destroyer, Coordinate::new(1, 1), Orientation::Horizontal);
    assert!(!ship.is_sunk());
    assert!(!ship.register_hit(Coordinate::new(0, 0)));
    assert_eq!(ship.hits(), 0);
    assert!(ship.register_hit(Coordinate::new(1, 1)));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(Coordinate::new(1, 2)));
    assert!(ship.is_sunk());
    assert_eq!(ship.hits(), ship.size());
}
