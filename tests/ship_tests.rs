use broadside::{ShipClass, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn test_class_lengths_and_names() {
    assert_eq!(ShipClass::Battleship.length(), 5);
    assert_eq!(ShipClass::Destroyer.length(), 4);
    assert_eq!(ShipClass::Battleship.name(), "Battleship");
    assert_eq!(ShipClass::Destroyer.name(), "Destroyer");
}

#[test]
fn test_fleet_composition() {
    assert_eq!(NUM_SHIPS, 3);
    assert_eq!(TOTAL_SHIP_CELLS, 13);
    let battleships = FLEET
        .iter()
        .filter(|(_, c)| *c == ShipClass::Battleship)
        .count();
    assert_eq!(battleships, 1);
    // identifiers unique
    for (i, (id, _)) in FLEET.iter().enumerate() {
        assert!(FLEET.iter().skip(i + 1).all(|(other, _)| other != id));
    }
}

#[test]
fn test_identifier_classification() {
    // Each identifier from the fleet table classifies back to its class,
    // including the two destroyers with distinct characters.
    for &(id, class) in FLEET.iter() {
        assert_eq!(ShipClass::for_identifier(id), Some(class));
    }
    assert_eq!(ShipClass::for_identifier('X'), None);
    assert_eq!(ShipClass::for_identifier('~'), None);
}
