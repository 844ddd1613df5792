use broadside::{Coord, ParseCoordError, BOARD_SIZE};

#[test]
fn test_parse_basic() {
    assert_eq!("A1".parse::<Coord>().unwrap(), Coord::new(0, 0));
    assert_eq!("A5".parse::<Coord>().unwrap(), Coord::new(0, 4));
    assert_eq!("J10".parse::<Coord>().unwrap(), Coord::new(9, 9));
    assert_eq!("C7".parse::<Coord>().unwrap(), Coord::new(2, 6));
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("a5".parse::<Coord>().unwrap(), Coord::new(0, 4));
    assert_eq!("j10".parse::<Coord>().unwrap(), Coord::new(9, 9));
}

#[test]
fn test_parse_rejections() {
    assert_eq!("".parse::<Coord>().unwrap_err(), ParseCoordError::TooShort);
    assert_eq!("A".parse::<Coord>().unwrap_err(), ParseCoordError::TooShort);
    assert_eq!("K5".parse::<Coord>().unwrap_err(), ParseCoordError::InvalidRow);
    assert_eq!("15".parse::<Coord>().unwrap_err(), ParseCoordError::InvalidRow);
    assert_eq!(
        "A0".parse::<Coord>().unwrap_err(),
        ParseCoordError::InvalidColumn
    );
    assert_eq!(
        "A11".parse::<Coord>().unwrap_err(),
        ParseCoordError::InvalidColumn
    );
    assert_eq!(
        "A5X".parse::<Coord>().unwrap_err(),
        ParseCoordError::InvalidColumn
    );
}

#[test]
fn test_format() {
    assert_eq!(Coord::new(0, 0).to_string(), "A1");
    assert_eq!(Coord::new(0, 4).to_string(), "A5");
    assert_eq!(Coord::new(9, 9).to_string(), "J10");
}

#[test]
fn test_roundtrip_identity_all_cells() {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col);
            let text = coord.to_string();
            assert_eq!(text.parse::<Coord>().unwrap(), coord);
            assert_eq!(text.parse::<Coord>().unwrap().to_string(), text);
        }
    }
}

#[test]
fn test_neighbors_bounds_checked() {
    let mut corner: Vec<Coord> = Coord::new(0, 0).neighbors().collect();
    corner.sort();
    assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0)]);

    let center: Vec<Coord> = Coord::new(4, 4).neighbors().collect();
    assert_eq!(center.len(), 4);

    let mut far: Vec<Coord> = Coord::new(9, 9).neighbors().collect();
    far.sort();
    assert_eq!(far, vec![Coord::new(8, 9), Coord::new(9, 8)]);
}
