use std::io::Cursor;

use broadside::{Cell, Coord, GameEngine, GameStatus, Orientation, Session};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fixed_engine(seed: u64) -> GameEngine<SmallRng> {
    let mut engine = GameEngine::new(SmallRng::seed_from_u64(seed));
    // computer fleet: A1-A5, C1-C4, E1-E4
    engine
        .place_computer_ship(0, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    engine
        .place_computer_ship(1, Coord::new(2, 0), Orientation::Horizontal)
        .unwrap();
    engine
        .place_computer_ship(2, Coord::new(4, 0), Orientation::Horizontal)
        .unwrap();
    // player fleet lives elsewhere; the computer shoots at this board
    engine
        .place_player_ship(0, Coord::new(6, 0), Orientation::Horizontal)
        .unwrap();
    engine
        .place_player_ship(1, Coord::new(8, 0), Orientation::Horizontal)
        .unwrap();
    engine
        .place_player_ship(2, Coord::new(8, 5), Orientation::Horizontal)
        .unwrap();
    engine
}

fn run_script(seed: u64, script: &str) -> (GameStatus, GameEngine<SmallRng>, String) {
    let mut session = Session::with_engine(
        fixed_engine(seed),
        Cursor::new(script.to_string()),
        Vec::new(),
    );
    let status = session.run().unwrap();
    let (engine, output) = session.into_parts();
    (status, engine, String::from_utf8(output).unwrap())
}

/// A perfect 13-shot player always wins: the win check after the player's
/// 13th shot fires before the computer's 13th shot, and 12 computer shots
/// cannot clear a 13-cell fleet.
#[test]
fn test_scripted_perfect_game_wins() {
    let script = "A1\nA2\nA3\nA4\nA5\n\
                  C1\nC2\nC3\nC4\n\
                  E1\nE2\nE3\nE4\n";
    let (status, engine, output) = run_script(11, script);

    assert_eq!(status, GameStatus::Won);
    assert!(output.contains("Hit! You sunk the computer's Battleship!"));
    assert!(output.contains("Hit! You sunk the computer's Destroyer!"));
    assert!(output.contains("Congratulations! You sunk all the computer's ships!"));
    assert!(output.contains("Final boards"));
    for col in 0..5 {
        assert_eq!(engine.computer_board().cell(Coord::new(0, col)), Cell::Sunk);
    }
}

/// Malformed and repeated coordinates re-prompt within the same turn and
/// never advance it, so extra junk lines cost the player nothing.
#[test]
fn test_invalid_and_repeated_input_reprompts() {
    let script = "\n\
                  K5\n\
                  A0\n\
                  A11\n\
                  A5X\n\
                  A1\n\
                  A1\n\
                  A2\nA3\nA4\nA5\n\
                  C1\nC2\nC3\nC4\n\
                  E1\nE2\nE3\nE4\n";
    let (status, _, output) = run_script(23, script);

    assert_eq!(status, GameStatus::Won);
    assert!(output.contains("Invalid coordinate"));
    assert!(output.contains("You've already targeted A1. Try again."));
}

#[test]
fn test_input_eof_is_an_error() {
    let mut session = Session::with_engine(fixed_engine(5), Cursor::new("A1\n"), Vec::new());
    let err = session.run().unwrap_err();
    assert!(err.to_string().contains("input closed"));
}
