use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{parse_fleet, run_game, Board, CliPlayer, ComputerPlayer, Game, Player, Side};

const FLEET_LINE: &str = "A1B1C1 E1E2 A4B4 D4 F4 A6 E6";

fn output_of(player: CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(player.into_output()).unwrap()
}

#[test]
fn test_placement_reprompts_until_valid() {
    let mut rng = SmallRng::seed_from_u64(1);
    let input = "A1B1C1 E1E2\nA1C1 E1E2 A4B4 D4 F4 A6 E6\nA1B1C1 E1E2 A4B4 D4 F4 A6 E6\n";
    let mut player = CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

    let board = player.place_fleet(&mut rng).unwrap();
    assert_eq!(board.fleet_summary(), "A1B1C1, E1E2, A4B4, D4, F4, A6, E6");
    assert!(!board.hide_fleet());

    let out = output_of(player);
    assert_eq!(out.matches("Try again").count(), 2);
    assert!(out.contains("fleet must be 7 ships"));
    assert!(out.contains("(human's board)"));
}

#[test]
fn test_closed_input_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = CliPlayer::new(Cursor::new(Vec::new()), Vec::new());
    assert!(player.place_fleet(&mut rng).is_err());
}

#[test]
fn test_scripted_console_game() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut lines = vec!["x9".to_string(), "a1".to_string(), "A1".to_string()];
    lines.extend(
        ["B1", "C1", "E1", "E2", "A4", "B4", "D4", "F4", "A6", "E6"]
            .iter()
            .map(|s| s.to_string()),
    );
    let input = lines.join("\n") + "\n";
    let mut human = CliPlayer::new(Cursor::new(input.into_bytes()), Vec::new());
    let mut computer = ComputerPlayer::new();

    let human_board = Board::new(parse_fleet(FLEET_LINE).unwrap(), false).unwrap();
    let computer_board = Board::new(parse_fleet(FLEET_LINE).unwrap(), true).unwrap();
    let mut game = Game::new(human_board, computer_board);

    let winner = run_game(&mut game, &mut human, &mut computer, &mut rng).unwrap();
    assert_eq!(winner, Side::Human);

    let out = output_of(human);
    assert!(out.contains("Cannot shoot `x9`"));
    assert!(out.contains("Hit at A1! Shoot again."));
    assert!(out.contains("You already shot at A1!"));
    assert!(out.contains("You sank a cruiser!"));
    assert!(out.contains("sinks the last ship"));
    assert!(out.contains("(computer's board)"));
}
