use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, parse_fleet, run_game, Board, CliPlayer, ComputerPlayer, Game, Player, Side,
};

#[derive(Parser)]
#[command(author, version, about = "Sea Battle on a 6x6 board against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Fleet layout, skipping the prompt (e.g., \"A1B1C1 E1E2 A4B4 D4 F4 A6 E6\")")]
    fleet: Option<String>,
    #[arg(long, help = "Print the computer's fleet layout before the game starts")]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut human = CliPlayer::stdio();
    let mut computer = ComputerPlayer::new();

    let human_board = match cli.fleet {
        Some(line) => {
            let board = Board::new(parse_fleet(&line)?, false)?;
            println!("{}", board);
            board
        }
        None => human.place_fleet(&mut rng)?,
    };

    println!("The computer is placing its ships...");
    let computer_board = computer.place_fleet(&mut rng)?;
    println!(
        "The computer placed its ships in {} attempts",
        computer.placement_attempts()
    );
    if cli.reveal {
        println!("Computer fleet: {}", computer_board.fleet_summary());
    }

    let mut game = Game::new(human_board, computer_board);
    let winner = run_game(&mut game, &mut human, &mut computer, &mut rng)?;

    println!("{}", game.board(Side::Computer));
    println!("{}", game.board(Side::Human));
    match winner {
        Side::Human => println!("You win!"),
        Side::Computer => println!("The computer wins!"),
    }
    Ok(())
}
