use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, run_game, ComputerPlayer, Game, Player, Side};
use serde::Serialize;

/// Play one computer-vs-computer game and print a JSON summary.
#[derive(Parser)]
struct Args {
    seed: u64,
}

#[derive(Serialize)]
struct PerSide {
    human: usize,
    computer: usize,
}

#[derive(Serialize)]
struct SimReport {
    seed: u64,
    winner: &'static str,
    shots: PerSide,
    placement_attempts: PerSide,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut p1 = ComputerPlayer::revealed();
    let mut p2 = ComputerPlayer::new();
    let b1 = p1.place_fleet(&mut rng)?;
    let b2 = p2.place_fleet(&mut rng)?;

    let mut game = Game::new(b1, b2);
    let winner = run_game(&mut game, &mut p1, &mut p2, &mut rng)?;

    let report = SimReport {
        seed: args.seed,
        winner: match winner {
            Side::Human => "human",
            Side::Computer => "computer",
        },
        shots: PerSide {
            human: game.shots_fired(Side::Human),
            computer: game.shots_fired(Side::Computer),
        },
        placement_attempts: PerSide {
            human: p1.placement_attempts(),
            computer: p2.placement_attempts(),
        },
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
