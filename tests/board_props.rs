use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    generate_board, random_fleet, Board, BoardError, Coordinate, PlacementMode, ShotOutcome,
    Vessel, BOARD_SIZE, FLEET,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_board(&mut rng, false).0
}

fn coord() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(c, r)| Coordinate::new(c, r).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleet_passes_strict_validation(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert!(!board.has_error());
        let vessels: Vec<Vessel> = board.vessels().to_vec();
        let mut lengths: Vec<_> = vessels.iter().map(Vessel::len).collect();
        lengths.sort_unstable();
        prop_assert_eq!(lengths, vec![1, 1, 1, 1, 2, 2, 3]);
        // the same layout is accepted by a hand-built strict board
        prop_assert!(Board::new(vessels, false).is_ok());
    }

    #[test]
    fn generated_vessels_keep_their_distance(seed in any::<u64>()) {
        let board = random_board(seed);
        let vessels = board.vessels();
        for (i, a) in vessels.iter().enumerate() {
            for b in vessels.iter().skip(i + 1) {
                for ca in a.coords() {
                    for cb in b.coords() {
                        let dc = (ca.col() as i8 - cb.col() as i8).abs();
                        let dr = (ca.row() as i8 - cb.row() as i8).abs();
                        prop_assert!(dc.max(dr) > 1, "{} touches {}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn candidate_fleets_stay_on_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Some(fleet) = random_fleet(&mut rng) {
            let lengths: Vec<_> = fleet.iter().map(Vessel::len).collect();
            prop_assert_eq!(&lengths[..], &FLEET[..]);
            let cells: Vec<_> = fleet.iter().flat_map(|v| v.coords().to_vec()).collect();
            prop_assert!(cells.iter().all(|c| c.col() < BOARD_SIZE && c.row() < BOARD_SIZE));
            // lenient construction never fails on composition
            prop_assert!(Board::with_mode(fleet, true, PlacementMode::Lenient).is_ok());
        }
    }

    #[test]
    fn repeat_shot_is_rejected_and_stable(seed in any::<u64>(), target in coord()) {
        let mut board = random_board(seed);
        let first = board.shoot(target).unwrap();
        let state = board.cell(target).shot();
        prop_assert_eq!(board.shoot(target).unwrap_err(), BoardError::AlreadyShot(target));
        prop_assert_eq!(board.cell(target).shot(), state);
        prop_assert_eq!(first.outcome.is_hit(), board.cell(target).is_occupied());
    }

    #[test]
    fn sunk_exactly_when_all_cells_hit(seed in any::<u64>(), shots in proptest::collection::vec(coord(), 0..60)) {
        let mut board = random_board(seed);
        for target in shots {
            let sunk_before = board.sunk_count();
            match board.shoot(target) {
                Ok(report) => {
                    let expected = if report.outcome == ShotOutcome::Sunk { 1 } else { 0 };
                    prop_assert_eq!(board.sunk_count(), sunk_before + expected);
                }
                Err(e) => prop_assert_eq!(e, BoardError::AlreadyShot(target)),
            }
            for vessel in board.vessels() {
                let all_hit = vessel.coords().iter().all(|c| board.cell(*c).is_hit());
                prop_assert_eq!(vessel.is_sunk(), all_hit);
            }
            prop_assert_eq!(board.has_winner(), board.sunk_count() == FLEET.len());
        }
    }
}
