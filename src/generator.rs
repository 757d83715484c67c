//! Random fleet layouts for the automated player.
//!
//! Anchors of the larger vessels are drawn from separate regions of the
//! board so most candidate fleets survive placement. Any candidate that
//! leaves the board or collides is thrown away whole and drawn again.

use core::ops::RangeInclusive;

use rand::Rng;

use crate::board::{Board, PlacementMode};
use crate::config::{BOARD_SIZE, FLEET};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Vessel};

/// Columns and rows an anchor may be drawn from.
struct AnchorRegion {
    cols: RangeInclusive<u8>,
    rows: RangeInclusive<u8>,
}

const FULL: RangeInclusive<u8> = 0..=BOARD_SIZE - 1;

/// One region per entry of [`FLEET`]: the cruiser in the upper-left corner,
/// one destroyer bottom-left, the other top-right, boats anywhere.
const ANCHOR_REGIONS: [AnchorRegion; FLEET.len()] = [
    AnchorRegion { cols: 0..=1, rows: 0..=1 },
    AnchorRegion { cols: 0..=2, rows: 4..=5 },
    AnchorRegion { cols: 4..=5, rows: 0..=2 },
    AnchorRegion { cols: FULL, rows: FULL },
    AnchorRegion { cols: FULL, rows: FULL },
    AnchorRegion { cols: FULL, rows: FULL },
    AnchorRegion { cols: FULL, rows: FULL },
];

/// Draw one candidate fleet. Returns `None` if any vessel ran off the board;
/// overlaps are not checked here.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec<Vessel>> {
    FLEET
        .iter()
        .zip(ANCHOR_REGIONS.iter())
        .map(|(&length, region)| {
            let anchor = Coordinate::new(
                rng.random_range(region.cols.clone()),
                rng.random_range(region.rows.clone()),
            )?;
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            Vessel::from_anchor(anchor, length, orientation)
        })
        .collect()
}

/// Draw fleets until one places cleanly. Returns the board and the number of
/// attempts it took. There is no upper bound on attempts.
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R, hide_fleet: bool) -> (Board, usize) {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let Some(vessels) = random_fleet(rng) else {
            log::trace!("attempt {}: fleet left the board", attempts);
            continue;
        };
        match Board::with_mode(vessels, hide_fleet, PlacementMode::Lenient) {
            Ok(board) if !board.has_error() => {
                log::info!("fleet placed after {} attempts", attempts);
                return (board, attempts);
            }
            Ok(_) => log::trace!("attempt {}: vessels collided", attempts),
            Err(e) => log::warn!("attempt {}: generated fleet rejected: {}", attempts, e),
        }
    }
}

/// Random board for the computer's side, fleet hidden from display.
pub fn generate_computer_board<R: Rng + ?Sized>(rng: &mut R) -> (Board, usize) {
    generate_board(rng, true)
}
