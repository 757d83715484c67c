//! Common types for Sea Battle: board errors and shot results.

use thiserror::Error;

use crate::coord::Coordinate;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a vessel that still has unhit cells.
    Hit,
    /// Shot hit the last unhit cell of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Returns `true` for both `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Full report of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub coord: Coordinate,
    pub outcome: ShotOutcome,
    /// Whether every vessel on the target board is now sunk.
    pub fleet_sunk: bool,
}

/// Errors returned by coordinate parsing, vessel construction, board
/// placement and shot resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("`{0}` is not a cell on the board (expected A1 to F6)")]
    InvalidCoordinate(String),
    #[error("`{0}` is not a straight, unbroken line of cells (e.g. A1B1C1 or A1)")]
    InvalidCoordinates(String),
    #[error("fleet must be 7 ships (1 of length 3, 2 of length 2, 4 of length 1), got lengths {found:?}")]
    FleetComposition { found: Vec<usize> },
    #[error("ship {0} overlaps or touches another ship")]
    Overlap(String),
    #[error("cell {0} has already been shot")]
    AlreadyShot(Coordinate),
    #[error("the game is already over")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, BoardError>;
