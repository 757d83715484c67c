//! A single board cell and its monotonic shot state.

use crate::common::{BoardError, Result};
use crate::config::{EMPTY_GLYPH, HIT_GLYPH, MISS_GLYPH, SHIP_GLYPH};
use crate::coord::Coordinate;

/// Whether and how a cell has been shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotState {
    #[default]
    Untouched,
    Hit,
    Missed,
}

/// One position of a board's arena. The owning vessel is referenced by its
/// index in the board's vessel list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coordinate,
    vessel: Option<usize>,
    buffer: bool,
    shot: ShotState,
}

impl Cell {
    pub fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            vessel: None,
            buffer: false,
            shot: ShotState::Untouched,
        }
    }

    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Index of the vessel occupying this cell, if any.
    pub fn vessel(&self) -> Option<usize> {
        self.vessel
    }

    pub fn is_occupied(&self) -> bool {
        self.vessel.is_some()
    }

    /// Unoccupied but adjacent to a vessel.
    pub fn is_buffer(&self) -> bool {
        self.buffer
    }

    pub fn shot(&self) -> ShotState {
        self.shot
    }

    pub fn is_hit(&self) -> bool {
        self.shot == ShotState::Hit
    }

    pub fn is_untouched(&self) -> bool {
        self.shot == ShotState::Untouched
    }

    /// Claim this cell for a vessel. Clears the buffer flag.
    pub(crate) fn assign_vessel(&mut self, vessel: usize) {
        self.vessel = Some(vessel);
        self.buffer = false;
    }

    /// Flag as buffer unless a vessel already sits here.
    pub(crate) fn mark_buffer(&mut self) {
        if self.vessel.is_none() {
            self.buffer = true;
        }
    }

    pub(crate) fn mark_hit(&mut self) -> Result<()> {
        self.resolve(ShotState::Hit)
    }

    pub(crate) fn mark_missed(&mut self) -> Result<()> {
        self.resolve(ShotState::Missed)
    }

    fn resolve(&mut self, state: ShotState) -> Result<()> {
        if self.shot != ShotState::Untouched {
            return Err(BoardError::AlreadyShot(self.coord));
        }
        self.shot = state;
        Ok(())
    }

    /// Display glyph; `hide_fleet` masks unshot vessel cells as water.
    pub fn glyph(&self, hide_fleet: bool) -> char {
        match self.shot {
            ShotState::Hit => HIT_GLYPH,
            ShotState::Missed => MISS_GLYPH,
            ShotState::Untouched if self.vessel.is_some() && !hide_fleet => SHIP_GLYPH,
            ShotState::Untouched => EMPTY_GLYPH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shot_state_never_reverts() {
        let coord = Coordinate::new(2, 3).unwrap();
        let mut cell = Cell::new(coord);
        cell.mark_missed().unwrap();
        assert_eq!(cell.mark_hit(), Err(BoardError::AlreadyShot(coord)));
        assert_eq!(cell.mark_missed(), Err(BoardError::AlreadyShot(coord)));
        assert_eq!(cell.shot(), ShotState::Missed);
    }

    #[test]
    fn buffer_never_overrides_vessel() {
        let mut cell = Cell::new(Coordinate::new(0, 0).unwrap());
        cell.assign_vessel(4);
        cell.mark_buffer();
        assert!(!cell.is_buffer());
        assert_eq!(cell.vessel(), Some(4));
    }

    #[test]
    fn hidden_vessel_renders_as_water() {
        let mut cell = Cell::new(Coordinate::new(1, 1).unwrap());
        cell.assign_vessel(0);
        assert_eq!(cell.glyph(true), EMPTY_GLYPH);
        assert_eq!(cell.glyph(false), SHIP_GLYPH);
        cell.mark_hit().unwrap();
        assert_eq!(cell.glyph(true), HIT_GLYPH);
    }
}
