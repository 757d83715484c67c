//! One player's board: the cell arena, fleet placement and shot resolution.

use core::fmt;

use crate::cell::Cell;
use crate::common::{BoardError, Result, ShotOutcome, ShotReport};
use crate::config::{COLUMN_LABELS, FLEET, NUM_SHIPS, ROW_LABELS};
use crate::coord::{label_to_coord, Coordinate};
use crate::ship::Vessel;

/// How [`Board::with_mode`] reacts to colliding vessels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Return [`BoardError::Overlap`].
    Strict,
    /// Stop placing, set [`Board::has_error`] and return the partial board.
    Lenient,
}

pub struct Board {
    cells: Vec<Cell>,
    vessels: Vec<Vessel>,
    hide_fleet: bool,
    error: bool,
}

impl Board {
    /// Place a standard fleet, rejecting any overlap.
    pub fn new(vessels: Vec<Vessel>, hide_fleet: bool) -> Result<Self> {
        Self::with_mode(vessels, hide_fleet, PlacementMode::Strict)
    }

    /// Place a standard fleet. The composition check applies in both modes;
    /// only collisions are softened by [`PlacementMode::Lenient`].
    pub fn with_mode(vessels: Vec<Vessel>, hide_fleet: bool, mode: PlacementMode) -> Result<Self> {
        check_composition(&vessels)?;

        let mut board = Board {
            cells: Coordinate::all().map(Cell::new).collect(),
            vessels: vessels.into_iter().map(Vessel::afloat).collect(),
            hide_fleet,
            error: false,
        };

        'placement: for (idx, vessel) in board.vessels.iter().enumerate() {
            for coord in vessel.coords() {
                let cell = &mut board.cells[coord.index()];
                if cell.is_occupied() || cell.is_buffer() {
                    match mode {
                        PlacementMode::Strict => return Err(BoardError::Overlap(vessel.to_string())),
                        PlacementMode::Lenient => {
                            board.error = true;
                            break 'placement;
                        }
                    }
                }
                cell.assign_vessel(idx);
            }
            for coord in vessel.buffer() {
                board.cells[coord.index()].mark_buffer();
            }
        }
        Ok(board)
    }

    /// Set when a lenient placement hit a collision.
    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn hide_fleet(&self) -> bool {
        self.hide_fleet
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, coord: Coordinate) -> &Cell {
        &self.cells[coord.index()]
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel_at(&self, coord: Coordinate) -> Option<&Vessel> {
        self.cell(coord).vessel().map(|idx| &self.vessels[idx])
    }

    /// Coordinates that have not been shot yet, row-major.
    pub fn untouched(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_untouched())
            .map(Cell::coord)
    }

    pub fn sunk_count(&self) -> usize {
        self.vessels.iter().filter(|v| v.is_sunk()).count()
    }

    /// Returns `true` when all vessels are sunk.
    pub fn has_winner(&self) -> bool {
        self.vessels.iter().all(Vessel::is_sunk)
    }

    /// Resolve a shot at a labelled cell.
    pub fn receive_shot(&mut self, label: &str) -> Result<ShotReport> {
        let coord = label_to_coord(label)?;
        self.shoot(coord)
    }

    /// Resolve a shot at `coord`, marking the cell hit or missed.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotReport> {
        let cell = &mut self.cells[coord.index()];
        let outcome = match cell.vessel() {
            None => {
                cell.mark_missed()?;
                ShotOutcome::Miss
            }
            Some(idx) => {
                cell.mark_hit()?;
                let cells = &self.cells;
                let vessel = &mut self.vessels[idx];
                if vessel.coords().iter().all(|c| cells[c.index()].is_hit()) && vessel.mark_sunk() {
                    log::info!("{} {} sunk", vessel.class_name(), vessel);
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        log::debug!("shot at {} -> {:?}", coord, outcome);
        Ok(ShotReport {
            coord,
            outcome,
            fleet_sunk: self.has_winner(),
        })
    }

    /// Layout of the fleet as labels, e.g. `A1B1C1, E1E2, ...`.
    pub fn fleet_summary(&self) -> String {
        self.vessels
            .iter()
            .map(Vessel::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Text grid with a header naming whose board this is.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn check_composition(vessels: &[Vessel]) -> Result<()> {
    let mut found: Vec<usize> = vessels.iter().map(Vessel::len).collect();
    let mut expected = FLEET;
    found.sort_unstable();
    expected.sort_unstable();
    if found.len() != NUM_SHIPS || found[..] != expected[..] {
        return Err(BoardError::FleetComposition { found });
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owner = if self.hide_fleet { "computer's" } else { "human's" };
        writeln!(f, "      ({} board)", owner)?;
        write!(f, "  |")?;
        for col in COLUMN_LABELS {
            write!(f, " {} |", col)?;
        }
        for (r, row) in ROW_LABELS.iter().enumerate() {
            write!(f, "\n{} |", row)?;
            for c in 0..COLUMN_LABELS.len() {
                let cell = &self.cells[r * COLUMN_LABELS.len() + c];
                write!(f, " {} |", cell.glyph(self.hide_fleet))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("fleet", &self.fleet_summary())
            .field("sunk", &self.sunk_count())
            .field("hide_fleet", &self.hide_fleet)
            .field("error", &self.error)
            .finish()
    }
}
