use anyhow::anyhow;
use rand::{rngs::SmallRng, Rng};

use crate::{board::Board, generator, player::Player};

/// Automated player: random fleet layout and uniform-random targeting over
/// the cells it has not shot yet.
pub struct ComputerPlayer {
    hide_fleet: bool,
    placement_attempts: usize,
}

impl ComputerPlayer {
    /// Computer seat with its fleet hidden from display.
    pub fn new() -> Self {
        Self {
            hide_fleet: true,
            placement_attempts: 0,
        }
    }

    /// Computer-driven player whose fleet is rendered, for simulations.
    pub fn revealed() -> Self {
        Self {
            hide_fleet: false,
            placement_attempts: 0,
        }
    }

    /// Attempts the generator needed for the last placed fleet.
    pub fn placement_attempts(&self) -> usize {
        self.placement_attempts
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        "computer"
    }

    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<Board> {
        let (board, attempts) = generator::generate_board(rng, self.hide_fleet);
        self.placement_attempts = attempts;
        Ok(board)
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> anyhow::Result<String> {
        let open: Vec<_> = target.untouched().collect();
        if open.is_empty() {
            return Err(anyhow!("no cells left to shoot"));
        }
        let coord = open[rng.random_range(0..open.len())];
        log::debug!("computer fires at {}", coord);
        Ok(coord.label())
    }
}
