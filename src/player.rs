use crate::{
    board::Board,
    common::{BoardError, ShotReport},
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Name used in messages and logs.
    fn name(&self) -> &str;

    /// Lay out a full fleet and return the resulting board.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<Board>;

    /// Choose the label of the next cell to shoot on `target`.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> anyhow::Result<String>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(
        &mut self,
        _label: &str,
        _result: &Result<ShotReport, BoardError>,
        _target: &Board,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _report: &ShotReport, _own: &Board) -> anyhow::Result<()> {
        Ok(())
    }
}
