use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome, ShotReport},
    player::Player,
    ship::parse_fleet,
};

const FLEET_PROMPT: &str = "Enter the cells of all ships (1 x 3 cells, 2 x 2 cells, 4 x 1 cell)\n\
Expected format: A1B1C1 E1E2 A4B4 D4 F4 A6 E6: ";

/// Interactive console player. Generic over its streams so it can be driven
/// from any reader and writer.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn place_fleet(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Board> {
        loop {
            let line = self.prompt(FLEET_PROMPT)?;
            match parse_fleet(&line).and_then(|vessels| Board::new(vessels, false)) {
                Ok(board) => {
                    writeln!(self.output, "{}", board)?;
                    return Ok(board);
                }
                Err(e) => writeln!(self.output, "Error: {}. Try again.", e)?,
            }
        }
    }

    fn select_target(&mut self, _rng: &mut SmallRng, target: &Board) -> anyhow::Result<String> {
        writeln!(self.output, "{}", target)?;
        self.prompt("Enter a cell: ")
    }

    fn handle_shot_result(
        &mut self,
        label: &str,
        result: &Result<ShotReport, BoardError>,
        target: &Board,
    ) -> anyhow::Result<()> {
        match result {
            Ok(report) if report.fleet_sunk => {
                writeln!(self.output, "{} sinks the last ship!", report.coord)?
            }
            Ok(report) => match report.outcome {
                ShotOutcome::Hit => writeln!(self.output, "Hit at {}! Shoot again.", report.coord)?,
                ShotOutcome::Sunk => {
                    let name = target.vessel_at(report.coord).map_or("ship", |v| v.class_name());
                    writeln!(self.output, "You sank a {}! Shoot again.", name)?
                }
                ShotOutcome::Miss => {
                    writeln!(self.output, "Miss at {}, the computer's turn.", report.coord)?;
                    writeln!(self.output, "{}", target)?
                }
            },
            Err(BoardError::AlreadyShot(coord)) => {
                writeln!(self.output, "You already shot at {}! Try again.", coord)?
            }
            Err(e) => writeln!(self.output, "Cannot shoot `{}`: {}. Try again.", label, e)?,
        }
        Ok(())
    }

    fn handle_opponent_shot(&mut self, report: &ShotReport, own: &Board) -> anyhow::Result<()> {
        let verdict = match report.outcome {
            _ if report.fleet_sunk => "sinks your last ship",
            ShotOutcome::Miss => "misses, your turn",
            ShotOutcome::Hit => "hits and shoots again",
            ShotOutcome::Sunk => "sinks your ship and shoots again",
        };
        writeln!(self.output, "Computer fires at {} and {}.", report.coord, verdict)?;
        writeln!(self.output, "{}", own)?;
        Ok(())
    }
}
