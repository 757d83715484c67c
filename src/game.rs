use crate::{
    board::Board,
    common::{BoardError, Result, ShotReport},
    player::Player,
};
use rand::rngs::SmallRng;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// Both boards plus turn ownership. The human side shoots first.
pub struct Game {
    human_board: Board,
    computer_board: Board,
    turn: Side,
    status: GameStatus,
    human_shots: usize,
    computer_shots: usize,
}

impl Game {
    pub fn new(human_board: Board, computer_board: Board) -> Self {
        Self {
            human_board,
            computer_board,
            turn: Side::Human,
            status: GameStatus::InProgress,
            human_shots: 0,
            computer_shots: 0,
        }
    }

    /// Side whose turn it is to shoot.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Computer => &self.computer_board,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human_board,
            Side::Computer => &mut self.computer_board,
        }
    }

    /// Board the side to move is shooting at.
    pub fn target_board(&self) -> &Board {
        self.board(self.turn.opponent())
    }

    /// Number of resolved shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        match side {
            Side::Human => self.human_shots,
            Side::Computer => self.computer_shots,
        }
    }

    /// Fire the acting side's shot at its opponent's board.
    ///
    /// A hit or sink keeps the turn, a miss passes it, and sinking the last
    /// vessel ends the game. Rejected shots leave the turn unchanged.
    pub fn fire(&mut self, label: &str) -> Result<ShotReport> {
        if let GameStatus::Won(_) = self.status {
            return Err(BoardError::GameOver);
        }
        let shooter = self.turn;
        let report = self.board_mut(shooter.opponent()).receive_shot(label)?;
        match shooter {
            Side::Human => self.human_shots += 1,
            Side::Computer => self.computer_shots += 1,
        }
        if report.fleet_sunk {
            log::info!("{:?} wins after {} shots", shooter, self.shots_fired(shooter));
            self.status = GameStatus::Won(shooter);
        } else if !report.outcome.is_hit() {
            self.turn = shooter.opponent();
        }
        Ok(report)
    }
}

/// Play `game` to completion, asking each player for shots in turn.
/// Rejected shots are reported back to the shooter, who is asked again.
pub fn run_game<'a>(
    game: &mut Game,
    human: &'a mut dyn Player,
    computer: &'a mut dyn Player,
    rng: &mut SmallRng,
) -> anyhow::Result<Side> {
    loop {
        if let GameStatus::Won(winner) = game.status() {
            return Ok(winner);
        }
        let side = game.turn();
        let (shooter, defender) = match side {
            Side::Human => (&mut *human, &mut *computer),
            Side::Computer => (&mut *computer, &mut *human),
        };
        let label = shooter.select_target(rng, game.target_board())?;
        let result = game.fire(&label);
        shooter.handle_shot_result(&label, &result, game.board(side.opponent()))?;
        match result {
            Ok(report) => defender.handle_opponent_shot(&report, game.board(side.opponent()))?,
            Err(e) => log::debug!("{} rejected: {}", shooter.name(), e),
        }
    }
}
