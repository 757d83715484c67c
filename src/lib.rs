//! Sea Battle on a fixed 6×6 board: fleet placement with adjacency buffers,
//! random fleet generation for the computer, and the turn state machine.

mod board;
mod cell;
mod common;
mod config;
mod coord;
mod game;
pub mod generator;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use generator::{generate_board, generate_computer_board, random_fleet};
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
