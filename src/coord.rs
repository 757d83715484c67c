//! Mapping between cell labels (`A1`..`F6`) and board coordinates.

use core::fmt;
use core::str::FromStr;

use crate::common::{BoardError, Result};
use crate::config::{BOARD_SIZE, CELL_COUNT, COLUMN_LABELS, ROW_LABELS};

/// A cell position: column 0..=5 (A..F) and row 0..=5 (1..6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    col: u8,
    row: u8,
}

impl Coordinate {
    /// Returns `None` when either axis is off the board.
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self { col, row })
        } else {
            None
        }
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Row-major index into a board's cell arena.
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Self::new((index % size) as u8, (index / size) as u8)
    }

    /// All 36 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).filter_map(Coordinate::from_index)
    }

    /// Coordinate shifted by `(dc, dr)`, or `None` if that leaves the board.
    pub fn offset(&self, dc: i8, dr: i8) -> Option<Self> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as u8, row as u8)
    }

    /// The 3×3 block centred on this cell (itself included), clipped to the board.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        (-1i8..=1).flat_map(move |dc| (-1i8..=1).filter_map(move |dr| self.offset(dc, dr)))
    }

    pub fn label(&self) -> String {
        coord_to_label(*self)
    }
}

/// Parse a label such as `"b4"` or `" E6 "`. Case-insensitive, surrounding
/// whitespace ignored.
pub fn label_to_coord(label: &str) -> Result<Coordinate> {
    let invalid = || BoardError::InvalidCoordinate(label.to_string());
    let mut chars = label.trim().chars().flat_map(char::to_uppercase);
    let (col_ch, row_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(c), Some(r), None) => (c, r),
        _ => return Err(invalid()),
    };
    let col = COLUMN_LABELS
        .iter()
        .position(|&c| c == col_ch)
        .ok_or_else(invalid)?;
    let row = ROW_LABELS
        .iter()
        .position(|&r| r == row_ch)
        .ok_or_else(invalid)?;
    Coordinate::new(col as u8, row as u8).ok_or_else(invalid)
}

/// Canonical (uppercase) label of a coordinate.
pub fn coord_to_label(coord: Coordinate) -> String {
    let mut label = String::with_capacity(2);
    label.push(COLUMN_LABELS[coord.col as usize]);
    label.push(ROW_LABELS[coord.row as usize]);
    label
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            COLUMN_LABELS[self.col as usize], ROW_LABELS[self.row as usize]
        )
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        label_to_coord(s)
    }
}
