//! Vessel shapes: parsing, line validation and adjacency buffers.

use core::fmt;

use crate::common::{BoardError, Result};
use crate::config::ship_class;
use crate::coord::{label_to_coord, Coordinate};

/// Direction a multi-cell vessel extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Rightward, increasing column.
    Horizontal,
    /// Downward, increasing row.
    Vertical,
}

/// A straight, gap-free line of cells plus the ring of cells around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    coords: Vec<Coordinate>,
    buffer: Vec<Coordinate>,
    sunk: bool,
}

impl Vessel {
    /// Parse concatenated two-character labels, e.g. `"A1B1C1"` or `"d4"`.
    pub fn from_labels(labels: &str) -> Result<Self> {
        let chars: Vec<char> = labels.trim().chars().collect();
        let coords = chars
            .chunks(2)
            .map(|chunk| label_to_coord(&chunk.iter().collect::<String>()))
            .collect::<Result<Vec<_>>>()?;
        if coords.is_empty() {
            return Err(BoardError::InvalidCoordinates(labels.to_string()));
        }
        Self::from_coords(coords)
    }

    /// Build from coordinates listed in increasing order along one row or
    /// one column. Lists that are out of order or have gaps are rejected,
    /// never re-sorted.
    pub fn from_coords(coords: Vec<Coordinate>) -> Result<Self> {
        if coords.is_empty() || !is_straight_run(&coords) {
            let labels: String = coords.iter().map(Coordinate::label).collect();
            return Err(BoardError::InvalidCoordinates(labels));
        }
        let buffer = buffer_around(&coords);
        Ok(Self {
            coords,
            buffer,
            sunk: false,
        })
    }

    /// Extend `length` cells from `anchor`. Returns `None` if the line would
    /// leave the board.
    pub fn from_anchor(anchor: Coordinate, length: usize, orientation: Orientation) -> Option<Self> {
        let coords = (0..length as i8)
            .map(|n| match orientation {
                Orientation::Horizontal => anchor.offset(n, 0),
                Orientation::Vertical => anchor.offset(0, n),
            })
            .collect::<Option<Vec<_>>>()?;
        Self::from_coords(coords).ok()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Occupied cells, in the order given at construction.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Cells within one step (diagonals included) of the vessel, excluding
    /// its own cells.
    pub fn buffer(&self) -> &[Coordinate] {
        &self.buffer
    }

    /// `None` for single-cell vessels.
    pub fn orientation(&self) -> Option<Orientation> {
        match self.coords.as_slice() {
            [a, b, ..] if a.row() == b.row() => Some(Orientation::Horizontal),
            [_, _, ..] => Some(Orientation::Vertical),
            _ => None,
        }
    }

    pub fn class_name(&self) -> &'static str {
        ship_class(self.len())
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Same shape with no sunk state, for placing on a fresh board.
    pub(crate) fn afloat(mut self) -> Self {
        self.sunk = false;
        self
    }

    /// Returns `true` only on the transition to sunk.
    pub(crate) fn mark_sunk(&mut self) -> bool {
        !core::mem::replace(&mut self.sunk, true)
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coord in &self.coords {
            write!(f, "{}", coord)?;
        }
        Ok(())
    }
}

/// Parse a whitespace-separated fleet line such as `"A1B1C1 E1E2 A4B4 D4 F4 A6 E6"`.
pub fn parse_fleet(line: &str) -> Result<Vec<Vessel>> {
    line.split_whitespace().map(Vessel::from_labels).collect()
}

fn is_straight_run(coords: &[Coordinate]) -> bool {
    let first = coords[0];
    if coords.iter().all(|c| c.col() == first.col()) {
        coords.windows(2).all(|w| w[0].row() + 1 == w[1].row())
    } else if coords.iter().all(|c| c.row() == first.row()) {
        coords.windows(2).all(|w| w[0].col() + 1 == w[1].col())
    } else {
        false
    }
}

fn buffer_around(coords: &[Coordinate]) -> Vec<Coordinate> {
    let mut buffer = Vec::new();
    for coord in coords {
        for near in coord.neighborhood() {
            if !coords.contains(&near) && !buffer.contains(&near) {
                buffer.push(near);
            }
        }
    }
    buffer
}
