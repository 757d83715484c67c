//! Fixed board geometry, fleet composition and display glyphs.

/// Width and height of the square board.
pub const BOARD_SIZE: u8 = 6;
/// Number of cells on a board.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Column labels, left to right.
pub const COLUMN_LABELS: [char; BOARD_SIZE as usize] = ['A', 'B', 'C', 'D', 'E', 'F'];
/// Row labels, top to bottom.
pub const ROW_LABELS: [char; BOARD_SIZE as usize] = ['1', '2', '3', '4', '5', '6'];

pub const NUM_SHIPS: usize = 7;
/// Vessel lengths of the standard fleet, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments used in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = 'T';
pub const SHIP_GLYPH: char = '■';
pub const EMPTY_GLYPH: char = 'O';

/// Class name of a vessel of the given length, for console messages.
pub fn ship_class(length: usize) -> &'static str {
    match length {
        3 => "cruiser",
        2 => "destroyer",
        1 => "patrol boat",
        _ => "ship",
    }
}
