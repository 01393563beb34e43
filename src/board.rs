use crate::{in_bounds, Coordinate, Tile, BOARD_LEN};
use itertools::Itertools;
use num_derive::FromPrimitive;
use std::fmt;
use thiserror::Error;

/// Describes the bonus printed on a [`Cell`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Premium {
    /// `0`. No bonus.
    None = 0,
    /// `1`. Doubles the letter placed on it.
    DoubleLetter = 1,
    /// `2`. Triples the letter placed on it.
    TripleLetter = 2,
    /// `3`. Doubles the word placed across it.
    DoubleWord = 3,
    /// `4`. Triples the word placed across it.
    TripleWord = 4,
}

impl Premium {
    /// The multiplier applied to the letter on a cell with this premium.
    #[inline]
    pub fn letter_multiplier(self) -> usize {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            Premium::None | Premium::DoubleWord | Premium::TripleWord => 1,
        }
    }

    /// The multiplier applied to a whole word crossing a cell with this premium.
    #[inline]
    pub fn word_multiplier(self) -> usize {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            Premium::None | Premium::DoubleLetter | Premium::TripleLetter => 1,
        }
    }

    /// The character shown for an empty cell with this premium when the board is rendered.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Premium::None => '.',
            Premium::DoubleLetter => '\'',
            Premium::TripleLetter => '"',
            Premium::DoubleWord => '-',
            Premium::TripleWord => '=',
        }
    }
}

/// The [premium](Premium) of every cell, as `Premium as u8` codes, row by row.
///
/// Double word bands run along both diagonals, triple words sit on the corners and the edge
/// midpoints, and the letter bonuses cluster around the anchor and the edges. The table maps
/// onto itself under every rotation and reflection of the board.
pub const PREMIUM_LAYOUT: [[u8; BOARD_LEN]; BOARD_LEN] = [
    [4, 0, 0, 0, 1, 0, 0, 0, 4, 0, 0, 0, 1, 0, 0, 0, 4],
    [0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 3, 0],
    [0, 0, 3, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 3, 0, 0],
    [0, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 3, 0, 0, 0],
    [1, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1],
    [0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0],
    [0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0],
    [0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0],
    [4, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 4],
    [0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0],
    [0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0],
    [0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1],
    [0, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 3, 0, 0, 0],
    [0, 0, 3, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 3, 0, 0],
    [0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 3, 0],
    [4, 0, 0, 0, 1, 0, 0, 0, 4, 0, 0, 0, 1, 0, 0, 0, 4],
];

/// One square of the [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    tile: Option<Tile>,
    premium: Premium,
}

impl Cell {
    /// The [tile](Tile) placed on the cell, if any.
    #[inline]
    pub fn tile(&self) -> Option<Tile> {
        self.tile
    }

    /// The letter placed on the cell, if any.
    #[inline]
    pub fn letter(&self) -> Option<char> {
        self.tile.and_then(|tile| tile.face())
    }

    /// The [premium](Premium) printed on the cell.
    #[inline]
    pub fn premium(&self) -> Premium {
        self.premium
    }

    /// Whether a [tile](Tile) has been placed on the cell.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }
}

/// Describes the reason why [`Board::place`] could not put a [tile](Tile) on a cell.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlaceError {
    /// Attempting to place outside the board.
    #[error("{coordinate:?} is outside the board")]
    OutOfBounds {
        /// The rejected [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to place a different letter on an occupied cell.
    #[error("{coordinate:?} already holds {placed}")]
    Occupied {
        /// The occupied [coordinate](Coordinate).
        coordinate: Coordinate,
        /// The [tile](Tile) already on the cell.
        placed: Tile,
    },
    /// Attempting to place a [blank](Tile::Blank) that has not been bound to a letter.
    #[error("blank tiles must be bound to a letter before they are placed")]
    UnboundBlank,
}

/// The grid of [cells](Cell) words are placed on, [BOARD_LEN] by [BOARD_LEN].
///
/// [Premiums](Premium) are fixed when the board is built. A cell goes from empty to holding
/// a [tile](Tile) at most once and never changes afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    cells: [[Cell; BOARD_LEN]; BOARD_LEN],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// # Returns
    ///
    /// An empty board with [PREMIUM_LAYOUT].
    pub fn new() -> Board {
        Board::with_layout(&PREMIUM_LAYOUT)
    }

    /// # Returns
    ///
    /// An empty board with `layout`, where any code not matching a [premium](Premium)
    /// becomes [Premium::None].
    pub fn with_layout(layout: &[[u8; BOARD_LEN]; BOARD_LEN]) -> Board {
        let mut cells = [[Cell {
            tile: None,
            premium: Premium::None,
        }; BOARD_LEN]; BOARD_LEN];
        for (row, codes) in cells.iter_mut().zip(layout) {
            for (cell, &code) in row.iter_mut().zip(codes) {
                cell.premium = num::FromPrimitive::from_u8(code).unwrap_or(Premium::None);
            }
        }
        Board { cells }
    }

    /// # Returns
    ///
    /// The [cell](Cell) at `coordinate`, or [None] if it is outside the board.
    #[inline]
    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        if !in_bounds(coordinate) {
            return None;
        }
        let (row, col) = coordinate;
        Some(&self.cells[row as usize][col as usize])
    }

    /// # Returns
    ///
    /// The letter placed at `coordinate`, or [None] if the cell is empty or outside the board.
    #[inline]
    pub fn letter(&self, coordinate: Coordinate) -> Option<char> {
        self.cell(coordinate).and_then(Cell::letter)
    }

    /// Puts `tile` on the cell at `coordinate`. Placing the same letter on a cell which
    /// already holds it leaves the cell untouched, so a bound blank keeps its `0` points.
    ///
    /// # Errors
    ///
    /// * [PlaceError::OutOfBounds] Attempting to place outside the board.
    /// * [PlaceError::Occupied] Attempting to place a different letter on an occupied cell.
    /// * [PlaceError::UnboundBlank] Attempting to place a [blank](Tile::Blank).
    pub fn place(&mut self, coordinate: Coordinate, tile: Tile) -> Result<(), PlaceError> {
        if !in_bounds(coordinate) {
            return Err(PlaceError::OutOfBounds { coordinate });
        }
        let Some(letter) = tile.face() else {
            return Err(PlaceError::UnboundBlank);
        };

        let (row, col) = coordinate;
        let cell = &mut self.cells[row as usize][col as usize];
        match cell.tile {
            None => {
                cell.tile = Some(tile);
                Ok(())
            }
            Some(placed) if placed.face() == Some(letter) => Ok(()),
            Some(placed) => Err(PlaceError::Occupied { coordinate, placed }),
        }
    }

    /// The number of [tiles](Tile) on the board.
    pub fn placed_len(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_occupied()).count()
    }

    /// Whether no [tile](Tile) has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.placed_len() == 0
    }

    /// # Returns
    ///
    /// A snapshot of the board for display, one line per row. Occupied cells show their
    /// [tile](Tile), empty cells show their [premium glyph](Premium::glyph).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.cells.iter().map(|row| {
            row.iter()
                .map(|cell| match cell.tile {
                    Some(tile) => tile.to_string(),
                    None => cell.premium.glyph().to_string(),
                })
                .join(" ")
        });
        write!(f, "{}", rows.format("\n"))
    }
}
