//! Text-anchoring grid: nine named cells in a 3×3 layout.
//!
//! Cells are addressed row-major (`row * 3 + col`) over a fixed arena, so
//! navigation is pure index math independent of any input binding.
//!
//! # Example
//!
//! ```rust
//! use cardwire::align::{Cell, Direction};
//!
//! let cell = Cell::default();
//! assert_eq!(cell, Cell::MiddleMiddle);
//! assert_eq!(cell.step(Direction::Up), Cell::TopMiddle);
//! // Clamped at the edge, never wraps.
//! assert_eq!(Cell::TopMiddle.step(Direction::Up), Cell::TopMiddle);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of nine positions in the 3×3 anchoring grid.
///
/// Wire tokens are two letters, row then column: `tl`, `tm`, `tr`, `ml`,
/// `mm`, `mr`, `bl`, `bm`, `br`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tm")]
    TopMiddle,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "ml")]
    MiddleLeft,
    #[default]
    #[serde(rename = "mm")]
    MiddleMiddle,
    #[serde(rename = "mr")]
    MiddleRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "bm")]
    BottomMiddle,
    #[serde(rename = "br")]
    BottomRight,
}

/// All cells in row-major order; `CELLS[cell.index()] == cell`.
pub const CELLS: [Cell; 9] = [
    Cell::TopLeft,
    Cell::TopMiddle,
    Cell::TopRight,
    Cell::MiddleLeft,
    Cell::MiddleMiddle,
    Cell::MiddleRight,
    Cell::BottomLeft,
    Cell::BottomMiddle,
    Cell::BottomRight,
];

/// A navigation direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Cell {
    /// Flat row-major index, 0..=8.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row 0..=2.
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Column 0..=2.
    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % 3
    }

    /// Cell at a flat index, if in bounds.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        CELLS.get(index).copied()
    }

    /// The two-letter wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopMiddle => "tm",
            Self::TopRight => "tr",
            Self::MiddleLeft => "ml",
            Self::MiddleMiddle => "mm",
            Self::MiddleRight => "mr",
            Self::BottomLeft => "bl",
            Self::BottomMiddle => "bm",
            Self::BottomRight => "br",
        }
    }

    /// Parse a wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        CELLS.into_iter().find(|c| c.token() == token)
    }

    /// Move one cell in `direction`, clamped to the grid. Stepping off an
    /// edge stays put; opposite steps are inverses only away from edges.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (mut row, mut col) = (self.row(), self.col());
        match direction {
            Direction::Up => row = row.saturating_sub(1),
            Direction::Down => row = (row + 1).min(2),
            Direction::Left => col = col.saturating_sub(1),
            Direction::Right => col = (col + 1).min(2),
        }
        CELLS[row * 3 + col]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
