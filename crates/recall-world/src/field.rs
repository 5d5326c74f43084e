use recall_core::{Heading, Percept, Pose};
use thiserror::Error;

use crate::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field layout has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {0:?} (expected ' ', 'X', 'R' or 'B')")]
    UnknownSymbol(char),
}

/// The layout the agent was first demonstrated on.
pub const REFERENCE_LAYOUT: [&str; 10] = [
    "          ",
    " XXR      ",
    "       BRB",
    "        B ",
    "          ",
    "          ",
    "  R   B   ",
    "  X   RB  ",
    "  X   B   ",
    "          ",
];

/// A rectangular grid whose edges wrap around in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Field {
    /// Parse a layout given as rows of symbols, top row first.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, FieldError> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if width == 0 {
            return Err(FieldError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, text) in rows.iter().enumerate() {
            let found = text.as_ref().chars().count();
            if found != width {
                return Err(FieldError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for symbol in text.as_ref().chars() {
                cells.push(Cell::from_symbol(symbol)?);
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            cells,
        })
    }

    pub fn reference() -> Self {
        Self::parse(&REFERENCE_LAYOUT).expect("reference layout is valid")
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Wrap any coordinate onto the torus.
    pub fn wrap(&self, x: i32, y: i32) -> (i32, i32) {
        (x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    /// The cell `(dx, dy)` away from `(x, y)`, wrapped onto the torus.
    ///
    /// Sums in `i64`, so it is total over every `i32` coordinate.
    pub fn offset(&self, x: i32, y: i32, dx: i32, dy: i32) -> (i32, i32) {
        let step = |v: i32, d: i32, n: i32| {
            (i64::from(v) + i64::from(d)).rem_euclid(i64::from(n)) as i32
        };
        (step(x, dx, self.width), step(y, dy, self.height))
    }

    /// `pose` with its position wrapped onto the field.
    pub fn wrap_pose(&self, pose: Pose) -> Pose {
        let (x, y) = self.wrap(pose.x, pose.y);
        Pose { x, y, ..pose }
    }

    fn idx(&self, x: i32, y: i32) -> usize {
        let (x, y) = self.wrap(x, y);
        (y * self.width + x) as usize
    }

    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = cell;
    }

    /// The three cells in front of `pose`, listed left to right as seen by the agent.
    pub fn look(&self, pose: Pose) -> Percept {
        let Pose { x, y, heading } = pose;
        let offsets = match heading {
            Heading::East => [(1, -1), (1, 0), (1, 1)],
            Heading::South => [(1, 1), (0, 1), (-1, 1)],
            Heading::West => [(-1, 1), (-1, 0), (-1, -1)],
            Heading::North => [(-1, -1), (0, -1), (1, -1)],
        };
        let symbols = offsets.map(|(dx, dy)| {
            let (cx, cy) = self.offset(x, y, dx, dy);
            self.get(cx, cy).symbol()
        });
        Percept::from_symbols(symbols).expect("cell symbols are printable ASCII")
    }

    /// Positions of every reward currently on the field, row-major.
    pub fn rewards(&self) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Reward)
            .map(|(i, _)| (i as i32 % self.width, i as i32 / self.width))
            .collect()
    }

    /// Render back into layout rows.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|c| char::from(c.symbol())).collect())
            .collect()
    }
}
