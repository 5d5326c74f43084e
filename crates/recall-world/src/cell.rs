use core::fmt;

use crate::FieldError;

/// Contents of one grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Blocks forward movement.
    Wall,
    /// Consumed when entered.
    Reward,
    /// Passable scenery; only matters to perception.
    Marker,
}

impl Cell {
    pub fn symbol(self) -> u8 {
        match self {
            Cell::Empty => b' ',
            Cell::Wall => b'X',
            Cell::Reward => b'R',
            Cell::Marker => b'B',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self, FieldError> {
        match symbol {
            ' ' => Ok(Cell::Empty),
            'X' => Ok(Cell::Wall),
            'R' => Ok(Cell::Reward),
            'B' => Ok(Cell::Marker),
            other => Err(FieldError::UnknownSymbol(other)),
        }
    }

    pub fn is_blocking(self) -> bool {
        self == Cell::Wall
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.symbol()))
    }
}
