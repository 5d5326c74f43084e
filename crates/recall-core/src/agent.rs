#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Action;

/// One of the four grid directions, in clockwise order.
///
/// The y axis grows downward, so `South` is `+y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heading {
    #[default]
    East,
    South,
    West,
    North,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];

    pub fn index(self) -> u8 {
        match self {
            Heading::East => 0,
            Heading::South => 1,
            Heading::West => 2,
            Heading::North => 3,
        }
    }

    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 4)]
    }

    pub fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Unit step `(dx, dy)` taken by a forward move.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
            Heading::North => (0, -1),
        }
    }
}

/// Where the agent stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl Pose {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Pose after a turn. Forward moves are left to the world, which owns
    /// wrapping and blocking, so they return `self` unchanged.
    pub fn turned(self, action: Action) -> Self {
        let heading = match action {
            Action::TurnLeft => self.heading.left(),
            Action::TurnRight => self.heading.right(),
            Action::MoveForward => self.heading,
        };
        Self { heading, ..self }
    }
}
