use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Pose;

/// The closed set of things the agent can do in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    TurnLeft,
    TurnRight,
    MoveForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action code {0} (expected 0, 1 or 2)")]
pub struct ActionError(pub u8);

impl Action {
    pub const ALL: [Action; 3] = [Action::TurnLeft, Action::TurnRight, Action::MoveForward];

    pub fn code(self) -> u8 {
        match self {
            Action::TurnLeft => 0,
            Action::TurnRight => 1,
            Action::MoveForward => 2,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, ActionError> {
        match code {
            0 => Ok(Action::TurnLeft),
            1 => Ok(Action::TurnRight),
            2 => Ok(Action::MoveForward),
            other => Err(ActionError(other)),
        }
    }

    pub fn is_turn(self) -> bool {
        !matches!(self, Action::MoveForward)
    }

    /// Net rotation contributed by this action, in quarter turns (left is negative).
    pub fn rotation(self) -> i32 {
        match self {
            Action::TurnLeft => -1,
            Action::TurnRight => 1,
            Action::MoveForward => 0,
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = ActionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Action::from_code(value)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::TurnLeft => "left",
            Action::TurnRight => "right",
            Action::MoveForward => "forward",
        };
        f.write_str(name)
    }
}

/// What the world reports back after applying an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub pose: Pose,
    pub rewarded: bool,
}
