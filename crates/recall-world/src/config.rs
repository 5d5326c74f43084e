#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::REFERENCE_LAYOUT;
use crate::{Field, FieldError};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Layout rows, top first. See [`crate::Cell`] for the symbols.
    pub rows: Vec<String>,

    /// A consumed reward reappears after a random delay in `[0, respawn_max_ticks)`.
    /// Zero disables respawning.
    pub respawn_max_ticks: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: REFERENCE_LAYOUT.iter().map(|r| r.to_string()).collect(),
            respawn_max_ticks: 50,
        }
    }
}

impl WorldConfig {
    pub fn field(&self) -> Result<Field, FieldError> {
        Field::parse(self.rows.as_slice())
    }
}
