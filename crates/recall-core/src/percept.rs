use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Number of symbols in a percept: the three cells in front of the agent.
pub const PERCEPT_WIDTH: usize = 3;

/// Symbol for a cell with nothing in it.
pub const BLANK: u8 = b' ';

/// What the agent senses from one pose, as a fixed-width string of ASCII symbols.
///
/// Percepts are opaque to the engine: the only things it ever asks are
/// equality and whether every cell is blank.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percept([u8; PERCEPT_WIDTH]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerceptError {
    #[error("percept must be 3 symbols, got {0}")]
    Width(usize),

    #[error("percept symbol {0:?} is not printable ASCII")]
    Symbol(char),
}

impl Percept {
    pub const EMPTY: Percept = Percept([BLANK; PERCEPT_WIDTH]);

    pub fn from_symbols(symbols: [u8; PERCEPT_WIDTH]) -> Result<Self, PerceptError> {
        for &s in &symbols {
            if !(s == BLANK || s.is_ascii_graphic()) {
                return Err(PerceptError::Symbol(char::from(s)));
            }
        }
        Ok(Self(symbols))
    }

    pub fn symbols(&self) -> [u8; PERCEPT_WIDTH] {
        self.0
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        core::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// True when nothing at all is visible.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&s| s == BLANK)
    }
}

impl FromStr for Percept {
    type Err = PerceptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
            return Err(PerceptError::Symbol(c));
        }
        let bytes: [u8; PERCEPT_WIDTH] = s
            .as_bytes()
            .try_into()
            .map_err(|_| PerceptError::Width(s.len()))?;
        Percept::from_symbols(bytes)
    }
}

impl fmt::Display for Percept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Percept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Percept({:?})", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Percept {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Percept {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
