use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Action, Percept};

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// One remembered tick: what was seen and what was done about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    pub percept: Percept,
    pub action: Action,
}

impl HistoryEntry {
    pub fn new(percept: Percept, action: Action) -> Self {
        Self { percept, action }
    }
}

/// Short-term memory of the most recent ticks, most-recent-first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be > 0");
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remember a tick; forgets the oldest entry once full.
    pub fn record(&mut self, percept: Percept, action: Action) {
        self.entries.push_front(HistoryEntry::new(percept, action));
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
        assert!(
            self.entries.len() <= self.capacity,
            "history length {} exceeds capacity {}",
            self.entries.len(),
            self.capacity
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The most recent entry.
    pub fn front(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
