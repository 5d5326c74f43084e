use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Action, HistoryEntry, Percept};

pub const DEFAULT_INITIAL_WEIGHT: f64 = 1.0;

/// A learned route to a reward.
///
/// Read as: "starting from `states()[0]`, doing `moves()[0]` leads to
/// `states()[1]`, ... and the final move reaches the reward." Steps are kept
/// as `(percept, action)` pairs so the two sequences can never drift apart.
///
/// Equality compares the steps only; `weight` is mutable confidence, not identity.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan {
    steps: VecDeque<HistoryEntry>,
    pub weight: f64,
}

impl Plan {
    pub fn new() -> Self {
        Self::with_weight(DEFAULT_INITIAL_WEIGHT)
    }

    pub fn with_weight(weight: f64) -> Self {
        Self {
            steps: VecDeque::new(),
            weight,
        }
    }

    /// Build a plan from chronological steps (oldest first).
    pub fn from_steps(steps: impl IntoIterator<Item = HistoryEntry>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            weight: DEFAULT_INITIAL_WEIGHT,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Add an earlier step in front of the existing ones.
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.steps.push_front(entry);
    }

    /// Drop the earliest step. Used to undo a tentative [`Plan::prepend`].
    pub fn pop_first(&mut self) -> Option<HistoryEntry> {
        self.steps.pop_front()
    }

    pub fn step(&self, index: usize) -> Option<&HistoryEntry> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.steps.iter()
    }

    pub fn states(&self) -> impl ExactSizeIterator<Item = Percept> + '_ {
        self.steps.iter().map(|s| s.percept)
    }

    pub fn moves(&self) -> impl ExactSizeIterator<Item = Action> + '_ {
        self.steps.iter().map(|s| s.action)
    }

    /// The percept a plan is triggered by.
    pub fn leading_percept(&self) -> Option<Percept> {
        self.steps.front().map(|s| s.percept)
    }

    pub fn last_step(&self) -> Option<&HistoryEntry> {
        self.steps.back()
    }

    pub fn same_steps(&self, other: &Plan) -> bool {
        self.steps == other.steps
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Plan {
    fn eq(&self, other: &Self) -> bool {
        self.same_steps(other)
    }
}

impl Eq for Plan {}
