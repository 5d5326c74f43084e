use core::fmt;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Percept, Plan};

/// Weights at or below this are treated as collapsed.
///
/// Repeated `-0.1` steps from `1.0` land a hair above zero in binary floating
/// point; the epsilon makes the tenth surprise the one that evicts.
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// True for weights a stored plan may carry.
pub fn is_live_weight(weight: f64) -> bool {
    weight.is_finite() && weight > WEIGHT_EPSILON
}

/// Why a plan was refused by [`PlanStore::try_insert`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StoreError {
    #[error("plan has no steps")]
    EmptyPlan,

    #[error("plan weight must be finite and above 1e-9, got {0}")]
    Weight(f64),
}

/// Stable handle to a plan in a [`PlanStore`].
///
/// Ids are handed out in increasing order and never reused, so a handle to an
/// evicted plan simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanId(pub u64);

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plan#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Added(PlanId),
    /// An equal plan was already stored; nothing changed.
    Duplicate(PlanId),
}

impl InsertOutcome {
    pub fn added(self) -> bool {
        matches!(self, InsertOutcome::Added(_))
    }

    pub fn id(self) -> PlanId {
        match self {
            InsertOutcome::Added(id) | InsertOutcome::Duplicate(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Demotion {
    /// The plan survives with the given weight.
    Demoted(f64),
    /// The plan's weight collapsed and it was removed.
    Evicted,
    /// No plan with that id.
    Missing,
}

/// All learned plans, unique by step sequence, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    plans: BTreeMap<PlanId, Plan>,
    next_id: u64,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn get(&self, id: PlanId) -> Option<&Plan> {
        self.plans.get(&id)
    }

    pub fn contains(&self, plan: &Plan) -> bool {
        self.find(plan).is_some()
    }

    pub fn find(&self, plan: &Plan) -> Option<PlanId> {
        self.plans
            .iter()
            .find(|(_, stored)| stored.same_steps(plan))
            .map(|(id, _)| *id)
    }

    /// Insert `plan` unless an equal one is already stored.
    ///
    /// Panics on an empty plan or a weight that [`is_live_weight`] rejects;
    /// use [`PlanStore::try_insert`] for plans from outside the engine.
    pub fn insert(&mut self, plan: Plan) -> InsertOutcome {
        assert!(!plan.is_empty(), "refusing to store an empty plan");
        assert!(
            is_live_weight(plan.weight),
            "refusing to store a plan with weight {}",
            plan.weight
        );
        self.insert_checked(plan)
    }

    /// Like [`PlanStore::insert`], but reports an unstorable plan instead of panicking.
    pub fn try_insert(&mut self, plan: Plan) -> Result<InsertOutcome, StoreError> {
        if plan.is_empty() {
            return Err(StoreError::EmptyPlan);
        }
        if !is_live_weight(plan.weight) {
            return Err(StoreError::Weight(plan.weight));
        }
        Ok(self.insert_checked(plan))
    }

    fn insert_checked(&mut self, plan: Plan) -> InsertOutcome {
        if let Some(existing) = self.find(&plan) {
            return InsertOutcome::Duplicate(existing);
        }
        let id = PlanId(self.next_id);
        self.next_id += 1;
        self.plans.insert(id, plan);
        InsertOutcome::Added(id)
    }

    pub fn remove(&mut self, id: PlanId) -> Option<Plan> {
        self.plans.remove(&id)
    }

    pub fn reinforce(&mut self, id: PlanId, amount: f64) -> Option<f64> {
        let plan = self.plans.get_mut(&id)?;
        plan.weight += amount;
        Some(plan.weight)
    }

    /// Lower a plan's weight, evicting it once the weight collapses.
    pub fn demote(&mut self, id: PlanId, amount: f64) -> Demotion {
        let Some(plan) = self.plans.get_mut(&id) else {
            return Demotion::Missing;
        };
        plan.weight -= amount;
        if plan.weight <= WEIGHT_EPSILON {
            self.plans.remove(&id);
            return Demotion::Evicted;
        }
        Demotion::Demoted(plan.weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlanId, &Plan)> {
        self.plans.iter().map(|(id, plan)| (*id, plan))
    }

    /// Plans triggered by `percept`, in store order.
    pub fn candidates(&self, percept: Percept) -> impl Iterator<Item = (PlanId, &Plan)> {
        self.iter()
            .filter(move |(_, plan)| plan.leading_percept() == Some(percept))
    }

    /// Up to `n` plans ordered by descending weight (store order breaks ties).
    pub fn top_by_weight(&self, n: usize) -> Vec<(PlanId, &Plan)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.weight.total_cmp(&a.1.weight));
        ranked.truncate(n);
        ranked
    }

    /// Up to `n` plans ordered by descending length (store order breaks ties).
    pub fn top_by_length(&self, n: usize) -> Vec<(PlanId, &Plan)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        ranked.truncate(n);
        ranked
    }
}
