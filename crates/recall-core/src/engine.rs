#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, trace};

use crate::extract::{extract_plan, Extraction};
use crate::rng::{derive_seed, streams};
use crate::select::select_weighted;
use crate::store::{Demotion, InsertOutcome, StoreError};
use crate::{
    Action, ConfigError, DeterministicRng, EngineConfig, HistoryBuffer, Percept, Plan, PlanId,
    PlanStore, SplitMix64,
};

/// The plan currently being replayed and how far into it the agent is.
///
/// `cursor` is the index of the step whose percept is expected next; it
/// equals the plan length once the final move has been taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePlan {
    pub id: PlanId,
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No active plan; acting on store lookups or at random.
    Wandering,
    Following(ActivePlan),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EngineStats {
    pub thoughts: u64,
    pub plan_steps: u64,
    pub random_steps: u64,
    pub rewards: u64,
    pub plans_learned: u64,
    pub aborted_extractions: u64,
    pub surprises: u64,
    pub evictions: u64,
}

/// Reactive decision maker: replays learned plans, learns new ones on reward.
///
/// Owns the history buffer and the plan store outright. The active plan is
/// only an id into the store, so evicting a plan can never leave a dangling
/// reference; the id is cleared in the same call that evicts.
#[derive(Debug, Clone)]
pub struct PlanEngine {
    config: EngineConfig,
    history: HistoryBuffer,
    store: PlanStore,
    active: Option<ActivePlan>,
    rng: SplitMix64,
    stats: EngineStats,
}

impl PlanEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            history: HistoryBuffer::new(config.history_capacity),
            store: PlanStore::new(),
            active: None,
            rng: SplitMix64::new(derive_seed(config.seed, streams::ENGINE)),
            stats: EngineStats::default(),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    pub fn active(&self) -> Option<ActivePlan> {
        self.active
    }

    pub fn state(&self) -> EngineState {
        match self.active {
            Some(active) => EngineState::Following(active),
            None => EngineState::Wandering,
        }
    }

    pub fn is_following(&self) -> bool {
        self.active.is_some()
    }

    /// Put a known plan straight into the store, e.g. when restoring a session.
    ///
    /// Plans that could never be selected (no steps, weight collapsed or not
    /// finite) are refused here rather than tripping selection later.
    pub fn learn(&mut self, plan: Plan) -> Result<InsertOutcome, StoreError> {
        self.store.try_insert(plan)
    }

    /// Decide this tick's action from what is currently perceived.
    pub fn think(&mut self, percept: Percept) -> Action {
        self.stats.thoughts += 1;

        let planned = match self.follow(percept) {
            Some(action) => Some(action),
            None => self.adopt_plan(percept),
        };

        let action = match planned {
            Some(action) => {
                self.stats.plan_steps += 1;
                action
            }
            None => {
                self.stats.random_steps += 1;
                Action::ALL[self.rng.next_below(Action::ALL.len() as u32) as usize]
            }
        };

        trace!(%percept, %action, following = self.active.is_some(), "think");
        self.history.record(percept, action);
        action
    }

    /// Called right after a move consumed a reward, before the next `think`.
    pub fn on_reward(&mut self) -> Extraction {
        self.stats.rewards += 1;

        if let Some(active) = self.active.take() {
            if let Some(weight) = self.store.reinforce(active.id, self.config.reward_bonus) {
                debug!(plan = %active.id, weight, "plan reinforced");
            }
        }

        let outcome = extract_plan(&self.history, &mut self.store, &self.config);
        self.history.clear();

        if let Some(id) = outcome.stored() {
            self.stats.plans_learned += 1;
            let len = self.store.get(id).map_or(0, Plan::len);
            debug!(plan = %id, len, plans = self.store.len(), "plan learned");
        }
        if outcome.aborted() {
            self.stats.aborted_extractions += 1;
            debug!(?outcome, "plan extraction aborted");
        }
        outcome
    }

    /// Advance the active plan if `percept` is what it expects.
    fn follow(&mut self, percept: Percept) -> Option<Action> {
        let active = self.active?;
        let Some(plan) = self.store.get(active.id) else {
            self.active = None;
            return None;
        };
        assert!(
            active.cursor <= plan.len(),
            "cursor {} past end of {} (len {})",
            active.cursor,
            active.id,
            plan.len()
        );

        match plan.step(active.cursor).copied() {
            Some(step) if step.percept == percept => {
                self.active = Some(ActivePlan {
                    cursor: active.cursor + 1,
                    ..active
                });
                Some(step.action)
            }
            // A mismatch, or the plan ran out without paying off.
            _ => {
                self.surprise(active.id, percept);
                None
            }
        }
    }

    fn surprise(&mut self, id: PlanId, percept: Percept) {
        self.active = None;
        self.stats.surprises += 1;
        match self.store.demote(id, self.config.surprise_penalty) {
            Demotion::Demoted(weight) => debug!(plan = %id, %percept, weight, "surprised"),
            Demotion::Evicted => {
                self.stats.evictions += 1;
                debug!(plan = %id, %percept, plans = self.store.len(), "plan evicted");
            }
            Demotion::Missing => {}
        }
    }

    /// Look for plans triggered by `percept` and start one of them.
    fn adopt_plan(&mut self, percept: Percept) -> Option<Action> {
        let candidates: Vec<(PlanId, f64)> = self
            .store
            .candidates(percept)
            .map(|(id, plan)| (id, plan.weight))
            .collect();
        let id = select_weighted(&candidates, &mut self.rng)?;
        let first = self.store.get(id)?.step(0)?.action;

        self.active = Some(ActivePlan { id, cursor: 1 });
        debug!(plan = %id, %percept, candidates = candidates.len(), "plan selected");
        Some(first)
    }
}
