//! Engine tuning knobs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::plan::DEFAULT_INITIAL_WEIGHT;
use crate::store::is_live_weight;

/// What plan extraction does when it runs into a backtrack or a run of empty percepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AbortPolicy {
    /// Stop without committing anything further.
    #[default]
    Discard,
    /// Offer the candidate built before the offending step to the store, then stop.
    Salvage,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Ticks of (percept, action) memory kept for plan extraction.
    pub history_capacity: usize,

    /// Weight of a freshly learned plan.
    pub initial_weight: f64,

    /// Added to the active plan's weight when it ends in a reward.
    pub reward_bonus: f64,

    /// Subtracted from the active plan's weight on every surprise.
    pub surprise_penalty: f64,

    /// Consecutive empty percepts that stop plan extraction.
    pub empty_run_limit: usize,

    pub abort_policy: AbortPolicy,

    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("history_capacity must be at least 1")]
    ZeroHistory,

    #[error("initial_weight must be finite and above 1e-9, got {0}")]
    InitialWeight(f64),

    #[error("reward_bonus must be non-negative and finite, got {0}")]
    RewardBonus(f64),

    #[error("surprise_penalty must be positive and finite, got {0}")]
    SurprisePenalty(f64),

    #[error("empty_run_limit must be at least 1")]
    ZeroEmptyRun,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            initial_weight: DEFAULT_INITIAL_WEIGHT,
            reward_bonus: 0.5,
            surprise_penalty: 0.1,
            empty_run_limit: 2,
            abort_policy: AbortPolicy::Discard,
            seed: 0,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_abort_policy(mut self, policy: AbortPolicy) -> Self {
        self.abort_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistory);
        }
        if !is_live_weight(self.initial_weight) {
            return Err(ConfigError::InitialWeight(self.initial_weight));
        }
        if !(self.reward_bonus.is_finite() && self.reward_bonus >= 0.0) {
            return Err(ConfigError::RewardBonus(self.reward_bonus));
        }
        if !(self.surprise_penalty.is_finite() && self.surprise_penalty > 0.0) {
            return Err(ConfigError::SurprisePenalty(self.surprise_penalty));
        }
        if self.empty_run_limit == 0 {
            return Err(ConfigError::ZeroEmptyRun);
        }
        Ok(())
    }
}
