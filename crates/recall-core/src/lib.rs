//! Deterministic reward-driven plan learning.
//!
//! An agent remembers its recent (percept, action) pairs, turns the ones that
//! led to a reward into plans, replays plans when it recognises their opening
//! percept, and loses confidence in plans that stop matching reality.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod config;
pub mod engine;
pub mod extract;
pub mod history;
pub mod percept;
pub mod plan;
pub mod rng;
pub mod select;
pub mod sim;
pub mod store;
pub mod world;

pub use action::{Action, ActionError, ActionOutcome};
pub use agent::{Heading, Pose};
pub use config::{AbortPolicy, ConfigError, EngineConfig};
pub use engine::{ActivePlan, EngineState, EngineStats, PlanEngine};
pub use extract::{extract_plan, Extraction};
pub use history::{HistoryBuffer, HistoryEntry};
pub use percept::{Percept, PerceptError};
pub use plan::Plan;
pub use rng::{DeterministicRng, SplitMix64};
pub use select::select_weighted;
pub use sim::{Simulation, SimulationState, StepReport};
pub use store::{Demotion, InsertOutcome, PlanId, PlanStore, StoreError};
pub use world::{WorldMut, WorldView};
