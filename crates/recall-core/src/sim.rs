#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::extract::Extraction;
use crate::{Action, ConfigError, EngineConfig, Percept, PlanEngine, Pose, WorldMut};

/// Everything about the agent that changes from tick to tick outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationState {
    pub pose: Pose,
    pub score: u64,
    pub tick: u64,
}

impl SimulationState {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            score: 0,
            tick: 0,
        }
    }
}

/// What happened during one [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub tick: u64,
    /// Pose the decision was made from.
    pub from: Pose,
    pub percept: Percept,
    pub action: Action,
    pub rewarded: bool,
    /// Present only when the step consumed a reward.
    pub extraction: Option<Extraction>,
}

/// Single-agent driver: owns the agent state and its engine, borrows the world per step.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: SimulationState,
    pub engine: PlanEngine,
}

impl Simulation {
    pub fn new(start: Pose, config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: SimulationState::new(start),
            engine: PlanEngine::new(config)?,
        })
    }

    /// One full advance → perceive → think → act → (reward) cycle.
    pub fn step<W: WorldMut>(&mut self, world: &mut W) -> StepReport {
        world.advance();

        let from = self.state.pose;
        let percept = world.perceive(from);
        let action = self.engine.think(percept);
        let outcome = world.apply(from, action);
        self.state.pose = outcome.pose;

        let extraction = if outcome.rewarded {
            self.state.score += 1;
            Some(self.engine.on_reward())
        } else {
            None
        };

        let report = StepReport {
            tick: self.state.tick,
            from,
            percept,
            action,
            rewarded: outcome.rewarded,
            extraction,
        };
        self.state.tick += 1;
        report
    }

    /// Step until `ticks` steps have run or `stop` returns true for a report.
    ///
    /// Returns the number of steps taken.
    pub fn run_until<W, F>(&mut self, world: &mut W, ticks: u64, mut stop: F) -> u64
    where
        W: WorldMut,
        F: FnMut(&StepReport) -> bool,
    {
        for taken in 1..=ticks {
            let report = self.step(world);
            if stop(&report) {
                return taken;
            }
        }
        ticks
    }
}
