use recall_core::rng::{derive_seed, streams};
use recall_core::{
    Action, ActionOutcome, DeterministicRng, Percept, Pose, SplitMix64, WorldMut, WorldView,
};
use tracing::trace;

use crate::{Cell, Field, FieldError, WorldConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Respawn {
    x: i32,
    y: i32,
    remaining: u32,
}

/// A [`Field`] plus the bookkeeping that brings eaten rewards back.
#[derive(Debug, Clone)]
pub struct GridWorld {
    field: Field,
    respawn_max_ticks: u32,
    pending: Vec<Respawn>,
    rng: SplitMix64,
}

impl GridWorld {
    pub fn new(field: Field, respawn_max_ticks: u32, seed: u64) -> Self {
        Self {
            field,
            respawn_max_ticks,
            pending: Vec::new(),
            rng: SplitMix64::new(derive_seed(seed, streams::WORLD)),
        }
    }

    pub fn from_config(config: &WorldConfig, seed: u64) -> Result<Self, FieldError> {
        Ok(Self::new(config.field()?, config.respawn_max_ticks, seed))
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Rewards currently waiting to reappear.
    pub fn pending_respawns(&self) -> usize {
        self.pending.len()
    }

    fn consume_reward(&mut self, x: i32, y: i32) {
        self.field.set(x, y, Cell::Empty);
        if self.respawn_max_ticks == 0 {
            return;
        }
        let remaining = self.rng.next_below(self.respawn_max_ticks);
        trace!(x, y, remaining, "reward consumed");
        self.pending.push(Respawn { x, y, remaining });
    }
}

impl WorldView for GridWorld {
    fn perceive(&self, pose: Pose) -> Percept {
        self.field.look(pose)
    }
}

impl WorldMut for GridWorld {
    fn apply(&mut self, pose: Pose, action: Action) -> ActionOutcome {
        if action.is_turn() {
            return ActionOutcome {
                pose: pose.turned(action),
                rewarded: false,
            };
        }

        let (dx, dy) = pose.heading.delta();
        let (x, y) = self.field.offset(pose.x, pose.y, dx, dy);
        let cell = self.field.get(x, y);
        if cell.is_blocking() {
            return ActionOutcome {
                pose,
                rewarded: false,
            };
        }

        let rewarded = cell == Cell::Reward;
        if rewarded {
            self.consume_reward(x, y);
        }
        ActionOutcome {
            pose: Pose { x, y, ..pose },
            rewarded,
        }
    }

    fn advance(&mut self) {
        let field = &mut self.field;
        self.pending.retain_mut(|respawn| {
            respawn.remaining = respawn.remaining.saturating_sub(1);
            if respawn.remaining > 0 {
                return true;
            }
            field.set(respawn.x, respawn.y, Cell::Reward);
            trace!(x = respawn.x, y = respawn.y, "reward respawned");
            false
        });
    }
}
