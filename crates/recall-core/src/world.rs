use crate::{Action, ActionOutcome, Percept, Pose};

/// Read-only world access: what the agent can sense.
///
/// `perceive` must be pure and total over the whole (wrapping) coordinate
/// space; the engine relies on identical poses yielding identical percepts.
pub trait WorldView {
    fn perceive(&self, pose: Pose) -> Percept;
}

/// Write access: the world owns all movement and reward bookkeeping.
pub trait WorldMut: WorldView {
    /// Execute `action` from `pose` and report the new pose and whether a
    /// reward was consumed.
    fn apply(&mut self, pose: Pose, action: Action) -> ActionOutcome;

    /// Advance world-side timers by one tick. Called before perception.
    fn advance(&mut self) {}
}
