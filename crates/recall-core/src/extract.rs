use crate::{AbortPolicy, EngineConfig, HistoryBuffer, InsertOutcome, Plan, PlanId, PlanStore};

/// How a reward-triggered extraction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// A plan one step longer than anything known for this reward was stored.
    Learned(PlanId),
    /// Every suffix of the history was already known.
    Exhausted,
    /// The turns since the last forward move added up to a reversal or a full circle.
    Backtrack,
    /// Too many consecutive empty percepts.
    EmptyRun,
    /// Aborted, but the partial candidate was new and got stored.
    Salvaged(PlanId),
}

impl Extraction {
    pub fn stored(self) -> Option<PlanId> {
        match self {
            Extraction::Learned(id) | Extraction::Salvaged(id) => Some(id),
            _ => None,
        }
    }

    pub fn aborted(self) -> bool {
        matches!(
            self,
            Extraction::Backtrack | Extraction::EmptyRun | Extraction::Salvaged(_)
        )
    }
}

/// Grow a plan backward in time from the reward and store the first suffix
/// the store has not seen yet.
///
/// `history` is read newest-first, so the candidate is built by prepending
/// and always ends with the step that reached the reward. The caller owns
/// reinforcing the active plan and clearing `history` afterwards.
pub fn extract_plan(
    history: &HistoryBuffer,
    store: &mut PlanStore,
    config: &EngineConfig,
) -> Extraction {
    let mut candidate = Plan::with_weight(config.initial_weight);
    let mut rot = 0i32;
    let mut empty_run = 0usize;

    for entry in history.iter() {
        if entry.action.is_turn() {
            rot += entry.action.rotation();
            if matches!(rot, 0 | 2 | -2) {
                return abort(Extraction::Backtrack, candidate, store, config);
            }
        } else {
            rot = 0;
        }

        if entry.percept.is_empty() {
            if empty_run + 1 >= config.empty_run_limit {
                return abort(Extraction::EmptyRun, candidate, store, config);
            }
            empty_run += 1;
            // Plans never start on an empty percept, so skip the insert attempt.
            candidate.prepend(*entry);
            continue;
        }
        empty_run = 0;

        candidate.prepend(*entry);
        if store.find(&candidate).is_none() {
            return Extraction::Learned(store.insert(candidate).id());
        }
    }

    Extraction::Exhausted
}

fn abort(
    reason: Extraction,
    candidate: Plan,
    store: &mut PlanStore,
    config: &EngineConfig,
) -> Extraction {
    if config.abort_policy == AbortPolicy::Discard || candidate.is_empty() {
        return reason;
    }
    match store.insert(candidate) {
        InsertOutcome::Added(id) => Extraction::Salvaged(id),
        InsertOutcome::Duplicate(_) => reason,
    }
}
