//! End-of-run summary.

use std::fmt::Write as _;

use recall_core::{EngineStats, HistoryEntry, Plan, PlanId, Simulation, SimulationState};
use serde::Serialize;

use crate::config::ReportConfig;

#[derive(Debug, Serialize)]
pub struct PlanSummary<'a> {
    pub id: PlanId,
    pub weight: f64,
    pub len: usize,
    pub steps: Vec<&'a HistoryEntry>,
}

impl<'a> PlanSummary<'a> {
    fn new(id: PlanId, plan: &'a Plan) -> Self {
        Self {
            id,
            weight: plan.weight,
            len: plan.len(),
            steps: plan.steps().collect(),
        }
    }

    /// One-line rendering, e.g. `plan#3 w=1.50 len=2 [" R "/right, "RR "/forward]`.
    pub fn line(&self) -> String {
        let mut out = format!("{} w={:.2} len={} [", self.id, self.weight, self.len);
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{:?}/{}", step.percept.as_str(), step.action);
        }
        out.push(']');
        out
    }
}

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub state: SimulationState,
    pub plans: usize,
    pub stats: EngineStats,
    pub best: Vec<PlanSummary<'a>>,
    pub longest: Vec<PlanSummary<'a>>,
}

impl<'a> RunReport<'a> {
    pub fn new(sim: &'a Simulation, sizes: &ReportConfig) -> Self {
        let store = sim.engine.store();
        Self {
            state: sim.state,
            plans: store.len(),
            stats: *sim.engine.stats(),
            best: store
                .top_by_weight(sizes.top_by_weight)
                .into_iter()
                .map(|(id, plan)| PlanSummary::new(id, plan))
                .collect(),
            longest: store
                .top_by_length(sizes.top_by_length)
                .into_iter()
                .map(|(id, plan)| PlanSummary::new(id, plan))
                .collect(),
        }
    }

    pub fn print(&self) {
        println!(
            "ticks: {}  score: {}  plans: {}",
            self.state.tick, self.state.score, self.plans
        );
        println!(
            "plan steps: {}  random steps: {}  surprises: {}  evictions: {}",
            self.stats.plan_steps, self.stats.random_steps, self.stats.surprises, self.stats.evictions
        );
        println!();
        println!("best score:");
        for plan in &self.best {
            println!("  {}", plan.line());
        }
        println!();
        println!("longest length:");
        for plan in &self.longest {
            println!("  {}", plan.line());
        }
    }
}
