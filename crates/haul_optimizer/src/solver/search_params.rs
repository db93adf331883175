use jiff::SignedDuration;

use crate::solver::solution::cost_model::CostModel;

/// When the search stops. The deadline is polled between iterations, so one
/// iteration always runs to completion.
#[derive(Clone, Debug, PartialEq)]
pub enum Termination {
    Duration(SignedDuration),
    Iterations(usize),
}

#[derive(Clone, Debug)]
pub struct SearchParams {
    pub termination: Termination,

    /// Probability of keeping the current assignment instead of moving to one
    /// of the best candidates.
    pub stay_probability: f64,

    pub seed: u64,
    pub cost_model: CostModel,

    /// Return the cheapest assignment seen during the search rather than the
    /// one the walk ended on.
    pub keep_best_solution: bool,
}

impl SearchParams {
    pub const DEFAULT_SEED: u64 = 8;
    pub const DEFAULT_STAY_PROBABILITY: f64 = 0.4;
    pub const DEFAULT_BUDGET: SignedDuration = SignedDuration::from_millis(2000);

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            termination: Termination::Duration(Self::DEFAULT_BUDGET),
            stay_probability: Self::DEFAULT_STAY_PROBABILITY,
            seed: Self::DEFAULT_SEED,
            cost_model: CostModel::TaskEdges,
            keep_best_solution: false,
        }
    }
}
