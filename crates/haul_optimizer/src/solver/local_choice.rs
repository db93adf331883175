use rand::Rng;

use crate::{problem::topology::Cost, solver::solution::route_assignment::RouteAssignment};

#[derive(Clone)]
pub struct ScoredAssignment {
    pub assignment: RouteAssignment,
    pub cost: Cost,
}

impl ScoredAssignment {
    pub fn new(assignment: RouteAssignment, cost: Cost) -> Self {
        ScoredAssignment { assignment, cost }
    }
}

/// Stochastic acceptance step of the search.
///
/// With probability `stay_probability` the current assignment is kept.
/// Otherwise one of the cheapest assignments among the current one and the
/// candidates is picked uniformly, so the cost never increases.
#[derive(Debug, Clone, Copy)]
pub struct LocalChoice {
    stay_probability: f64,
}

impl LocalChoice {
    pub fn new(stay_probability: f64) -> Self {
        LocalChoice { stay_probability }
    }

    pub fn stay_probability(&self) -> f64 {
        self.stay_probability
    }

    pub fn choose<R>(
        &self,
        current: ScoredAssignment,
        candidates: Vec<ScoredAssignment>,
        rng: &mut R,
    ) -> ScoredAssignment
    where
        R: Rng,
    {
        let best_cost = candidates
            .iter()
            .map(|candidate| candidate.cost)
            .fold(current.cost, f64::min);

        if rng.random::<f64>() < self.stay_probability {
            return current;
        }

        let mut tied = Vec::with_capacity(candidates.len() + 1);
        if current.cost == best_cost {
            tied.push(current);
        } else if !candidates.iter().any(|candidate| candidate.cost == best_cost) {
            // Only reachable with NaN costs
            return current;
        }
        tied.extend(
            candidates
                .into_iter()
                .filter(|candidate| candidate.cost == best_cost),
        );

        let index = rng.random_range(0..tied.len());
        tied.swap_remove(index)
    }
}
