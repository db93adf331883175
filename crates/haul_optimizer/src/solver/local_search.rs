use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    problem::{pickup_delivery_problem::PickupDeliveryProblem, topology::Cost},
    solver::{
        construction::initial_assignment::initial_assignment,
        local_choice::{LocalChoice, ScoredAssignment},
        neighborhood::NeighborhoodGenerator,
        search_params::{SearchParams, Termination},
        solution::route_assignment::RouteAssignment,
        solver_error::SolverError,
    },
    timer_debug,
};

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub assignment: RouteAssignment,
    pub cost: Cost,
    pub iterations: usize,
    pub elapsed: SignedDuration,
}

/// Stochastic hill climbing over [`RouteAssignment`]s.
///
/// Each iteration builds the feasible neighbours of the current assignment and
/// hands them to [`LocalChoice`]. Termination is checked after the iteration,
/// so at least one iteration runs whenever there is a task to route.
///
/// The random number generator is created once from the seed and carries over
/// from one search to the next.
pub struct StochasticLocalSearch {
    params: SearchParams,
    rng: SmallRng,
    neighborhood: NeighborhoodGenerator,
    local_choice: LocalChoice,
}

impl StochasticLocalSearch {
    pub fn new(params: SearchParams) -> Self {
        StochasticLocalSearch {
            rng: SmallRng::seed_from_u64(params.seed),
            neighborhood: NeighborhoodGenerator,
            local_choice: LocalChoice::new(params.stay_probability),
            params,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Builds the initial assignment for `problem` and improves it.
    pub fn optimize(
        &mut self,
        problem: Arc<PickupDeliveryProblem>,
    ) -> Result<SearchOutcome, SolverError> {
        let initial = timer_debug!("Initial assignment", initial_assignment(problem))?;
        Ok(self.run(initial))
    }

    pub fn run(&mut self, initial: RouteAssignment) -> SearchOutcome {
        self.run_with_observer(initial, |_, _, _| {})
    }

    /// Same as [`StochasticLocalSearch::run`], calling `observer` with the
    /// iteration number, the accepted assignment and its cost after every
    /// iteration.
    #[instrument(skip_all, level = "debug")]
    pub fn run_with_observer<F>(&mut self, initial: RouteAssignment, mut observer: F) -> SearchOutcome
    where
        F: FnMut(usize, &RouteAssignment, Cost),
    {
        let start = Timestamp::now();
        let cost_model = self.params.cost_model;

        let initial_cost = cost_model.evaluate(&initial);
        let mut current = ScoredAssignment::new(initial, initial_cost);
        let mut best = self.params.keep_best_solution.then(|| current.clone());
        let mut iterations = 0;

        debug!(
            cost = initial_cost,
            tasks = current.assignment.action_space().num_tasks(),
            %cost_model,
            "Starting local search"
        );

        if current.assignment.action_space().num_tasks() > 0 {
            loop {
                let candidates = self
                    .neighborhood
                    .candidates(&current.assignment, &mut self.rng)
                    .into_iter()
                    .map(|candidate| {
                        let cost = cost_model.evaluate(&candidate);
                        ScoredAssignment::new(candidate, cost)
                    })
                    .collect();

                current = self.local_choice.choose(current, candidates, &mut self.rng);
                iterations += 1;

                observer(iterations, &current.assignment, current.cost);

                if let Some(best) = best.as_mut()
                    && current.cost < best.cost
                {
                    *best = current.clone();
                }

                if self.should_terminate(start, iterations) {
                    break;
                }
            }
        }

        let result = best.unwrap_or(current);
        let elapsed = Timestamp::now().duration_since(start);

        debug!(
            cost = result.cost,
            iterations,
            ?elapsed,
            "Local search done"
        );

        SearchOutcome {
            assignment: result.assignment,
            cost: result.cost,
            iterations,
            elapsed,
        }
    }

    fn should_terminate(&self, start: Timestamp, iterations: usize) -> bool {
        match self.params.termination {
            Termination::Iterations(max_iterations) => iterations >= max_iterations,
            Termination::Duration(max_duration) => {
                Timestamp::now().duration_since(start) > max_duration
            }
        }
    }
}
