use clap::Args;
use haul_optimizer::solver::{
    search_params::{SearchParams, Termination},
    solution::cost_model::CostModel,
};

use crate::parsers;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Time given to every local search (e.g. "2s", "500ms", "PT1S")
    #[arg(
        short,
        long,
        env = "HAUL_SEARCH_BUDGET",
        value_parser = parsers::parse_duration,
        default_value = "2s"
    )]
    budget: jiff::SignedDuration,

    /// Stop every local search after this many iterations, overrides the
    /// time budget
    #[arg(short, long, env = "HAUL_SEARCH_ITERATIONS")]
    iterations: Option<usize>,

    #[arg(long, env = "HAUL_SEARCH_SEED", default_value_t = SearchParams::DEFAULT_SEED)]
    seed: u64,

    /// Probability of keeping the current assignment at each iteration
    #[arg(
        long,
        env = "HAUL_STAY_PROBABILITY",
        default_value_t = SearchParams::DEFAULT_STAY_PROBABILITY
    )]
    stay_probability: f64,

    /// Also charge the leg from each vehicle's home city to its first pickup
    #[arg(long, env = "HAUL_FULL_ROUTE")]
    full_route: bool,

    /// Return the cheapest assignment seen instead of the last one
    #[arg(long, env = "HAUL_KEEP_BEST")]
    keep_best: bool,
}

impl SearchArgs {
    pub fn to_params(&self) -> SearchParams {
        let termination = match self.iterations {
            Some(iterations) => Termination::Iterations(iterations),
            None => Termination::Duration(self.budget),
        };

        SearchParams {
            termination,
            stay_probability: self.stay_probability,
            seed: self.seed,
            cost_model: if self.full_route {
                CostModel::FullRoute
            } else {
                CostModel::TaskEdges
            },
            keep_best_solution: self.keep_best,
        }
    }
}
