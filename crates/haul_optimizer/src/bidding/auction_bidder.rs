use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    bidding::bid::Bid,
    plan::vehicle_plan::{VehiclePlan, materialize_plans},
    problem::{
        fleet::Fleet,
        pickup_delivery_problem::PickupDeliveryProblem,
        task::Task,
        task_set::TaskSet,
        topology::{Cost, Topology},
    },
    solver::{
        local_search::{SearchOutcome, StochasticLocalSearch},
        search_params::SearchParams,
        solution::route_assignment::RouteAssignment,
        solver_error::SolverError,
    },
};

const BID_SEED_FACTOR: i64 = -9_019_554_669_489_983_951;

/// Markup applied on top of the marginal cost, per unit of task id.
const MARKUP_PER_TASK_ID: f64 = 0.05;

/// Bidding agent of one company.
///
/// Owns the tasks won so far together with the best assignment found for
/// them. That state only grows, when [`AuctionBidder::auction_result`]
/// reports a win.
pub struct AuctionBidder {
    agent_id: u32,
    topology: Arc<dyn Topology>,
    fleet: Arc<Fleet>,
    committed: TaskSet,
    best: Option<RouteAssignment>,
    best_cost: Cost,
    search: StochasticLocalSearch,
    bid_rng: SmallRng,
}

impl AuctionBidder {
    /// The bid RNG is seeded from `agent_id` and the home city of the first
    /// vehicle. Agent 0 and home city 0 both give the seed 0.
    pub fn new(
        agent_id: u32,
        topology: Arc<dyn Topology>,
        fleet: Arc<Fleet>,
        params: SearchParams,
    ) -> Self {
        let home_city = fleet
            .vehicles()
            .first()
            .map_or(0, |vehicle| vehicle.home_city().get());
        let seed = BID_SEED_FACTOR
            .wrapping_mul(home_city as i64)
            .wrapping_mul(i64::from(agent_id));

        AuctionBidder {
            agent_id,
            topology,
            fleet,
            committed: TaskSet::default(),
            best: None,
            best_cost: 0.0,
            search: StochasticLocalSearch::new(params),
            bid_rng: SmallRng::seed_from_u64(seed as u64),
        }
    }

    pub fn agent_id(&self) -> u32 {
        self.agent_id
    }

    pub fn committed_tasks(&self) -> &TaskSet {
        &self.committed
    }

    pub fn best_assignment(&self) -> Option<&RouteAssignment> {
        self.best.as_ref()
    }

    /// Cost of the best assignment of the committed tasks, 0 when none is
    /// committed.
    pub fn current_cost(&self) -> Cost {
        self.best_cost
    }

    /// Price asked for `task`, or [`Bid::Abstain`] when some vehicle of the
    /// fleet could not carry it.
    #[instrument(skip_all, level = "debug", fields(task = task.id()))]
    pub fn ask_price(&mut self, task: &Task) -> Result<Bid, SolverError> {
        if !self.fleet.all_can_carry(task.weight()) {
            debug!(weight = task.weight(), "Abstaining, a vehicle is too small");
            return Ok(Bid::Abstain);
        }

        let marginal_cost = self.marginal_cost(task)?;
        let ratio = 1.0 + self.bid_rng.random::<f64>() * MARKUP_PER_TASK_ID * f64::from(task.id());
        let price = (marginal_cost * ratio).round().max(0.0) as u64;

        debug!(marginal_cost, ratio, price, "Asking price");

        Ok(Bid::Price(price))
    }

    /// Cost of serving the committed tasks plus `task`, minus the cost of the
    /// committed tasks alone.
    pub fn marginal_cost(&mut self, task: &Task) -> Result<Cost, SolverError> {
        let outcome = self.optimize(self.committed.with_task(task.clone()))?;
        Ok(outcome.cost - self.best_cost)
    }

    /// Outcome of the auction for `task`. Winning commits the task and
    /// re-optimizes, losing leaves the agent untouched.
    pub fn auction_result(
        &mut self,
        task: &Task,
        winner: u32,
        bids: &[Option<u64>],
    ) -> Result<(), SolverError> {
        if winner != self.agent_id {
            debug!(task = task.id(), winner, ?bids, "Auction lost");
            return Ok(());
        }

        self.committed.push(task.clone());
        let outcome = self.optimize(self.committed.clone())?;

        debug!(
            task = task.id(),
            committed = self.committed.len(),
            cost = outcome.cost,
            "Auction won"
        );

        self.best_cost = outcome.cost;
        self.best = Some(outcome.assignment);

        Ok(())
    }

    /// Re-optimizes the committed tasks and turns the result into one plan per
    /// vehicle. The cached assignment and cost are left as they are.
    pub fn plan(&mut self) -> Result<Vec<VehiclePlan>, SolverError> {
        let outcome = self.optimize(self.committed.clone())?;
        Ok(materialize_plans(&outcome.assignment))
    }

    fn optimize(&mut self, tasks: TaskSet) -> Result<SearchOutcome, SolverError> {
        let problem = PickupDeliveryProblem::new(
            Arc::clone(&self.topology),
            Arc::clone(&self.fleet),
            tasks,
        );

        self.search.optimize(Arc::new(problem))
    }
}
