use std::sync::Arc;

use fxhash::FxHashSet;

use crate::{
    problem::{
        action::{Action, ActionIdx, ActionSpace},
        city::CityIdx,
        pickup_delivery_problem::PickupDeliveryProblem,
        task::{Task, TaskIdx},
        topology::{Cost, Distance},
        vehicle::VehicleIdx,
    },
    solver::solution::feasibility::{Infeasibility, check_feasibility},
};

/// Successor-array encoding of a routing solution.
///
/// Every action of the problem's [`ActionSpace`] has a slot in `successors`.
/// Following successors from the route head of a vehicle yields the chain of
/// pickups and deliveries served by that vehicle. `timestamps` and `owners` are
/// only defined for pickups and deliveries and are indexed by the same
/// [`ActionIdx`] (route heads sit past their end).
///
/// Values are never shared: cloning deep-copies the three arrays and only the
/// immutable problem is reference counted. Operators derive new assignments
/// from clones and never touch the one they were given.
#[derive(Clone)]
pub struct RouteAssignment {
    problem: Arc<PickupDeliveryProblem>,
    successors: Vec<Option<ActionIdx>>,
    timestamps: Vec<Option<usize>>,
    owners: Vec<Option<VehicleIdx>>,
}

impl RouteAssignment {
    /// Assignment where every vehicle has an empty chain.
    pub fn empty(problem: Arc<PickupDeliveryProblem>) -> Self {
        let space = problem.action_space();

        RouteAssignment {
            successors: vec![None; space.len()],
            timestamps: vec![None; space.num_task_actions()],
            owners: vec![None; space.num_task_actions()],
            problem,
        }
    }

    /// Builds an assignment from explicit chains, `chains[v]` being the ordered
    /// actions of vehicle `v`. Vehicles without an entry get an empty chain.
    pub fn from_chains(problem: Arc<PickupDeliveryProblem>, chains: &[Vec<ActionIdx>]) -> Self {
        let mut assignment = RouteAssignment::empty(problem);
        let space = assignment.action_space();

        for (vehicle, chain) in chains.iter().enumerate() {
            let vehicle = VehicleIdx::new(vehicle);
            let mut previous = space.head(vehicle);
            for &action in chain {
                assignment.set_successor(previous, Some(action));
                assignment.set_owner(action, vehicle);
                previous = action;
            }
            assignment.recompute_timestamps(vehicle);
        }

        assignment
    }

    pub fn problem(&self) -> &PickupDeliveryProblem {
        &self.problem
    }

    pub fn problem_arc(&self) -> &Arc<PickupDeliveryProblem> {
        &self.problem
    }

    #[inline]
    pub fn action_space(&self) -> ActionSpace {
        self.problem.action_space()
    }

    #[inline]
    pub fn successor(&self, action: ActionIdx) -> Option<ActionIdx> {
        self.successors[action]
    }

    /// Ordinal position of a pickup or delivery within its chain, starting at 0.
    #[inline]
    pub fn timestamp(&self, action: ActionIdx) -> Option<usize> {
        self.timestamps.get(action.get()).copied().flatten()
    }

    #[inline]
    pub fn owner(&self, action: ActionIdx) -> Option<VehicleIdx> {
        self.owners.get(action.get()).copied().flatten()
    }

    pub fn action(&self, action: ActionIdx) -> Action {
        self.action_space().action(action)
    }

    pub fn is_pickup(&self, action: ActionIdx) -> bool {
        self.action(action).is_pickup()
    }

    pub fn is_delivery(&self, action: ActionIdx) -> bool {
        self.action(action).is_delivery()
    }

    pub fn task_of(&self, action: ActionIdx) -> Option<TaskIdx> {
        self.action(action).task()
    }

    pub fn task(&self, action: ActionIdx) -> Option<&Task> {
        self.task_of(action).map(|task| self.problem.task(task))
    }

    pub fn city_of(&self, action: ActionIdx) -> CityIdx {
        self.problem.city_of(action)
    }

    pub fn first_action(&self, vehicle: VehicleIdx) -> Option<ActionIdx> {
        self.successor(self.action_space().head(vehicle))
    }

    pub fn is_empty_chain(&self, vehicle: VehicleIdx) -> bool {
        self.first_action(vehicle).is_none()
    }

    /// Pickups and deliveries served by `vehicle`, in visiting order.
    pub fn chain(&self, vehicle: VehicleIdx) -> Chain<'_> {
        Chain {
            assignment: self,
            next: self.first_action(vehicle),
            remaining: self.action_space().num_task_actions(),
        }
    }

    pub fn chain_len(&self, vehicle: VehicleIdx) -> usize {
        self.chain(vehicle).count()
    }

    /// The action visited right before `action` in the chain of `vehicle`,
    /// which is the route head for the first action.
    pub fn predecessor(&self, vehicle: VehicleIdx, action: ActionIdx) -> Option<ActionIdx> {
        let mut previous = self.action_space().head(vehicle);
        for current in self.chain(vehicle) {
            if current == action {
                return Some(previous);
            }
            previous = current;
        }

        None
    }

    pub fn num_vehicles(&self) -> usize {
        self.action_space().num_vehicles()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = VehicleIdx> + use<> {
        (0..self.num_vehicles()).map(VehicleIdx::new)
    }

    /// Sum over every task of the legs leaving its pickup and its delivery,
    /// priced at the rate of the vehicle owning the pickup.
    ///
    /// The leg from a route head to the first action of its chain is not part
    /// of this cost, see [`RouteAssignment::route_cost`] for the variant that
    /// charges it.
    pub fn cost(&self) -> Cost {
        let space = self.action_space();

        self.problem
            .tasks()
            .iter_idx()
            .map(|(task, _)| {
                let pickup = space.pickup(task);
                let delivery = space.delivery(task);

                match self.owner(pickup) {
                    Some(vehicle) => {
                        let rate = self.problem.vehicle(vehicle).cost_per_km();
                        (self.outgoing_distance(pickup) + self.outgoing_distance(delivery)) * rate
                    }
                    None => 0.0,
                }
            })
            .sum()
    }

    /// [`RouteAssignment::cost`] plus, for every non-empty chain, the leg from
    /// the vehicle's home city to its first action.
    pub fn route_cost(&self) -> Cost {
        let space = self.action_space();
        let approach: Cost = self
            .vehicles()
            .map(|vehicle| {
                let rate = self.problem.vehicle(vehicle).cost_per_km();
                self.outgoing_distance(space.head(vehicle)) * rate
            })
            .sum();

        self.cost() + approach
    }

    /// Distance from an action to its successor, zero at the end of a chain.
    fn outgoing_distance(&self, action: ActionIdx) -> Distance {
        match self.successor(action) {
            Some(next) => self
                .problem
                .distance(self.city_of(action), self.city_of(next)),
            None => 0.0,
        }
    }

    pub fn check_feasibility(&self) -> Result<(), Infeasibility> {
        check_feasibility(self)
    }

    pub fn is_feasible(&self) -> bool {
        self.check_feasibility().is_ok()
    }

    /// Whether the successor links form exactly one chain per vehicle that
    /// together visit every pickup and delivery once, with owners and
    /// timestamps matching the chain each action sits in.
    pub fn covers_all_actions(&self) -> bool {
        let space = self.action_space();
        let mut visited = FxHashSet::default();

        for vehicle in self.vehicles() {
            let mut position = 0;
            let mut current = self.first_action(vehicle);

            while let Some(action) = current {
                if !space.is_task_action(action)
                    || !visited.insert(action)
                    || self.owner(action) != Some(vehicle)
                    || self.timestamp(action) != Some(position)
                {
                    return false;
                }

                position += 1;
                current = self.successor(action);
            }
        }

        visited.len() == space.num_task_actions()
    }

    #[inline]
    pub(crate) fn set_successor(&mut self, action: ActionIdx, next: Option<ActionIdx>) {
        self.successors[action] = next;
    }

    #[inline]
    pub(crate) fn set_owner(&mut self, action: ActionIdx, vehicle: VehicleIdx) {
        self.owners[action] = Some(vehicle);
    }

    /// Removes `action` from the chain of `vehicle`, linking its predecessor
    /// to its successor. Returns `false` when the action is not in that chain.
    pub(crate) fn unlink(&mut self, vehicle: VehicleIdx, action: ActionIdx) -> bool {
        match self.predecessor(vehicle, action) {
            Some(previous) => {
                let next = self.successor(action);
                self.set_successor(previous, next);
                self.set_successor(action, None);
                true
            }
            None => false,
        }
    }

    /// Renumbers the chain of `vehicle` 0, 1, 2, ... in visiting order.
    pub(crate) fn recompute_timestamps(&mut self, vehicle: VehicleIdx) {
        let chain: Vec<ActionIdx> = self.chain(vehicle).collect();
        for (position, action) in chain.into_iter().enumerate() {
            self.timestamps[action] = Some(position);
        }
    }
}

impl std::fmt::Debug for RouteAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_map();
        for vehicle in self.vehicles() {
            let chain: Vec<String> = self
                .chain(vehicle)
                .map(|action| self.action(action).to_string())
                .collect();
            list.entry(&vehicle.get(), &chain);
        }
        list.finish()
    }
}

/// Iterator over the chain of one vehicle. Stops after visiting as many
/// actions as exist, so a corrupted successor cycle cannot loop forever.
pub struct Chain<'a> {
    assignment: &'a RouteAssignment,
    next: Option<ActionIdx>,
    remaining: usize,
}

impl Iterator for Chain<'_> {
    type Item = ActionIdx;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.next?;
        self.remaining -= 1;
        self.next = self.assignment.successor(current);
        Some(current)
    }
}
