use std::sync::Arc;

use tracing::debug;

use crate::{
    problem::pickup_delivery_problem::PickupDeliveryProblem,
    solver::{solution::route_assignment::RouteAssignment, solver_error::SolverError},
};

/// Chains every task on the vehicle with the largest capacity, in task-set
/// order, each pickup directly followed by its delivery. The other vehicles
/// start empty.
///
/// Since at most one task is on board at any time, the result is feasible as
/// soon as the heaviest task fits the largest vehicle.
pub fn initial_assignment(
    problem: Arc<PickupDeliveryProblem>,
) -> Result<RouteAssignment, SolverError> {
    if problem.fleet().is_empty() {
        return Err(SolverError::EmptyFleet);
    }

    let (largest, vehicle) = problem.fleet().largest_vehicle();
    let capacity = vehicle.capacity();

    if let Some(task) = problem
        .tasks()
        .iter()
        .find(|task| !vehicle.can_carry(task.weight()))
    {
        return Err(SolverError::TaskExceedsCapacity {
            task_id: task.id(),
            weight: task.weight(),
            capacity,
        });
    }

    let space = problem.action_space();
    let mut chains = vec![Vec::new(); space.num_vehicles()];
    chains[largest.get()] = problem
        .tasks()
        .iter_idx()
        .flat_map(|(task, _)| [space.pickup(task), space.delivery(task)])
        .collect();

    debug!(
        vehicle = largest.get(),
        tasks = space.num_tasks(),
        "Built initial assignment"
    );

    Ok(RouteAssignment::from_chains(problem, &chains))
}
