use fxhash::FxHashSet;
use thiserror::Error;

use crate::{
    problem::action::Action,
    solver::solution::route_assignment::RouteAssignment,
};

/// First constraint violation found along the chains of an assignment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Infeasibility {
    #[error("Task {task} is delivered before being picked up")]
    Precedence { task: u32 },

    #[error("Pickup and delivery of task {task} are served by different vehicles")]
    SplitTask { task: u32 },

    #[error("Vehicle {vehicle} carries {load} but has a capacity of {capacity}")]
    Capacity {
        vehicle: usize,
        load: u64,
        capacity: u32,
    },
}

/// Walks every chain from its route head, tracking the carried load.
///
/// A pickup adds the task weight and a delivery removes it. The load may never
/// exceed the capacity of the vehicle owning the chain, and every delivery has
/// to follow the pickup of the same task in the same chain.
pub fn check_feasibility(assignment: &RouteAssignment) -> Result<(), Infeasibility> {
    let space = assignment.action_space();
    let problem = assignment.problem();
    let mut picked_up = FxHashSet::default();

    for vehicle in assignment.vehicles() {
        let capacity = problem.vehicle(vehicle).capacity();
        let mut load: u64 = 0;
        picked_up.clear();

        for action in assignment.chain(vehicle) {
            match assignment.action(action) {
                Action::Pickup(task) => {
                    load += u64::from(problem.task(task).weight());
                    if load > u64::from(capacity) {
                        return Err(Infeasibility::Capacity {
                            vehicle: vehicle.get(),
                            load,
                            capacity,
                        });
                    }
                    picked_up.insert(task);
                }
                Action::Delivery(task) => {
                    if !picked_up.remove(&task) {
                        let task_id = problem.task(task).id();
                        return Err(if assignment.owner(space.pickup(task)) == Some(vehicle) {
                            Infeasibility::Precedence { task: task_id }
                        } else {
                            Infeasibility::SplitTask { task: task_id }
                        });
                    }
                    load -= u64::from(problem.task(task).weight());
                }
                Action::RouteHead(_) => {}
            }
        }
    }

    Ok(())
}
