use serde::Serialize;

use crate::{
    problem::{
        action::Action,
        city::CityIdx,
        topology::{Cost, Distance},
        vehicle::VehicleIdx,
    },
    solver::solution::route_assignment::RouteAssignment,
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanStep {
    Move { city: CityIdx },
    Pickup { task_id: u32 },
    Delivery { task_id: u32 },
}

/// Movements of one vehicle, starting from its home city.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VehiclePlan {
    pub vehicle_id: String,
    pub start_city: CityIdx,
    pub steps: Vec<PlanStep>,

    /// Length actually driven, home leg included.
    pub distance: Distance,
    pub cost: Cost,
}

impl VehiclePlan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn num_tasks(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, PlanStep::Pickup { .. }))
            .count()
    }
}

/// Walks the chain of every vehicle and expands each hop into the cities of
/// the road network's path.
pub fn materialize_plans(assignment: &RouteAssignment) -> Vec<VehiclePlan> {
    assignment
        .vehicles()
        .map(|vehicle| materialize_plan(assignment, vehicle))
        .collect()
}

pub fn materialize_plan(assignment: &RouteAssignment, vehicle_idx: VehicleIdx) -> VehiclePlan {
    let problem = assignment.problem();
    let topology = problem.topology();
    let vehicle = problem.vehicle(vehicle_idx);

    let mut current = vehicle.home_city();
    let mut steps = Vec::new();
    let mut distance = 0.0;

    for action in assignment.chain(vehicle_idx) {
        let target = assignment.city_of(action);
        distance += topology.distance(current, target);
        steps.extend(
            topology
                .path_between(current, target)
                .into_iter()
                .map(|city| PlanStep::Move { city }),
        );
        current = target;

        match assignment.action(action) {
            Action::Pickup(task) => steps.push(PlanStep::Pickup {
                task_id: problem.task(task).id(),
            }),
            Action::Delivery(task) => steps.push(PlanStep::Delivery {
                task_id: problem.task(task).id(),
            }),
            Action::RouteHead(_) => {}
        }
    }

    VehiclePlan {
        vehicle_id: vehicle.external_id().to_owned(),
        start_city: vehicle.home_city(),
        steps,
        distance,
        cost: distance * vehicle.cost_per_km(),
    }
}
