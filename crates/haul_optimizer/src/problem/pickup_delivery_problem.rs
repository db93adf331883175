use std::sync::Arc;

use crate::problem::{
    action::{Action, ActionIdx, ActionSpace},
    city::CityIdx,
    fleet::Fleet,
    task::{Task, TaskIdx},
    task_set::TaskSet,
    topology::{Distance, Topology},
    vehicle::{Vehicle, VehicleIdx},
};

/// One instance to optimize: a fixed task set served by the agent's fleet on
/// a shared topology. Topology and fleet are shared between the instances an
/// agent builds while bidding; only the task set differs.
pub struct PickupDeliveryProblem {
    topology: Arc<dyn Topology>,
    fleet: Arc<Fleet>,
    tasks: TaskSet,
    action_space: ActionSpace,
}

impl PickupDeliveryProblem {
    pub fn new(topology: Arc<dyn Topology>, fleet: Arc<Fleet>, tasks: TaskSet) -> Self {
        let action_space = ActionSpace::new(tasks.len(), fleet.len());

        PickupDeliveryProblem {
            topology,
            fleet,
            tasks,
            action_space,
        }
    }

    pub fn topology(&self) -> &dyn Topology {
        self.topology.as_ref()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn tasks(&self) -> &TaskSet {
        &self.tasks
    }

    pub fn task(&self, task_idx: TaskIdx) -> &Task {
        self.tasks.task(task_idx)
    }

    pub fn vehicle(&self, vehicle_idx: VehicleIdx) -> &Vehicle {
        self.fleet.vehicle(vehicle_idx)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.fleet.vehicles()
    }

    pub fn action_space(&self) -> ActionSpace {
        self.action_space
    }

    /// City where an action takes place. Route heads resolve to the home city
    /// of their vehicle.
    pub fn city_of(&self, action: ActionIdx) -> CityIdx {
        match self.action_space.action(action) {
            Action::Pickup(task) => self.task(task).pickup_city(),
            Action::Delivery(task) => self.task(task).delivery_city(),
            Action::RouteHead(vehicle) => self.vehicle(vehicle).home_city(),
        }
    }

    #[inline]
    pub fn distance(&self, from: CityIdx, to: CityIdx) -> Distance {
        self.topology.distance(from, to)
    }
}
