use std::fmt::Display;

use crate::{
    define_index_newtype,
    problem::{task::TaskIdx, vehicle::VehicleIdx},
};

define_index_newtype!(ActionIdx);

#[derive(Hash, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    Pickup(TaskIdx),
    Delivery(TaskIdx),
    /// Sentinel rooting the chain of one vehicle.
    RouteHead(VehicleIdx),
}

impl Action {
    pub fn task(&self) -> Option<TaskIdx> {
        match self {
            Action::Pickup(task) | Action::Delivery(task) => Some(*task),
            Action::RouteHead(_) => None,
        }
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self, Action::Pickup(_))
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, Action::Delivery(_))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Pickup(task) => write!(f, "Pickup({task})"),
            Action::Delivery(task) => write!(f, "Delivery({task})"),
            Action::RouteHead(vehicle) => write!(f, "RouteHead({vehicle})"),
        }
    }
}

/// Maps actions to a dense index space of size `2 * num_tasks + num_vehicles`:
/// pickups occupy `[0, n)`, deliveries `[n, 2n)` and route heads
/// `[2n, 2n + v)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpace {
    num_tasks: usize,
    num_vehicles: usize,
}

impl ActionSpace {
    pub fn new(num_tasks: usize, num_vehicles: usize) -> Self {
        ActionSpace {
            num_tasks,
            num_vehicles,
        }
    }

    pub fn len(&self) -> usize {
        2 * self.num_tasks + self.num_vehicles
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Number of pickup and delivery actions.
    pub fn num_task_actions(&self) -> usize {
        2 * self.num_tasks
    }

    #[inline]
    pub fn pickup(&self, task: TaskIdx) -> ActionIdx {
        ActionIdx::new(task.get())
    }

    #[inline]
    pub fn delivery(&self, task: TaskIdx) -> ActionIdx {
        ActionIdx::new(task.get() + self.num_tasks)
    }

    #[inline]
    pub fn head(&self, vehicle: VehicleIdx) -> ActionIdx {
        ActionIdx::new(vehicle.get() + 2 * self.num_tasks)
    }

    #[inline]
    pub fn is_task_action(&self, action: ActionIdx) -> bool {
        action.get() < 2 * self.num_tasks
    }

    pub fn action(&self, action: ActionIdx) -> Action {
        let index = action.get();
        if index < self.num_tasks {
            Action::Pickup(TaskIdx::new(index))
        } else if index < 2 * self.num_tasks {
            Action::Delivery(TaskIdx::new(index - self.num_tasks))
        } else {
            Action::RouteHead(VehicleIdx::new(index - 2 * self.num_tasks))
        }
    }

    pub fn task_actions(&self) -> impl Iterator<Item = ActionIdx> + use<> {
        (0..2 * self.num_tasks).map(ActionIdx::new)
    }
}
