use std::sync::Arc;

use rand::RngCore;

use crate::{
    problem::{
        action::{Action, ActionIdx},
        city::{City, CityIdx},
        fleet::Fleet,
        pickup_delivery_problem::PickupDeliveryProblem,
        road_network::RoadNetwork,
        task::{Task, TaskIdx},
        task_set::TaskSet,
        topology::Topology,
        vehicle::{Vehicle, VehicleBuilder, VehicleIdx},
    },
    solver::solution::route_assignment::RouteAssignment,
};

/// Vehicles from `(capacity, cost_per_km, home_city)` triples, named `v0`,
/// `v1`, ...
pub fn create_vehicles(vehicles: &[(u32, f64, usize)]) -> Vec<Vehicle> {
    vehicles
        .iter()
        .enumerate()
        .map(|(index, &(capacity, cost_per_km, home_city))| {
            let mut builder = VehicleBuilder::default();
            builder
                .set_vehicle_id(format!("v{index}"))
                .set_capacity(capacity)
                .set_cost_per_km(cost_per_km)
                .set_home_city(home_city);
            builder.build().unwrap()
        })
        .collect()
}

/// Tasks from `(pickup_city, delivery_city, weight)` triples, the id of each
/// task being its position.
pub fn create_tasks(tasks: &[(usize, usize, u32)]) -> TaskSet {
    tasks
        .iter()
        .enumerate()
        .map(|(index, &(pickup, delivery, weight))| {
            Task::new(
                index as u32,
                CityIdx::new(pickup),
                CityIdx::new(delivery),
                weight,
            )
        })
        .collect()
}

/// Cities `0, 1, ..., n - 1` one unit apart on a straight line.
pub fn create_line_topology(num_cities: usize) -> Arc<dyn Topology> {
    let cities = (0..num_cities)
        .map(|index| City::new(index.to_string(), index as f64, 0.0))
        .collect();

    Arc::new(RoadNetwork::from_euclidean(cities))
}

pub fn create_matrix_topology(distances: Vec<Vec<f64>>) -> Arc<dyn Topology> {
    Arc::new(RoadNetwork::from_distances(distances).unwrap())
}

pub fn create_problem(
    topology: Arc<dyn Topology>,
    vehicles: &[(u32, f64, usize)],
    tasks: &[(usize, usize, u32)],
) -> Arc<PickupDeliveryProblem> {
    let fleet = Fleet::new(create_vehicles(vehicles)).unwrap();

    Arc::new(PickupDeliveryProblem::new(
        topology,
        Arc::new(fleet),
        create_tasks(tasks),
    ))
}

/// Shorthand for the actions of a chain in tests, holding task positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestAction {
    Pickup(usize),
    Delivery(usize),
}

/// Assignment with `chains[v]` as the chain of vehicle `v`.
pub fn create_test_assignment(
    problem: &Arc<PickupDeliveryProblem>,
    chains: Vec<Vec<TestAction>>,
) -> RouteAssignment {
    let space = problem.action_space();
    let chains: Vec<Vec<ActionIdx>> = chains
        .into_iter()
        .map(|chain| {
            chain
                .into_iter()
                .map(|action| match action {
                    TestAction::Pickup(task) => space.pickup(TaskIdx::new(task)),
                    TestAction::Delivery(task) => space.delivery(TaskIdx::new(task)),
                })
                .collect()
        })
        .collect();

    RouteAssignment::from_chains(Arc::clone(problem), &chains)
}

pub fn chain_of(assignment: &RouteAssignment, vehicle: VehicleIdx) -> Vec<TestAction> {
    assignment
        .chain(vehicle)
        .map(|action| match assignment.action(action) {
            Action::Pickup(task) => TestAction::Pickup(task.get()),
            Action::Delivery(task) => TestAction::Delivery(task.get()),
            Action::RouteHead(vehicle) => panic!("route head {vehicle} inside a chain"),
        })
        .collect()
}

pub struct MockRng {
    data: Vec<u64>,
    index: usize,
}

impl MockRng {
    pub fn new(data: Vec<u64>) -> Self {
        MockRng { data, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.data[self.index % self.data.len()];
        self.index = (self.index + 1) % self.data.len();
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            *byte = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_mock_rng_cycles() {
        let data = vec![1, 2, 3];
        let mut rng = MockRng::new(data.clone());

        for &expected in data.iter().cycle().take(7) {
            assert_eq!(rng.next_u64(), expected);
        }
    }

    #[test]
    fn test_mock_rng_random_f64() {
        let mut rng = MockRng::new(vec![u64::MAX / 4, u64::MAX / 2]);

        let first: f64 = rng.random();
        let second: f64 = rng.random();

        assert!((first - 0.25).abs() < 1e-9);
        assert!((second - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_line_topology() {
        let topology = create_line_topology(4);

        assert_eq!(topology.distance(CityIdx::new(0), CityIdx::new(3)), 3.0);
        assert_eq!(
            topology.path_between(CityIdx::new(0), CityIdx::new(3)),
            vec![CityIdx::new(3)]
        );
    }
}
