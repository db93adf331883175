#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use haul_optimizer::problem::{
    city::{City, CityIdx},
    fleet::Fleet,
    pickup_delivery_problem::PickupDeliveryProblem,
    road_network::RoadNetwork,
    task::Task,
    task_set::TaskSet,
    topology::Topology,
    vehicle::{Vehicle, VehicleBuilder},
};

/// Cities A, B and C with d(A, B) = 10, d(C, A) = 7 and d(B, C) = 12.
pub fn triangle_topology() -> Arc<dyn Topology> {
    Arc::new(
        RoadNetwork::from_distances(vec![
            vec![0.0, 10.0, 7.0],
            vec![10.0, 0.0, 12.0],
            vec![7.0, 12.0, 0.0],
        ])
        .unwrap(),
    )
}

/// `size` x `size` grid of cities with unit spacing, city `y * size + x`
/// sitting at `(x, y)`.
pub fn grid_topology(size: usize) -> Arc<dyn Topology> {
    let cities = (0..size * size)
        .map(|index| {
            City::new(
                format!("c{index}"),
                (index % size) as f64,
                (index / size) as f64,
            )
        })
        .collect();

    Arc::new(RoadNetwork::from_euclidean(cities))
}

pub fn vehicle(id: &str, capacity: u32, cost_per_km: f64, home_city: usize) -> Vehicle {
    let mut builder = VehicleBuilder::default();
    builder
        .set_vehicle_id(id)
        .set_capacity(capacity)
        .set_cost_per_km(cost_per_km)
        .set_home_city(home_city);
    builder.build().unwrap()
}

pub fn fleet(vehicles: Vec<Vehicle>) -> Arc<Fleet> {
    Arc::new(Fleet::new(vehicles).unwrap())
}

pub fn task(id: u32, pickup: usize, delivery: usize, weight: u32) -> Task {
    Task::new(id, CityIdx::new(pickup), CityIdx::new(delivery), weight)
}

pub fn problem(
    topology: Arc<dyn Topology>,
    fleet: Arc<Fleet>,
    tasks: Vec<Task>,
) -> Arc<PickupDeliveryProblem> {
    Arc::new(PickupDeliveryProblem::new(
        topology,
        fleet,
        TaskSet::new(tasks),
    ))
}

/// A deterministic spread of tasks over a grid of `size * size` cities.
pub fn grid_tasks(size: usize, count: usize, max_weight: u32) -> Vec<Task> {
    let num_cities = size * size;

    (0..count)
        .map(|index| {
            let pickup = (index * 7 + 3) % num_cities;
            let delivery = (index * 11 + 5) % num_cities;
            let weight = 1 + (index as u32 * 3) % max_weight;
            task(index as u32, pickup, delivery, weight)
        })
        .collect()
}

pub fn data_fixture_path(fixture: &str) -> PathBuf {
    let current_working_dir = std::env::current_dir().unwrap();

    current_working_dir
        .join("../../data/fixtures/")
        .join(fixture)
        .canonicalize()
        .unwrap()
}
