use crate::{
    problem::{
        problem_error::ProblemError,
        vehicle::{Vehicle, VehicleIdx},
    },
    utils::enumerate_idx::EnumerateIdx,
};

/// The vehicles owned by one agent. Never empty.
#[derive(Debug, Clone)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, ProblemError> {
        if vehicles.is_empty() {
            return Err(ProblemError::EmptyFleet);
        }

        Ok(Fleet { vehicles })
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter_idx(&self) -> impl Iterator<Item = (VehicleIdx, &Vehicle)> {
        self.vehicles.iter().enumerate_idx()
    }

    /// The vehicle with the largest capacity, the first one on ties.
    pub fn largest_vehicle(&self) -> (VehicleIdx, &Vehicle) {
        let mut largest = VehicleIdx::new(0);
        for (vehicle_id, vehicle) in self.iter_idx() {
            if vehicle.capacity() > self.vehicle(largest).capacity() {
                largest = vehicle_id;
            }
        }

        (largest, self.vehicle(largest))
    }

    /// Whether every single vehicle of the fleet could carry `weight`.
    pub fn all_can_carry(&self, weight: u32) -> bool {
        self.vehicles.iter().all(|vehicle| vehicle.can_carry(weight))
    }
}
