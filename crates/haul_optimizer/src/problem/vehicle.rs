use serde::Serialize;

use crate::{
    define_index_newtype,
    problem::{city::CityIdx, problem_error::ProblemError},
};

define_index_newtype!(VehicleIdx);

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    external_id: String,
    capacity: u32,
    cost_per_km: f64,
    home_city: CityIdx,
}

impl Vehicle {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    pub fn home_city(&self) -> CityIdx {
        self.home_city
    }

    pub fn can_carry(&self, weight: u32) -> bool {
        weight <= self.capacity
    }
}

#[derive(Default)]
pub struct VehicleBuilder {
    external_id: Option<String>,
    capacity: Option<u32>,
    cost_per_km: Option<f64>,
    home_city: Option<CityIdx>,
}

impl VehicleBuilder {
    pub fn set_vehicle_id(&mut self, external_id: impl Into<String>) -> &mut VehicleBuilder {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn set_capacity(&mut self, capacity: u32) -> &mut VehicleBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_cost_per_km(&mut self, cost_per_km: f64) -> &mut VehicleBuilder {
        self.cost_per_km = Some(cost_per_km);
        self
    }

    pub fn set_home_city(&mut self, home_city: impl Into<CityIdx>) -> &mut VehicleBuilder {
        self.home_city = Some(home_city.into());
        self
    }

    pub fn build(self) -> Result<Vehicle, ProblemError> {
        Ok(Vehicle {
            external_id: self
                .external_id
                .ok_or(ProblemError::MissingVehicleField("id"))?,
            capacity: self
                .capacity
                .ok_or(ProblemError::MissingVehicleField("capacity"))?,
            cost_per_km: self
                .cost_per_km
                .ok_or(ProblemError::MissingVehicleField("cost_per_km"))?,
            home_city: self
                .home_city
                .ok_or(ProblemError::MissingVehicleField("home_city"))?,
        })
    }
}
