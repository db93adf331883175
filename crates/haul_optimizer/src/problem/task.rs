use serde::Serialize;

use crate::{define_index_newtype, problem::city::CityIdx};

define_index_newtype!(TaskIdx);

/// A transport request: carry `weight` units from the pickup city to the
/// delivery city. `id` is the identifier assigned by the auctioneer and is
/// independent of the task's position in a [`TaskSet`](super::task_set::TaskSet).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: u32,
    pickup_city: CityIdx,
    delivery_city: CityIdx,
    weight: u32,
}

impl Task {
    pub fn new(id: u32, pickup_city: CityIdx, delivery_city: CityIdx, weight: u32) -> Self {
        Task {
            id,
            pickup_city,
            delivery_city,
            weight,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn pickup_city(&self) -> CityIdx {
        self.pickup_city
    }

    pub fn delivery_city(&self) -> CityIdx {
        self.delivery_city
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}
