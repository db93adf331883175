use geo::{Distance, Euclidean};
use serde::Serialize;

use crate::define_index_newtype;

define_index_newtype!(CityIdx);

/// A named node of the road network with planar coordinates.
#[derive(Serialize, Debug, Clone)]
pub struct City {
    name: String,
    point: geo::Point,
}

impl City {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        City {
            name: name.into(),
            point: geo::Point::new(x, y),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn euclidean_distance(&self, to: &City) -> f64 {
        Euclidean.distance(self.point, to.point)
    }
}

impl From<&City> for geo::Point<f64> {
    fn from(city: &City) -> Self {
        city.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let lausanne = City::new("Lausanne", 0.0, 0.0);
        let geneva = City::new("Geneva", 3.0, 4.0);

        assert_eq!(lausanne.euclidean_distance(&geneva), 5.0);
        assert_eq!(geneva.euclidean_distance(&lausanne), 5.0);
    }
}
