use std::{fs::File, io::BufReader, path::Path, sync::Arc};

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::problem::{
    city::{City, CityIdx},
    fleet::Fleet,
    problem_error::ProblemError,
    road_network::{Road, RoadNetwork},
    task::Task,
    task_set::TaskSet,
    vehicle::VehicleBuilder,
};

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Could not read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown city '{0}'")]
    UnknownCity(String),

    #[error("City '{0}' is declared twice")]
    DuplicateCity(String),

    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// Auction replay: the agent's fleet on a road network and the tasks
/// auctioned one after the other.
#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields, rename = "AuctionScenario")]
pub struct JsonAuctionScenario {
    pub agent_id: u32,
    pub cities: Vec<JsonCity>,

    /// Without roads every pair of cities is joined by a straight road.
    #[serde(default)]
    pub roads: Vec<JsonRoad>,

    pub vehicles: Vec<JsonVehicle>,
    pub tasks: Vec<JsonAuctionedTask>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields, rename = "City")]
pub struct JsonCity {
    pub name: String,
    pub coordinates: [f64; 2],
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields, rename = "Road")]
pub struct JsonRoad {
    pub from: String,
    pub to: String,
    pub length: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct JsonVehicle {
    pub id: String,
    pub capacity: u32,
    pub cost_per_km: f64,
    pub home_city: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields, rename = "AuctionedTask")]
pub struct JsonAuctionedTask {
    pub id: u32,
    pub pickup: String,
    pub delivery: String,
    pub weight: u32,

    /// Bids of the other agents, `None` for an agent that abstained.
    #[serde(default)]
    pub competitor_bids: Vec<Option<u64>>,
}

pub struct AuctionedTask {
    pub task: Task,
    pub competitor_bids: Vec<Option<u64>>,
}

pub struct AuctionScenario {
    pub agent_id: u32,
    pub topology: Arc<RoadNetwork>,
    pub fleet: Arc<Fleet>,
    pub tasks: Vec<AuctionedTask>,
}

impl AuctionScenario {
    pub fn task_set(&self) -> TaskSet {
        self.tasks
            .iter()
            .map(|auctioned| auctioned.task.clone())
            .collect()
    }
}

impl JsonAuctionScenario {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_reader(reader)?)
    }

    #[instrument(skip_all, level = "debug")]
    pub fn build(self) -> Result<AuctionScenario, ScenarioError> {
        let mut city_ids = FxHashMap::default();
        for (index, city) in self.cities.iter().enumerate() {
            if city_ids.insert(city.name.as_str(), CityIdx::new(index)).is_some() {
                return Err(ScenarioError::DuplicateCity(city.name.clone()));
            }
        }

        let city_id = |name: &str| {
            city_ids
                .get(name)
                .copied()
                .ok_or_else(|| ScenarioError::UnknownCity(name.to_owned()))
        };

        let roads = self
            .roads
            .iter()
            .map(|road| {
                Ok(Road {
                    from: city_id(&road.from)?,
                    to: city_id(&road.to)?,
                    length: road.length,
                })
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        let vehicles = self
            .vehicles
            .iter()
            .map(|vehicle| {
                let mut builder = VehicleBuilder::default();
                builder
                    .set_vehicle_id(vehicle.id.as_str())
                    .set_capacity(vehicle.capacity)
                    .set_cost_per_km(vehicle.cost_per_km)
                    .set_home_city(city_id(&vehicle.home_city)?);
                Ok(builder.build()?)
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                Ok(AuctionedTask {
                    task: Task::new(
                        task.id,
                        city_id(&task.pickup)?,
                        city_id(&task.delivery)?,
                        task.weight,
                    ),
                    competitor_bids: task.competitor_bids.clone(),
                })
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        let cities: Vec<City> = self
            .cities
            .iter()
            .map(|city| City::new(city.name.as_str(), city.coordinates[0], city.coordinates[1]))
            .collect();

        let topology = if roads.is_empty() {
            RoadNetwork::from_euclidean(cities)
        } else {
            RoadNetwork::from_roads(cities, &roads)?
        };

        Ok(AuctionScenario {
            agent_id: self.agent_id,
            topology: Arc::new(topology),
            fleet: Arc::new(Fleet::new(vehicles)?),
            tasks,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::{city::CityIdx, topology::Topology};

    use super::{JsonAuctionScenario, ScenarioError};

    const SCENARIO: &str = r#"{
        "agent_id": 1,
        "cities": [
            { "name": "Lausanne", "coordinates": [0.0, 0.0] },
            { "name": "Bern", "coordinates": [3.0, 4.0] },
            { "name": "Zurich", "coordinates": [6.0, 8.0] }
        ],
        "roads": [
            { "from": "Lausanne", "to": "Bern" },
            { "from": "Bern", "to": "Zurich", "length": 7.5 }
        ],
        "vehicles": [
            { "id": "truck", "capacity": 30, "cost_per_km": 5.0, "home_city": "Bern" }
        ],
        "tasks": [
            { "id": 0, "pickup": "Lausanne", "delivery": "Zurich", "weight": 3, "competitor_bids": [120, null] },
            { "id": 1, "pickup": "Zurich", "delivery": "Bern", "weight": 5 }
        ]
    }"#;

    #[test]
    fn test_build_scenario() {
        let scenario = JsonAuctionScenario::from_reader(SCENARIO.as_bytes())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(scenario.agent_id, 1);
        assert_eq!(
            scenario.topology.distance(CityIdx::new(0), CityIdx::new(2)),
            12.5
        );
        assert_eq!(scenario.fleet.vehicles()[0].home_city(), CityIdx::new(1));
        assert_eq!(scenario.tasks.len(), 2);
        assert_eq!(scenario.tasks[0].competitor_bids, vec![Some(120), None]);
        assert!(scenario.tasks[1].competitor_bids.is_empty());
        assert_eq!(scenario.task_set().len(), 2);
    }

    #[test]
    fn test_unknown_city() {
        let json = SCENARIO.replace(r#""home_city": "Bern""#, r#""home_city": "Geneva""#);

        let result = JsonAuctionScenario::from_reader(json.as_bytes())
            .unwrap()
            .build();

        assert!(matches!(result, Err(ScenarioError::UnknownCity(name)) if name == "Geneva"));
    }

    #[test]
    fn test_empty_fleet() {
        let json = r#"{
            "agent_id": 0,
            "cities": [{ "name": "A", "coordinates": [0.0, 0.0] }],
            "vehicles": [],
            "tasks": []
        }"#;

        let result = JsonAuctionScenario::from_reader(json.as_bytes())
            .unwrap()
            .build();

        assert!(matches!(result, Err(ScenarioError::Problem(_))));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let json = SCENARIO.replace(r#""agent_id": 1"#, r#""agent_id": 1, "speed": 3"#);

        assert!(matches!(
            JsonAuctionScenario::from_reader(json.as_bytes()),
            Err(ScenarioError::Json(_))
        ));
    }
}
