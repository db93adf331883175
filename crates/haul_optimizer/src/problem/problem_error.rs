use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("The fleet must contain at least one vehicle")]
    EmptyFleet,

    #[error("Vehicle is missing required field `{0}`")]
    MissingVehicleField(&'static str),

    #[error("City {city} is out of bounds, the network has {num_cities} cities")]
    CityOutOfBounds { city: usize, num_cities: usize },

    #[error("Distance matrix must be square, row {row} has {len} entries for {expected} cities")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Distance from {from} to {to} must be non-negative, got {distance}")]
    NegativeDistance { from: usize, to: usize, distance: f64 },
}
