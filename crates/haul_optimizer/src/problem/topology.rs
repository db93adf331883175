use crate::problem::city::CityIdx;

pub type Distance = f64;
pub type Cost = f64;

/// Road-network queries the optimizer depends on.
///
/// `path_between` returns the cities visited when travelling from `from` to
/// `to`, excluding `from` and including `to`. It is empty when both are the
/// same city or when `to` cannot be reached.
pub trait Topology: Send + Sync {
    fn num_cities(&self) -> usize;

    fn distance(&self, from: CityIdx, to: CityIdx) -> Distance;

    fn path_between(&self, from: CityIdx, to: CityIdx) -> Vec<CityIdx>;
}
