pub mod bidding;
pub mod json;
pub mod plan;
pub mod problem;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
