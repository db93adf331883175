use rand::Rng;
use tracing::trace;

use crate::{
    problem::vehicle::VehicleIdx,
    solver::{
        operators::{
            change_vehicle::ChangeVehicleOperator,
            neighbor_move::{NeighborMove, NeighborOperator},
            swap_actions::SwapActionsOperator,
        },
        solution::route_assignment::RouteAssignment,
    },
};

/// Builds the feasible neighbours of an assignment around one randomly chosen
/// vehicle.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeighborhoodGenerator;

impl NeighborhoodGenerator {
    /// Draws vehicles uniformly until one with a non-empty chain comes up.
    /// `None` when every chain is empty.
    pub fn choose_vehicle<R>(&self, solution: &RouteAssignment, rng: &mut R) -> Option<VehicleIdx>
    where
        R: Rng,
    {
        if solution.vehicles().all(|vehicle| solution.is_empty_chain(vehicle)) {
            return None;
        }

        loop {
            let vehicle = VehicleIdx::new(rng.random_range(0..solution.num_vehicles()));
            if !solution.is_empty_chain(vehicle) {
                return Some(vehicle);
            }
        }
    }

    /// Every move the operators generate around `vehicle`, vehicle changes
    /// first.
    pub fn moves(&self, solution: &RouteAssignment, vehicle: VehicleIdx) -> Vec<NeighborMove> {
        let mut moves = Vec::new();

        ChangeVehicleOperator::generate_moves(solution, vehicle, |op| {
            moves.push(NeighborMove::ChangeVehicle(op))
        });
        SwapActionsOperator::generate_moves(solution, vehicle, |op| {
            moves.push(NeighborMove::SwapActions(op))
        });

        moves
    }

    /// Applies every move around a random vehicle and keeps the feasible
    /// results. Moves that fail or produce an infeasible assignment are
    /// dropped.
    pub fn candidates<R>(&self, solution: &RouteAssignment, rng: &mut R) -> Vec<RouteAssignment>
    where
        R: Rng,
    {
        let Some(vehicle) = self.choose_vehicle(solution, rng) else {
            return Vec::new();
        };

        self.moves(solution, vehicle)
            .into_iter()
            .filter_map(|neighbor| match neighbor.apply(solution) {
                Ok(candidate) => match candidate.check_feasibility() {
                    Ok(()) => Some(candidate),
                    Err(reason) => {
                        trace!(operator = neighbor.operator_name(), %reason, "Infeasible candidate");
                        None
                    }
                },
                Err(error) => {
                    trace!(operator = neighbor.operator_name(), %error, "Rejected move");
                    None
                }
            })
            .collect()
    }
}
