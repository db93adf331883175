use crate::{
    problem::vehicle::VehicleIdx,
    solver::{
        operators::{
            change_vehicle::ChangeVehicleOperator, move_error::MoveError,
            swap_actions::SwapActionsOperator,
        },
        solution::route_assignment::RouteAssignment,
    },
};

/// A mutation that derives a new assignment from an existing one.
pub trait NeighborOperator: Sized {
    /// Emits every move of this kind around `vehicle`.
    fn generate_moves<C>(solution: &RouteAssignment, vehicle: VehicleIdx, consumer: C)
    where
        C: FnMut(Self);

    /// Returns the mutated copy, leaving `solution` untouched.
    fn apply(&self, solution: &RouteAssignment) -> Result<RouteAssignment, MoveError>;
}

#[derive(Debug)]
pub enum NeighborMove {
    /// Moves the first task of a chain to the front of another vehicle's chain.
    ChangeVehicle(ChangeVehicleOperator),
    /// Exchanges two actions of the same chain.
    SwapActions(SwapActionsOperator),
}

impl NeighborMove {
    pub fn operator_name(&self) -> &'static str {
        match self {
            NeighborMove::ChangeVehicle(_) => "Change-Vehicle",
            NeighborMove::SwapActions(_) => "Swap-Actions",
        }
    }

    pub fn apply(&self, solution: &RouteAssignment) -> Result<RouteAssignment, MoveError> {
        match self {
            NeighborMove::ChangeVehicle(op) => op.apply(solution),
            NeighborMove::SwapActions(op) => op.apply(solution),
        }
    }
}
