use crate::{
    problem::vehicle::VehicleIdx,
    solver::{
        operators::{move_error::MoveError, neighbor_move::NeighborOperator},
        solution::route_assignment::RouteAssignment,
    },
};

/// **Change Vehicle**
///
/// Takes the task whose action opens the chain of `from` and hands it over to
/// `to`, where it is served first.
///
/// ```text
/// BEFORE:
///    from: (H1) -> [P1] -> (A) -> [D1] -> (B)
///    to:   (H2) -> (X) -> (Y)
///
/// AFTER:
///    from: (H1) -> (A) -> (B)
///    to:   (H2) -> [P1] -> [D1] -> (X) -> (Y)
/// ```
///
/// The pickup and delivery are unlinked wherever they sit in the source chain.
/// Capacity of the target vehicle is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeVehicleOperator {
    params: ChangeVehicleOperatorParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeVehicleOperatorParams {
    pub from: VehicleIdx,
    pub to: VehicleIdx,
}

impl ChangeVehicleOperator {
    pub fn new(params: ChangeVehicleOperatorParams) -> Self {
        ChangeVehicleOperator { params }
    }

    pub fn source_vehicle(&self) -> VehicleIdx {
        self.params.from
    }

    pub fn target_vehicle(&self) -> VehicleIdx {
        self.params.to
    }
}

impl NeighborOperator for ChangeVehicleOperator {
    fn generate_moves<C>(solution: &RouteAssignment, vehicle: VehicleIdx, mut consumer: C)
    where
        C: FnMut(Self),
    {
        if solution.is_empty_chain(vehicle) {
            return;
        }

        for to in solution.vehicles().filter(|&to| to != vehicle) {
            consumer(ChangeVehicleOperator::new(ChangeVehicleOperatorParams {
                from: vehicle,
                to,
            }));
        }
    }

    fn apply(&self, solution: &RouteAssignment) -> Result<RouteAssignment, MoveError> {
        let ChangeVehicleOperatorParams { from, to } = self.params;
        if from == to {
            return Err(MoveError::SameVehicle { vehicle: from.get() });
        }

        let first = solution
            .first_action(from)
            .ok_or(MoveError::EmptyChain { vehicle: from.get() })?;
        let task = solution
            .task_of(first)
            .ok_or(MoveError::EmptyChain { vehicle: from.get() })?;

        let space = solution.action_space();
        let pickup = space.pickup(task);
        let delivery = space.delivery(task);

        let mut moved = solution.clone();
        for action in [pickup, delivery] {
            if !moved.unlink(from, action) {
                return Err(MoveError::ActionNotInChain {
                    vehicle: from.get(),
                    action: action.get(),
                });
            }
        }

        let head = space.head(to);
        let previous_first = moved.first_action(to);
        moved.set_successor(head, Some(pickup));
        moved.set_successor(pickup, Some(delivery));
        moved.set_successor(delivery, previous_first);
        moved.set_owner(pickup, to);
        moved.set_owner(delivery, to);

        moved.recompute_timestamps(from);
        moved.recompute_timestamps(to);

        Ok(moved)
    }
}
