use crate::{
    problem::{action::ActionIdx, vehicle::VehicleIdx},
    solver::{
        operators::{move_error::MoveError, neighbor_move::NeighborOperator},
        solution::route_assignment::RouteAssignment,
    },
};

/// **Swap Actions**
///
/// Exchanges the actions at positions `first` and `second` of one chain, each
/// taking over the neighbours of the other.
///
/// ```text
/// BEFORE:
///    ... (A) -> [first] -> (B) ... (X) -> [second] -> (Y) ...
///
/// AFTER:
///    ... (A) -> [second] -> (B) ... (X) -> [first] -> (Y) ...
/// ```
///
/// Adjacent positions and the pickup/delivery pair of a single task are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapActionsOperator {
    params: SwapActionsOperatorParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapActionsOperatorParams {
    pub vehicle: VehicleIdx,
    pub first: usize,
    pub second: usize,
}

impl SwapActionsOperator {
    /// Shortest chain the operator explores.
    pub const MIN_CHAIN_LEN: usize = 3;

    pub fn new(params: SwapActionsOperatorParams) -> Self {
        SwapActionsOperator { params }
    }

    pub fn vehicle(&self) -> VehicleIdx {
        self.params.vehicle
    }

    /// Positions in ascending order.
    pub fn positions(&self) -> (usize, usize) {
        if self.params.first < self.params.second {
            (self.params.first, self.params.second)
        } else {
            (self.params.second, self.params.first)
        }
    }
}

impl NeighborOperator for SwapActionsOperator {
    fn generate_moves<C>(solution: &RouteAssignment, vehicle: VehicleIdx, mut consumer: C)
    where
        C: FnMut(Self),
    {
        let len = solution.chain_len(vehicle);
        if len < Self::MIN_CHAIN_LEN {
            return;
        }

        for first in 0..len {
            for second in first + 1..len {
                consumer(SwapActionsOperator::new(SwapActionsOperatorParams {
                    vehicle,
                    first,
                    second,
                }));
            }
        }
    }

    fn apply(&self, solution: &RouteAssignment) -> Result<RouteAssignment, MoveError> {
        let vehicle = self.params.vehicle;
        let (first, second) = self.positions();
        let chain: Vec<ActionIdx> = solution.chain(vehicle).collect();

        if second >= chain.len() {
            return Err(MoveError::PositionOutOfChain {
                vehicle: vehicle.get(),
                position: second,
            });
        }

        let a = chain[first];
        let b = chain[second];

        if let (Some(task_a), Some(task_b)) = (solution.task_of(a), solution.task_of(b))
            && task_a == task_b
        {
            return Err(MoveError::BreaksPrecedence {
                task: solution.problem().task(task_a).id(),
            });
        }

        if first == second || second == first + 1 {
            return Err(MoveError::AdjacentActions { first, second });
        }

        let before_a = if first == 0 {
            solution.action_space().head(vehicle)
        } else {
            chain[first - 1]
        };
        let after_a = chain[first + 1];
        let before_b = chain[second - 1];
        let after_b = chain.get(second + 1).copied();

        let mut swapped = solution.clone();
        swapped.set_successor(before_a, Some(b));
        swapped.set_successor(b, Some(after_a));
        swapped.set_successor(before_b, Some(a));
        swapped.set_successor(a, after_b);
        swapped.recompute_timestamps(vehicle);

        Ok(swapped)
    }
}
