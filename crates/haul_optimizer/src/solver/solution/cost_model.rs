use serde::{Deserialize, Serialize};

use crate::{problem::topology::Cost, solver::solution::route_assignment::RouteAssignment};

/// Objective minimized by the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// Legs leaving each pickup and delivery, see [`RouteAssignment::cost`].
    #[default]
    TaskEdges,

    /// Task legs plus the approach from each vehicle's home city, see
    /// [`RouteAssignment::route_cost`].
    FullRoute,
}

impl CostModel {
    pub fn evaluate(&self, assignment: &RouteAssignment) -> Cost {
        match self {
            CostModel::TaskEdges => assignment.cost(),
            CostModel::FullRoute => assignment.route_cost(),
        }
    }
}

impl std::fmt::Display for CostModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostModel::TaskEdges => write!(f, "task_edges"),
            CostModel::FullRoute => write!(f, "full_route"),
        }
    }
}
