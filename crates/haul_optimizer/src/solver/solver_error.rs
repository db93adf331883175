use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Task {task_id} weighs {weight} but the largest vehicle only carries {capacity}")]
    TaskExceedsCapacity {
        task_id: u32,
        weight: u32,
        capacity: u32,
    },

    #[error("The fleet has no vehicle")]
    EmptyFleet,
}
