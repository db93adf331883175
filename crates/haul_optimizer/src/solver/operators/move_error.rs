use thiserror::Error;

/// Reasons a move cannot be applied to an assignment. These are expected while
/// exploring a neighborhood and only cause the candidate to be skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Vehicle {vehicle} has no action to move")]
    EmptyChain { vehicle: usize },

    #[error("Source and target vehicle are both {vehicle}")]
    SameVehicle { vehicle: usize },

    #[error("Position {position} is outside the chain of vehicle {vehicle}")]
    PositionOutOfChain { vehicle: usize, position: usize },

    #[error("Action {action} is not part of the chain of vehicle {vehicle}")]
    ActionNotInChain { vehicle: usize, action: usize },

    #[error("Swapping the pickup and delivery of task {task} breaks precedence")]
    BreaksPrecedence { task: u32 },

    #[error("Positions {first} and {second} are adjacent")]
    AdjacentActions { first: usize, second: usize },
}

#[cfg(test)]
mod tests {
    use super::MoveError;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::AdjacentActions {
                first: 1,
                second: 2
            }
            .to_string(),
            "Positions 1 and 2 are adjacent"
        );
        assert_eq!(
            MoveError::BreaksPrecedence { task: 4 }.to_string(),
            "Swapping the pickup and delivery of task 4 breaks precedence"
        );
    }
}
