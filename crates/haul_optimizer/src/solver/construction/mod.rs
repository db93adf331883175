pub mod initial_assignment;
