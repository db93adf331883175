pub mod cost_model;
pub mod feasibility;
pub mod route_assignment;
