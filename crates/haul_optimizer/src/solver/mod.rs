pub mod construction;
pub mod local_choice;
pub mod local_search;
pub mod neighborhood;
pub mod operators;
pub mod search_params;
pub mod solution;
pub mod solver_error;
