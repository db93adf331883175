pub mod change_vehicle;
pub mod move_error;
pub mod neighbor_move;
pub mod swap_actions;
