pub mod action;
pub mod city;
pub mod fleet;
pub mod pickup_delivery_problem;
pub mod problem_error;
pub mod road_network;
pub mod task;
pub mod task_set;
pub mod topology;
pub mod vehicle;
