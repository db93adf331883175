pub mod vehicle_plan;
