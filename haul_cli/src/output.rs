use haul_optimizer::{
    plan::vehicle_plan::{PlanStep, VehiclePlan},
    problem::road_network::RoadNetwork,
};

pub fn print_plans(
    plans: &[VehiclePlan],
    topology: &RoadNetwork,
    json: bool,
) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(plans)?);
        return Ok(());
    }

    for plan in plans {
        println!("{}", describe_plan(plan, topology));
    }

    Ok(())
}

/// One line summary, e.g. `truck: Lausanne, pickup 0, Bern, deliver 0 (12.0 km, cost 60.0)`.
pub fn describe_plan(plan: &VehiclePlan, topology: &RoadNetwork) -> String {
    if plan.is_empty() {
        return format!(
            "{}: stays in {}",
            plan.vehicle_id,
            topology.city(plan.start_city).name()
        );
    }

    let mut parts = vec![topology.city(plan.start_city).name().to_owned()];
    parts.extend(plan.steps.iter().map(|step| match step {
        PlanStep::Move { city } => topology.city(*city).name().to_owned(),
        PlanStep::Pickup { task_id } => format!("pickup {task_id}"),
        PlanStep::Delivery { task_id } => format!("deliver {task_id}"),
    }));

    format!(
        "{}: {} ({:.1} km, cost {:.1})",
        plan.vehicle_id,
        parts.join(", "),
        plan.distance,
        plan.cost
    )
}
