use std::path::PathBuf;

use clap::Args;
use haul_optimizer::{bidding::auction_bidder::AuctionBidder, json::scenario::JsonAuctionScenario};
use tracing::info;

use crate::{output, search_args::SearchArgs};

#[derive(Args)]
pub struct PlanArgs {
    /// Scenario file, every task of which is committed
    #[arg(short, long, env = "HAUL_SCENARIO")]
    scenario: PathBuf,

    /// Print the plans as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    search: SearchArgs,
}

pub fn run(args: PlanArgs) -> Result<(), anyhow::Error> {
    info!("Planning {:?}", args.scenario);

    let scenario = JsonAuctionScenario::from_file(&args.scenario)?.build()?;
    let mut agent = AuctionBidder::new(
        scenario.agent_id,
        scenario.topology.clone(),
        scenario.fleet.clone(),
        args.search.to_params(),
    );

    let tasks = scenario.task_set();
    for task in tasks.iter() {
        agent.auction_result(task, scenario.agent_id, &[])?;
    }

    let plans = agent.plan()?;
    info!(
        tasks = tasks.len(),
        cost = agent.current_cost(),
        "Planned every task"
    );

    output::print_plans(&plans, &scenario.topology, args.json)
}
