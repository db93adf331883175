use std::path::PathBuf;

use clap::Args;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use haul_optimizer::{
    bidding::{auction_bidder::AuctionBidder, bid::Bid},
    json::scenario::JsonAuctionScenario,
    problem::topology::Topology,
};
use tracing::info;

use crate::{output, search_args::SearchArgs};

#[derive(Args)]
pub struct AuctionArgs {
    /// Scenario file with the fleet, the road network and the auctioned tasks
    #[arg(short, long, env = "HAUL_SCENARIO")]
    scenario: PathBuf,

    /// Bid as this agent instead of the one named in the scenario
    #[arg(short, long, env = "HAUL_AGENT_ID")]
    agent_id: Option<u32>,

    /// Print the final plans as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    search: SearchArgs,
}

/// Result of clearing one auction round.
#[derive(Debug, PartialEq, Eq)]
pub struct Clearing {
    pub winner: Option<u32>,
    /// Bids of every agent, indexed by agent id.
    pub bids: Vec<Option<u64>>,
}

/// Clears a round between the agent and the recorded competitor bids.
///
/// Competitors get the agent ids left free by `agent_id`, in order. The agent
/// wins when it bids strictly lower than every competitor that did not
/// abstain. Otherwise the lowest competitor wins, the first one on ties.
pub fn clear_round(agent_id: u32, bid: Bid, competitor_bids: &[Option<u64>]) -> Clearing {
    let mut bids = Vec::with_capacity(competitor_bids.len() + 1);
    let mut competitors = competitor_bids.iter().copied();
    let num_agents = competitor_bids.len() + 1;

    for id in 0..num_agents.max(agent_id as usize + 1) {
        if id == agent_id as usize {
            bids.push(bid.price());
        } else {
            bids.push(competitors.next().flatten());
        }
    }

    let best_competitor = bids
        .iter()
        .enumerate()
        .filter(|&(id, _)| id != agent_id as usize)
        .filter_map(|(id, price)| price.map(|price| (id as u32, price)))
        .min_by_key(|&(_, price)| price);

    let winner = match (bid.price(), best_competitor) {
        (Some(price), Some((_, competitor_price))) if price < competitor_price => Some(agent_id),
        (Some(_), None) => Some(agent_id),
        (_, Some((competitor_id, _))) => Some(competitor_id),
        (None, None) => None,
    };

    Clearing { winner, bids }
}

pub fn run(args: AuctionArgs) -> Result<(), anyhow::Error> {
    info!("Replaying auction {:?}", args.scenario);

    let scenario = JsonAuctionScenario::from_file(&args.scenario)?.build()?;
    let agent_id = args.agent_id.unwrap_or(scenario.agent_id);
    let topology = scenario.topology.clone();

    let mut agent = AuctionBidder::new(
        agent_id,
        scenario.topology.clone(),
        scenario.fleet.clone(),
        args.search.to_params(),
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Task", "Route", "Weight", "Bid", "Best rival", "Winner", "Cost",
        ]);

    let mut revenue: u64 = 0;

    for auctioned in &scenario.tasks {
        let task = &auctioned.task;
        let bid = agent.ask_price(task)?;
        let clearing = clear_round(agent_id, bid, &auctioned.competitor_bids);

        if let Some(winner) = clearing.winner {
            agent.auction_result(task, winner, &clearing.bids)?;
        }

        let won = clearing.winner == Some(agent_id);
        if won {
            revenue += bid.price().unwrap_or_default();
        }

        let best_rival = auctioned
            .competitor_bids
            .iter()
            .flatten()
            .min()
            .map_or_else(|| String::from("-"), |price| price.to_string());

        table.add_row(vec![
            task.id().to_string(),
            format!(
                "{} -> {}",
                topology.city(task.pickup_city()).name(),
                topology.city(task.delivery_city()).name()
            ),
            task.weight().to_string(),
            bid.to_string(),
            best_rival,
            clearing
                .winner
                .map_or_else(|| String::from("none"), |winner| winner.to_string()),
            format!("{:.1}", agent.current_cost()),
        ]);

        info!(task = task.id(), %bid, won, "Auction round cleared");
    }

    println!("{table}");
    println!(
        "Agent {agent_id} won {} of {} tasks, revenue {revenue}, cost {:.1} on {} cities",
        agent.committed_tasks().len(),
        scenario.tasks.len(),
        agent.current_cost(),
        topology.num_cities(),
    );

    let plans = agent.plan()?;
    output::print_plans(&plans, &topology, args.json)?;

    Ok(())
}
