mod common;

use haul_optimizer::{
    bidding::{auction_bidder::AuctionBidder, bid::Bid},
    json::scenario::JsonAuctionScenario,
    problem::vehicle::VehicleIdx,
    solver::{
        construction::initial_assignment::initial_assignment,
        local_search::StochasticLocalSearch,
        search_params::{SearchParams, Termination},
        solution::cost_model::CostModel,
        solver_error::SolverError,
    },
};

fn iterations(count: usize) -> SearchParams {
    SearchParams::default().with_termination(Termination::Iterations(count))
}

#[test]
fn test_single_task_from_home() {
    let problem = common::problem(
        common::triangle_topology(),
        common::fleet(vec![common::vehicle("v0", 50, 5.0, 0)]),
        vec![common::task(0, 0, 1, 10)],
    );

    let outcome = StochasticLocalSearch::new(iterations(10))
        .optimize(problem)
        .unwrap();

    assert_eq!(outcome.cost, 50.0);
    assert!(outcome.assignment.is_feasible());
}

#[test]
fn test_approach_leg_is_not_charged() {
    let problem = common::problem(
        common::triangle_topology(),
        common::fleet(vec![common::vehicle("v0", 50, 5.0, 2)]),
        vec![common::task(0, 0, 1, 10)],
    );

    let outcome = StochasticLocalSearch::new(iterations(10))
        .optimize(problem.clone())
        .unwrap();
    assert_eq!(outcome.cost, 50.0);

    let mut full_route = iterations(10);
    full_route.cost_model = CostModel::FullRoute;
    let outcome = StochasticLocalSearch::new(full_route)
        .optimize(problem)
        .unwrap();
    assert_eq!(outcome.cost, 85.0);
}

#[test]
fn test_task_goes_to_vehicle_that_fits() {
    let problem = common::problem(
        common::triangle_topology(),
        common::fleet(vec![
            common::vehicle("small", 5, 1.0, 0),
            common::vehicle("large", 50, 5.0, 0),
        ]),
        vec![common::task(0, 0, 1, 10)],
    );

    let initial = initial_assignment(problem.clone()).unwrap();
    assert!(initial.is_empty_chain(VehicleIdx::new(0)));
    assert_eq!(initial.chain_len(VehicleIdx::new(1)), 2);

    let outcome = StochasticLocalSearch::new(iterations(50))
        .optimize(problem)
        .unwrap();
    assert!(outcome.assignment.is_empty_chain(VehicleIdx::new(0)));
    assert_eq!(outcome.cost, 50.0);
}

#[test]
fn test_task_too_heavy_for_the_fleet() {
    let problem = common::problem(
        common::triangle_topology(),
        common::fleet(vec![
            common::vehicle("small", 5, 1.0, 0),
            common::vehicle("medium", 8, 5.0, 0),
        ]),
        vec![common::task(3, 0, 1, 10)],
    );

    assert_eq!(
        StochasticLocalSearch::new(iterations(10))
            .optimize(problem)
            .err(),
        Some(SolverError::TaskExceedsCapacity {
            task_id: 3,
            weight: 10,
            capacity: 8
        })
    );
}

fn replay_bidder() -> AuctionBidder {
    AuctionBidder::new(
        2,
        common::grid_topology(4),
        common::fleet(vec![
            common::vehicle("v0", 30, 5.0, 0),
            common::vehicle("v1", 30, 3.0, 15),
        ]),
        iterations(300),
    )
}

#[test]
fn test_bids_are_reproducible() {
    let tasks = common::grid_tasks(4, 4, 10);

    let mut bids = Vec::new();
    for _ in 0..2 {
        let mut agent = replay_bidder();
        for task in &tasks[..3] {
            agent.ask_price(task).unwrap();
            agent.auction_result(task, 2, &[]).unwrap();
        }

        assert_eq!(agent.committed_tasks().len(), 3);
        bids.push(agent.ask_price(&tasks[3]).unwrap());
    }

    assert!(!bids[0].is_abstain());
    assert_eq!(bids[0], bids[1]);
}

#[test]
fn test_abstains_when_one_vehicle_is_undersized() {
    let mut agent = AuctionBidder::new(
        0,
        common::triangle_topology(),
        common::fleet(vec![
            common::vehicle("small", 5, 1.0, 0),
            common::vehicle("large", 50, 5.0, 0),
        ]),
        iterations(10),
    );

    assert_eq!(
        agent.ask_price(&common::task(0, 0, 1, 10)).unwrap(),
        Bid::Abstain
    );
    assert!(agent.committed_tasks().is_empty());
}

#[test]
fn test_committed_cost_only_changes_on_wins() {
    let mut agent = replay_bidder();
    let tasks = common::grid_tasks(4, 3, 10);

    agent.auction_result(&tasks[0], 2, &[Some(10)]).unwrap();
    let cost_after_win = agent.current_cost();

    agent.ask_price(&tasks[1]).unwrap();
    agent.auction_result(&tasks[1], 1, &[Some(10)]).unwrap();

    assert_eq!(agent.current_cost(), cost_after_win);
    assert_eq!(agent.committed_tasks().len(), 1);
}

#[test]
fn test_replay_fixture_scenario() {
    let scenario = JsonAuctionScenario::from_file(common::data_fixture_path("small_auction.json"))
        .unwrap()
        .build()
        .unwrap();

    let mut agent = AuctionBidder::new(
        scenario.agent_id,
        scenario.topology.clone(),
        scenario.fleet.clone(),
        iterations(100),
    );

    for auctioned in &scenario.tasks {
        let bid = agent.ask_price(&auctioned.task).unwrap();
        agent
            .auction_result(&auctioned.task, scenario.agent_id, &[bid.price()])
            .unwrap();
    }

    let plans = agent.plan().unwrap();
    assert_eq!(plans.len(), scenario.fleet.len());
    assert_eq!(
        plans.iter().map(|plan| plan.num_tasks()).sum::<usize>(),
        scenario.tasks.len()
    );
}
