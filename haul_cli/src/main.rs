use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{auction::AuctionArgs, plan::PlanArgs};

mod auction;
mod output;
mod parsers;
mod plan;
mod search_args;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, env = "HAUL_DEBUG")]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replays the auction of a scenario, bidding on every task in turn
    #[command(visible_alias = "a")]
    Auction {
        #[command(flatten)]
        args: AuctionArgs,
    },
    /// Commits every task of a scenario and prints the vehicle plans
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Auction { args } => auction::run(args)?,
        Commands::Plan { args } => plan::run(args)?,
    }

    Ok(())
}
