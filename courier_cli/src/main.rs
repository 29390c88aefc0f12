use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    estimate::{CostArgs, DeliveryTimeArgs, DemandArgs, RouteArgs},
    generate::GenerateSubcommands,
};

mod estimate;
mod file_utils;
mod generate;
mod render;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate how long a delivery takes
    DeliveryTime {
        #[command(flatten)]
        args: DeliveryTimeArgs,
    },
    /// Estimate the shipping cost of a parcel
    Cost {
        #[command(flatten)]
        args: CostArgs,
    },
    /// Forecast the number of orders for a day
    Demand {
        #[command(flatten)]
        args: DemandArgs,
    },
    /// Order waypoints into a short route
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::DeliveryTime { args }) => estimate::delivery_time(args)?,
        Some(Commands::Cost { args }) => estimate::cost(args)?,
        Some(Commands::Demand { args }) => estimate::demand(args)?,
        Some(Commands::Route { args }) => estimate::route(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {
            tracing::info!("No command given, see --help");
        }
    }

    Ok(())
}
