use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{compare::CompareArgs, heatmap::HeatmapArgs, route::RouteArgs};

mod compare;
mod endpoints;
mod geojson_output;
mod graph_file;
mod heatmap;
mod parsers;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Computes a single route and prints its distance and travel time
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Runs every algorithm on the same query
    Compare {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Routes to many random destinations and counts how often each edge is used
    Heatmap {
        #[command(flatten)]
        args: HeatmapArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
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
        Commands::Route { args } => route::run(args),
        Commands::Compare { args } => compare::run(args),
        Commands::Heatmap { args } => heatmap::run(args),
    }
}
