use std::path::PathBuf;

use ariadne_routing::{
    RoutingAlgorithm,
    routing::{
        exploration::ExplorationTracker, routing_path::RouteSummary,
        shortest_path_algorithm::ShortestPathOptions,
    },
};
use clap::Args;
use tracing::{error, info};

use crate::{
    endpoints::{DestinationArgs, GraphArgs, SourceArgs},
    geojson_output::{exploration_geojson, write_geojson},
    parsers,
};

#[derive(Args)]
pub struct SearchArgs {
    /// dijkstra, astar or astar_enhanced
    #[arg(short, long, default_value = "astar", value_parser = parsers::parse_algorithm)]
    pub algorithm: RoutingAlgorithm,

    /// Give up after this many relaxations
    #[arg(long, env = "ARIADNE_MAX_ITERATIONS")]
    pub max_iterations: Option<usize>,
}

impl SearchArgs {
    pub fn options(&self) -> Option<ShortestPathOptions> {
        Some(ShortestPathOptions {
            max_iterations: self.max_iterations,
        })
    }
}

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    graph: GraphArgs,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    destination: DestinationArgs,

    #[command(flatten)]
    search: SearchArgs,

    /// Writes the explored edges and the route as GeoJSON
    #[arg(long)]
    geojson: Option<PathBuf>,
}

pub fn print_summary(summary: &RouteSummary) {
    println!("Total dist = {:.3} km", summary.distance_km);
    println!("Total time = {}", summary.format_time());
    match summary.average_speed_kmh() {
        Some(speed) => println!("Speed average = {speed:.1} km/h"),
        None => println!("Speed average = n/a"),
    }
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let router = args.graph.load_router()?;
    let mut rng = args.graph.rng();

    let start = args.source.resolve(&router)?;
    let end = args.destination.resolve(&router, &mut rng)?;
    let graph = router.graph();

    info!(
        "Routing from {} to {} with {}",
        graph.external_id(start),
        graph.external_id(end),
        args.search.algorithm
    );

    let mut tracker = ExplorationTracker::new(graph);
    let result = router.route_between_nodes(
        args.search.algorithm,
        start,
        end,
        args.search.options(),
        &mut tracker,
    );

    let result = match result {
        Ok(result) => result,
        Err(err) => {
            error!("Failed to find a path: {}", err);
            if let Some(path) = &args.geojson {
                write_geojson(path, &exploration_geojson(graph, &tracker))?;
            }
            return Err(err.into());
        }
    };

    print_summary(&result.path.summary());
    println!("Iterations = {}", result.iterations);
    info!(
        nodes_settled = result.nodes_settled,
        pruned = result.pruned_relaxations,
        "Search took {:?}",
        result.duration
    );

    if let Some(path) = &args.geojson {
        tracker.mark_path(&result.path);
        write_geojson(path, &exploration_geojson(graph, &tracker))?;
    }

    Ok(())
}
