use std::path::PathBuf;

use ariadne_routing::{
    RoutingAlgorithm, RoutingRequest, graph::Graph, routing::exploration::EdgeUsage,
};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::{
    endpoints::{GraphArgs, SourceArgs, random_node},
    geojson_output::{usage_geojson, write_geojson},
    parsers,
};

const BATCH_SIZE: usize = 64;

#[derive(Args)]
pub struct HeatmapArgs {
    #[command(flatten)]
    graph: GraphArgs,

    #[command(flatten)]
    source: SourceArgs,

    /// Number of random destinations
    #[arg(short, long, default_value_t = 100)]
    routes: usize,

    #[arg(short, long, default_value = "astar", value_parser = parsers::parse_algorithm)]
    algorithm: RoutingAlgorithm,

    /// Give up after this many relaxations
    #[arg(long, env = "ARIADNE_MAX_ITERATIONS")]
    max_iterations: Option<usize>,

    /// GeoJSON file receiving the used edges and their `uses` count
    #[arg(short, long)]
    output: PathBuf,
}

pub fn run(args: HeatmapArgs) -> Result<(), anyhow::Error> {
    let router = args.graph.load_router()?;
    let mut rng = args.graph.rng();
    let start = args.source.resolve(&router)?;

    info!(
        "Routing {} random destinations from {} with {}",
        args.routes,
        router.graph().external_id(start),
        args.algorithm
    );

    let requests: Vec<RoutingRequest> = (0..args.routes)
        .map(|_| {
            let request = RoutingRequest::between_nodes(start, random_node(&router, &mut rng))
                .with_algorithm(args.algorithm);
            match args.max_iterations {
                Some(max_iterations) => request.with_max_iterations(max_iterations),
                None => request,
            }
        })
        .collect();

    let bar = ProgressBar::new(requests.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} routes ({eta})")?);

    let mut usage = EdgeUsage::default();
    let mut failures = 0;
    for batch in requests.chunks(BATCH_SIZE) {
        for result in router.route_many(batch) {
            match result {
                Ok(result) => usage.record(&result.path),
                Err(_) => failures += 1,
            }
        }
        bar.inc(batch.len() as u64);
    }
    bar.finish_and_clear();

    if failures > 0 {
        warn!("{} of {} destinations could not be reached", failures, args.routes);
    }

    info!(
        "{} routes used {} of {} edges",
        usage.routes(),
        usage.ranked().len(),
        router.graph().edge_count()
    );

    write_geojson(&args.output, &usage_geojson(router.graph(), &usage))
}
