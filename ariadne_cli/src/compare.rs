use ariadne_routing::{
    RoutingAlgorithm,
    routing::{search_observer::NoopObserver, shortest_path_algorithm::ShortestPathOptions},
};
use clap::Args;
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use tracing::info;

use crate::endpoints::{DestinationArgs, GraphArgs, SourceArgs};

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    graph: GraphArgs,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    destination: DestinationArgs,

    /// Give up after this many relaxations
    #[arg(long, env = "ARIADNE_MAX_ITERATIONS")]
    max_iterations: Option<usize>,
}

pub fn run(args: CompareArgs) -> Result<(), anyhow::Error> {
    let router = args.graph.load_router()?;
    let mut rng = args.graph.rng();

    let start = args.source.resolve(&router)?;
    let end = args.destination.resolve(&router, &mut rng)?;
    let options = Some(ShortestPathOptions {
        max_iterations: args.max_iterations,
    });

    info!(
        "Comparing algorithms from {} to {}",
        router.graph().external_id(start),
        router.graph().external_id(end)
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Algorithm",
        "Distance (km)",
        "Time",
        "Iterations",
        "Settled",
        "Pruned",
        "Duration",
    ]);

    for algorithm in RoutingAlgorithm::ALL {
        let row = match router.route_between_nodes(algorithm, start, end, options, &mut NoopObserver)
        {
            Ok(result) => {
                let summary = result.path.summary();
                vec![
                    Cell::new(algorithm),
                    Cell::new(format!("{:.3}", summary.distance_km))
                        .set_alignment(CellAlignment::Right),
                    Cell::new(summary.format_time()),
                    Cell::new(result.iterations).set_alignment(CellAlignment::Right),
                    Cell::new(result.nodes_settled).set_alignment(CellAlignment::Right),
                    Cell::new(result.pruned_relaxations).set_alignment(CellAlignment::Right),
                    Cell::new(format!("{:?}", result.duration)),
                ]
            }
            Err(err) => vec![
                Cell::new(algorithm),
                Cell::new(err.to_string()),
                Cell::new("-"),
                Cell::new(
                    err.iterations()
                        .map_or_else(|| String::from("-"), |iterations| iterations.to_string()),
                ),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
            ],
        };

        table.add_row(row);
    }

    println!("{table}");

    Ok(())
}
