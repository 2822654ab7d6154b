use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use all_pairs_distances::{
    all_pairs::{all_pairs_algorithm::AllPairsAlgorithm, floyd_warshall::ShortestPathEngine},
    config::{DanglingNeighborPolicy, EngineConfig, ReportLayout},
    graph_representation::{Graph, NodeCollection},
    types::NodeId,
    utils::{generator::random_graph, io, measure_time},
    Result,
};

#[derive(Parser)]
#[clap(name = "all-pairs-distances", version, about = "all pairs shortest path distances with Floyd-Warshall")]
struct Opts {

    /// log computation details, RUST_LOG overrides this
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Parser)]
enum SubCommand {
    Demo(DemoCommand),
    Run(RunCommand),
    Random(RandomCommand)
}

/// distances of the path graph 0 -> 1 -> ... -> n-1
#[derive(Parser)]
struct DemoCommand {

    /// number of nodes on the path
    #[clap(short, long, default_value = "4")]
    nodes: u32,

    /// report layout, full or upper
    #[clap(short, long, default_value = "upper")]
    layout: ReportLayout
}

/// distances of a graph read from a file
#[derive(Parser)]
struct RunCommand {

    /// path to the graph file
    #[clap(short, long)]
    graph: String,

    /// report layout, full (default) or upper, not available with --from/--to
    #[clap(short, long, conflicts_with = "from")]
    layout: Option<ReportLayout>,

    /// fail on edges to nodes that are not part of the graph instead of skipping them
    #[clap(long)]
    strict: bool,

    /// only print the distance from this node, requires --to
    #[clap(long, requires = "to")]
    from: Option<NodeId>,

    /// only print the distance to this node, requires --from
    #[clap(long, requires = "from")]
    to: Option<NodeId>
}

/// distances of a seeded random graph
#[derive(Parser)]
struct RandomCommand {

    /// number of nodes
    #[clap(short, long, default_value = "8")]
    nodes: u32,

    /// probability of every ordered node pair to be connected
    #[clap(short, long, default_value = "0.3")]
    probability: f64,

    /// seed of the random number generator
    #[clap(short, long, default_value = "42")]
    seed: u64,

    /// add the reverse of every edge
    #[clap(long)]
    symmetric: bool,

    /// report layout, full or upper
    #[clap(short, long, default_value = "full")]
    layout: ReportLayout
}

fn main() -> ExitCode {
    let opts: Opts = Opts::parse();
    init_tracing(opts.verbose);

    match execute(opts.subcmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(subcmd: SubCommand) -> Result<()> {
    match subcmd {
        SubCommand::Demo(demo) => {
            let graph = NodeCollection::path(demo.nodes);
            print_distances(&graph, EngineConfig::default(), demo.layout)
        },
        SubCommand::Run(run) => {
            let graph = io::read_graph(&Path::new(&run.graph))?;
            let dangling = if run.strict { DanglingNeighborPolicy::Reject } else { DanglingNeighborPolicy::Ignore };
            let config = EngineConfig::new().with_dangling(dangling);

            match (run.from, run.to) {
                (Some(from), Some(to)) => print_distance(&graph, config, from, to),
                _ => print_distances(&graph, config, run.layout.unwrap_or_default()),
            }
        },
        SubCommand::Random(random) => {
            let mut graph = random_graph(random.nodes, random.probability, random.seed)?;
            if random.symmetric {
                graph.make_symmetric();
            }

            print_distances(&graph, EngineConfig::default(), random.layout)
        }
    }
}

fn print_distances(graph: &NodeCollection, config: EngineConfig, layout: ReportLayout) -> Result<()> {
    info!(num_nodes = graph.num_nodes(), num_arcs = graph.num_arcs(), %layout, "computing all pairs distances");
    debug!("input graph\n{}", graph);

    let mut engine = ShortestPathEngine::with_config(config.with_trace_passes(true));
    let (elapsed, result) = measure_time(|| engine.calculate(graph));
    result?;

    info!(elapsed_micros = elapsed.as_micros() as u64, "computation done");
    print!("{}", engine.report(layout));

    Ok(())
}

fn print_distance(graph: &NodeCollection, config: EngineConfig, from: NodeId, to: NodeId) -> Result<()> {
    let mut engine = ShortestPathEngine::with_config(config);
    engine.compute_all_pairs(graph)?;

    match engine.query(from, to)? {
        Some(distance) => println!("distance from {} to {}: {}", from, to, distance),
        None => println!("distance from {} to {}: unreachable", from, to),
    }

    Ok(())
}
