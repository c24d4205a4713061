use std::io::Write;
use std::path::Path;

use clap::{CommandFactory, FromArgMatches};
use log::{debug, info};
use rand::random;
use took::Timer;

use crate::cli::{expand_argfiles, ProgramArguments, Traversal};
use crate::config::InstanceSource;
use crate::graph::generator::generate_connected;
use crate::graph::traversal::{breadth_first, connected_components, depth_first};
use crate::graph::{Graph, Label};
use crate::utils::logging::format_log_summary;
use crate::utils::{create_seeded_rng, DefaultRunTracker};

mod bench;
mod cli;
mod config;
mod graph;
mod io;
mod mst;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = expand_argfiles(std::env::args_os())?;
    let args = ProgramArguments::from_arg_matches(
        &ProgramArguments::command().get_matches_from(args)
    )?;
    info!("{:?}", &args);

    let config = config::resolve(&args)?;
    info!("{:?}", &config);

    let load_timer = Timer::new();
    let (instance_name, graph) = match &config.source {
        InstanceSource::File(path) => {
            let name = Path::new(path)
                .file_name()
                .map(|it| it.to_string_lossy().to_string())
                .unwrap_or_else(|| path.clone());
            (name, io::load_instance(path)?)
        }
        InstanceSource::Generate(plan) => {
            let seed_value = config.seed.unwrap_or_else(|| random::<i128>().abs());
            info!("seed: {}", seed_value);
            let mut rng = create_seeded_rng(seed_value);
            let graph = generate_connected(plan.nodes, plan.edges, plan.max_weight, &mut rng)?;
            (
                format!("random-n{}-m{}-s{}", plan.nodes, plan.edges, seed_value),
                graph,
            )
        }
    };
    info!(
        "instance {} loaded after {} ({} nodes, {} edges, {} component(s))",
        instance_name,
        load_timer.took(),
        graph.num_nodes(),
        graph.num_edges(),
        connected_components(&graph).len()
    );
    debug!("{}", graph);

    if let Some(path) = &args.write_instance {
        info!("writing instance to {}", path);
        io::edge_list_writer::save_graph(path, &graph)?;
    }

    if let Some(traversal) = args.traverse {
        print_traversal(&graph, traversal, args.traverse_from)?;
    }

    info!(
        "starting benchmark: {} run(s) of {:?}",
        config.benchmark.runs, config.benchmark.algorithms
    );
    let total = (config.benchmark.runs.max(1) * config.benchmark.algorithms.len()) as u64;
    let res = {
        let mut tracker = DefaultRunTracker::new(total);
        bench::run_benchmark(&graph, &config.benchmark, &mut tracker)?
    };
    info!("finished after {}", res.time);
    for benchmark in res.benchmarks.iter() {
        if let Some(summary) = benchmark.summary() {
            info!("{}: {}", benchmark.algorithm, format_log_summary(&summary));
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    io::report::write_benchmark(&mut out, &res)?;
    if args.print_summary_to_stdout {
        io::report::write_summary_lines(&mut out, &res)?;
    }
    out.flush()?;

    if let Some(path) = &config.report {
        info!("writing report to {}", path);
        io::report::save_json(path, &instance_name, &graph, &res)?;
    }

    Ok(())
}

fn print_traversal(graph: &Graph, traversal: Traversal, from: Option<Label>) -> anyhow::Result<()> {
    let start = match from.or_else(|| graph.nodes().first().map(|it| it.label())) {
        Some(start) => start,
        None => return Ok(()),
    };
    let order = match traversal {
        Traversal::Dfs => depth_first(graph, start)?,
        Traversal::Bfs => breadth_first(graph, start)?,
    };
    println!("{:?} traversal from {}:", traversal, start);
    for label in order {
        println!("{}", label);
    }
    Ok(())
}
