use std::ffi::OsString;

use clap::{Parser, ValueEnum};
use os_str_bytes::OsStrBytesExt;
use serde::Deserialize;

use crate::graph::Label;
use crate::mst::Algorithm;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(long, help = "rng seed")]
    pub seed: Option<i128>,

    #[arg(short, long, help = "instance file path")]
    pub instance: Option<String>,

    #[arg(short, long, help = "benchmark plan (toml)")]
    pub config: Option<String>,

    #[arg(long, help = "write the loaded or generated instance to this path")]
    pub write_instance: Option<String>,

    #[arg(long, help = "write a json report of the benchmark to this path")]
    pub report: Option<String>,

    #[command(flatten)]
    pub benchmark: BenchmarkArguments,

    #[command(flatten)]
    pub generator: GeneratorArguments,

    #[arg(long, value_enum, help = "print a traversal of the instance before benchmarking")]
    pub traverse: Option<Traversal>,

    #[arg(
        long,
        requires = "traverse",
        help = "start node of the traversal (default: first node)"
    )]
    pub traverse_from: Option<Label>,

    #[arg(long, help = "print summary to stdout", default_value = "false")]
    pub print_summary_to_stdout: bool,
}

#[derive(Clone, Copy, ValueEnum, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmArg {
    Kruskal,
    Prim,
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum Traversal {
    Dfs,
    Bfs,
}

#[derive(clap::Args, Clone, Debug)]
pub struct BenchmarkArguments {
    #[arg(long, help = "timed runs per algorithm (default: 10)")]
    pub runs: Option<usize>,

    #[arg(
        long = "algorithm",
        value_enum,
        help = "algorithm to benchmark, repeatable (default: all)"
    )]
    pub algorithms: Vec<AlgorithmArg>,

    #[arg(long, help = "start node for prim (default: first node)")]
    pub prim_start: Option<Label>,

    #[arg(
        long,
        help = "fail on disconnected instances instead of reporting partial trees",
        default_value = "false"
    )]
    pub strict: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GeneratorArguments {
    #[arg(
        long,
        conflicts_with = "instance",
        requires = "generate_edges",
        help = "generate a random connected instance with this many nodes"
    )]
    pub generate_nodes: Option<usize>,

    #[arg(long, requires = "generate_nodes", help = "number of edges of the generated instance")]
    pub generate_edges: Option<usize>,

    #[arg(long, help = "maximum edge weight of the generated instance (default: 100)")]
    pub max_weight: Option<f64>,
}

/// Replaces every `@path` argument by the lines of that file, each line split at spaces.
/// Arguments given directly are passed through untouched.
pub fn expand_argfiles(
    args: impl IntoIterator<Item = OsString>,
) -> std::io::Result<Vec<OsString>> {
    let mut expanded = Vec::new();
    for arg in args {
        if arg.starts_with(argfile::PREFIX) {
            let lines = argfile::expand_args_from(
                std::iter::once(arg),
                argfile::parse_fromfile,
                argfile::PREFIX,
            )?;
            expanded.extend(
                lines
                    .iter()
                    .flat_map(|it| it.split(" "))
                    .filter(|it| !it.is_empty())
                    .map(OsString::from),
            );
        } else {
            expanded.push(arg);
        }
    }
    Ok(expanded)
}

impl AlgorithmArg {
    pub(crate) fn to_algorithm(self, prim_start: Option<Label>) -> Algorithm {
        match self {
            AlgorithmArg::Kruskal => Algorithm::Kruskal,
            AlgorithmArg::Prim => Algorithm::Prim { start: prim_start },
        }
    }
}
