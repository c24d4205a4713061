use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::bench::BenchmarkSettings;
use crate::cli::{AlgorithmArg, ProgramArguments};
use crate::graph::{Label, Weight};
use crate::mst::Algorithm;

const DEFAULT_MAX_WEIGHT: Weight = 100.0;

/// Benchmark plan as read from a toml file. Every field is optional; command line arguments
/// take precedence over the plan.
///
/// ```toml
/// instance = "graphs/Graph.txt"
/// runs = 25
/// algorithms = ["kruskal", "prim"]
/// seed = 42
/// prim_start = 1
/// strict = false
///
/// [generate]
/// nodes = 1000
/// edges = 5000
/// max_weight = 50.0
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchmarkPlan {
    pub instance: Option<String>,
    pub runs: Option<usize>,
    pub algorithms: Option<Vec<AlgorithmArg>>,
    pub seed: Option<i64>,
    pub prim_start: Option<Label>,
    pub strict: Option<bool>,
    pub report: Option<String>,
    pub generate: Option<GeneratorPlan>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorPlan {
    pub nodes: usize,
    pub edges: usize,
    #[serde(default = "default_max_weight")]
    pub max_weight: Weight,
}

fn default_max_weight() -> Weight {
    DEFAULT_MAX_WEIGHT
}

pub fn read_plan(path: impl AsRef<Path>) -> anyhow::Result<BenchmarkPlan> {
    let path = path.as_ref();
    let mut s = String::new();
    File::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?
        .read_to_string(&mut s)?;
    parse_plan(&s).with_context(|| format!("invalid benchmark plan {}", path.display()))
}

pub fn parse_plan(s: &str) -> anyhow::Result<BenchmarkPlan> {
    Ok(toml::from_str(s)?)
}

#[derive(Debug, Clone, PartialEq)]
pub enum InstanceSource {
    File(String),
    Generate(GeneratorPlan),
}

/// Everything `main` needs, after merging command line and plan.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub source: InstanceSource,
    pub seed: Option<i128>,
    pub benchmark: BenchmarkSettings,
    pub report: Option<String>,
}

pub fn resolve(args: &ProgramArguments) -> anyhow::Result<Configuration> {
    let plan = match &args.config {
        Some(path) => read_plan(path)?,
        None => BenchmarkPlan::default(),
    };
    merge(args, plan)
}

pub fn merge(args: &ProgramArguments, plan: BenchmarkPlan) -> anyhow::Result<Configuration> {
    let generator = &args.generator;
    let source = if let Some(instance) = args.instance.clone() {
        InstanceSource::File(instance)
    } else if let (Some(nodes), Some(edges)) = (generator.generate_nodes, generator.generate_edges)
    {
        InstanceSource::Generate(GeneratorPlan {
            nodes,
            edges,
            max_weight: generator.max_weight.unwrap_or(DEFAULT_MAX_WEIGHT),
        })
    } else if let Some(instance) = plan.instance {
        InstanceSource::File(instance)
    } else if let Some(mut generate) = plan.generate {
        if let Some(max_weight) = generator.max_weight {
            generate.max_weight = max_weight;
        }
        InstanceSource::Generate(generate)
    } else {
        bail!("no instance given: use --instance, --generate-nodes/--generate-edges or a benchmark plan");
    };

    let prim_start = args.benchmark.prim_start.or(plan.prim_start);
    let algorithms = if !args.benchmark.algorithms.is_empty() {
        args.benchmark.algorithms.clone()
    } else {
        plan.algorithms
            .unwrap_or_else(|| vec![AlgorithmArg::Kruskal, AlgorithmArg::Prim])
    };
    let defaults = BenchmarkSettings::default();

    Ok(Configuration {
        source,
        seed: args.seed.or(plan.seed.map(i128::from)),
        benchmark: BenchmarkSettings {
            runs: args.benchmark.runs.or(plan.runs).unwrap_or(defaults.runs),
            algorithms: algorithms
                .into_iter()
                .map(|it| it.to_algorithm(prim_start))
                .collect::<Vec<Algorithm>>(),
            strict: args.benchmark.strict || plan.strict.unwrap_or(defaults.strict),
        },
        report: args.report.clone().or(plan.report),
    })
}
