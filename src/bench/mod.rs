use std::time::Duration;

use log::{info, warn};
use took::{Timer, Took};

use crate::graph::Graph;
use crate::mst::{Algorithm, MstError, SpanningTree};
use crate::utils::logging::{format_log_method_tree_timed, format_log_tree};
use crate::utils::stats::Summary;
use crate::utils::{RunTracker, Tolerance};

#[derive(Clone, Debug)]
pub struct BenchmarkSettings {
    /// Timed repetitions per algorithm. At least one run is always made.
    pub runs: usize,
    pub algorithms: Vec<Algorithm>,
    /// Turn partial spanning trees into an error instead of a warning.
    pub strict: bool,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            runs: 10,
            algorithms: vec![Algorithm::Kruskal, Algorithm::Prim { start: None }],
            strict: false,
        }
    }
}

pub struct AlgorithmBenchmark {
    pub algorithm: Algorithm,
    /// Tree of the first run; later runs only contribute their elapsed time.
    pub tree: SpanningTree,
    pub samples: Vec<Duration>,
}

impl AlgorithmBenchmark {
    pub fn summary(&self) -> Option<Summary> {
        Summary::of_durations(&self.samples)
    }
}

pub struct BenchmarkResult {
    pub benchmarks: Vec<AlgorithmBenchmark>,
    pub time: Took,
}

impl BenchmarkResult {
    pub fn num_runs(&self) -> usize {
        self.benchmarks
            .iter()
            .map(|it| it.samples.len())
            .max()
            .unwrap_or(0)
    }
}

/// Runs every algorithm `settings.runs` times on the same graph. Runs are interleaved: run `i`
/// of every algorithm happens before run `i + 1` of any of them.
pub fn run_benchmark(
    graph: &Graph,
    settings: &BenchmarkSettings,
    tracker: &mut impl RunTracker,
) -> Result<BenchmarkResult, MstError> {
    let timer = Timer::new();
    let runs = settings.runs.max(1);

    let mut benchmarks = Vec::with_capacity(settings.algorithms.len());
    for algorithm in settings.algorithms.iter() {
        let (tree, took) = timed_run(algorithm, graph)?;
        info!(
            "{}",
            format_log_method_tree_timed(algorithm.name(), &tree, &took)
        );
        let tree = check_spanning(algorithm, tree, settings.strict)?;
        let elapsed = took.into_std();
        tracker.update(algorithm, 0, &elapsed);
        tracker.inc();

        let mut samples = Vec::with_capacity(runs);
        samples.push(elapsed);
        benchmarks.push(AlgorithmBenchmark {
            algorithm: *algorithm,
            tree,
            samples,
        });
    }

    for run in 1..runs {
        for benchmark in benchmarks.iter_mut() {
            let (_, took) = timed_run(&benchmark.algorithm, graph)?;
            let elapsed = took.into_std();
            tracker.update(&benchmark.algorithm, run, &elapsed);
            tracker.inc();
            benchmark.samples.push(elapsed);
        }
    }

    check_agreement(&benchmarks);

    Ok(BenchmarkResult {
        benchmarks,
        time: timer.took(),
    })
}

fn timed_run(algorithm: &Algorithm, graph: &Graph) -> Result<(SpanningTree, Took), MstError> {
    let timer = Timer::new();
    let tree = algorithm.run(graph)?;
    Ok((tree, timer.took()))
}

fn check_spanning(
    algorithm: &Algorithm,
    tree: SpanningTree,
    strict: bool,
) -> Result<SpanningTree, MstError> {
    if strict {
        tree.require_spanning()
    } else {
        if !tree.is_spanning() {
            warn!(
                "{} produced a partial spanning tree: {}",
                algorithm,
                format_log_tree(&tree)
            );
        }
        Ok(tree)
    }
}

fn check_agreement(benchmarks: &[AlgorithmBenchmark]) {
    let spanning = benchmarks
        .iter()
        .filter(|it| it.tree.is_spanning())
        .collect::<Vec<_>>();
    if let Some((first, rest)) = spanning.split_first() {
        for other in rest {
            let difference = (first.tree.total_weight() - other.tree.total_weight()).abs();
            if difference > f64::tol() {
                warn!(
                    "total weight mismatch: {} {} vs. {} {}",
                    first.algorithm,
                    first.tree.total_weight(),
                    other.algorithm,
                    other.tree.total_weight()
                );
            }
        }
    }
}
