use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bench::{AlgorithmBenchmark, BenchmarkResult};
use crate::graph::Graph;
use crate::mst::SpanningTree;
use crate::utils::stats::{millis, Summary};

/// Console rendering of a benchmark: timings of every run, the trees of the first run and the
/// statistics per algorithm.
pub fn write_benchmark<W: Write>(out: &mut W, result: &BenchmarkResult) -> std::io::Result<()> {
    writeln!(
        out,
        "Running {} algorithm(s) {} times...",
        result.benchmarks.len(),
        result.num_runs()
    )?;
    writeln!(out)?;

    for run in 0..result.num_runs() {
        writeln!(out, "Run {}:", run + 1)?;
        for benchmark in result.benchmarks.iter() {
            if let Some(sample) = benchmark.samples.get(run) {
                writeln!(out, "{}: {} ms", benchmark.algorithm, millis(sample))?;
            }
        }
        writeln!(out)?;

        if run == 0 {
            for benchmark in result.benchmarks.iter() {
                writeln!(out, "{}'s MST:", benchmark.algorithm)?;
                write_tree(out, &benchmark.tree)?;
                writeln!(out)?;
            }
        }
    }

    for benchmark in result.benchmarks.iter() {
        if let Some(summary) = benchmark.summary() {
            write_statistics(out, benchmark.algorithm.name(), &summary)?;
        }
    }
    Ok(())
}

pub fn write_tree<W: Write>(out: &mut W, tree: &SpanningTree) -> std::io::Result<()> {
    writeln!(out, "Minimum Spanning Tree edges:")?;
    for edge in tree.edges() {
        writeln!(
            out,
            "Edge: {} -- {}, Weight: {}",
            edge.from, edge.to, edge.weight
        )?;
    }
    writeln!(out, "Total MST Weight: {}", tree.total_weight())?;
    if !tree.is_spanning() {
        writeln!(
            out,
            "(partial: {} of {} edges, the graph is disconnected)",
            tree.len(),
            tree.num_nodes().saturating_sub(1)
        )?;
    }
    Ok(())
}

pub fn write_statistics<W: Write>(
    out: &mut W,
    algorithm: &str,
    summary: &Summary,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}'s Algorithm Statistics:", algorithm)?;
    writeln!(out, "Minimum: {} ms", summary.min)?;
    writeln!(out, "Maximum: {} ms", summary.max)?;
    writeln!(out, "Median: {} ms", summary.median)?;
    writeln!(out, "Q1: {} ms", summary.q1)?;
    writeln!(out, "Q3: {} ms", summary.q3)?;
    writeln!(out, "Mean: {} ms", summary.mean)?;
    Ok(())
}

/// One `algorithm,edges,total_weight,median_ms` line per algorithm.
pub fn write_summary_lines<W: Write>(out: &mut W, result: &BenchmarkResult) -> std::io::Result<()> {
    for benchmark in result.benchmarks.iter() {
        writeln!(
            out,
            "{},{},{},{}",
            benchmark.algorithm.name(),
            benchmark.tree.len(),
            benchmark.tree.total_weight(),
            benchmark.summary().map_or(0.0, |it| it.median)
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct InstanceReport<'a> {
    name: &'a str,
    nodes: usize,
    edges: usize,
}

#[derive(Serialize)]
struct AlgorithmReport {
    algorithm: &'static str,
    tree_edges: usize,
    total_weight: f64,
    spanning: bool,
    samples_ms: Vec<f64>,
    statistics: Option<Summary>,
}

impl AlgorithmReport {
    fn of(benchmark: &AlgorithmBenchmark) -> Self {
        Self {
            algorithm: benchmark.algorithm.name(),
            tree_edges: benchmark.tree.len(),
            total_weight: benchmark.tree.total_weight(),
            spanning: benchmark.tree.is_spanning(),
            samples_ms: benchmark.samples.iter().map(millis).collect(),
            statistics: benchmark.summary(),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    datetime: String,
    instance: InstanceReport<'a>,
    runs: usize,
    took_ms: f64,
    algorithms: Vec<AlgorithmReport>,
}

pub fn write_json<W: Write>(
    out: W,
    instance_name: &str,
    graph: &Graph,
    result: &BenchmarkResult,
    datetime: DateTime<Utc>,
) -> anyhow::Result<()> {
    let report = Report {
        datetime: datetime.to_rfc3339(),
        instance: InstanceReport {
            name: instance_name,
            nodes: graph.num_nodes(),
            edges: graph.num_edges(),
        },
        runs: result.num_runs(),
        took_ms: millis(result.time.as_std()),
        algorithms: result.benchmarks.iter().map(AlgorithmReport::of).collect(),
    };
    serde_json::to_writer_pretty(out, &report)?;
    Ok(())
}

pub fn save_json(
    path: impl AsRef<Path>,
    instance_name: &str,
    graph: &Graph,
    result: &BenchmarkResult,
) -> anyhow::Result<()> {
    let f = File::create(path.as_ref())?;
    let mut file = BufWriter::new(f);
    write_json(&mut file, instance_name, graph, result, Utc::now())?;
    file.flush()?;
    Ok(())
}
