use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{ensure, Context};

use crate::graph::Graph;

/// Writes `graph` in the edge list format read by `read_graph`. The format implies labels
/// `1..=N`, so graphs labelled differently are refused.
pub fn write_graph<W: Write>(mut out: W, graph: &Graph) -> anyhow::Result<()> {
    for (idx, node) in graph.nodes().iter().enumerate() {
        ensure!(
            node.label() as usize == idx + 1,
            "node {} cannot be written, the edge list format needs labels 1..={} in order",
            node.label(),
            graph.num_nodes()
        );
    }

    writeln!(out, "{}", graph.num_nodes())?;
    writeln!(out, "{}", graph.num_edges())?;
    for edge in graph.edges() {
        writeln!(
            out,
            "{from} {to} {w}",
            from = edge.from,
            to = edge.to,
            w = edge.weight,
        )?;
    }
    out.flush()?;
    Ok(())
}

pub fn save_graph(path: impl AsRef<Path>, graph: &Graph) -> anyhow::Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_graph(BufWriter::new(f), graph)
}
