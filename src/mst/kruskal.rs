use disjoint_set::DisjointSet;
use log::debug;

use crate::graph::{Edge, Graph, Label};
use crate::mst::{MstError, SpanningTree};

/// Kruskal's algorithm.
///
/// Edges are visited by ascending weight; the sort is stable, so equal weights keep their
/// insertion order and the result is deterministic. An edge is accepted when its endpoints
/// still belong to different components. Self-loops never pass that test. The whole edge list
/// is scanned, there is no early exit after `num_nodes - 1` acceptances.
pub fn kruskal(graph: &Graph) -> Result<SpanningTree, MstError> {
    let mut components: DisjointSet<Label> = DisjointSet::with_capacity(graph.num_nodes());
    for node in graph.nodes() {
        components.make_set(node.label());
    }

    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut tree = SpanningTree::with_capacity(graph.num_nodes());
    for edge in sorted {
        let from_root = components.find(edge.from)?;
        let to_root = components.find(edge.to)?;
        if from_root != to_root {
            tree.accept(*edge);
            components.union(from_root, to_root)?;
        }
    }

    debug!(
        "kruskal accepted {} of {} edges, {} component(s) left",
        tree.len(),
        graph.num_edges(),
        components.num_sets()
    );
    Ok(tree)
}
