use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::{Graph, GraphError, Label, Weight};

/// Random connected instance with nodes `1..=num_nodes`.
///
/// A random spanning tree (every node links to a random lower label) guarantees connectivity,
/// the remaining `num_edges - (num_nodes - 1)` edges connect random pairs of distinct nodes that
/// are not linked yet, so there are no self-loops or parallel edges. Weights are drawn from
/// `(0, max_weight]` and rounded to two decimals. Asking for fewer edges than a tree needs still
/// yields the tree, asking for more than a complete graph has yields the complete graph.
pub fn generate_connected<R: Rng>(
    num_nodes: usize,
    num_edges: usize,
    max_weight: Weight,
    rng: &mut R,
) -> Result<Graph, GraphError> {
    let complete = num_nodes.saturating_mul(num_nodes.saturating_sub(1)) / 2;
    let num_edges = num_edges
        .min(complete)
        .max(num_nodes.saturating_sub(1));

    let mut pairs: Vec<(Label, Label)> = Vec::with_capacity(num_edges);
    let mut linked: AHashSet<(Label, Label)> = AHashSet::with_capacity(num_edges);
    for to in 2..=num_nodes as Label {
        let from = rng.gen_range(1..to);
        linked.insert((from, to));
        pairs.push((from, to));
    }
    while pairs.len() < num_edges {
        let from = rng.gen_range(1..=num_nodes as Label);
        let to = rng.gen_range(1..=num_nodes as Label);
        if from != to && linked.insert((from.min(to), from.max(to))) {
            pairs.push((from, to));
        }
    }
    pairs.shuffle(rng);

    let mut graph = Graph::with_capacity(num_nodes, pairs.len());
    for label in 1..=num_nodes as Label {
        graph.add_node(label);
    }
    for (from, to) in pairs {
        let weight = (rng.gen::<f64>() * max_weight * 100.0).ceil() / 100.0;
        graph.add_edge(from, to, weight.max(0.01))?;
    }
    Ok(graph)
}
