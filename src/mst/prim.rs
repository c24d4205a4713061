use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use disjoint_set::UnknownVertex;
use fixedbitset::FixedBitSet;
use log::debug;

use crate::graph::{Graph, Incidence, Label, Weight};
use crate::mst::{MstError, SpanningTree};

/// Frontier edge leading to `target`, a node that was unvisited when the edge was pushed.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    weight: Weight,
    edge: usize,
    target: usize,
}

// ordered by weight, then by edge insertion index (same tie policy as kruskal)
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.edge.cmp(&other.edge))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Prim's algorithm grown from the first node of the graph.
pub fn prim(graph: &Graph) -> SpanningTree {
    if graph.is_empty() {
        return SpanningTree::with_capacity(0);
    }
    grow(graph, 0)
}

pub fn prim_from(graph: &Graph, start: Label) -> Result<SpanningTree, MstError> {
    let start = graph
        .node_index(start)
        .ok_or(MstError::UnknownVertex(UnknownVertex(start)))?;
    Ok(grow(graph, start))
}

/// Lazy Prim: stale heap entries (target visited in the meantime) are dropped when popped.
/// Stops once every node is visited or the heap runs dry, the latter leaving a tree of the
/// start node's component only.
fn grow(graph: &Graph, start: usize) -> SpanningTree {
    let num_nodes = graph.num_nodes();
    let incidence = graph.incidence();
    let mut tree = SpanningTree::with_capacity(num_nodes);

    let mut visited = FixedBitSet::with_capacity(num_nodes);
    let mut num_visited = 1;
    let mut queue = BinaryHeap::with_capacity(graph.num_edges());

    visited.insert(start);
    push_frontier(&mut queue, graph, &incidence, &visited, start);

    while num_visited < num_nodes {
        let candidate = match queue.pop() {
            Some(Reverse(candidate)) => candidate,
            None => break,
        };
        if visited[candidate.target] {
            continue;
        }

        visited.insert(candidate.target);
        num_visited += 1;
        tree.accept(graph.edges()[candidate.edge]);
        push_frontier(&mut queue, graph, &incidence, &visited, candidate.target);
    }

    if num_visited < num_nodes {
        debug!(
            "prim reached {} of {} nodes from {}",
            num_visited,
            num_nodes,
            graph.label_of(start)
        );
    }
    tree
}

fn push_frontier(
    queue: &mut BinaryHeap<Reverse<Candidate>>,
    graph: &Graph,
    incidence: &Incidence,
    visited: &FixedBitSet,
    node: usize,
) {
    for &(edge, target) in incidence.of(node) {
        if !visited[target] {
            queue.push(Reverse(Candidate {
                weight: graph.edges()[edge].weight,
                edge,
                target,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::tests::{graph_of, triangle};
    use crate::graph::Edge;

    use super::*;

    #[test]
    fn grows_from_the_first_node() {
        let tree = prim(&triangle());
        assert_eq!(tree.edges(), &[Edge::new(1, 2, 5.0), Edge::new(2, 3, 2.5)]);
        assert_eq!(tree.total_weight(), 7.5);
    }

    #[test]
    fn grows_from_a_chosen_node() {
        let tree = prim_from(&triangle(), 3).unwrap();
        assert_eq!(tree.edges(), &[Edge::new(2, 3, 2.5), Edge::new(1, 2, 5.0)]);
    }

    #[test]
    fn first_node_follows_insertion_order() {
        let mut graph = Graph::new();
        for label in [7, 3, 5] {
            graph.add_node(label);
        }
        graph.add_edge(3, 5, 1.0).unwrap();
        graph.add_edge(7, 5, 2.0).unwrap();
        graph.add_edge(7, 3, 3.0).unwrap();

        let tree = prim(&graph);
        assert_eq!(tree.edges(), &[Edge::new(7, 5, 2.0), Edge::new(3, 5, 1.0)]);
    }

    #[test]
    fn ties_prefer_earlier_edges() {
        let graph = graph_of(3, &[(1, 3, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        let tree = prim(&graph);
        assert_eq!(tree.edges(), &[Edge::new(1, 3, 1.0), Edge::new(1, 2, 1.0)]);
    }

    #[test]
    fn ignores_self_loops_and_stale_candidates() {
        let graph = graph_of(
            3,
            &[(1, 1, 0.0), (1, 2, 1.0), (1, 3, 5.0), (2, 3, 1.0), (3, 3, 0.1)],
        );
        let tree = prim(&graph);
        assert_eq!(tree.edges(), &[Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0)]);
    }

    #[test]
    fn disconnected_input_yields_the_start_component() {
        let graph = graph_of(4, &[(1, 2, 1.0), (3, 4, 1.0)]);
        assert_eq!(prim(&graph).edges(), &[Edge::new(1, 2, 1.0)]);
        assert_eq!(
            prim_from(&graph, 4).unwrap().edges(),
            &[Edge::new(3, 4, 1.0)]
        );
    }

    #[test]
    fn unknown_start_is_rejected() {
        assert_eq!(
            prim_from(&triangle(), 0),
            Err(MstError::UnknownVertex(UnknownVertex(0)))
        );
    }
}
