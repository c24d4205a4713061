use std::fmt::{Display, Formatter};

use disjoint_set::UnknownVertex;

use crate::graph::{Edge, Graph, Label, Weight};

pub mod kruskal;
pub mod prim;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MstError {
    #[error(transparent)]
    UnknownVertex(#[from] UnknownVertex<Label>),
    #[error("found {found} tree edges for {num_nodes} nodes, expected {expected}: the graph is disconnected")]
    Disconnected {
        found: usize,
        expected: usize,
        num_nodes: usize,
    },
}

/// Edges accepted by an MST algorithm, in acceptance order, together with their total weight.
///
/// On a disconnected graph this holds fewer than `num_nodes - 1` edges: Kruskal yields a
/// spanning forest, Prim only the tree of the start node's component. [`SpanningTree::is_spanning`]
/// tells the two situations apart.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: Weight,
    num_nodes: usize,
}

impl SpanningTree {
    pub(crate) fn with_capacity(num_nodes: usize) -> Self {
        Self {
            edges: Vec::with_capacity(num_nodes.saturating_sub(1)),
            total_weight: 0.0,
            num_nodes,
        }
    }

    pub(crate) fn accept(&mut self, edge: Edge) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 >= self.num_nodes
    }

    pub fn require_spanning(self) -> Result<Self, MstError> {
        if self.is_spanning() {
            Ok(self)
        } else {
            Err(MstError::Disconnected {
                found: self.edges.len(),
                expected: self.num_nodes - 1,
                num_nodes: self.num_nodes,
            })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Kruskal,
    /// Grows the tree from `start`, or from the first node of the graph when `None`.
    Prim { start: Option<Label> },
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim { .. } => "Prim",
        }
    }

    pub fn run(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        match self {
            Self::Kruskal => kruskal::kruskal(graph),
            Self::Prim { start: None } => Ok(prim::prim(graph)),
            Self::Prim { start: Some(start) } => prim::prim_from(graph, *start),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::graph::generator::generate_connected;
    use crate::graph::tests::{graph_of, triangle};
    use crate::utils::{create_seeded_rng, Tolerance};

    use super::*;

    const PRIM: Algorithm = Algorithm::Prim { start: None };

    #[test]
    fn triangle_has_the_same_tree_for_both_algorithms() {
        let graph = triangle();
        for algorithm in [Algorithm::Kruskal, PRIM] {
            let tree = algorithm.run(&graph).unwrap();
            let mut edges = tree.edges().to_vec();
            edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
            assert_eq!(
                edges,
                vec![Edge::new(2, 3, 2.5), Edge::new(1, 2, 5.0)],
                "{}",
                algorithm
            );
            assert_eq!(tree.total_weight(), 7.5);
            assert!(tree.is_spanning());
        }
    }

    #[test]
    fn single_node_yields_empty_tree() {
        let graph = graph_of(1, &[]);
        for algorithm in [Algorithm::Kruskal, PRIM] {
            let tree = algorithm.run(&graph).unwrap();
            assert_eq!(tree.len(), 0);
            assert_eq!(tree.total_weight(), 0.0);
            assert!(tree.is_spanning());
        }
    }

    #[test]
    fn empty_graph_yields_empty_tree() {
        let graph = Graph::new();
        for algorithm in [Algorithm::Kruskal, PRIM] {
            let tree = algorithm.run(&graph).unwrap();
            assert_eq!(tree.len(), 0);
            assert!(tree.require_spanning().is_ok());
        }
    }

    #[test]
    fn connected_graphs_agree_on_weight() {
        let mut rng = create_seeded_rng(20240501);
        for _ in 0..25 {
            let n = rng.gen_range(2..80);
            let m = rng.gen_range(n - 1..4 * n);
            let graph = generate_connected(n, m, 20.0, &mut rng).unwrap();

            let kruskal = Algorithm::Kruskal.run(&graph).unwrap();
            let prim = PRIM.run(&graph).unwrap();

            assert_eq!(kruskal.len(), n - 1);
            assert_eq!(prim.len(), n - 1);
            assert!(
                (kruskal.total_weight() - prim.total_weight()).abs() < f64::tol(),
                "kruskal {} != prim {}",
                kruskal.total_weight(),
                prim.total_weight()
            );
        }
    }

    #[test]
    fn partial_trees_are_reported_as_disconnected() {
        let graph = graph_of(4, &[(1, 2, 1.0), (3, 4, 1.0)]);

        let prim = PRIM.run(&graph).unwrap();
        assert_eq!(prim.edges(), &[Edge::new(1, 2, 1.0)]);
        assert!(!prim.is_spanning());
        assert_eq!(
            prim.require_spanning(),
            Err(MstError::Disconnected {
                found: 1,
                expected: 3,
                num_nodes: 4
            })
        );

        let kruskal = Algorithm::Kruskal.run(&graph).unwrap();
        assert_eq!(kruskal.len(), 2);
        assert!(kruskal.require_spanning().is_err());
    }

    #[test]
    fn prim_with_unknown_start_fails() {
        let algorithm = Algorithm::Prim { start: Some(42) };
        assert_eq!(
            algorithm.run(&triangle()),
            Err(MstError::UnknownVertex(UnknownVertex(42)))
        );
    }
}
