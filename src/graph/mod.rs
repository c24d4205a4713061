use std::fmt::{Display, Formatter};

use ahash::AHashMap;

pub mod generator;
pub mod traversal;

pub type Label = u32;
pub type Weight = f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    label: Label,
}

impl Node {
    pub fn label(&self) -> Label {
        self.label
    }
}

/// Undirected, weighted connection between two node labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: Label,
    pub to: Label,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: Label, to: Label, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --({})--> {}", self.from, self.weight, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("edge {from} -- {to} references node {missing}, which is not part of the graph")]
    InvalidReference {
        from: Label,
        to: Label,
        missing: Label,
    },
    #[error("node {0} is not part of the graph")]
    UnknownNode(Label),
}

/// Node set plus edge list, both kept in insertion order.
///
/// Besides the labels, every edge remembers the dense indices of its endpoints so that the
/// algorithms can work on plain vectors and bitsets instead of hashing labels.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: AHashMap<Label, usize>,
    edges: Vec<Edge>,
    endpoints: Vec<(usize, usize)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            index: AHashMap::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            endpoints: Vec::with_capacity(num_edges),
        }
    }

    pub fn add_node(&mut self, label: Label) {
        if !self.index.contains_key(&label) {
            self.index.insert(label, self.nodes.len());
            self.nodes.push(Node { label });
        }
    }

    pub fn add_edge(&mut self, from: Label, to: Label, weight: Weight) -> Result<(), GraphError> {
        let missing = |label| GraphError::InvalidReference { from, to, missing: label };
        let from_idx = self.node_index(from).ok_or_else(|| missing(from))?;
        let to_idx = self.node_index(to).ok_or_else(|| missing(to))?;

        self.edges.push(Edge::new(from, to, weight));
        self.endpoints.push((from_idx, to_idx));
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_index(&self, label: Label) -> Option<usize> {
        self.index.get(&label).copied()
    }

    pub fn label_of(&self, node_idx: usize) -> Label {
        self.nodes[node_idx].label
    }

    pub fn incidence(&self) -> Incidence {
        Incidence::build(self.nodes.len(), &self.endpoints)
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph:")?;
        for edge in self.edges.iter() {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}

/// Compressed incidence lists: for each node the `(edge id, opposite node)` pairs of the
/// edges touching it, in edge insertion order. A self-loop is listed once.
#[derive(Clone, Debug)]
pub struct Incidence {
    row_ptr: Vec<usize>,
    entries: Vec<(usize, usize)>,
}

impl Incidence {
    fn build(num_nodes: usize, endpoints: &[(usize, usize)]) -> Self {
        let mut row_ptr = vec![0; num_nodes + 1];
        for &(from, to) in endpoints {
            row_ptr[from + 1] += 1;
            if from != to {
                row_ptr[to + 1] += 1;
            }
        }
        for i in 0..num_nodes {
            row_ptr[i + 1] += row_ptr[i];
        }

        let mut next = row_ptr.clone();
        let mut entries = vec![(0, 0); row_ptr[num_nodes]];
        for (edge_id, &(from, to)) in endpoints.iter().enumerate() {
            entries[next[from]] = (edge_id, to);
            next[from] += 1;
            if from != to {
                entries[next[to]] = (edge_id, from);
                next[to] += 1;
            }
        }

        Self { row_ptr, entries }
    }

    pub fn of(&self, node_idx: usize) -> &[(usize, usize)] {
        &self.entries[self.row_ptr[node_idx]..self.row_ptr[node_idx + 1]]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// `{1,2,3}` with `(1,2,5.0)`, `(1,3,10.0)`, `(2,3,2.5)`.
    pub(crate) fn triangle() -> Graph {
        graph_of(3, &[(1, 2, 5.0), (1, 3, 10.0), (2, 3, 2.5)])
    }

    pub(crate) fn graph_of(num_nodes: Label, edges: &[(Label, Label, Weight)]) -> Graph {
        let mut graph = Graph::new();
        for label in 1..=num_nodes {
            graph.add_node(label);
        }
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight).unwrap();
        }
        graph
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_node(4);
        graph.add_node(2);
        graph.add_node(4);

        assert_eq!(graph.num_nodes(), 2);
        let labels: Vec<Label> = graph.nodes().iter().map(|it| it.label()).collect();
        assert_eq!(labels, vec![4, 2]);
        assert_eq!(graph.node_index(2), Some(1));
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut graph = graph_of(2, &[]);
        assert_eq!(
            graph.add_edge(1, 3, 1.0),
            Err(GraphError::InvalidReference {
                from: 1,
                to: 3,
                missing: 3
            })
        );
        assert_eq!(
            graph.add_edge(0, 2, 1.0),
            Err(GraphError::InvalidReference {
                from: 0,
                to: 2,
                missing: 0
            })
        );
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn keeps_parallel_edges_self_loops_and_negative_weights() {
        let graph = graph_of(2, &[(1, 2, 3.0), (2, 1, 1.0), (2, 2, 0.5), (1, 2, -4.0)]);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.edges()[2], Edge::new(2, 2, 0.5));
        assert_eq!(graph.edges()[3].weight, -4.0);
    }

    #[test]
    fn incidence_lists_follow_insertion_order() {
        let graph = graph_of(3, &[(1, 2, 3.0), (3, 1, 1.0), (2, 2, 0.5), (2, 3, 2.0)]);
        let incidence = graph.incidence();

        assert_eq!(incidence.of(0), &[(0, 1), (1, 2)]);
        assert_eq!(incidence.of(1), &[(0, 0), (2, 1), (3, 2)]);
        assert_eq!(incidence.of(2), &[(1, 0), (3, 1)]);
    }

    #[test]
    fn display_lists_edges() {
        let graph = graph_of(2, &[(1, 2, 2.5)]);
        assert_eq!(graph.to_string(), "Graph:\n1 --(2.5)--> 2\n");
    }
}
