use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph::{Graph, GraphError, Incidence, Label};

/// Depth-first visit order starting at `start`. Neighbours are explored in edge insertion
/// order, matching a recursive walk, but with an explicit stack.
pub fn depth_first(graph: &Graph, start: Label) -> Result<Vec<Label>, GraphError> {
    let start = graph.node_index(start).ok_or(GraphError::UnknownNode(start))?;
    let incidence = graph.incidence();

    let mut visited = FixedBitSet::with_capacity(graph.num_nodes());
    let mut order = vec![graph.label_of(start)];
    // (node, position of the next incidence entry to look at)
    let mut stack = vec![(start, 0)];
    visited.insert(start);

    while let Some(top) = stack.last_mut() {
        let (node, cursor) = *top;
        let adjacent = incidence.of(node);
        if cursor == adjacent.len() {
            stack.pop();
            continue;
        }
        top.1 += 1;

        let (_, next) = adjacent[cursor];
        if !visited[next] {
            visited.insert(next);
            order.push(graph.label_of(next));
            stack.push((next, 0));
        }
    }

    Ok(order)
}

pub fn breadth_first(graph: &Graph, start: Label) -> Result<Vec<Label>, GraphError> {
    let start = graph.node_index(start).ok_or(GraphError::UnknownNode(start))?;
    let incidence = graph.incidence();
    let mut visited = FixedBitSet::with_capacity(graph.num_nodes());

    Ok(breadth_first_from(graph, &incidence, start, &mut visited))
}

/// Node labels of every connected component, each in breadth-first order. Components are
/// discovered in node insertion order.
pub fn connected_components(graph: &Graph) -> Vec<Vec<Label>> {
    let incidence = graph.incidence();
    let mut visited = FixedBitSet::with_capacity(graph.num_nodes());

    let mut components = vec![];
    for node in 0..graph.num_nodes() {
        if !visited[node] {
            components.push(breadth_first_from(graph, &incidence, node, &mut visited));
        }
    }
    components
}

fn breadth_first_from(
    graph: &Graph,
    incidence: &Incidence,
    start: usize,
    visited: &mut FixedBitSet,
) -> Vec<Label> {
    let mut order = vec![];
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(graph.label_of(current));
        for &(_, next) in incidence.of(current) {
            if !visited[next] {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }
    order
}
