use std::path::Path;

use crate::graph::Graph;

pub mod edge_list_reader;
pub mod edge_list_writer;
pub mod report;

pub fn load_instance(path: impl AsRef<Path>) -> anyhow::Result<Graph> {
    edge_list_reader::load_graph(path)
}
