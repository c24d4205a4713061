use took::Took;

use crate::mst::SpanningTree;
use crate::utils::stats::Summary;

pub fn format_log_method_tree_timed(method: &str, tree: &SpanningTree, took: &Took) -> String {
    format!("{method} - {}, took: {took}", format_log_tree(tree))
}

pub fn format_log_tree(tree: &SpanningTree) -> String {
    format!(
        "{}/{}/{} (spanning: {})",
        tree.len(),
        tree.num_nodes(),
        tree.total_weight(),
        tree.is_spanning(),
    )
}

pub fn format_log_summary(summary: &Summary) -> String {
    format!(
        "min {:.4} / q1 {:.4} / median {:.4} / q3 {:.4} / max {:.4} ms",
        summary.min, summary.q1, summary.median, summary.q3, summary.max,
    )
}
