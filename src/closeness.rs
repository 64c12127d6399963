//! A module for computing closeness centrality.

use tracing::trace;

use crate::bfs::shortest_distances;

/// Sums the finite distances from `index` to every other node.
fn closeness_for_node(index: usize, indices: &[Vec<usize>]) -> usize {
    shortest_distances(indices, index)
        .into_iter()
        .filter_map(|distance| distance.hops())
        .sum()
}

/// Computes `(n - 1) / total_path_length` for each node, where the total only covers the nodes
/// reachable from it. Nodes with a zero total (nothing reachable) score `0.0`.
pub(crate) fn compute_closeness(indices: &[Vec<usize>]) -> Vec<f64> {
    let num_nodes = indices.len();

    (0..num_nodes)
        .map(|index| {
            let total_path_length = closeness_for_node(index, indices);
            trace!(index, total_path_length, "closeness pass");

            if total_path_length > 0 {
                (num_nodes - 1) as f64 / total_path_length as f64
            } else {
                0.0
            }
        })
        .collect()
}
