//! A module for computing betweenness centrality.

use std::collections::VecDeque;

use tracing::trace;

/// This is an implementation of Ulrik Brandes's
/// A Faster Algorithm for Betweenness Centrality
/// http://snap.stanford.edu/class/cs224w-readings/brandes01centrality.pdf
/// page 10, "Algorithm 1: Betweenness centrality in unweighted graphs"
///
/// Adds the dependencies of every node on `index` as a source to `betweenness_count`.
fn betweenness_for_node(index: usize, indices: &[Vec<usize>], betweenness_count: &mut [f64]) {
    let num_nodes = indices.len();

    // Shortest path counts are floats, they grow quickly on dense graphs.
    let mut sigma: Vec<f64> = vec![0.0; num_nodes];
    let mut distance: Vec<Option<usize>> = vec![None; num_nodes];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];
    let mut delta: Vec<f64> = vec![0.0; num_nodes];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut stack: Vec<usize> = Vec::new();

    sigma[index] = 1.0;
    distance[index] = Some(0);
    queue.push_back(index);

    while let Some(v) = queue.pop_front() {
        stack.push(v);

        // Only queued nodes are popped and every queued node has a distance.
        let Some(dist_v) = distance[v] else {
            continue;
        };

        for &w in &indices[v] {
            if distance[w].is_none() {
                distance[w] = Some(dist_v + 1);
                queue.push_back(w);
            }
            if distance[w] == Some(dist_v + 1) {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    // Nodes come off the stack in order of non-increasing distance. Everything on it was reached
    // from the source, so sigma[w] >= 1.
    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != index {
            betweenness_count[w] += delta[w];
        }
    }
}

/// Runs one Brandes pass per source node and sums the dependencies.
///
/// On undirected graphs every shortest path is found once from each end, so the totals are
/// divided by two. Directed totals are returned as is.
pub(crate) fn compute_betweenness(indices: &[Vec<usize>], directed: bool) -> Vec<f64> {
    let num_nodes = indices.len();
    let mut betweenness_count: Vec<f64> = vec![0.0; num_nodes];

    for index in 0..num_nodes {
        betweenness_for_node(index, indices, &mut betweenness_count);
        trace!(index, "betweenness pass");
    }

    if !directed {
        for count in betweenness_count.iter_mut() {
            *count /= 2.0;
        }
    }

    betweenness_count
}
