//! Graphlens is a small toolkit for analysing network graphs read from plain-text edge lists, and
//! for rendering graphs and parent/child trees to Graphviz DOT.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure, an adjacency list that
//! is either directed or undirected. Once built, shortest hop distances and degree, closeness and
//! betweenness centrality can be computed from it.
//!
//! ```rust
//! use graphlens::bfs::Distance;
//! use graphlens::dot::graph_to_dot;
//! use graphlens::graph::Graph;
//!
//! // Build the graph from an edge list, one edge per line.
//! let graph = Graph::from_edge_list(["# a small network", "A,B", "A,C", "B,C", "B,D"], false);
//!
//! // Compute some metrics on that state of the graph.
//! let distances = graph.bfs(&"A".to_string());
//! assert_eq!(distances[&"D".to_string()], Distance::Hops(2));
//!
//! let betweenness = graph.betweenness_centrality();
//! assert_eq!(betweenness[&"B".to_string()], 2.0);
//!
//! // Graphs can be exported for rendering...
//! println!("{}", graph_to_dot(&graph, "G"));
//! // ...outputs:
//! // graph G {
//! //   "A";
//! //   "B";
//! //   ...
//! //   "B" -- "D";
//! // }
//! ```
//!
//! Graphs are built first and analysed after: every measurement takes the graph by shared
//! reference and is computed from scratch on the current state.

/// Builds an undirected graph from paths, each consecutive pair of a path forming an edge.
#[cfg(test)]
macro_rules! graph {
    ($($path:expr),*) => {{
        #[allow(unused_mut)]
        let mut graph = $crate::graph::Graph::undirected();

        $(
            let mut iter = $path.into_iter().peekable();
            while let (Some(a), Some(b)) = (iter.next(), iter.peek()) {
                graph.add_edge(a, *b);
            }
        )*

        graph
    }}
}

mod betweenness;
pub mod bfs;
mod closeness;
pub mod dot;
pub mod edge;
pub mod edge_list;
pub mod error;
pub mod graph;
pub mod report;
pub mod tree;

pub use error::{Error, Result};
