//! A summary of every measurement on a graph, for printing or serializing.

use std::{collections::HashMap, fmt};

use itertools::Itertools;
use serde::Serialize;

use crate::{
    edge::Edge,
    graph::{write_listing, Graph},
};

/// A node's score for one centrality measure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Score {
    pub node: String,
    pub value: f64,
}

/// The measurements of a graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub directed: bool,
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub nodes: Vec<String>,
    pub edges: Vec<Edge<String>>,
    /// Scores are sorted by descending value, ties by node.
    pub degree_centrality: Vec<Score>,
    pub closeness_centrality: Vec<Score>,
    pub betweenness_centrality: Vec<Score>,
}

impl Report {
    /// Runs every measurement on the graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    /// use graphlens::report::Report;
    ///
    /// let graph = Graph::from_edge_list(["A,B", "B,C"], false);
    /// let report = Report::from_graph(&graph);
    ///
    /// assert_eq!(report.betweenness_centrality[0].node, "B");
    /// assert_eq!(report.betweenness_centrality[0].value, 1.0);
    /// ```
    pub fn from_graph(graph: &Graph<String>) -> Self {
        Self {
            directed: graph.is_directed(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            density: graph.density(),
            nodes: graph.nodes().cloned().collect(),
            edges: graph.edges(),
            degree_centrality: ranked(graph.degree_centrality()),
            closeness_centrality: ranked(graph.closeness_centrality()),
            betweenness_centrality: ranked(graph.betweenness_centrality()),
        }
    }
}

/// Sorts scores by descending value, breaking ties by node so the order is stable.
fn ranked(scores: HashMap<String, f64>) -> Vec<Score> {
    scores
        .into_iter()
        .sorted_by(|(a, x), (b, y)| y.total_cmp(x).then_with(|| a.cmp(b)))
        .map(|(node, value)| Score { node, value })
        .collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_listing(f, self.directed, &self.nodes, &self.edges)?;
        writeln!(
            f,
            "{} nodes, {} edges, density {:.3}",
            self.node_count, self.edge_count, self.density
        )?;

        let tables = [
            ("Degree centrality (normalised)", &self.degree_centrality),
            ("Closeness centrality", &self.closeness_centrality),
            ("Betweenness centrality", &self.betweenness_centrality),
        ];
        for (title, scores) in tables {
            writeln!(f, "{title}:")?;
            for Score { node, value } in scores {
                writeln!(f, " - {node}: {value:.3}")?;
            }
        }

        Ok(())
    }
}
