//! Reading and writing the plain-text edge list format.
//!
//! Each line holds an edge or a single node, fields separated by commas or whitespace:
//!
//! ```text
//! # comments and blank lines are skipped
//! A,B
//! B C
//! D
//! ```
//!
//! The first two fields of a line form an edge and any further ones are ignored. A line with a
//! single field declares a node with no edges. Nothing is ever rejected.

use std::{
    fmt::{self, Display},
    hash::Hash,
    path::Path,
};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{error, graph::Graph};

/// A meaningful line of edge list (or parent/child) input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Pair(&'a str, &'a str),
    Single(&'a str),
}

/// Tokenizes a line, returning `None` for blank lines, comments and lines made of separators
/// only.
pub(crate) fn parse_line(raw: &str) -> Option<Line<'_>> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut tokens = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => {
            let ignored = tokens.count();
            if ignored > 0 {
                trace!(line, ignored, "ignoring extra fields");
            }
            Some(Line::Pair(a, b))
        }
        (Some(a), None) => Some(Line::Single(a)),
        _ => {
            trace!(line, "no fields");
            None
        }
    }
}

impl Graph<String> {
    /// Builds a graph from edge list lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    ///
    /// let graph = Graph::from_edge_list(["# friends", "A,B", "B C extra", "D"], false);
    ///
    /// assert_eq!(graph.node_count(), 4);
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.degree(&"D".to_string()), 0);
    /// ```
    pub fn from_edge_list<I, S>(lines: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Graph::new(directed);

        for raw in lines {
            match parse_line(raw.as_ref()) {
                Some(Line::Pair(a, b)) => {
                    graph.add_edge(a.to_owned(), b.to_owned());
                }
                Some(Line::Single(node)) => {
                    graph.add_node(node.to_owned());
                }
                None => {}
            }
        }

        debug!(
            directed,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded edge list"
        );

        graph
    }

    /// Reads an edge list file and builds a graph from it.
    pub fn from_path(path: impl AsRef<Path>, directed: bool) -> error::Result<Self> {
        let contents = error::read_to_string(path.as_ref())?;

        Ok(Self::from_edge_list(contents.lines(), directed))
    }
}

/// Writes a graph back out in the edge list format.
///
/// Edges come first, one `source,target` line each, followed by the nodes that no edge mentions.
/// Reading the output back with the same directedness rebuilds the same nodes and edges.
///
/// # Examples
///
/// ```
/// use graphlens::edge_list::to_edge_list;
/// use graphlens::graph::Graph;
///
/// let mut graph = Graph::undirected();
/// graph.add_edge("b", "a");
/// graph.add_node("c");
///
/// assert_eq!(to_edge_list(&graph), "# undirected\na,b\nc\n");
/// ```
pub fn to_edge_list<T>(graph: &Graph<T>) -> String
where
    T: Clone + Eq + Hash + Ord + Display,
{
    EdgeList(graph).to_string()
}

/// Renders a graph in the edge list format.
struct EdgeList<'a, T>(&'a Graph<T>);

impl<T> Display for EdgeList<'_, T>
where
    T: Clone + Eq + Hash + Ord + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        let kind = if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        };

        let edges = graph.edges();
        let isolated = graph
            .nodes()
            .filter(|node| !edges.iter().any(|edge| edge.contains(node)))
            .collect_vec();

        writeln!(f, "# {kind}")?;
        for edge in &edges {
            write_line(f, edge)?;
        }
        for node in isolated {
            write_line(f, node)?;
        }

        Ok(())
    }
}

/// Writes one record. A record starting with `#` gets a leading separator so it isn't read back
/// as a comment; empty tokens are dropped on parsing.
fn write_line(f: &mut fmt::Formatter<'_>, record: &impl Display) -> fmt::Result {
    let record = record.to_string();
    if record.starts_with('#') {
        f.write_str(",")?;
    }

    writeln!(f, "{record}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    #[test]
    fn parse_line_skips_comments_and_blanks() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# A,B"), None);
        assert_eq!(parse_line("   # indented"), None);
        assert_eq!(parse_line(", ,"), None);
    }

    #[test]
    fn parse_line_separators() {
        assert_eq!(parse_line("A,B"), Some(Line::Pair("A", "B")));
        assert_eq!(parse_line(" A B "), Some(Line::Pair("A", "B")));
        assert_eq!(parse_line("A, B"), Some(Line::Pair("A", "B")));
        assert_eq!(parse_line("A\tB"), Some(Line::Pair("A", "B")));
        assert_eq!(parse_line("A,,B"), Some(Line::Pair("A", "B")));
    }

    #[test]
    fn parse_line_truncates() {
        assert_eq!(parse_line("A,B,C,D"), Some(Line::Pair("A", "B")));
    }

    #[test]
    fn parse_line_single() {
        assert_eq!(parse_line("A"), Some(Line::Single("A")));
        assert_eq!(parse_line("A,"), Some(Line::Single("A")));
    }

    #[test]
    fn parse_line_keeps_hash_inside_tokens() {
        assert_eq!(parse_line("A#1,B"), Some(Line::Pair("A#1", "B")));
    }

    #[test]
    fn from_edge_list() {
        let lines = [
            "# Grafo 1 - social network small",
            "A,B",
            "A,C",
            "B,C",
            "B,D",
            "C,E",
            "D,E",
        ];
        let graph = Graph::from_edge_list(lines, false);

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.degree(&"B".to_string()), 3);
        assert_eq!(graph.degree(&"A".to_string()), 2);
    }

    #[test]
    fn from_edge_list_is_case_sensitive() {
        let graph = Graph::from_edge_list(["a,A"], false);

        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn from_edge_list_directed() {
        let graph = Graph::from_edge_list(["a,b", "b,a", "c"], true);

        assert_eq!(
            graph.edges(),
            vec![
                Edge::new("a".to_string(), "b".to_string()),
                Edge::new("b".to_string(), "a".to_string()),
            ]
        );
        assert!(graph.contains_node(&"c".to_string()));
    }

    #[test]
    fn from_edge_list_owned_lines() {
        let lines = vec!["x y".to_string(), String::new()];
        let graph = Graph::from_edge_list(&lines, false);

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        std::fs::write(&path, "# test\nA,B\r\nB,C\n\nD\n").unwrap();

        let graph = Graph::from_path(&path, false).unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn from_path_missing() {
        let dir = tempfile::tempdir().unwrap();

        assert!(Graph::from_path(dir.path().join("missing.txt"), false).is_err());
    }

    #[test]
    fn to_edge_list_directed() {
        let mut graph = Graph::directed();
        graph.add_edge("b", "a");
        graph.add_edge("a", "b");
        graph.add_node("c");

        assert_eq!(to_edge_list(&graph), "# directed\na,b\nb,a\nc\n");
    }

    #[test]
    fn to_edge_list_keeps_self_loops() {
        let mut graph = Graph::undirected();
        graph.add_edge("a", "a");

        assert_eq!(to_edge_list(&graph), "# undirected\na,a\n");
    }

    #[test]
    fn to_edge_list_escapes_leading_hash() {
        let mut graph = Graph::undirected();
        graph.add_edge("B", "#x");
        graph.add_node("#y");

        assert_eq!(to_edge_list(&graph), "# undirected\n,#x,B\n,#y\n");
    }

    #[test]
    fn round_trip() {
        let lines = [
            "Quito,Guayaquil",
            "Quito,Cuenca",
            "Cuenca,Guayaquil",
            "Loja",
            "Loja,Loja",
            "B #x",
            "#y,B",
            "C,#z",
            ",#solo",
        ];

        for directed in [false, true] {
            let graph = Graph::from_edge_list(lines, directed);
            let reparsed = Graph::from_edge_list(to_edge_list(&graph).lines(), directed);

            assert_eq!(reparsed, graph);
        }
    }
}
