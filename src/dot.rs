//! Graphviz DOT export for graphs and trees.
//!
//! The output can be rendered with `dot -Tpng graph.dot -o graph.png`.

use std::{
    collections::HashMap,
    fmt::{self, Display},
    hash::Hash,
    path::{Path, PathBuf},
};

use crate::{
    graph::Graph,
    tree::{Tree, Visit},
};

/// Renders a graph as a DOT `graph` (undirected) or `digraph` (directed) named `name`.
///
/// Every node is declared once, in node order, followed by one line per edge.
///
/// # Examples
///
/// ```
/// use graphlens::dot::graph_to_dot;
/// use graphlens::graph::Graph;
///
/// let mut graph = Graph::undirected();
/// graph.add_edge("a", "b");
///
/// assert_eq!(
///     graph_to_dot(&graph, "G"),
///     "graph G {\n  \"a\";\n  \"b\";\n  \"a\" -- \"b\";\n}\n"
/// );
/// ```
pub fn graph_to_dot<T>(graph: &Graph<T>, name: &str) -> String
where
    T: Clone + Eq + Hash + Ord + Display,
{
    GraphDot { graph, name }.to_string()
}

/// Renders the part of a tree reachable from its root as a DOT `digraph` named `name`.
///
/// Nodes are named `n1`, `n2`, ... in the order the pre-order walk first reaches them and
/// carry their value as label. A tree without a root renders as an empty digraph.
///
/// # Examples
///
/// ```
/// use graphlens::dot::tree_to_dot;
/// use graphlens::tree::Tree;
///
/// let tree = Tree::from_parent_child_lines(["Root,A"]);
///
/// assert_eq!(
///     tree_to_dot(&tree, "T"),
///     "digraph T {\n  node [shape=circle];\n  n1 [label=\"Root\"];\n  n1 -> n2;\n  n2 [label=\"A\"];\n}\n"
/// );
/// ```
pub fn tree_to_dot<T>(tree: &Tree<T>, name: &str) -> String
where
    T: PartialEq + Display,
{
    TreeDot { tree, name }.to_string()
}

struct GraphDot<'a, T> {
    graph: &'a Graph<T>,
    name: &'a str,
}

impl<T> fmt::Display for GraphDot<'_, T>
where
    T: Clone + Eq + Hash + Ord + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (header, connector) = if self.graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(f, "{header} {} {{", self.name)?;
        for node in self.graph.nodes() {
            writeln!(f, "  {};", quoted(node))?;
        }
        for edge in self.graph.edges() {
            writeln!(
                f,
                "  {} {connector} {};",
                quoted(edge.source()),
                quoted(edge.target())
            )?;
        }
        writeln!(f, "}}")
    }
}

struct TreeDot<'a, T> {
    tree: &'a Tree<T>,
    name: &'a str,
}

impl<T> fmt::Display for TreeDot<'_, T>
where
    T: PartialEq + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut visits = Vec::new();
        self.tree.walk(|visit| visits.push(visit));

        // Arena position to DOT id, in order of first appearance.
        let mut ids: HashMap<usize, usize> = HashMap::new();
        let mut id = |index: usize| {
            let next = ids.len() + 1;
            *ids.entry(index).or_insert(next)
        };

        writeln!(f, "digraph {} {{", self.name)?;
        writeln!(f, "  node [shape=circle];")?;
        for visit in visits {
            match visit {
                Visit::Node(index, value) => {
                    writeln!(f, "  n{} [label={}];", id(index), quoted(value))?
                }
                Visit::Link(parent, child) => {
                    let parent = id(parent);
                    writeln!(f, "  n{parent} -> n{};", id(child))?
                }
            }
        }
        writeln!(f, "}}")
    }
}

/// Returns where to write the DOT rendering of `input` when no output path is given: the input
/// path with a `.dot` extension, or with `.out.dot` if the input is already a `.dot` file.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use graphlens::dot::default_output_path;
///
/// assert_eq!(default_output_path(Path::new("graph.txt")), Path::new("graph.dot"));
/// assert_eq!(default_output_path(Path::new("graph.dot")), Path::new("graph.out.dot"));
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|extension| extension == "dot") {
        input.with_extension("out.dot")
    } else {
        input.with_extension("dot")
    }
}

/// Quotes an identifier, escaping backslashes and double quotes.
fn quoted(value: &impl Display) -> String {
    let escaped = value.to_string().replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
