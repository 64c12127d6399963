//! A module for working with graphs.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
    hash::Hash,
};

use nalgebra::DMatrix;
use tracing::debug_span;

use crate::{
    betweenness::compute_betweenness,
    bfs::{shortest_distances, Distance},
    closeness::compute_closeness,
    edge::Edge,
};

/// A directed or undirected graph stored as an adjacency list.
///
/// Nodes are kept in a `BTreeMap`, which means we need the `Ord` bound on `T`. The sorted
/// collection gives every computation the same node order (and therefore the same index
/// positions), which keeps results reproducible and easy to debug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<T> {
    /// Whether edges have a direction, fixed at construction.
    directed: bool,
    /// A mapping of every known node to its distinct out-neighbours. Undirected edges are
    /// mirrored into both sets on insertion.
    adjacency: BTreeMap<T, BTreeSet<T>>,
}

impl<T> Default for Graph<T>
where
    T: Clone + Eq + Hash + Ord,
{
    fn default() -> Self {
        Self::undirected()
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord,
{
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    ///
    /// let graph: Graph<&str> = Graph::new(true);
    /// assert!(graph.is_directed());
    /// ```
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: BTreeMap::new(),
        }
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Inserts a node with no neighbours if it isn't already known. Returns whether the node was
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    ///
    /// assert_eq!(graph.add_node("a"), true);
    /// assert_eq!(graph.add_node("a"), false);
    /// assert_eq!(graph.node_count(), 1);
    /// ```
    pub fn add_node(&mut self, node: T) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }

        self.adjacency.insert(node, BTreeSet::new());
        true
    }

    /// Inserts an edge into the graph, adding any endpoint that isn't known yet. Undirected
    /// edges are recorded on both endpoints. Self-loops are stored as is.
    ///
    /// Returns whether the edge was new.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    ///
    /// assert_eq!(graph.add_edge("a", "b"), true);
    /// assert_eq!(graph.add_edge("b", "a"), false);
    /// assert_eq!(graph.degree(&"a"), 1);
    /// assert_eq!(graph.degree(&"b"), 1);
    /// ```
    pub fn add_edge(&mut self, source: T, target: T) -> bool {
        self.add_node(source.clone());
        self.add_node(target.clone());

        let is_inserted = self.neighbours_mut(&source).insert(target.clone());

        if !self.directed {
            self.neighbours_mut(&target).insert(source);
        }

        is_inserted
    }

    /// Returns an iterator over the known nodes, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.adjacency.keys()
    }

    /// Returns the node count of the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains_node(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Checks if the graph contains an edge. Undirected edges are found from either side.
    pub fn contains_edge(&self, source: &T, target: &T) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|neighbours| neighbours.contains(target))
    }

    /// Returns an iterator over the out-neighbours of a node, empty if the node is unknown.
    pub fn neighbours(&self, node: &T) -> impl Iterator<Item = &T> + '_ {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// Returns every distinct edge once.
    ///
    /// A directed graph yields each stored `(source, target)` pair. An undirected graph yields
    /// each unordered pair once, in its [canonical](Edge::canonical) form.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::edge::Edge;
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("b", "a");
    /// graph.add_edge("a", "b");
    ///
    /// assert_eq!(graph.edges(), vec![Edge::new("a", "b")]);
    /// ```
    pub fn edges(&self) -> Vec<Edge<T>> {
        let mut seen: BTreeSet<Edge<&T>> = BTreeSet::new();
        let mut edges = Vec::new();

        for (source, neighbours) in &self.adjacency {
            for target in neighbours {
                if self.directed {
                    edges.push(Edge::new(source.clone(), target.clone()));
                    continue;
                }

                let key = Edge::new(source, target).canonical();
                if seen.insert(key.clone()) {
                    let (a, b) = key.into_pair();
                    edges.push(Edge::new(a.clone(), b.clone()));
                }
            }
        }

        edges
    }

    /// Returns the edge count of the graph, counting each undirected edge once.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            return self.adjacency.values().map(BTreeSet::len).sum();
        }

        self.adjacency
            .iter()
            .map(|(source, neighbours)| neighbours.iter().filter(|t| source <= *t).count())
            .sum()
    }

    /// Returns the number of neighbours of a node (out-degree for directed graphs), or `0` if
    /// the node is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b");
    /// graph.add_edge("a", "c");
    ///
    /// assert_eq!(graph.degree(&"a"), 2);
    /// assert_eq!(graph.degree(&"z"), 0);
    /// ```
    pub fn degree(&self, node: &T) -> usize {
        self.adjacency.get(node).map_or(0, BTreeSet::len)
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges. Graphs with fewer than two nodes have a density of `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    ///
    /// graph.add_edge("a", "b");
    /// assert_eq!(graph.density(), 1.0);
    ///
    /// graph.add_edge("a", "c");
    /// assert_eq!(graph.density(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.node_count() as f64;
        let ec = self.edge_count() as f64;

        if vc <= 1.0 {
            return 0.0;
        }

        // Total number of possible edges given a node count.
        let pec = vc * (vc - 1.0);

        if self.directed {
            ec / pec
        } else {
            2.0 * ec / pec
        }
    }

    /// Constructs the adjacency matrix for this graph. Rows and columns follow the node order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// graph.add_edge("a", "b");
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              0.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        let n = self.node_count();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for (i, neighbours) in self.indices().iter().enumerate() {
            for j in neighbours {
                matrix[(i, *j)] = 1.0;
            }
        }

        matrix
    }

    /// Constructs the degree matrix for this graph, the diagonal holding each node's degree.
    pub fn degree_matrix(&self) -> DMatrix<f64> {
        let adjacency_matrix = self.adjacency_matrix();
        let n = adjacency_matrix.nrows();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        // The rows are visited in node order, as is the diagonal.
        for (i, row) in adjacency_matrix.row_iter().enumerate() {
            matrix[(i, i)] = row.sum()
        }

        matrix
    }

    /// Returns the hop distance from `source` to every known node.
    ///
    /// An unknown source leaves every node [`Distance::Unreachable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::bfs::Distance;
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b");
    /// graph.add_node("c");
    ///
    /// let distances = graph.bfs(&"a");
    /// assert_eq!(distances[&"a"], Distance::Hops(0));
    /// assert_eq!(distances[&"b"], Distance::Hops(1));
    /// assert_eq!(distances[&"c"], Distance::Unreachable);
    /// ```
    pub fn bfs(&self, source: &T) -> HashMap<T, Distance> {
        let Some(index) = self.position(source) else {
            return self
                .nodes()
                .map(|node| (node.clone(), Distance::Unreachable))
                .collect();
        };

        let distances = shortest_distances(&self.indices(), index);

        self.nodes().cloned().zip(distances).collect()
    }

    /// Returns a mapping of nodes to their normalised degree centrality, `degree / (n - 1)`.
    ///
    /// Every node scores `0.0` when the graph has fewer than two nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b");
    /// graph.add_edge("a", "c");
    ///
    /// let degree_centrality = graph.degree_centrality();
    /// assert_eq!(degree_centrality[&"a"], 1.0);
    /// assert_eq!(degree_centrality[&"b"], 0.5);
    /// ```
    pub fn degree_centrality(&self) -> HashMap<T, f64> {
        let _span = debug_span!("degree_centrality", nodes = self.node_count()).entered();
        let n = self.node_count();

        self.adjacency
            .iter()
            .map(|(node, neighbours)| {
                let centrality = if n > 1 {
                    neighbours.len() as f64 / (n - 1) as f64
                } else {
                    0.0
                };

                (node.clone(), centrality)
            })
            .collect()
    }

    /// Returns a mapping of nodes to their closeness centrality, `(n - 1)` divided by the sum of
    /// the distances to every node reachable from it.
    ///
    /// Unreachable nodes don't contribute to the sum, so a node in a disconnected graph gets a
    /// score from its own component only. A node that reaches nothing scores `0.0`.
    pub fn closeness_centrality(&self) -> HashMap<T, f64> {
        let _span = debug_span!("closeness_centrality", nodes = self.node_count()).entered();

        self.nodes()
            .cloned()
            .zip(compute_closeness(&self.indices()))
            .collect()
    }

    /// Returns a mapping of nodes to their betweenness centrality (Brandes).
    ///
    /// Scores are not normalised. On undirected graphs each shortest path is found once from
    /// either end, so the totals are halved.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b");
    /// graph.add_edge("b", "c");
    ///
    /// let betweenness = graph.betweenness_centrality();
    /// assert_eq!(betweenness[&"a"], 0.0);
    /// assert_eq!(betweenness[&"b"], 1.0);
    /// assert_eq!(betweenness[&"c"], 0.0);
    /// ```
    pub fn betweenness_centrality(&self) -> HashMap<T, f64> {
        let _span = debug_span!("betweenness_centrality", nodes = self.node_count()).entered();

        self.nodes()
            .cloned()
            .zip(compute_betweenness(&self.indices(), self.directed))
            .collect()
    }

    //
    // Private
    //

    /// Returns the position of a node in the node order.
    fn position(&self, node: &T) -> Option<usize> {
        self.adjacency.keys().position(|n| n == node)
    }

    /// Constructs the adjacency list as node positions, the arena the algorithms work on.
    pub(crate) fn indices(&self) -> Vec<Vec<usize>> {
        let index: BTreeMap<&T, usize> = self
            .adjacency
            .keys()
            .enumerate()
            .map(|(i, node)| (node, i))
            .collect();

        // Every neighbour has its own entry in the adjacency map, so the lookups can't miss.
        self.adjacency
            .values()
            .map(|neighbours| neighbours.iter().map(|n| index[n]).collect())
            .collect()
    }

    fn neighbours_mut(&mut self, node: &T) -> &mut BTreeSet<T> {
        self.adjacency.entry(node.clone()).or_default()
    }
}

impl<T> fmt::Display for Graph<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_listing(f, self.directed, self.nodes(), &self.edges())
    }
}

/// Writes the `Nodes:` then `Edges:` listing shared by the graph and report summaries.
pub(crate) fn write_listing<'a, T>(
    f: &mut fmt::Formatter<'_>,
    directed: bool,
    nodes: impl IntoIterator<Item = &'a T>,
    edges: impl IntoIterator<Item = &'a Edge<T>>,
) -> fmt::Result
where
    T: fmt::Display + 'a,
{
    let connector = if directed { "->" } else { "--" };

    writeln!(f, "Nodes:")?;
    for node in nodes {
        writeln!(f, " - {node}")?;
    }

    writeln!(f, "Edges:")?;
    for edge in edges {
        writeln!(f, " - {} {connector} {}", edge.source(), edge.target())?;
    }

    Ok(())
}
