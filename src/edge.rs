//! A module for working with edges.

use std::fmt;

use serde::Serialize;

/// A pair of vertices representing a graph edge.
///
/// The pair is ordered: whether `source`-`target` carries a direction is up to the graph the
/// edge belongs to. Undirected graphs only ever hand out edges in [canonical](Edge::canonical)
/// form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge<T> {
    source: T,
    target: T,
}

impl<T> Edge<T> {
    /// Creates a new edge from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_ne!(edge, Edge::new("b", "a"));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Returns the first vertex forming the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.source(), &"a");
    /// ```
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the second vertex forming the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.target(), &"b");
    /// ```
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns whether the edge contains the given vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    ///
    /// assert_eq!(edge.contains(&"a"), true);
    /// assert_eq!(edge.contains(&"b"), true);
    /// assert_eq!(edge.contains(&"c"), false);
    /// ```
    pub fn contains(&self, vertex: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == vertex || self.target() == vertex
    }

    /// Swaps the endpoints.
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// Orders the endpoints so that `source <= target`, the key used to identify an undirected
    /// edge regardless of the side it was read from.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::edge::Edge;
    ///
    /// assert_eq!(Edge::new("b", "a").canonical(), Edge::new("a", "b"));
    /// assert_eq!(Edge::new("a", "b").canonical(), Edge::new("a", "b"));
    /// ```
    pub fn canonical(self) -> Self
    where
        T: Ord,
    {
        if self.source > self.target {
            self.reversed()
        } else {
            self
        }
    }

    /// Splits the edge into its `(source, target)` pair.
    pub fn into_pair(self) -> (T, T) {
        (self.source, self.target)
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.source, self.target)
    }
}
