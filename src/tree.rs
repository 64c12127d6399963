//! A module for working with rooted trees built from parent/child pairs.

use std::path::Path;

use tracing::{debug, warn};

use crate::{
    edge_list::{parse_line, Line},
    error,
};

/// A node in the tree arena.
#[derive(Clone, Debug, PartialEq, Eq)]
struct TreeNode<T> {
    value: T,
    /// Arena positions of the children, in insertion order.
    children: Vec<usize>,
}

/// A step of a pre-order walk, nodes identified by arena position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Visit<'a, T> {
    Node(usize, &'a T),
    Link(usize, usize),
}

/// A tree whose nodes live in an arena, in insertion order, and refer to their children by
/// position.
///
/// Nodes are unique by value. Linking a child under several parents, or in a loop, is accepted
/// as is; traversals never descend into a node that is already on the current path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<usize>,
}

impl<T: PartialEq> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Tree<T> {
    /// Creates an empty tree without a root.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Inserts a node if no node holds the same value yet, returning its arena position.
    pub fn add_node(&mut self, value: T) -> usize {
        if let Some(index) = self.position(&value) {
            return index;
        }

        self.nodes.push(TreeNode {
            value,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Links `child` under `parent`, inserting either if needed.
    pub fn add_child(&mut self, parent: T, child: T) {
        let parent = self.add_node(parent);
        let child = self.add_node(child);

        self.nodes[parent].children.push(child);
    }

    /// Makes the node holding `value` the root, inserting it if needed.
    pub fn set_root(&mut self, value: T) {
        let index = self.add_node(value);
        self.root = Some(index);
    }

    pub fn root(&self) -> Option<&T> {
        self.root.map(|index| &self.nodes[index].value)
    }

    /// Returns the children of the node holding `value`, empty if there is no such node.
    pub fn children(&self, value: &T) -> impl Iterator<Item = &T> + '_ {
        self.position(value)
            .map(|index| self.nodes[index].children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|child| &self.nodes[*child].value)
    }

    /// Returns the node count of the tree, including nodes not reachable from the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the values reachable from the root in pre-order: a node, then each of its
    /// children's subtrees in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add_child("root", "a");
    /// tree.add_child("root", "b");
    /// tree.add_child("a", "c");
    /// tree.set_root("root");
    ///
    /// assert_eq!(tree.pre_order(), vec![&"root", &"a", &"c", &"b"]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.nodes.len());
        self.walk(|visit| {
            if let Visit::Node(_, value) = visit {
                values.push(value);
            }
        });
        values
    }

    /// Walks the tree from the root in pre-order, reporting each visited node and then, for each
    /// of its children, the link followed by the child's own subtree.
    ///
    /// A child that is already on the path from the root gets its link reported but is not
    /// visited again, so the walk terminates on any input.
    pub(crate) fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(Visit<'a, T>),
    {
        let Some(root) = self.root else {
            return;
        };

        let mut on_path = vec![false; self.nodes.len()];
        self.walk_from(root, &mut on_path, &mut visit);
    }

    //
    // Private
    //

    fn walk_from<'a, F>(&'a self, index: usize, on_path: &mut [bool], visit: &mut F)
    where
        F: FnMut(Visit<'a, T>),
    {
        let node = &self.nodes[index];
        visit(Visit::Node(index, &node.value));
        on_path[index] = true;

        for &child in &node.children {
            visit(Visit::Link(index, child));

            if on_path[child] {
                warn!(parent = index, child, "cycle in tree input, not descending");
                continue;
            }

            self.walk_from(child, on_path, visit);
        }

        on_path[index] = false;
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.nodes.iter().position(|node| node.value == *value)
    }
}

impl Tree<String> {
    /// Builds a tree from `parent,child` lines, using the edge list tokenizing rules. Lines with
    /// fewer than two fields are ignored.
    ///
    /// The root is the first node, in order of appearance, that is never a child. If every node
    /// is somebody's child the tree has no root.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::tree::Tree;
    ///
    /// let tree = Tree::from_parent_child_lines(["# Tree", "Root,A", "Root,B", "A,C"]);
    ///
    /// assert_eq!(tree.root().map(String::as_str), Some("Root"));
    /// assert_eq!(tree.pre_order(), vec!["Root", "A", "C", "B"]);
    /// ```
    pub fn from_parent_child_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Tree::new();
        let mut is_child: Vec<bool> = Vec::new();

        for raw in lines {
            if let Some(Line::Pair(parent, child)) = parse_line(raw.as_ref()) {
                let parent = tree.add_node(parent.to_owned());
                let child = tree.add_node(child.to_owned());
                tree.nodes[parent].children.push(child);

                is_child.resize(tree.len(), false);
                is_child[child] = true;
            }
        }

        tree.root = is_child.iter().position(|child| !child);

        debug!(
            nodes = tree.len(),
            has_root = tree.root.is_some(),
            "loaded parent/child lines"
        );

        tree
    }

    /// Reads a parent/child file and builds a tree from it.
    pub fn from_path(path: impl AsRef<Path>) -> error::Result<Self> {
        let contents = error::read_to_string(path.as_ref())?;

        Ok(Self::from_parent_child_lines(contents.lines()))
    }
}
