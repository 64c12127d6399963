//! Single-source shortest hop distances in unweighted graphs.

use std::{collections::VecDeque, fmt};

use serde::Serialize;

/// The hop distance between two nodes.
///
/// Nodes that can't be reached get their own variant rather than a sentinel number, so a
/// distance can't silently take part in arithmetic it has no business in. `Hops` orders before
/// `Unreachable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    Hops(usize),
    Unreachable,
}

impl Distance {
    /// Returns the hop count, if the node is reachable.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::bfs::Distance;
    ///
    /// assert_eq!(Distance::Hops(2).hops(), Some(2));
    /// assert_eq!(Distance::Unreachable.hops(), None);
    /// ```
    pub fn hops(self) -> Option<usize> {
        match self {
            Self::Hops(hops) => Some(hops),
            Self::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Hops(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hops(hops) => write!(f, "{hops}"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Expands the frontier level by level from `source`. A node is enqueued the first time it is
/// touched and never again, which makes each recorded distance minimal.
pub(crate) fn shortest_distances(indices: &[Vec<usize>], source: usize) -> Vec<Distance> {
    let mut distances = vec![Distance::Unreachable; indices.len()];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    distances[source] = Distance::Hops(0);
    queue.push_back((source, 0));

    while let Some((current, hops)) = queue.pop_front() {
        for &next in &indices[current] {
            if distances[next] == Distance::Unreachable {
                distances[next] = Distance::Hops(hops + 1);
                queue.push_back((next, hops + 1));
            }
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    use Distance::{Hops, Unreachable};

    #[test]
    fn source_only() {
        assert_eq!(shortest_distances(&[vec![]], 0), vec![Hops(0)]);
    }

    #[test]
    fn path() {
        // 0 - 1 - 2
        let indices = vec![vec![1], vec![0, 2], vec![1]];

        assert_eq!(shortest_distances(&indices, 0), vec![Hops(0), Hops(1), Hops(2)]);
        assert_eq!(shortest_distances(&indices, 1), vec![Hops(1), Hops(0), Hops(1)]);
    }

    #[test]
    fn shortcut_wins() {
        // 0 -> 1 -> 2 -> 3 and 0 -> 3.
        let indices = vec![vec![1, 3], vec![2], vec![3], vec![]];

        assert_eq!(
            shortest_distances(&indices, 0),
            vec![Hops(0), Hops(1), Hops(2), Hops(1)]
        );
    }

    #[test]
    fn unreachable() {
        // 0 -> 1, 2 on its own.
        let indices = vec![vec![1], vec![], vec![]];

        assert_eq!(
            shortest_distances(&indices, 1),
            vec![Unreachable, Hops(0), Unreachable]
        );
        assert_eq!(
            shortest_distances(&indices, 0),
            vec![Hops(0), Hops(1), Unreachable]
        );
    }

    #[test]
    fn self_loop_keeps_source_at_zero() {
        let indices = vec![vec![0, 1], vec![0]];

        assert_eq!(shortest_distances(&indices, 0), vec![Hops(0), Hops(1)]);
    }

    #[test]
    fn ordering() {
        assert!(Hops(0) < Hops(1));
        assert!(Hops(usize::MAX) < Unreachable);
    }

    #[test]
    fn display() {
        assert_eq!(Hops(3).to_string(), "3");
        assert_eq!(Unreachable.to_string(), "unreachable");
    }

    #[test]
    fn serialize() {
        assert_eq!(serde_json::to_string(&Hops(2)).unwrap(), r#"{"hops":2}"#);
        assert_eq!(serde_json::to_string(&Unreachable).unwrap(), r#""unreachable""#);
    }
}
