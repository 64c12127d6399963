use std::collections::BTreeSet;

use graphlens::{
    bfs::Distance,
    dot::{graph_to_dot, tree_to_dot},
    edge::Edge,
    edge_list::to_edge_list,
    graph::Graph,
    tree::Tree,
};

const SOCIAL: &[&str] = &["# social", "A,B", "A,C", "B,C", "B,D", "C,E", "D,E"];

const CITIES: &[&str] = &[
    "Quito,Guayaquil",
    "Quito,Cuenca",
    "Cuenca,Guayaquil",
    "Quito,Loja",
    "Loja,Cuenca",
];

fn s(value: &str) -> String {
    value.to_string()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn social_degrees_and_distances() {
    let graph = Graph::from_edge_list(SOCIAL, false);

    assert_eq!(graph.degree(&s("B")), 3);
    assert_eq!(graph.degree(&s("A")), 2);

    let distances = graph.bfs(&s("A"));
    let expected = [("A", 0), ("B", 1), ("C", 1), ("D", 2), ("E", 2)];
    for (node, hops) in expected {
        assert_eq!(distances[&s(node)], Distance::Hops(hops), "distance to {node}");
    }
}

#[test]
fn path_betweenness() {
    let graph = Graph::from_edge_list(["A,B", "B,C"], false);
    let betweenness = graph.betweenness_centrality();

    assert!(betweenness[&s("B")] > betweenness[&s("A")]);
    assert!(betweenness[&s("B")] > betweenness[&s("C")]);
    assert_eq!(betweenness[&s("A")], 0.0);
    assert_eq!(betweenness[&s("C")], 0.0);
}

#[test]
fn disconnected_pair() {
    let graph = Graph::from_edge_list(["X", "Y"], false);

    assert_eq!(graph.closeness_centrality()[&s("X")], 0.0);
    assert_eq!(graph.bfs(&s("X"))[&s("Y")], Distance::Unreachable);
    assert!(!graph.bfs(&s("X"))[&s("Y")].is_reachable());
}

#[test]
fn single_isolated_node() {
    let graph = Graph::from_edge_list(["lonely"], false);

    assert_eq!(graph.degree_centrality()[&s("lonely")], 0.0);
    assert_eq!(graph.betweenness_centrality()[&s("lonely")], 0.0);
    assert_eq!(graph.closeness_centrality()[&s("lonely")], 0.0);
}

#[test]
fn undirected_adjacency_is_symmetric() {
    let graph = Graph::from_edge_list(SOCIAL.iter().chain(CITIES), false);

    for a in graph.nodes() {
        for b in graph.neighbours(a) {
            assert!(graph.contains_edge(b, a), "{a} -- {b} is not mirrored");
        }
    }
}

#[test]
fn degree_matches_edges() {
    for directed in [false, true] {
        let graph = Graph::from_edge_list(CITIES, directed);
        let edges = graph.edges();

        for node in graph.nodes() {
            let expected = if directed {
                edges.iter().filter(|e| e.source() == node).count()
            } else {
                edges.iter().filter(|e| e.contains(node)).count()
            };
            assert_eq!(graph.degree(node), expected, "degree of {node}");
        }
    }
}

#[test]
fn undirected_distances_are_symmetric() {
    let graph = Graph::from_edge_list(SOCIAL.iter().chain(["F,G"].iter()), false);

    for a in graph.nodes() {
        let from_a = graph.bfs(a);
        for b in graph.nodes() {
            assert_eq!(from_a[b], graph.bfs(b)[a], "{a} <-> {b}");
        }
    }
}

#[test]
fn degree_centrality_sum() {
    let graph = Graph::from_edge_list(CITIES, false);
    let n = graph.node_count() as f64;
    let e = graph.edge_count() as f64;

    let sum: f64 = graph.degree_centrality().values().sum();

    assert!(close(sum, 2.0 * e / (n - 1.0)));
}

#[test]
fn betweenness_is_non_negative_and_label_invariant() {
    let graph = Graph::from_edge_list(SOCIAL, false);
    let relabelled = Graph::from_edge_list(
        SOCIAL[1..].iter().map(|line| {
            line.split(',')
                .map(|node| format!("v{}", node.to_lowercase()))
                .collect::<Vec<_>>()
                .join(",")
        }),
        false,
    );

    let betweenness = graph.betweenness_centrality();
    let relabelled_betweenness = relabelled.betweenness_centrality();

    assert!(betweenness.values().all(|b| *b >= 0.0));
    assert_eq!(betweenness.len(), relabelled_betweenness.len());

    let sum: f64 = betweenness.values().sum();
    let relabelled_sum: f64 = relabelled_betweenness.values().sum();
    assert!(close(sum, relabelled_sum));
}

#[test]
fn social_betweenness_values() {
    let graph = Graph::from_edge_list(SOCIAL, false);
    let betweenness = graph.betweenness_centrality();

    // B alone links A-D and C alone links A-E. B-E and C-D each have two shortest paths.
    assert!(close(betweenness[&s("A")], 0.0));
    assert!(close(betweenness[&s("B")], 1.5));
    assert!(close(betweenness[&s("C")], 1.5));
    assert!(close(betweenness[&s("D")], 0.5));
    assert!(close(betweenness[&s("E")], 0.5));
}

#[test]
fn directed_betweenness_is_not_halved() {
    let graph = Graph::from_edge_list(["A,B", "B,C"], true);

    assert_eq!(graph.betweenness_centrality()[&s("B")], 1.0);
}

#[test]
fn edge_list_round_trip() {
    for directed in [false, true] {
        let extra = ["Z", "B #hub", "#hub,E", ",#alone"];
        let graph = Graph::from_edge_list(SOCIAL.iter().chain(extra.iter()), directed);
        let reparsed = Graph::from_edge_list(to_edge_list(&graph).lines(), directed);

        let edges: BTreeSet<Edge<String>> = graph.edges().into_iter().collect();
        let reparsed_edges: BTreeSet<Edge<String>> = reparsed.edges().into_iter().collect();

        assert_eq!(edges, reparsed_edges);
        assert_eq!(
            graph.nodes().collect::<Vec<_>>(),
            reparsed.nodes().collect::<Vec<_>>()
        );
        assert!(reparsed.contains_node(&s("Z")));
        assert!(reparsed.contains_edge(&s("B"), &s("#hub")));
        assert!(reparsed.contains_node(&s("#alone")));
    }
}

#[test]
fn dot_enumerates_each_element_once() {
    let graph = Graph::from_edge_list(CITIES, false);
    let dot = graph_to_dot(&graph, "Cities");

    assert!(dot.starts_with("graph Cities {\n"));
    assert_eq!(dot.matches(" -- ").count(), graph.edge_count());
    for node in graph.nodes() {
        assert_eq!(dot.matches(&format!("  \"{node}\";\n")).count(), 1);
    }
}

#[test]
fn tree_traversal_and_dot() {
    let tree = Tree::from_parent_child_lines([
        "CEO,CTO",
        "CEO,CFO",
        "CTO,Dev1",
        "CTO,Dev2",
        "CFO,Acct1",
    ]);

    assert_eq!(
        tree.pre_order(),
        vec!["CEO", "CTO", "Dev1", "Dev2", "CFO", "Acct1"]
    );

    let dot = tree_to_dot(&tree, "Org");
    assert!(dot.starts_with("digraph Org {\n  node [shape=circle];\n"));
    assert_eq!(dot.matches(" -> ").count(), 5);
}
