#![allow(dead_code)]

use morphgraph::{EdgeAttrs, Graph, NodeAttrs, NodeIndex};

/// Builds a graph from node labels and `(tail, head, label)` edge triples.
/// Node names are generated as `n0`, `n1`, ….
pub fn graph(labels: &[&str], edges: &[(usize, usize, &str)]) -> Graph {
    let mut g = Graph::new();
    for (i, label) in labels.iter().enumerate() {
        g.add_node(NodeAttrs::labeled(format!("n{i}"), *label));
    }
    for &(tail, head, label) in edges {
        g.add_edge(
            NodeIndex::new(tail),
            NodeIndex::new(head),
            EdgeAttrs::labeled(label),
        );
    }
    g
}

pub fn node_labels(g: &Graph) -> Vec<String> {
    g.nodes().map(|(_, attrs)| attrs.label.clone()).collect()
}

pub fn edge_list(g: &Graph) -> Vec<(usize, usize, String)> {
    g.edges()
        .map(|(_, tail, head, attrs)| (tail.index(), head.index(), attrs.label.clone()))
        .collect()
}
