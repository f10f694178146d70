use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;
use std::ops::Index;

pub mod dot;

pub use dot::DotCollector;
pub use petgraph::graph::{EdgeIndex, NodeIndex};

/// Attributes attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeAttrs {
    /// Human-readable identifier, only used in diagnostics.
    pub name: String,
    /// Matching attribute, compared by exact string equality. May be empty,
    /// in which case the node matches any target node.
    pub label: String,
    // Additional attributes can be added here
}

impl NodeAttrs {
    pub fn new(name: impl Into<String>) -> Self {
        NodeAttrs {
            name: name.into(),
            label: String::new(),
        }
    }

    pub fn labeled(name: impl Into<String>, label: impl Into<String>) -> Self {
        NodeAttrs {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Attributes attached to an edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAttrs {
    /// Matching attribute, compared by exact string equality. Non-empty
    /// labels pair up a rule's left- and right-hand side edges.
    pub label: String,
    // Additional attributes can be added here
}

impl EdgeAttrs {
    pub fn unlabeled() -> Self {
        EdgeAttrs {
            label: String::new(),
        }
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        EdgeAttrs {
            label: label.into(),
        }
    }
}

/// A named selection of nodes and edges of a parent graph.
///
/// Subgraphs are views: they hold indices into the owning [`Graph`] and no
/// attribute data of their own. The names `"L"` and `"R"` are reserved for
/// rule authoring.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subgraph {
    pub name: String,
    pub nodes: HashSet<NodeIndex>,
    pub edges: HashSet<EdgeIndex>,
}

impl Subgraph {
    pub fn new(name: impl Into<String>) -> Self {
        Subgraph {
            name: name.into(),
            nodes: HashSet::new(),
            edges: HashSet::new(),
        }
    }

    pub fn with_node(mut self, node: NodeIndex) -> Self {
        self.nodes.insert(node);
        self
    }

    pub fn with_edge(mut self, edge: EdgeIndex) -> Self {
        self.edges.insert(edge);
        self
    }

    pub fn contains_node(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }

    pub fn contains_edge(&self, edge: EdgeIndex) -> bool {
        self.edges.contains(&edge)
    }
}

/// A labeled directed multigraph with named subgraph views.
///
/// Nodes and edges keep their insertion order and nothing is ever removed,
/// so a [`NodeIndex`] or [`EdgeIndex`] stays valid for the life of the
/// value. Edges run `tail -> head`; self-loops and parallel edges are
/// allowed.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    graph: DiGraph<NodeAttrs, EdgeAttrs>,
    subgraphs: Vec<Subgraph>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            graph: DiGraph::new(),
            subgraphs: Vec::new(),
        }
    }

    pub fn add_node(&mut self, attrs: NodeAttrs) -> NodeIndex {
        self.graph.add_node(attrs)
    }

    /// Appends an edge running `tail -> head`. Both endpoints must already
    /// exist in this graph.
    pub fn add_edge(&mut self, tail: NodeIndex, head: NodeIndex, attrs: EdgeAttrs) -> EdgeIndex {
        self.graph.add_edge(tail, head, attrs)
    }

    pub fn add_subgraph(&mut self, subgraph: Subgraph) {
        self.subgraphs.push(subgraph);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_attrs(&self, node: NodeIndex) -> Option<&NodeAttrs> {
        self.graph.node_weight(node)
    }

    pub fn edge_attrs(&self, edge: EdgeIndex) -> Option<&EdgeAttrs> {
        self.graph.edge_weight(edge)
    }

    /// Returns `(tail, head)` of the given edge.
    pub fn endpoints(&self, edge: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(edge)
    }

    /// Nodes in insertion (index) order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &NodeAttrs)> {
        self.graph.node_indices().map(|i| (i, &self.graph[i]))
    }

    /// Edges in insertion (index) order, as `(edge, tail, head, attrs)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, NodeIndex, NodeIndex, &EdgeAttrs)> {
        self.graph
            .edge_references()
            .map(|e| (e.id(), e.source(), e.target(), e.weight()))
    }

    pub fn subgraphs(&self) -> &[Subgraph] {
        &self.subgraphs
    }

    pub fn subgraph(&self, name: &str) -> Option<&Subgraph> {
        self.subgraphs.iter().find(|s| s.name == name)
    }

    pub fn has_edge(&self, tail: NodeIndex, head: NodeIndex) -> bool {
        self.graph.edges_connecting(tail, head).next().is_some()
    }

    /// All edges running `tail -> head`, in ascending edge-index order.
    /// Parallel edges are all reported.
    pub fn edges_between(&self, tail: NodeIndex, head: NodeIndex) -> Vec<EdgeIndex> {
        self.graph
            .edge_references()
            .filter(|e| e.source() == tail && e.target() == head)
            .map(|e| e.id())
            .collect()
    }
}

impl Index<NodeIndex> for Graph {
    type Output = NodeAttrs;

    fn index(&self, index: NodeIndex) -> &NodeAttrs {
        &self.graph[index]
    }
}

impl Index<EdgeIndex> for Graph {
    type Output = EdgeAttrs;

    fn index(&self, index: EdgeIndex) -> &EdgeAttrs {
        &self.graph[index]
    }
}

/// A correspondence from a source graph's indices into a destination graph.
///
/// `node_mapping` is indexed by source node index. `edge_mapping` is indexed
/// by source edge index; each entry lists the destination edges witnessing
/// that source edge, with one entry per parallel destination edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphMapping {
    pub node_mapping: Vec<NodeIndex>,
    pub edge_mapping: Vec<Vec<EdgeIndex>>,
}
