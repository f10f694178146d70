use crate::graph::Graph;
use petgraph::dot;
use petgraph::dot::Dot;
use petgraph::visit::EdgeRef;

impl Graph {
    /// Renders the graph in Graphviz DOT format, for debugging.
    pub fn dot(&self) -> String {
        format!(
            "{:?}",
            Dot::with_attr_getters(
                &self.graph,
                &[dot::Config::EdgeNoLabel, dot::Config::NodeNoLabel],
                &|_, edge| {
                    let label = edge.weight().label.escape_debug();
                    format!("label = \"{label}\"")
                },
                &|_, (node, attrs)| {
                    let name = attrs.name.escape_debug();
                    let label = attrs.label.escape_debug();
                    format!("label = \"{}|{name}|{label}\"", node.index())
                }
            )
        )
    }
}

/// Accumulates DOT renderings of successive graphs, e.g. every step of a
/// rewrite sequence, into one `---`-separated dump.
pub struct DotCollector {
    dot: String,
}

impl Default for DotCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl DotCollector {
    pub fn new() -> Self {
        DotCollector { dot: String::new() }
    }

    pub fn collect(&mut self, graph: &Graph) {
        self.collect_raw(&graph.dot());
    }

    pub fn collect_raw(&mut self, raw_dot: &str) {
        if !self.dot.is_empty() {
            self.dot.push_str("\n---\n");
        }
        self.dot.push_str(raw_dot);
    }

    pub fn finalize(&self) -> String {
        self.dot.clone()
    }
}
