use crate::graph::{EdgeAttrs, EdgeIndex, Graph, GraphMapping, NodeIndex};
use crate::util::log;
use derive_more::Display;
use error_stack::{Result, bail, report};
use std::collections::HashMap;
use thiserror::Error;

/// Name of the subgraph holding a rule's left-hand side.
pub const LHS_SUBGRAPH: &str = "L";
/// Name of the subgraph holding a rule's right-hand side.
pub const RHS_SUBGRAPH: &str = "R";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum RuleSide {
    #[display("LHS")]
    Lhs,
    #[display("RHS")]
    Rhs,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("graph must contain subgraphs named \"L\" and \"R\"")]
    MissingRuleSubgraphs,
    #[error("node \"{0}\" is in neither the LHS nor the RHS")]
    NodeInNeitherSide(String),
    #[error("edge {0} is in neither the LHS nor the RHS")]
    EdgeInNeitherSide(usize),
    #[error("edge {0} is in both the \"L\" and \"R\" subgraphs, use separate edges with the same label instead")]
    EdgeInBothSides(usize),
    #[error("edge {edge} endpoint \"{node}\" is not in the {side}")]
    EdgeEndpointOutsideSide {
        edge: usize,
        node: String,
        side: RuleSide,
    },
    #[error("edge label \"{label}\" is used more than once in the {side}")]
    DuplicateEdgeLabel { label: String, side: RuleSide },
    #[error("preserved edge label \"{0}\" has an endpoint that is not itself preserved")]
    PreservedEdgeNotAnchored(String),
}

pub type RuleResult<T> = Result<T, RuleError>;

/// A compiled double-pushout rewrite rule.
///
/// `common` names what survives the rewrite: its nodes inject into both
/// sides through `common_to_lhs` / `common_to_rhs`, and each of its edges
/// pairs the one `lhs` edge with the one `rhs` edge carrying the same label
/// (both as singleton lists in the respective edge mapping).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub lhs: Graph,
    pub rhs: Graph,
    pub common: Graph,
    pub common_to_lhs: GraphMapping,
    pub common_to_rhs: GraphMapping,
}

/// Compiles an annotated graph into a [`Rule`].
///
/// The graph must carry subgraphs named `"L"` and `"R"`. Every node has to
/// belong to at least one of the two; nodes in both become the rule's
/// preserved interface. Every edge has to belong to exactly one side, and a
/// non-empty edge label may appear at most once per side. A label appearing
/// on both sides marks that edge as preserved across the rewrite.
pub fn compile_rule(graph: &Graph) -> RuleResult<Rule> {
    let (Some(lhs_subgraph), Some(rhs_subgraph)) =
        (graph.subgraph(LHS_SUBGRAPH), graph.subgraph(RHS_SUBGRAPH))
    else {
        bail!(RuleError::MissingRuleSubgraphs);
    };

    let mut rule = Rule::default();

    // Dense translation tables from annotated-graph indices to per-side
    // indices, None where a node is absent from that side.
    let mut graph_to_lhs: Vec<Option<NodeIndex>> = vec![None; graph.node_count()];
    let mut graph_to_rhs: Vec<Option<NodeIndex>> = vec![None; graph.node_count()];

    for (i, attrs) in graph.nodes() {
        let in_lhs = lhs_subgraph.contains_node(i);
        let in_rhs = rhs_subgraph.contains_node(i);
        if !in_lhs && !in_rhs {
            bail!(RuleError::NodeInNeitherSide(attrs.name.clone()));
        }
        if in_lhs {
            graph_to_lhs[i.index()] = Some(rule.lhs.add_node(attrs.clone()));
        }
        if in_rhs {
            graph_to_rhs[i.index()] = Some(rule.rhs.add_node(attrs.clone()));
        }
        if let (Some(lhs_node), Some(rhs_node)) = (graph_to_lhs[i.index()], graph_to_rhs[i.index()])
        {
            rule.common.add_node(attrs.clone());
            rule.common_to_lhs.node_mapping.push(lhs_node);
            rule.common_to_rhs.node_mapping.push(rhs_node);
        }
    }

    let mut lhs_label_to_edge: HashMap<String, EdgeIndex> = HashMap::new();
    let mut rhs_label_to_edge: HashMap<String, EdgeIndex> = HashMap::new();

    for (m, tail, head, attrs) in graph.edges() {
        let in_lhs = lhs_subgraph.contains_edge(m);
        let in_rhs = rhs_subgraph.contains_edge(m);
        if in_lhs && in_rhs {
            // Possible using nested subgraphs, but not expressible as a rule
            bail!(RuleError::EdgeInBothSides(m.index()));
        }
        if !in_lhs && !in_rhs {
            bail!(RuleError::EdgeInNeitherSide(m.index()));
        }

        let (side, side_graph, table, label_map) = if in_lhs {
            (
                RuleSide::Lhs,
                &mut rule.lhs,
                &graph_to_lhs,
                &mut lhs_label_to_edge,
            )
        } else {
            (
                RuleSide::Rhs,
                &mut rule.rhs,
                &graph_to_rhs,
                &mut rhs_label_to_edge,
            )
        };

        let endpoint_in_side = |node: NodeIndex| {
            table[node.index()].ok_or_else(|| {
                report!(RuleError::EdgeEndpointOutsideSide {
                    edge: m.index(),
                    node: graph[node].name.clone(),
                    side,
                })
            })
        };
        let side_tail = endpoint_in_side(tail)?;
        let side_head = endpoint_in_side(head)?;
        let side_edge = side_graph.add_edge(side_tail, side_head, attrs.clone());

        if !attrs.label.is_empty()
            && label_map.insert(attrs.label.clone(), side_edge).is_some()
        {
            bail!(RuleError::DuplicateEdgeLabel {
                label: attrs.label.clone(),
                side,
            });
        }
    }

    // Inverse of common_to_lhs for anchoring preserved edges below.
    let mut lhs_to_common: Vec<Option<NodeIndex>> = vec![None; rule.lhs.node_count()];
    for (c, lhs_node) in rule.common_to_lhs.node_mapping.iter().enumerate() {
        lhs_to_common[lhs_node.index()] = Some(NodeIndex::new(c));
    }

    // A label on both sides pairs the two edges into one preserved edge.
    // Emitted in LHS edge order, which keeps compilation deterministic.
    let preserved: Vec<(EdgeIndex, NodeIndex, NodeIndex, String)> = rule
        .lhs
        .edges()
        .filter(|(_, _, _, attrs)| rhs_label_to_edge.contains_key(&attrs.label))
        .map(|(e, tail, head, attrs)| (e, tail, head, attrs.label.clone()))
        .collect();
    for (lhs_edge, lhs_tail, lhs_head, label) in preserved {
        let rhs_edge = rhs_label_to_edge[&label];
        let (Some(common_tail), Some(common_head)) = (
            lhs_to_common[lhs_tail.index()],
            lhs_to_common[lhs_head.index()],
        ) else {
            // The rewrite would leave the carried-over target edges dangling.
            bail!(RuleError::PreservedEdgeNotAnchored(label));
        };
        rule.common
            .add_edge(common_tail, common_head, EdgeAttrs::labeled(label));
        rule.common_to_lhs.edge_mapping.push(vec![lhs_edge]);
        rule.common_to_rhs.edge_mapping.push(vec![rhs_edge]);
    }

    log::debug!(
        "compiled rule: lhs {}n/{}e, rhs {}n/{}e, common {}n/{}e",
        rule.lhs.node_count(),
        rule.lhs.edge_count(),
        rule.rhs.node_count(),
        rule.rhs.edge_count(),
        rule.common.node_count(),
        rule.common.edge_count(),
    );

    Ok(rule)
}
