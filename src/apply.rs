use crate::graph::{EdgeIndex, Graph, GraphMapping, NodeIndex};
use crate::rule::Rule;
use crate::util::log;
use std::collections::HashSet;

/// Applies `rule` to `target` at one embedding of the rule's left-hand side,
/// returning the rewritten graph. Neither input is mutated.
///
/// `lhs_to_target` must be a match produced by
/// [`find_matches`](crate::find_matches) against `rule.lhs`; the inputs are
/// assumed well-formed and are not re-validated.
///
/// The output is assembled in a fixed order. Nodes: target nodes outside the
/// left-hand side's image (in target order), then one node per preserved
/// interface node (in interface order, carrying the *target* node's
/// attributes), then the fresh right-hand side nodes (in rhs order). Edges:
/// target edges outside the image, then the carried-over preserved edges with
/// their full parallel multiplicity, then the fresh rhs edges. Anything
/// matched by the left-hand side but not preserved is simply never re-emitted.
pub fn apply_rule(rule: &Rule, target: &Graph, lhs_to_target: &GraphMapping) -> Graph {
    assert_eq!(
        lhs_to_target.node_mapping.len(),
        rule.lhs.node_count(),
        "match does not cover the rule's left-hand side"
    );

    let mut result = Graph::new();

    // Dense translation tables into the result graph. A preserved node fills
    // both at the same result index, gluing the context to the new rhs.
    let mut target_to_result: Vec<Option<NodeIndex>> = vec![None; target.node_count()];
    let mut rhs_to_result: Vec<Option<NodeIndex>> = vec![None; rule.rhs.node_count()];

    // Target nodes not covered by the embedding survive untouched.
    let target_nodes_in_lhs: HashSet<NodeIndex> =
        lhs_to_target.node_mapping.iter().copied().collect();
    for (i, attrs) in target.nodes() {
        if !target_nodes_in_lhs.contains(&i) {
            target_to_result[i.index()] = Some(result.add_node(attrs.clone()));
        }
    }

    // Preserved-in-place nodes, re-appended in interface order. Attributes
    // come from the target side, not the rhs.
    for (c, lhs_node) in rule.common_to_lhs.node_mapping.iter().enumerate() {
        let target_node = lhs_to_target.node_mapping[lhs_node.index()];
        let result_node = result.add_node(target[target_node].clone());
        target_to_result[target_node.index()] = Some(result_node);
        rhs_to_result[rule.common_to_rhs.node_mapping[c].index()] = Some(result_node);
    }

    // Freshly introduced rhs nodes, copied verbatim.
    let rhs_nodes_in_common: HashSet<NodeIndex> =
        rule.common_to_rhs.node_mapping.iter().copied().collect();
    for (i, attrs) in rule.rhs.nodes() {
        if !rhs_nodes_in_common.contains(&i) {
            rhs_to_result[i.index()] = Some(result.add_node(attrs.clone()));
        }
    }

    // Target edges not covered by the embedding survive, re-routed through
    // the translation table.
    let target_edges_in_lhs: HashSet<EdgeIndex> = lhs_to_target
        .edge_mapping
        .iter()
        .flatten()
        .copied()
        .collect();
    for (m, tail, head, attrs) in target.edges() {
        if !target_edges_in_lhs.contains(&m) {
            result.add_edge(
                target_to_result[tail.index()].expect("context edge endpoint survives"),
                target_to_result[head.index()].expect("context edge endpoint survives"),
                attrs.clone(),
            );
        }
    }

    // Each preserved edge names exactly one lhs edge; carry over every target
    // edge that lhs edge matched, keeping parallel multiplicity.
    for lhs_edges in &rule.common_to_lhs.edge_mapping {
        let lhs_edge = lhs_edges[0];
        for &target_edge in &lhs_to_target.edge_mapping[lhs_edge.index()] {
            let (tail, head) = target
                .endpoints(target_edge)
                .expect("matched target edge exists");
            result.add_edge(
                target_to_result[tail.index()].expect("preserved edge endpoint survives"),
                target_to_result[head.index()].expect("preserved edge endpoint survives"),
                target[target_edge].clone(),
            );
        }
    }

    // Fresh rhs edges.
    let rhs_edges_in_common: HashSet<EdgeIndex> = rule
        .common_to_rhs
        .edge_mapping
        .iter()
        .flatten()
        .copied()
        .collect();
    for (m, tail, head, attrs) in rule.rhs.edges() {
        if !rhs_edges_in_common.contains(&m) {
            result.add_edge(
                rhs_to_result[tail.index()].expect("fresh edge endpoint exists"),
                rhs_to_result[head.index()].expect("fresh edge endpoint exists"),
                attrs.clone(),
            );
        }
    }

    log::trace!(
        "rewrote {}n/{}e target into {}n/{}e result",
        target.node_count(),
        target.edge_count(),
        result.node_count(),
        result.edge_count(),
    );

    result
}
