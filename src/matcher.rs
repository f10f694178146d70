use crate::graph::{Graph, GraphMapping, NodeIndex};
use crate::util::log;

/// Enumerates every embedding of `pattern` into `target`.
///
/// A pattern node with a non-empty label matches only target nodes carrying
/// the identical label; an unlabeled pattern node matches any target node.
/// Every pattern edge must be witnessed by at least one target edge between
/// the mapped endpoints (direction matters), and all parallel witnesses are
/// recorded in the returned edge mapping.
///
/// The assignment is not required to be injective: two pattern nodes may map
/// to the same target node. Callers wanting distinct images must force them
/// apart through labels or edges.
///
/// Matches come back in depth-first order, lexicographic by node mapping
/// with target index 0 tried first.
///
/// # Panics
///
/// Panics if `pattern` has no nodes.
pub fn find_matches(pattern: &Graph, target: &Graph) -> Vec<GraphMapping> {
    assert!(
        pattern.node_count() >= 1,
        "pattern graph must have at least one node"
    );

    // Partial assignment of pattern nodes to target nodes. The last entry is
    // speculative: it is the candidate currently under test, and may run past
    // the end of the target's node range before we backtrack.
    let mut partial: Vec<usize> = vec![0];
    let mut matches = Vec::new();

    while !partial.is_empty() {
        let i = partial.len() - 1;
        let j = partial[i];

        if j >= target.node_count() {
            // Candidates for pattern node i are exhausted, backtrack.
            partial.pop();
            if let Some(parent) = partial.last_mut() {
                *parent += 1;
            }
            continue;
        }

        let pattern_label = &pattern[NodeIndex::new(i)].label;
        if !pattern_label.is_empty() && *pattern_label != target[NodeIndex::new(j)].label {
            partial[i] += 1;
            continue;
        }

        // Every pattern edge closed by this assignment (both endpoints
        // now mapped, one of them being node i) needs a target witness.
        let mut edge_fail = false;
        for (_, p_tail, p_head, _) in pattern.edges() {
            let tail = p_tail.index();
            let head = p_head.index();
            if head == i && tail <= i {
                let j_tail = partial[tail];
                if !target.has_edge(NodeIndex::new(j_tail), NodeIndex::new(j)) {
                    edge_fail = true;
                    break;
                }
            } else if tail == i && head <= i {
                let j_head = partial[head];
                if !target.has_edge(NodeIndex::new(j), NodeIndex::new(j_head)) {
                    edge_fail = true;
                    break;
                }
            }
        }
        if edge_fail {
            partial[i] += 1;
            continue;
        }

        if partial.len() == pattern.node_count() {
            log::trace!("found match {partial:?}");
            matches.push(materialize(pattern, target, &partial));
            partial[i] += 1;
        } else {
            partial.push(0);
        }
    }

    matches
}

/// Completes a full node assignment into a [`GraphMapping`] by collecting,
/// for each pattern edge, every parallel target edge between the mapped
/// endpoints.
fn materialize(pattern: &Graph, target: &Graph, assignment: &[usize]) -> GraphMapping {
    let node_mapping: Vec<NodeIndex> = assignment.iter().map(|&j| NodeIndex::new(j)).collect();
    let mut edge_mapping = Vec::with_capacity(pattern.edge_count());
    for (_, p_tail, p_head, _) in pattern.edges() {
        let j_tail = node_mapping[p_tail.index()];
        let j_head = node_mapping[p_head.index()];
        edge_mapping.push(target.edges_between(j_tail, j_head));
    }
    GraphMapping {
        node_mapping,
        edge_mapping,
    }
}
