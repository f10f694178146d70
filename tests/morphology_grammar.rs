//! End-to-end grammar runs: author rules as annotated graphs, compile them,
//! and grow a morphology by repeated matching and rewriting.

mod util;

use morphgraph::{
    DotCollector, EdgeAttrs, Graph, NodeAttrs, Subgraph, apply_rule, compile_rule, find_matches,
};
use util::{edge_list, node_labels};

/// L: a body segment. R: the segment with a new leg hanging off it.
fn grow_leg_rule() -> morphgraph::Rule {
    let mut g = Graph::new();
    let body = g.add_node(NodeAttrs::labeled("body", "body"));
    let leg = g.add_node(NodeAttrs::labeled("leg", "leg"));
    let hip = g.add_edge(body, leg, EdgeAttrs::unlabeled());
    g.add_subgraph(Subgraph::new("L").with_node(body));
    g.add_subgraph(
        Subgraph::new("R")
            .with_node(body)
            .with_node(leg)
            .with_edge(hip),
    );
    compile_rule(&g).unwrap()
}

/// L: a body with a stub limb. R: the body with a leg instead.
fn upgrade_stub_rule() -> morphgraph::Rule {
    let mut g = Graph::new();
    let body = g.add_node(NodeAttrs::labeled("body", "body"));
    let stub = g.add_node(NodeAttrs::labeled("stub", "stub"));
    let leg = g.add_node(NodeAttrs::labeled("leg", "leg"));
    let old_link = g.add_edge(body, stub, EdgeAttrs::unlabeled());
    let new_link = g.add_edge(body, leg, EdgeAttrs::unlabeled());
    g.add_subgraph(
        Subgraph::new("L")
            .with_node(body)
            .with_node(stub)
            .with_edge(old_link),
    );
    g.add_subgraph(
        Subgraph::new("R")
            .with_node(body)
            .with_node(leg)
            .with_edge(new_link),
    );
    compile_rule(&g).unwrap()
}

#[test_log::test]
fn growing_two_legs_from_a_torso() {
    let rule = grow_leg_rule();

    let mut robot = Graph::new();
    robot.add_node(NodeAttrs::labeled("torso", "body"));

    let mut trace = DotCollector::new();
    trace.collect(&robot);

    let matches = find_matches(&rule.lhs, &robot);
    assert_eq!(matches.len(), 1);
    let robot = apply_rule(&rule, &robot, &matches[0]);
    trace.collect(&robot);
    assert_eq!(node_labels(&robot), ["body", "leg"]);
    assert_eq!(edge_list(&robot), [(0, 1, String::new())]);

    // The body still matches; the leg does not.
    let matches = find_matches(&rule.lhs, &robot);
    assert_eq!(matches.len(), 1);
    let robot = apply_rule(&rule, &robot, &matches[0]);
    trace.collect(&robot);

    assert_eq!(node_labels(&robot), ["leg", "body", "leg"]);
    assert_eq!(
        edge_list(&robot),
        [(1, 0, String::new()), (1, 2, String::new())]
    );

    // One DOT rendering per step.
    assert_eq!(trace.finalize().matches("\n---\n").count(), 2);
}

#[test]
fn upgrading_a_stub_keeps_the_rest_of_the_robot() {
    let rule = upgrade_stub_rule();

    let mut robot = Graph::new();
    let body = robot.add_node(NodeAttrs::labeled("torso", "body"));
    let stub = robot.add_node(NodeAttrs::labeled("left_stub", "stub"));
    let leg = robot.add_node(NodeAttrs::labeled("right_leg", "leg"));
    robot.add_edge(body, stub, EdgeAttrs::unlabeled());
    robot.add_edge(body, leg, EdgeAttrs::unlabeled());

    let matches = find_matches(&rule.lhs, &robot);
    assert_eq!(matches.len(), 1);

    let rewritten = apply_rule(&rule, &robot, &matches[0]);
    assert_eq!(node_labels(&rewritten), ["leg", "body", "leg"]);
    assert_eq!(
        edge_list(&rewritten),
        [(1, 0, String::new()), (1, 2, String::new())]
    );
    // The preserved body is the target's, not the rule's.
    assert_eq!(rewritten.nodes().nth(1).unwrap().1.name, "torso");
    // The untouched leg survives with its own name.
    assert_eq!(rewritten.nodes().next().unwrap().1.name, "right_leg");
}

#[test]
fn whole_pipeline_is_deterministic() {
    let rule = upgrade_stub_rule();

    let mut robot = Graph::new();
    let body = robot.add_node(NodeAttrs::labeled("torso", "body"));
    for i in 0..3 {
        let stub = robot.add_node(NodeAttrs::labeled(format!("stub{i}"), "stub"));
        robot.add_edge(body, stub, EdgeAttrs::unlabeled());
    }

    let first = find_matches(&rule.lhs, &robot);
    let second = find_matches(&rule.lhs, &robot);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);

    for m in &first {
        let a = apply_rule(&rule, &robot, m);
        let b = apply_rule(&rule, &robot, m);
        assert_eq!(node_labels(&a), node_labels(&b));
        assert_eq!(edge_list(&a), edge_list(&b));
    }
}
