//! A double-pushout graph rewriting engine for generative design.
//!
//! Rewrite rules are authored as a single annotated graph carrying `"L"` and
//! `"R"` subgraph views: everything in `"L"` is required for the rule to
//! fire, everything in `"R"` exists afterwards, and the overlap is preserved
//! in place. [`compile_rule`] splits such a graph into an explicit
//! [`Rule`], [`find_matches`] enumerates the embeddings of a pattern into a
//! target graph, and [`apply_rule`] rewrites the target at one embedding.
//! All three are pure functions of their inputs.
//!
//! ```
//! use morphgraph::{
//!     EdgeAttrs, Graph, NodeAttrs, Subgraph, apply_rule, compile_rule, find_matches,
//! };
//!
//! // A rule growing a leg from any body segment.
//! let mut authored = Graph::new();
//! let body = authored.add_node(NodeAttrs::labeled("body", "body"));
//! let leg = authored.add_node(NodeAttrs::labeled("leg", "leg"));
//! let hip = authored.add_edge(body, leg, EdgeAttrs::unlabeled());
//! authored.add_subgraph(Subgraph::new("L").with_node(body));
//! authored.add_subgraph(
//!     Subgraph::new("R").with_node(body).with_node(leg).with_edge(hip),
//! );
//! let rule = compile_rule(&authored).expect("well-formed rule");
//!
//! let mut robot = Graph::new();
//! robot.add_node(NodeAttrs::labeled("torso", "body"));
//!
//! let matches = find_matches(&rule.lhs, &robot);
//! assert_eq!(matches.len(), 1);
//!
//! let grown = apply_rule(&rule, &robot, &matches[0]);
//! assert_eq!(grown.node_count(), 2);
//! assert_eq!(grown.edge_count(), 1);
//! ```

pub mod apply;
pub mod graph;
pub mod matcher;
pub mod rule;
pub(crate) mod util;

pub use apply::apply_rule;
pub use graph::DotCollector;
pub use graph::EdgeAttrs;
pub use graph::EdgeIndex;
pub use graph::Graph;
pub use graph::GraphMapping;
pub use graph::NodeAttrs;
pub use graph::NodeIndex;
pub use graph::Subgraph;
pub use matcher::find_matches;
pub use rule::Rule;
pub use rule::RuleError;
pub use rule::RuleResult;
pub use rule::RuleSide;
pub use rule::compile_rule;
pub use rule::{LHS_SUBGRAPH, RHS_SUBGRAPH};
