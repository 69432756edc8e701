//! Structural properties of every node a puzzle search creates: state size,
//! division guards, dedup uniqueness, depth, and informational scores.

use std::collections::BTreeSet;

use thought_harness::solver::Point24Solver;
use thought_harness::verify::{parse_expr, Expr};
use thought_harness::worlds::point24::{
    Point24, PuzzleState, DIVISOR_EPSILON, GOAL_SCORE, NON_GOAL_SCORE,
};
use thought_search::contract::ThoughtProblem;
use thought_search::node::ThoughtNode;
use thought_search::search::SearchResult;

const HANDS: [[i64; 4]; 6] = [
    [3, 3, 8, 8],
    [1, 1, 1, 1],
    [1, 2, 3, 4],
    [5, 5, 5, 1],
    [13, 13, 13, 13],
    [1, 5, 11, 13],
];

fn searches() -> Vec<SearchResult<PuzzleState>> {
    let mut out = Vec::new();
    for strategy in ["bfs", "dfs"] {
        let solver = Point24Solver::with_strategy_name(strategy).unwrap();
        for hand in &HANDS {
            out.push(solver.search(hand));
        }
    }
    out
}

fn parent<'a>(
    result: &'a SearchResult<PuzzleState>,
    node: &ThoughtNode<PuzzleState>,
) -> Option<&'a ThoughtNode<PuzzleState>> {
    let id = node.parent_id?;
    result.nodes.iter().find(|n| n.node_id == id)
}

#[test]
fn successor_state_is_one_element_shorter() {
    for result in searches() {
        let root_len = result.nodes[0].state.len();
        for node in &result.nodes {
            assert_eq!(
                node.state.len(),
                root_len - node.depth as usize,
                "node {} at depth {}",
                node.node_id,
                node.depth
            );
            if let Some(p) = parent(&result, node) {
                assert_eq!(node.state.len(), p.state.len() - 1);
                assert_eq!(node.depth, p.depth + 1);
            }
        }
    }
}

#[test]
fn no_division_by_near_zero() {
    for result in searches() {
        for node in result.nodes.iter().filter(|n| !n.is_root()) {
            let newest = node.state.items.last().unwrap();
            let expr = parse_expr(&newest.expression).unwrap();
            if let Expr::Binary { op: '/', rhs, .. } = &expr {
                assert!(
                    rhs.value().abs() > DIVISOR_EPSILON,
                    "division by {} in {}",
                    rhs.value(),
                    newest.expression
                );
            }
            assert!(
                (expr.value() - newest.value).abs() <= 1e-9 * newest.value.abs().max(1.0),
                "expression {} does not evaluate to {}",
                newest.expression,
                newest.value
            );
        }
    }
}

#[test]
fn dedup_keys_are_unique_within_a_search() {
    for result in searches() {
        let keys: BTreeSet<&str> = result.nodes.iter().map(|n| n.state_key.as_str()).collect();
        assert_eq!(keys.len(), result.nodes.len());
        assert_eq!(
            result.stats.candidates_generated,
            result.stats.nodes_created - 1 + result.stats.duplicates_suppressed,
            "every candidate is either a new node or a suppressed duplicate"
        );
    }
}

#[test]
fn solutions_are_full_reductions() {
    for result in searches() {
        if let Some(goal) = result.goal_node() {
            assert_eq!(goal.depth, 3);
            assert_eq!(goal.state.len(), 1);
            assert_eq!(result.goal_path().len(), 4);
            for step in result.goal_path().iter().skip(1) {
                assert!(
                    [" + ", " - ", " * ", " / "]
                        .iter()
                        .any(|op| step.operation.contains(op)),
                    "step label {:?} is not a binary arithmetic step",
                    step.operation
                );
            }
        }
    }
}

#[test]
fn scores_mark_goal_states_only() {
    for result in searches() {
        for node in &result.nodes {
            // Goal states enqueued behind the returned one score high too.
            let expected = if Point24.is_goal(&node.state) {
                GOAL_SCORE
            } else {
                NON_GOAL_SCORE
            };
            assert!(
                (node.score - expected).abs() < f64::EPSILON,
                "node {} scored {}",
                node.node_id,
                node.score
            );
        }
    }
}
