//! Search entry point and expansion loop.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::contract::{Successor, ThoughtProblem};
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{arena_index, reconstruct_path, ThoughtNode, ROOT_OPERATION};
use crate::policy::{SearchPolicy, SearchStrategy};
use crate::report::{stats_to_json, termination_to_json, PanicStage, SearchStats, TerminationReason};
use crate::scorer::StateEvaluator;

/// Result of a search execution.
///
/// Owns every node created during the search. The engine itself retains
/// nothing once `search` returns.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// Identifier of the searched problem.
    pub problem_id: String,
    /// Frontier discipline used.
    pub strategy: SearchStrategy,
    /// ID of the goal node (if found).
    pub goal_node_id: Option<u64>,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<ThoughtNode<S>>,
    /// Aggregate counters.
    pub stats: SearchStats,
    /// Why the search stopped.
    pub termination_reason: TerminationReason,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    /// The goal node, if one was found.
    #[must_use]
    pub fn goal_node(&self) -> Option<&ThoughtNode<S>> {
        self.goal_node_id
            .and_then(|id| self.nodes.get(arena_index(id)))
    }

    /// Nodes from the root to the goal (empty if no goal was found).
    #[must_use]
    pub fn goal_path(&self) -> Vec<&ThoughtNode<S>> {
        let Some(goal_id) = self.goal_node_id else {
            return Vec::new();
        };
        reconstruct_path(&self.nodes, goal_id)
            .into_iter()
            .filter_map(|id| self.nodes.get(arena_index(id)))
            .collect()
    }

    /// Consume the result and return the goal node, discarding the arena.
    #[must_use]
    pub fn into_goal_node(mut self) -> Option<ThoughtNode<S>> {
        let idx = arena_index(self.goal_node_id?);
        if idx < self.nodes.len() {
            Some(self.nodes.swap_remove(idx))
        } else {
            None
        }
    }

    /// Convert to a `serde_json::Value` report.
    ///
    /// State payloads are opaque to the engine and are not included; the goal
    /// entry carries the path's operation labels instead.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let goal = match self.goal_node() {
            Some(node) => serde_json::json!({
                "depth": node.depth,
                "node_id": node.node_id,
                "operations": self
                    .goal_path()
                    .iter()
                    .filter(|n| !n.is_root())
                    .map(|n| n.operation.as_str())
                    .collect::<Vec<_>>(),
                "state_key": node.state_key.as_str(),
            }),
            None => serde_json::Value::Null,
        };
        serde_json::json!({
            "goal": goal,
            "problem_id": self.problem_id,
            "stats": stats_to_json(&self.stats),
            "strategy": self.strategy.as_str(),
            "termination_reason": termination_to_json(&self.termination_reason),
        })
    }
}

/// Tree-of-thoughts search engine.
///
/// Binds a problem (expansion, goal predicate, dedup key), an informational
/// evaluator, and a policy. The engine is immutable; every call to
/// [`TreeOfThoughts::search`] builds a fresh frontier and visited set, so
/// repeated or independent searches never observe each other.
#[derive(Debug, Clone)]
pub struct TreeOfThoughts<P, E> {
    problem: P,
    evaluator: E,
    policy: SearchPolicy,
}

impl<P, E> TreeOfThoughts<P, E>
where
    P: ThoughtProblem,
    E: StateEvaluator<P::State>,
{
    /// Construct an engine.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(problem: P, evaluator: E, policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self {
            problem,
            evaluator,
            policy,
        })
    }

    /// Construct an engine with no budgets. Infallible: an unbounded policy
    /// always validates.
    #[must_use]
    pub fn unbounded(problem: P, evaluator: E, strategy: SearchStrategy) -> Self {
        Self {
            problem,
            evaluator,
            policy: SearchPolicy::with_strategy(strategy),
        }
    }

    /// Construct an unbounded engine from a strategy identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] if `strategy` is not one of
    /// `bfs`, `breadth_first`, `dfs`, `depth_first`.
    pub fn with_strategy_name(problem: P, evaluator: E, strategy: &str) -> Result<Self, SearchError> {
        let strategy = strategy.parse::<SearchStrategy>()?;
        Ok(Self::unbounded(problem, evaluator, strategy))
    }

    #[must_use]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Run the search from `initial_state`.
    ///
    /// The goal predicate is checked when a node is popped, the root
    /// included. Successor keys are marked visited on enqueue; a successor
    /// whose key was already seen is dropped (first-seen-wins).
    ///
    /// Returns normally for every outcome. Exhausting the frontier is
    /// reported as [`TerminationReason::FrontierExhausted`] with no goal.
    pub fn search(&self, initial_state: P::State) -> SearchResult<P::State> {
        let problem = &self.problem;
        let policy = &self.policy;
        let problem_id = problem.problem_id().to_string();

        debug!(
            problem = %problem_id,
            strategy = %policy.strategy,
            max_expansions = ?policy.max_expansions,
            max_depth = ?policy.max_depth,
            "search started"
        );

        let mut frontier = Frontier::new(policy.strategy);
        let mut nodes: Vec<ThoughtNode<P::State>> = Vec::new();
        let mut stats = SearchStats::default();

        let root_key = match catch_unwind(AssertUnwindSafe(|| problem.dedup_key(&initial_state))) {
            Ok(key) => key,
            Err(_) => {
                return finish(
                    problem_id,
                    policy.strategy,
                    nodes,
                    stats,
                    TerminationReason::InternalPanic {
                        stage: PanicStage::Expand,
                    },
                );
            }
        };
        let Ok(root_score) = catch_unwind(AssertUnwindSafe(|| self.evaluator.evaluate(&initial_state)))
        else {
            return finish(
                problem_id,
                policy.strategy,
                nodes,
                stats,
                TerminationReason::InternalPanic {
                    stage: PanicStage::Evaluate,
                },
            );
        };
        nodes.push(ThoughtNode {
            node_id: 0,
            parent_id: None,
            state: initial_state,
            state_key: root_key.clone(),
            depth: 0,
            operation: ROOT_OPERATION.to_string(),
            score: root_score,
        });
        stats.nodes_created = 1;
        frontier.push(0, &root_key);

        let termination_reason = loop {
            let Some(current_id) = frontier.pop() else {
                break TerminationReason::FrontierExhausted;
            };
            let current = &nodes[arena_index(current_id)];
            let current_depth = current.depth;

            match catch_unwind(AssertUnwindSafe(|| problem.is_goal(&current.state))) {
                Ok(true) => {
                    break TerminationReason::GoalReached {
                        node_id: current_id,
                    }
                }
                Ok(false) => {}
                Err(_) => {
                    break TerminationReason::InternalPanic {
                        stage: PanicStage::IsGoal,
                    }
                }
            }

            if policy
                .max_expansions
                .is_some_and(|max| stats.expansions >= max)
            {
                break TerminationReason::ExpansionBudgetExceeded;
            }

            // Keys are computed inside the guard so a panicking dedup_key is
            // attributed to expansion.
            let expanded = catch_unwind(AssertUnwindSafe(|| {
                problem
                    .expand(&current.state)
                    .into_iter()
                    .map(|s| {
                        let key = problem.dedup_key(&s.state);
                        (s, key)
                    })
                    .collect::<Vec<_>>()
            }));
            let Ok(successors) = expanded else {
                break TerminationReason::InternalPanic {
                    stage: PanicStage::Expand,
                };
            };

            stats.expansions += 1;
            stats.candidates_generated += successors.len() as u64;
            trace!(
                node_id = current_id,
                depth = current_depth,
                successors = successors.len(),
                frontier = frontier.len(),
                "expanded node"
            );

            let child_depth = current_depth + 1;
            if policy.max_depth.is_some_and(|max| child_depth > max) {
                stats.depth_pruned += successors.len() as u64;
                continue;
            }

            let mut evaluator_panicked = false;
            for (Successor { state, operation }, key) in successors {
                if frontier.is_visited(&key) {
                    stats.duplicates_suppressed += 1;
                    continue;
                }
                let node_id = nodes.len() as u64;
                let Ok(score) = catch_unwind(AssertUnwindSafe(|| self.evaluator.evaluate(&state)))
                else {
                    evaluator_panicked = true;
                    break;
                };
                frontier.push(node_id, &key);
                nodes.push(ThoughtNode {
                    node_id,
                    parent_id: Some(current_id),
                    state,
                    state_key: key,
                    depth: child_depth,
                    operation,
                    score,
                });
                stats.nodes_created += 1;
            }
            if evaluator_panicked {
                break TerminationReason::InternalPanic {
                    stage: PanicStage::Evaluate,
                };
            }
        };

        stats.frontier_high_water = frontier.high_water();
        finish(
            problem_id,
            policy.strategy,
            nodes,
            stats,
            termination_reason,
        )
    }
}

fn finish<S>(
    problem_id: String,
    strategy: SearchStrategy,
    nodes: Vec<ThoughtNode<S>>,
    stats: SearchStats,
    termination_reason: TerminationReason,
) -> SearchResult<S> {
    let goal_node_id = match termination_reason {
        TerminationReason::GoalReached { node_id } => Some(node_id),
        _ => None,
    };
    debug!(
        problem = %problem_id,
        strategy = %strategy,
        termination = termination_reason.as_str(),
        expansions = stats.expansions,
        nodes = stats.nodes_created,
        duplicates = stats.duplicates_suppressed,
        "search finished"
    );
    SearchResult {
        problem_id,
        strategy,
        goal_node_id,
        nodes,
        stats,
        termination_reason,
    }
}
