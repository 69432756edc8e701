//! Search statistics, termination reasons, and the JSON report.

/// Counters accumulated over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and handed to `expand`.
    pub expansions: u64,
    /// Successors returned by `expand`, before dedup.
    pub candidates_generated: u64,
    /// Successors dropped because their key was already visited.
    pub duplicates_suppressed: u64,
    /// Successors dropped because they exceeded `max_depth`.
    pub depth_pruned: u64,
    /// Nodes created, including the root.
    pub nodes_created: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal node was popped.
    GoalReached { node_id: u64 },
    /// Frontier emptied without a goal. The normal "no solution" outcome.
    FrontierExhausted,
    /// `max_expansions` was hit before a goal was popped.
    ExpansionBudgetExceeded,
    /// A problem callback panicked.
    InternalPanic { stage: PanicStage },
}

impl TerminationReason {
    /// Stable snake-case tag used in reports and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::InternalPanic { .. } => "internal_panic",
        }
    }
}

/// Callback in which a panic was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicStage {
    /// `ThoughtProblem::is_goal()` panicked.
    IsGoal,
    /// `ThoughtProblem::expand()` or `ThoughtProblem::dedup_key()` panicked.
    Expand,
    /// `StateEvaluator::evaluate()` panicked.
    Evaluate,
}

impl PanicStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsGoal => "is_goal",
            Self::Expand => "expand",
            Self::Evaluate => "evaluate",
        }
    }
}

pub(crate) fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "candidates_generated": s.candidates_generated,
        "depth_pruned": s.depth_pruned,
        "duplicates_suppressed": s.duplicates_suppressed,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "nodes_created": s.nodes_created,
    })
}

pub(crate) fn termination_to_json(t: &TerminationReason) -> serde_json::Value {
    match t {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": t.as_str()})
        }
        TerminationReason::InternalPanic { stage } => {
            serde_json::json!({"stage": stage.as_str(), "type": t.as_str()})
        }
        TerminationReason::FrontierExhausted | TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": t.as_str()})
        }
    }
}
