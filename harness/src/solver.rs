//! 24-point solver: binds [`Point24`] to the search engine.
//!
//! ```text
//! numbers → PuzzleState::from_numbers → TreeOfThoughts::search
//!   → goal node → sole expression → "<expr> = 24"
//! ```

use tracing::debug;

use thought_search::error::SearchError;
use thought_search::policy::{SearchPolicy, SearchStrategy};
use thought_search::report::SearchStats;
use thought_search::search::{SearchResult, TreeOfThoughts};

use crate::worlds::point24::{Point24, PuzzleState};

/// A solved hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Expression whose value is 24, e.g. `"(8 / (3 - (8 / 3)))"`.
    pub expression: String,
    /// Decision depth (initial element count − 1 for a full reduction).
    pub depth: u32,
    /// The intermediate expression created at each step, root excluded.
    pub steps: Vec<String>,
    /// Counters from the search that found this solution.
    pub stats: SearchStats,
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = 24", self.expression)
    }
}

/// 24-point solver. Breadth-first and unbounded by default.
#[derive(Debug, Clone)]
pub struct Point24Solver {
    engine: TreeOfThoughts<Point24, Point24>,
}

impl Point24Solver {
    /// Breadth-first solver with no budgets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: TreeOfThoughts::unbounded(Point24, Point24, SearchStrategy::BreadthFirst),
        }
    }

    /// Solver with an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn with_policy(policy: SearchPolicy) -> Result<Self, SearchError> {
        Ok(Self {
            engine: TreeOfThoughts::new(Point24, Point24, policy)?,
        })
    }

    /// Unbounded solver from a strategy identifier (`bfs`, `dfs`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] for unrecognized names.
    pub fn with_strategy_name(strategy: &str) -> Result<Self, SearchError> {
        Ok(Self {
            engine: TreeOfThoughts::with_strategy_name(Point24, Point24, strategy)?,
        })
    }

    #[must_use]
    pub fn strategy(&self) -> SearchStrategy {
        self.engine.policy().strategy
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        self.engine.policy()
    }

    /// Solve and return `"<expr> = 24"`, or `None` if no solution exists in
    /// the explored space.
    #[must_use]
    pub fn solve(&self, numbers: &[i64]) -> Option<String> {
        self.solve_detailed(numbers)
            .as_ref()
            .map(ToString::to_string)
    }

    /// Solve and return the expression, depth, steps, and search counters.
    #[must_use]
    pub fn solve_detailed(&self, numbers: &[i64]) -> Option<Solution> {
        solution_from(&self.search(numbers))
    }

    /// Run the raw search. Useful for reports and property tests.
    #[must_use]
    pub fn search(&self, numbers: &[i64]) -> SearchResult<PuzzleState> {
        let result = self.engine.search(PuzzleState::from_numbers(numbers));
        debug!(
            numbers = ?numbers,
            strategy = %self.strategy(),
            solved = result.is_goal_reached(),
            expansions = result.stats.expansions,
            "point24 search complete"
        );
        result
    }
}

impl Default for Point24Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a [`Solution`] from a finished search.
#[must_use]
pub fn solution_from(result: &SearchResult<PuzzleState>) -> Option<Solution> {
    let goal = result.goal_node()?;
    let expression = goal.state.sole_expression()?.to_string();
    let steps = result
        .goal_path()
        .iter()
        .filter(|n| !n.is_root())
        .map(|n| n.operation.clone())
        .collect();
    Some(Solution {
        expression,
        depth: goal.depth,
        steps,
        stats: result.stats,
    })
}
