//! Search policy types.

use std::str::FromStr;

use crate::error::SearchError;

/// Frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// FIFO frontier. The first goal popped is at minimum depth.
    BreadthFirst,
    /// LIFO frontier. The last-generated successor is explored first.
    DepthFirst,
}

impl SearchStrategy {
    /// Short identifier (`"bfs"` / `"dfs"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" | "breadth_first" => Ok(Self::BreadthFirst),
            "dfs" | "depth_first" => Ok(Self::DepthFirst),
            other => Err(SearchError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy and budget configuration for one engine.
///
/// Both budgets default to `None`, which reproduces the unbounded behavior:
/// the search runs until a goal is popped or the frontier empties. Setting a
/// budget is a deliberate deviation for state spaces that may not be finite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Frontier discipline.
    pub strategy: SearchStrategy,
    /// Hard cap on node expansions.
    pub max_expansions: Option<u64>,
    /// Successors deeper than this are never generated.
    pub max_depth: Option<u32>,
}

impl SearchPolicy {
    /// Unbounded policy for the given strategy.
    #[must_use]
    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Validate that the engine can honor this policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is
    /// `Some(0)`, which would stop every search before the root is expanded.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::BreadthFirst,
            max_expansions: None,
            max_depth: None,
        }
    }
}
