//! Search problem contract trait.

use thought_kernel::proof::hash::ContentHash;

/// A successor proposed by [`ThoughtProblem::expand`].
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S> {
    /// The state reached in one step.
    pub state: S,
    /// Human-readable label for the step (informational).
    pub operation: String,
}

impl<S> Successor<S> {
    #[must_use]
    pub fn new(state: S, operation: impl Into<String>) -> Self {
        Self {
            state,
            operation: operation.into(),
        }
    }
}

/// Trait for problems the engine can search.
///
/// # Contract
///
/// - `expand` must be deterministic: same state → same successors in the
///   same order. Generation order is significant; it fixes which of several
///   equivalent states is kept and, under depth-first search, which branch
///   is explored first.
/// - `dedup_key` must depend only on the features that determine a state's
///   future. Two states with equal keys are treated as the same node, and
///   only the first one discovered survives.
pub trait ThoughtProblem {
    /// The state payload. Opaque to the engine.
    type State;

    /// Stable problem identifier (used in logs and reports).
    fn problem_id(&self) -> &str;

    /// Produce every successor reachable from `state` in one step.
    ///
    /// An empty result marks a dead end.
    fn expand(&self, state: &Self::State) -> Vec<Successor<Self::State>>;

    /// Test whether `state` is an accepted final answer.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Canonical key used for visited-set dedup.
    fn dedup_key(&self, state: &Self::State) -> ContentHash;
}
