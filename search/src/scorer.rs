//! State evaluation hook.
//!
//! Scores are computed for every node and attached to it, but the engine
//! never consults them for ordering or pruning. Wiring a score into the
//! frontier would change which solution is selected.

/// Trait for informational state scoring.
pub trait StateEvaluator<S> {
    /// Score one state. Higher is better by convention.
    fn evaluate(&self, state: &S) -> f64;
}

/// Default evaluator: scores every state 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformEvaluator;

impl<S> StateEvaluator<S> for UniformEvaluator {
    fn evaluate(&self, _state: &S) -> f64 {
        0.0
    }
}
