//! Shared helpers for the benchmark suites.

#![forbid(unsafe_code)]

use thought_harness::solver::Point24Solver;
use thought_harness::worlds::point24::PuzzleState;

/// Hands that stress different parts of the search.
///
/// - `3_3_8_8`: single solution, needs fractions
/// - `1_2_3_4`: many solutions, found early
/// - `1_1_1_1`: unsolvable, tiny space
/// - `13_13_13_13`: unsolvable, larger space
/// - `1_5_11_13`: mixed magnitudes
pub const BENCH_HANDS: [(&str, [i64; 4]); 5] = [
    ("3_3_8_8", [3, 3, 8, 8]),
    ("1_2_3_4", [1, 2, 3, 4]),
    ("1_1_1_1", [1, 1, 1, 1]),
    ("13_13_13_13", [13, 13, 13, 13]),
    ("1_5_11_13", [1, 5, 11, 13]),
];

/// Build a solver for a strategy identifier.
///
/// # Panics
///
/// Panics if `strategy` is not a recognized identifier. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn solver_for(strategy: &str) -> Point24Solver {
    Point24Solver::with_strategy_name(strategy).expect("known strategy")
}

/// Initial puzzle state for a hand.
#[must_use]
pub fn initial_state(hand: &[i64]) -> PuzzleState {
    PuzzleState::from_numbers(hand)
}
