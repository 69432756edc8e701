//! `Point24`: the 24-point arithmetic puzzle as a search problem.
//!
//! A state is an ordered list of `(value, expression)` pairs. One step picks
//! two positions, combines them with one arithmetic production, and appends
//! the result, so every step shrinks the state by exactly one element. A
//! state is a goal when a single element remains whose value is close to 24.
//!
//! # Dedup
//!
//! Keys cover values only: rounded to [`KEY_DIGITS`] decimal digits, sorted,
//! and hashed. Expression history is ignored because a state's future depends
//! only on its numbers.

use thought_kernel::numeric::{canonical_value_bytes, is_close};
use thought_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_STATE_KEY};
use thought_search::contract::{Successor, ThoughtProblem};
use thought_search::scorer::StateEvaluator;

/// The value a solution must reach.
pub const TARGET: f64 = 24.0;

/// Relative tolerance for the goal check.
pub const GOAL_REL_TOL: f64 = 1e-5;

/// Divisions by values with `|x| <= DIVISOR_EPSILON` are not generated.
pub const DIVISOR_EPSILON: f64 = 1e-6;

/// Decimal digits kept when building a dedup key.
pub const KEY_DIGITS: u32 = 6;

/// Score given to goal states.
pub const GOAL_SCORE: f64 = 1.0;

/// Score given to every other state.
pub const NON_GOAL_SCORE: f64 = 0.5;

/// A number together with the expression that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueExpr {
    pub value: f64,
    pub expression: String,
}

impl ValueExpr {
    /// A leaf for an input number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn leaf(n: i64) -> Self {
        Self {
            value: n as f64,
            expression: n.to_string(),
        }
    }
}

/// One node's worth of puzzle state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PuzzleState {
    pub items: Vec<ValueExpr>,
}

impl PuzzleState {
    /// Initial state: one leaf per input number, in input order.
    #[must_use]
    pub fn from_numbers(numbers: &[i64]) -> Self {
        Self {
            items: numbers.iter().copied().map(ValueExpr::leaf).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The numeric values, in state order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(|item| item.value)
    }

    /// The expression of the only remaining element, if exactly one remains.
    #[must_use]
    pub fn sole_expression(&self) -> Option<&str> {
        match self.items.as_slice() {
            [only] => Some(&only.expression),
            _ => None,
        }
    }
}

/// Arithmetic production applied to a pair `(a, b)` with `a` at the lower
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a - b`
    Sub,
    /// `b - a`
    RevSub,
    /// `a / b`, guarded on `b`
    Div,
    /// `b / a`, guarded on `a`
    RevDiv,
}

impl ArithOp {
    /// Generation order. Changing it changes which solution is returned.
    pub const ALL: [ArithOp; 6] = [
        ArithOp::Add,
        ArithOp::Mul,
        ArithOp::Sub,
        ArithOp::RevSub,
        ArithOp::Div,
        ArithOp::RevDiv,
    ];

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Mul => '*',
            Self::Sub | Self::RevSub => '-',
            Self::Div | Self::RevDiv => '/',
        }
    }

    /// Combine `a` and `b`.
    ///
    /// Returns `None` when the divisor is within [`DIVISOR_EPSILON`] of zero.
    #[must_use]
    pub fn apply(self, a: &ValueExpr, b: &ValueExpr) -> Option<ValueExpr> {
        let (lhs, rhs) = match self {
            Self::Add | Self::Mul | Self::Sub | Self::Div => (a, b),
            Self::RevSub | Self::RevDiv => (b, a),
        };
        let value = match self {
            Self::Add => lhs.value + rhs.value,
            Self::Mul => lhs.value * rhs.value,
            Self::Sub | Self::RevSub => lhs.value - rhs.value,
            Self::Div | Self::RevDiv => {
                if rhs.value.abs() <= DIVISOR_EPSILON {
                    return None;
                }
                lhs.value / rhs.value
            }
        };
        Some(ValueExpr {
            value,
            expression: format!("({} {} {})", lhs.expression, self.symbol(), rhs.expression),
        })
    }
}

/// The 24-point puzzle. Also serves as its own evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point24;

impl ThoughtProblem for Point24 {
    type State = PuzzleState;

    fn problem_id(&self) -> &str {
        "point24"
    }

    fn expand(&self, state: &PuzzleState) -> Vec<Successor<PuzzleState>> {
        let items = &state.items;
        let n = items.len();
        if n < 2 {
            return Vec::new();
        }

        let mut successors = Vec::with_capacity(n * (n - 1) / 2 * ArithOp::ALL.len());
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&items[i], &items[j]);
                let remaining: Vec<ValueExpr> = items
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, item)| item.clone())
                    .collect();

                for op in ArithOp::ALL {
                    let Some(combined) = op.apply(a, b) else {
                        continue;
                    };
                    let operation = combined.expression.clone();
                    let mut next = remaining.clone();
                    next.push(combined);
                    successors.push(Successor::new(PuzzleState { items: next }, operation));
                }
            }
        }
        successors
    }

    fn is_goal(&self, state: &PuzzleState) -> bool {
        match state.items.as_slice() {
            [only] => is_close(only.value, TARGET, GOAL_REL_TOL, 0.0),
            _ => false,
        }
    }

    fn dedup_key(&self, state: &PuzzleState) -> ContentHash {
        canonical_hash(
            DOMAIN_STATE_KEY,
            &canonical_value_bytes(state.values(), KEY_DIGITS),
        )
    }
}

impl StateEvaluator<PuzzleState> for Point24 {
    fn evaluate(&self, state: &PuzzleState) -> f64 {
        if self.is_goal(state) {
            GOAL_SCORE
        } else {
            NON_GOAL_SCORE
        }
    }
}
