//! Sample hands and the plain-text result table.

use std::fmt::Write as _;

use crate::solver::Point24Solver;

/// The classic demonstration hands: three solvable, one not.
pub const SAMPLE_HANDS: [[i64; 4]; 4] = [
    [3, 3, 8, 8], // 8 / (3 - 8 / 3)
    [1, 1, 1, 1], // no solution
    [1, 2, 3, 4], // 1 * 2 * 3 * 4
    [5, 5, 5, 1], // 5 * (5 - 1 / 5)
];

const INPUT_COLUMN_WIDTH: usize = 15;
const RULE_WIDTH: usize = 40;

/// Solve every hand, pairing each with its result line.
#[must_use]
pub fn solve_all<'a>(
    solver: &Point24Solver,
    hands: impl IntoIterator<Item = &'a [i64]>,
) -> Vec<(Vec<i64>, Option<String>)> {
    hands
        .into_iter()
        .map(|hand| (hand.to_vec(), solver.solve(hand)))
        .collect()
}

/// Render an `Input | Result` table. Missing solutions print as `None`.
#[must_use]
pub fn render_table(rows: &[(Vec<i64>, Option<String>)]) -> String {
    let mut out = format!("{:<INPUT_COLUMN_WIDTH$} | Result\n", "Input");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for (hand, result) in rows {
        let input = format!("{hand:?}");
        let result = result.as_deref().unwrap_or("None");
        let _ = writeln!(out, "{input:<INPUT_COLUMN_WIDTH$} | {result}");
    }
    out
}
