//! Binary that solves the sample hands under both strategies and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: key=value lines (see source for format).

use lock_tests::hand_key;
use thought_harness::report::{batch_report, report_bytes, report_digest};
use thought_harness::sample::SAMPLE_HANDS;
use thought_harness::solver::Point24Solver;

fn main() {
    for strategy in ["bfs", "dfs"] {
        let solver = Point24Solver::with_strategy_name(strategy).expect("known strategy");
        for hand in &SAMPLE_HANDS {
            let result = solver.solve(hand);
            println!(
                "{strategy}.{}={}",
                hand_key(hand),
                result.as_deref().unwrap_or("none")
            );
        }

        let report = batch_report(&solver, SAMPLE_HANDS.iter().map(<[i64; 4]>::as_slice));
        let bytes = report_bytes(&report).expect("report serializes");
        println!("{strategy}.report_digest={}", report_digest(&bytes).as_str());
        println!("{strategy}.solved={}", report["solved"]);
    }
}
