//! Solver lock tests: golden outputs, in-process determinism, exhaustive
//! no-solution cases, and a full sweep of every hand.

use lock_tests::all_hands;
use thought_harness::report::{batch_report, report_bytes};
use thought_harness::sample::SAMPLE_HANDS;
use thought_harness::solver::Point24Solver;
use thought_harness::verify::verify_solution;
use thought_search::report::TerminationReason;

// ---------------------------------------------------------------------------
// Golden outputs
// ---------------------------------------------------------------------------

#[test]
fn breadth_first_golden_outputs() {
    let solver = Point24Solver::new();
    let cases: [(&[i64], Option<&str>); 6] = [
        (&[3, 3, 8, 8], Some("(8 / (3 - (8 / 3))) = 24")),
        (&[1, 1, 1, 1], None),
        (&[1, 2, 3, 4], Some("(4 * (3 + (1 + 2))) = 24")),
        (&[5, 5, 5, 1], Some("(5 * (5 - (1 / 5))) = 24")),
        (&[4, 7, 8, 8], Some("(8 * ((4 + 7) - 8)) = 24")),
        (&[13, 13, 13, 13], None),
    ];
    for (hand, expected) in cases {
        assert_eq!(solver.solve(hand).as_deref(), expected, "hand {hand:?}");
    }
}

#[test]
fn depth_first_golden_outputs() {
    let solver = Point24Solver::with_strategy_name("dfs").unwrap();
    let cases: [(&[i64], Option<&str>); 5] = [
        (&[3, 3, 8, 8], Some("(8 / (3 - (8 / 3))) = 24")),
        (&[1, 1, 1, 1], None),
        (&[1, 2, 3, 4], Some("(1 * (2 * (3 * 4))) = 24")),
        (&[5, 5, 5, 1], Some("(5 * (5 - (1 / 5))) = 24")),
        (&[4, 7, 8, 8], Some("(4 * (7 - (8 / 8))) = 24")),
    ];
    for (hand, expected) in cases {
        assert_eq!(solver.solve(hand).as_deref(), expected, "hand {hand:?}");
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn report_bytes_identical_across_runs_n10() {
    for strategy in ["bfs", "dfs"] {
        let solver = Point24Solver::with_strategy_name(strategy).unwrap();
        let first =
            report_bytes(&batch_report(&solver, SAMPLE_HANDS.iter().map(<[i64; 4]>::as_slice)))
                .unwrap();
        for _ in 1..10 {
            let other =
                report_bytes(&batch_report(&solver, SAMPLE_HANDS.iter().map(<[i64; 4]>::as_slice)))
                    .unwrap();
            assert_eq!(first, other, "{strategy} report bytes differ across runs");
        }
    }
}

#[test]
fn fresh_solvers_agree() {
    for hand in all_hands().iter().step_by(37) {
        assert_eq!(
            Point24Solver::new().solve(hand),
            Point24Solver::new().solve(hand),
            "hand {hand:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Exhaustiveness
// ---------------------------------------------------------------------------

#[test]
fn four_ones_exhaust_the_frontier() {
    for strategy in ["bfs", "dfs"] {
        let solver = Point24Solver::with_strategy_name(strategy).unwrap();
        let result = solver.search(&[1, 1, 1, 1]);
        assert_eq!(
            result.termination_reason,
            TerminationReason::FrontierExhausted
        );
        assert!(result.goal_node().is_none());
        assert_eq!(result.stats.nodes_created, 24, "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// Full sweep
// ---------------------------------------------------------------------------

#[test]
fn every_hand_solution_verifies_and_count_is_known() {
    for strategy in ["bfs", "dfs"] {
        let solver = Point24Solver::with_strategy_name(strategy).unwrap();
        let mut solved = 0;
        for hand in all_hands() {
            if let Some(line) = solver.solve(&hand) {
                verify_solution(&line, &hand)
                    .unwrap_or_else(|e| panic!("{strategy} {hand:?} -> {line}: {e}"));
                solved += 1;
            }
        }
        assert_eq!(solved, 1362, "{strategy} solvable hand count");
    }
}
