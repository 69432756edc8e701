//! tot24 - solve 24-point hands with tree-of-thoughts search.
//!
//! With no numbers, prints the sample table. With numbers, validates them
//! as a hand and prints the result. Logs go to stderr (`RUST_LOG`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use thought_harness::hand::Hand;
use thought_harness::report::{batch_report, write_report_dir};
use thought_harness::sample::{render_table, solve_all, SAMPLE_HANDS};
use thought_harness::solver::Point24Solver;
use thought_search::policy::{SearchPolicy, SearchStrategy};

#[derive(Parser, Debug)]
#[command(name = "tot24")]
#[command(about = "Solve the 24-point game with tree-of-thoughts search", long_about = None)]
#[command(version)]
struct Cli {
    /// Four cards in 1..=13. Omit to run the sample hands.
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<i64>,

    #[arg(
        long,
        default_value = "bfs",
        help = "Search strategy: bfs | breadth_first | dfs | depth_first"
    )]
    strategy: String,

    /// Stop after this many node expansions
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Never generate states deeper than this
    #[arg(long)]
    max_depth: Option<u32>,

    /// Print the JSON report instead of the table
    #[arg(long)]
    json: bool,

    #[arg(
        long,
        value_name = "DIR",
        help = "Write report.json and report_digest.txt into this directory"
    )]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let strategy: SearchStrategy = cli.strategy.parse().context("invalid --strategy")?;
    let solver = Point24Solver::with_policy(SearchPolicy {
        strategy,
        max_expansions: cli.max_expansions,
        max_depth: cli.max_depth,
    })
    .context("invalid search budget")?;

    let hands: Vec<Vec<i64>> = if cli.numbers.is_empty() {
        SAMPLE_HANDS.iter().copied().map(Vec::from).collect()
    } else {
        let hand = Hand::new(&cli.numbers).context("invalid hand")?;
        vec![hand.cards().to_vec()]
    };
    info!(hands = hands.len(), strategy = %strategy, "solving");

    if cli.json || cli.report.is_some() {
        let report = batch_report(&solver, hands.iter().map(Vec::as_slice));
        if let Some(dir) = &cli.report {
            let digest = write_report_dir(dir, &report)
                .with_context(|| format!("writing report to {}", dir.display()))?;
            info!(digest = %digest, dir = %dir.display(), "report written");
        }
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
    }

    if cli.numbers.is_empty() {
        let rows = solve_all(&solver, hands.iter().map(Vec::as_slice));
        print!("{}", render_table(&rows));
    } else {
        match solver.solve(&hands[0]) {
            Some(line) => println!("{line}"),
            None => println!("no solution"),
        }
    }

    Ok(())
}
