//! Thought Harness: the 24-point puzzle bound to the search engine.
//!
//! The harness supplies the problem (states, arithmetic expansion, goal
//! predicate, dedup key) and everything a caller needs around it: input
//! validation, the solver entry point, an expression verifier, the sample
//! table, and JSON reports. The search loop itself lives in
//! `thought_search`; the harness never reimplements it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hand;
pub mod report;
pub mod sample;
pub mod solver;
pub mod verify;
pub mod worlds;
