//! Thought Search: a strategy-agnostic tree-of-thoughts search engine.
//!
//! This crate provides the search layer. It depends only on
//! `thought_kernel` and knows nothing about the shape of the states it
//! explores; problems plug in through [`ThoughtProblem`].
//!
//! # Crate dependency graph
//!
//! ```text
//! thought_kernel  ←  thought_search  ←  thought_harness
//! (hash, numeric)     (frontier, nodes)   (24-point puzzle, driver)
//! ```
//!
//! # Key types
//!
//! - [`ThoughtProblem`]: expansion, goal predicate, and dedup key for a state type
//! - [`StateEvaluator`]: informational scoring hook (never affects ordering)
//! - [`ThoughtNode`]: arena-allocated node with a non-owning parent index
//! - [`Frontier`]: FIFO or LIFO frontier with enqueue-time dedup
//! - [`SearchPolicy`]: strategy selector plus optional budgets
//! - [`TreeOfThoughts`]: the engine
//!
//! [`ThoughtProblem`]: contract::ThoughtProblem
//! [`StateEvaluator`]: scorer::StateEvaluator
//! [`ThoughtNode`]: node::ThoughtNode
//! [`Frontier`]: frontier::Frontier
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`TreeOfThoughts`]: search::TreeOfThoughts

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod scorer;
pub mod search;
