//! Thought Kernel: the pure, dependency-free core shared by the search engine
//! and the puzzle harness.
//!
//! # API Surface
//!
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//! - [`numeric::is_close`] -- tolerance-based float equality
//! - [`numeric::canonical_value_bytes`] -- stable encoding of a numeric multiset
//!
//! # Module Dependency Direction
//!
//! `numeric` and `proof` are independent. Nothing in the kernel depends on
//! the search or harness crates.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod numeric;
pub mod proof;
