//! Proof module: canonical content hashing.

pub mod hash;
