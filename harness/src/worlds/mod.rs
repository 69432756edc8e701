//! Search worlds bound to the engine.

pub mod point24;
