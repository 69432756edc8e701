//! Typed search errors.
//!
//! `SearchError` represents configuration failures only. They are raised when
//! an engine is constructed, before any node exists. Runtime outcomes
//! (goal found, frontier exhausted, budget hit, callback panic) are expressed
//! via [`crate::report::TerminationReason`], and "no solution" is never an
//! error.

/// Typed failure for engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The strategy identifier is not one of the recognized names.
    UnknownStrategy { name: String },
    /// A policy field holds a value the engine cannot honor.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy { name } => {
                write!(
                    f,
                    "unknown search strategy {name:?} (expected one of: bfs, breadth_first, dfs, depth_first)"
                )
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
