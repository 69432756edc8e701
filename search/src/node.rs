//! Search node type and arena helpers.

use thought_kernel::proof::hash::ContentHash;

/// Operation label carried by every root node.
pub const ROOT_OPERATION: &str = "init";

/// A node in the search tree.
///
/// Nodes live in an arena (`Vec<ThoughtNode<S>>`) indexed by `node_id`.
/// `parent_id` is a non-owning index into the same arena.
#[derive(Debug, Clone)]
pub struct ThoughtNode<S> {
    /// Arena index, assigned in creation order (root = 0).
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// The problem state at this node.
    pub state: S,
    /// Dedup key of `state`.
    pub state_key: ContentHash,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// The step that produced this node from its parent.
    pub operation: String,
    /// Informational evaluator score.
    pub score: f64,
}

impl<S> ThoughtNode<S> {
    /// Whether this is the root of its search tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Convert a node ID into an arena index.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn arena_index(node_id: u64) -> usize {
    node_id as usize
}

/// Reconstruct the path from root to `goal_node_id` as a list of node IDs.
///
/// Returns an empty path if `goal_node_id` is not in `nodes`.
#[must_use]
pub fn reconstruct_path<S>(nodes: &[ThoughtNode<S>], goal_node_id: u64) -> Vec<u64> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        let Some(node) = nodes.get(arena_index(id)) else {
            return Vec::new();
        };
        path.push(id);
        current_id = node.parent_id;
    }

    path.reverse();
    path
}
