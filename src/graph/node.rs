//! Node identifier for directed graphs.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for nodes
//! within a [`DirectedGraph`](crate::graph::DirectedGraph). The newtype wrapper keeps
//! node indices from being confused with other integer values, and doubles as the
//! dense key for slot-backed visitation state.

use std::fmt;

/// A strongly-typed identifier for nodes within a directed graph.
///
/// `NodeId` wraps a `usize` index. Node IDs are assigned sequentially starting from 0
/// when nodes are added to a graph, which makes them usable directly as indices into
/// per-node side tables (the dense [`SlotStore`](crate::traverse::SlotStore) relies
/// on exactly this).
///
/// # Usage
///
/// Node IDs are created by [`DirectedGraph::add_node`](crate::graph::DirectedGraph::add_node)
/// and are not typically constructed manually. They are used to:
///
/// - Reference nodes when adding edges
/// - Name roots when starting a traversal
/// - Store per-node analysis results
///
/// # Examples
///
/// ```rust
/// use postwalk::{DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a: NodeId = graph.add_node("A");
/// let b: NodeId = graph.add_node("B");
///
/// assert_ne!(a, b);
/// assert_eq!(b.index(), 1);
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Primarily intended for tests and for callers that number their own nodes;
    /// ordinary usage obtains IDs from [`DirectedGraph::add_node`](crate::graph::DirectedGraph::add_node).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw 0-based index of this node identifier.
    ///
    /// The index can be used directly to address vectors holding per-node data.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    /// Converts a raw `usize` index into a `NodeId`.
    ///
    /// Provided for convenience; the caller is responsible for the index actually
    /// naming a node in whatever graph it is used against.
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    /// Extracts the raw index from a `NodeId`.
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_roundtrip() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);

        let from_usize: NodeId = 7usize.into();
        let back: usize = from_usize.into();
        assert_eq!(back, 7);
    }

    #[test]
    fn test_node_id_ordering_and_equality() {
        let n1 = NodeId::new(1);
        let n2 = NodeId::new(2);

        assert_eq!(n1, NodeId::new(1));
        assert_ne!(n1, n2);
        assert!(n1 < n2);
    }

    #[test]
    fn test_node_id_as_set_element() {
        let mut set: HashSet<NodeId> = HashSet::new();
        set.insert(NodeId::new(1));
        set.insert(NodeId::new(2));
        set.insert(NodeId::new(1)); // Duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(42);
        assert_eq!(format!("{node:?}"), "NodeId(42)");
        assert_eq!(format!("{node}"), "n42");
    }
}
