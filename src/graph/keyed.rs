//! Domain-keyed graph wrapper.
//!
//! This module provides [`KeyedGraph`], a convenience wrapper around
//! [`DirectedGraph`] that handles the mapping between domain types (symbol
//! names, file paths, work-item identifiers) and internal [`NodeId`] indices.
//!
//! # Motivation
//!
//! Callers that want a finish-time order over their own types would otherwise
//! have to: build a graph from domain values, run the traversal over
//! `NodeId`, and map the result back. `KeyedGraph` encapsulates that pattern.
//!
//! # Examples
//!
//! ```rust
//! use postwalk::KeyedGraph;
//!
//! let mut graph: KeyedGraph<&str> = KeyedGraph::new();
//! graph.add_edge("build", "compile")?;
//! graph.add_edge("build", "link")?;
//! graph.add_edge("link", "compile")?;
//!
//! // Dependencies finish before their dependents.
//! let order = graph.finish_order_from(&["build"])?;
//! assert_eq!(order, vec!["compile", "link", "build"]);
//! # Ok::<(), postwalk::Error>(())
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    graph::{DirectedGraph, NodeId},
    traverse::{FinishTimeIter, SlotStore},
    Error::GraphError,
    Result,
};

/// A graph wrapper that provides automatic mapping between domain keys and
/// [`NodeId`].
///
/// `KeyedGraph<K>` stores nodes indexed by keys of type `K` (which must be
/// `Hash + Eq + Clone`) and maintains bidirectional mappings for lookups in
/// both directions. Node IDs follow key insertion order, and edges keep their
/// insertion order, so traversal results over a `KeyedGraph` are
/// deterministic.
///
/// # Thread Safety
///
/// `KeyedGraph<K>` is `Send` and `Sync` when `K` is.
#[derive(Debug, Clone)]
pub struct KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// The underlying directed graph; keys are held in the side maps.
    graph: DirectedGraph<()>,
    /// Map from domain key to `NodeId`.
    key_to_node: HashMap<K, NodeId>,
    /// Map from `NodeId` to domain key.
    node_to_key: HashMap<NodeId, K>,
}

impl<K> Default for KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty keyed graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DirectedGraph::new(),
            key_to_node: HashMap::new(),
            node_to_key: HashMap::new(),
        }
    }

    /// Creates a new empty keyed graph with pre-allocated node capacity.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            graph: DirectedGraph::with_capacity(nodes),
            key_to_node: HashMap::with_capacity(nodes),
            node_to_key: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a node with the given key, or returns the existing `NodeId` if
    /// the key is already present.
    ///
    /// Idempotent: the same key always maps to the same `NodeId`.
    pub fn add_node(&mut self, key: K) -> NodeId {
        if let Some(&node) = self.key_to_node.get(&key) {
            return node;
        }

        let node = self.graph.add_node(());
        self.key_to_node.insert(key.clone(), node);
        self.node_to_key.insert(node, key);
        node
    }

    /// Adds a directed edge between two nodes identified by their keys.
    ///
    /// Missing endpoints are created automatically. Duplicate edges are
    /// dropped, so successor sequences stay free of repeats.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph rejects the edge.
    pub fn add_edge(&mut self, from: K, to: K) -> Result<bool> {
        let from_node = self.add_node(from);
        let to_node = self.add_node(to);

        if self.graph.successors(from_node).any(|s| s == to_node) {
            return Ok(false);
        }

        self.graph.add_edge(from_node, to_node)?;
        Ok(true)
    }

    /// Returns the `NodeId` for a given key, if it exists.
    #[must_use]
    pub fn node_id(&self, key: &K) -> Option<NodeId> {
        self.key_to_node.get(key).copied()
    }

    /// Returns the key for a given `NodeId`, if it exists.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.node_to_key.get(&node)
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns a reference to the underlying [`DirectedGraph`], for passing
    /// to APIs that work with `NodeId` directly.
    #[must_use]
    pub fn inner(&self) -> &DirectedGraph<()> {
        &self.graph
    }

    /// Returns an iterator over all keys in the graph.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.key_to_node.keys()
    }

    /// Maps a slice of `NodeId`s back to domain keys, skipping unknown IDs.
    #[must_use]
    pub fn map_nodes_to_keys(&self, nodes: &[NodeId]) -> Vec<K> {
        nodes
            .iter()
            .filter_map(|node| self.node_to_key.get(node).cloned())
            .collect()
    }

    /// Computes the finish-time order of everything reachable from `roots`,
    /// mapped back to keys.
    ///
    /// Roots are taken in the given order; a root inside an earlier root's
    /// subtree is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`](crate::Error::GraphError) if a root key
    /// was never added — an unknown root is a caller contract error, not a
    /// node with no edges.
    pub fn finish_order_from(&self, roots: &[K]) -> Result<Vec<K>> {
        let root_ids = roots
            .iter()
            .map(|key| {
                self.key_to_node
                    .get(key)
                    .copied()
                    .ok_or_else(|| GraphError("Traversal root is not a node of this graph".into()))
            })
            .collect::<Result<Vec<NodeId>>>()?;

        let order: Vec<NodeId> = FinishTimeIter::new(
            &self.graph,
            root_ids.into_iter(),
            SlotStore::with_node_count(self.graph.node_count()),
        )
        .collect();
        Ok(self.map_nodes_to_keys(&order))
    }

    /// Computes the finish-time order over the whole graph, rooting a new
    /// DFS tree at every node (in insertion order) not yet reached.
    ///
    /// Every key appears exactly once.
    #[must_use]
    pub fn finish_order_all(&self) -> Vec<K> {
        let order: Vec<NodeId> = FinishTimeIter::new(
            &self.graph,
            self.graph.node_ids(),
            SlotStore::with_node_count(self.graph.node_count()),
        )
        .collect();
        self.map_nodes_to_keys(&order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_graph_basic() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();

        let a = graph.add_node("A");
        let b = graph.add_node("B");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_id(&"A"), Some(a));
        assert_eq!(graph.key(b), Some(&"B"));
        assert_eq!(graph.node_id(&"missing"), None);
    }

    #[test]
    fn test_keyed_graph_idempotent_add() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();

        let a1 = graph.add_node("A");
        let a2 = graph.add_node("A");

        assert_eq!(a1, a2);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_keyed_graph_edge_dedup() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();

        assert!(graph.add_edge("A", "B").unwrap());
        assert!(!graph.add_edge("A", "B").unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_keyed_finish_order_linear() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "C").unwrap();

        let order = graph.finish_order_from(&["A"]).unwrap();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_keyed_finish_order_cycle() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "A").unwrap();

        let order = graph.finish_order_from(&["A"]).unwrap();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_keyed_finish_order_unknown_root() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.add_node("A");

        assert!(graph.finish_order_from(&["ghost"]).is_err());
    }

    #[test]
    fn test_keyed_finish_order_all_covers_every_key() {
        let mut graph: KeyedGraph<u32> = KeyedGraph::new();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(3, 4).unwrap();
        graph.add_node(5);

        let mut order = graph.finish_order_all();
        assert_eq!(order.len(), 5);
        order.sort_unstable();
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_keyed_inner_exposes_node_ids() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.add_edge("A", "B").unwrap();

        assert_eq!(graph.inner().node_count(), 2);
        let keys: Vec<&str> = graph.keys().copied().collect();
        assert_eq!(keys.len(), 2);
    }
}
