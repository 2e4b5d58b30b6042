//! Adjacency-list directed graph.
//!
//! This module provides [`DirectedGraph`], the concrete graph used by tests,
//! benches, and callers that do not bring their own graph representation. It
//! stores node data of type `N` and forward adjacency only; the traversal
//! engines consume nothing but successor enumeration, so edge payloads carry
//! no weight here.

use crate::{
    graph::{GraphBase, Neighbors, NodeId, Successors},
    Error::GraphError,
    Result,
};

/// A directed graph over nodes carrying data of type `N`.
///
/// Nodes are identified by dense [`NodeId`]s assigned in insertion order.
/// Edges are stored as forward adjacency lists; parallel edges are permitted
/// and the successor order of a node is exactly its edge insertion order,
/// which makes traversal results deterministic.
///
/// # Examples
///
/// ```rust
/// use postwalk::DirectedGraph;
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.add_edge(a, b)?;
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.node(a), Some(&"A"));
/// # Ok::<(), postwalk::Error>(())
/// ```
///
/// # Thread Safety
///
/// `DirectedGraph<N>` is `Send` and `Sync` when `N` is. Traversals over a
/// shared reference require no synchronization since they never mutate the
/// graph.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<N> {
    /// Node data, indexed by `NodeId`.
    nodes: Vec<N>,
    /// Forward adjacency, indexed by `NodeId`. Successor order is edge
    /// insertion order.
    adjacency: Vec<Vec<NodeId>>,
    /// Total number of edges.
    edges: usize,
}

impl<N> DirectedGraph<N> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            edges: 0,
        }
    }

    /// Creates a new empty graph with pre-allocated node capacity.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edges: 0,
        }
    }

    /// Adds a node with the given data and returns its ID.
    ///
    /// IDs are assigned sequentially starting from 0.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// Both endpoints must already exist in the graph. Out-of-range endpoints
    /// are a contract violation and are rejected immediately rather than
    /// deferred to traversal time, where a dangling successor would corrupt
    /// the postorder guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`](crate::Error::GraphError) if either
    /// endpoint does not name a node.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        let count = self.nodes.len();
        if from.index() >= count || to.index() >= count {
            return Err(GraphError(format!(
                "Edge {from} -> {to} references a node outside the graph ({count} nodes)"
            )));
        }
        self.adjacency[from.index()].push(to);
        self.edges += 1;
        Ok(())
    }

    /// Returns a reference to the data of `node`, or `None` if the ID is
    /// out of range.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all node IDs.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns an iterator over the successors of `node` in edge insertion
    /// order. Unknown nodes yield an empty sequence.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.successor_slice(node).iter().copied()
    }

    /// The raw successor list of a node. Empty for out-of-range IDs.
    fn successor_slice(&self, node: NodeId) -> &[NodeId] {
        match self.adjacency.get(node.index()) {
            Some(list) => list,
            None => &[],
        }
    }
}

impl<N> GraphBase for DirectedGraph<N> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<N> Successors for DirectedGraph<N> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.successor_slice(node).iter().copied()
    }
}

/// A shared graph reference is the [`Neighbors`] capability the traversal
/// engines consume: successor iterators borrow the adjacency lists and stay
/// valid for as long as the reference does.
impl<'g, N> Neighbors for &'g DirectedGraph<N> {
    type Node = NodeId;
    type Succs = std::iter::Copied<std::slice::Iter<'g, NodeId>>;

    fn neighbors(&self, node: &NodeId) -> Self::Succs {
        self.successor_slice(*node).iter().copied()
    }
}
