//! Directed graph representation and capability traits.
//!
//! This module provides the graph side of the crate: a strongly-typed node
//! identifier, a concrete adjacency-list graph, a domain-key wrapper, and the
//! capability traits the traversal engines in [`crate::traverse`] consume.
//!
//! # Traits
//!
//! - [`GraphBase`] - Node count and node enumeration
//! - [`Successors`] - Forward edge enumeration for `NodeId`-indexed graphs
//! - [`Neighbors`] - Successor enumeration over an arbitrary node type; the
//!   capability the traversal engines are generic over
//!
//! # Types
//!
//! - [`NodeId`] - Strongly-typed node index
//! - [`DirectedGraph`] - Adjacency-list directed graph with node data
//! - [`KeyedGraph`] - Wrapper mapping domain keys to `NodeId` and back
//!
//! # Examples
//!
//! ```rust
//! use postwalk::{DirectedGraph, NodeId};
//! use postwalk::traverse::finish_order;
//!
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//!
//! // Nodes come out in increasing finish-time order: C finishes first.
//! assert_eq!(finish_order(&graph, [a]), vec![c, b, a]);
//! # Ok::<(), postwalk::Error>(())
//! ```

mod directed;
mod keyed;
mod node;

pub use directed::DirectedGraph;
pub use keyed::KeyedGraph;
pub use node::NodeId;

/// Base capability of a `NodeId`-indexed graph: how many nodes, and which.
///
/// Node IDs are dense: every index in `0..node_count()` names a node.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node IDs in the graph.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Forward edge enumeration for `NodeId`-indexed graphs.
///
/// The successor sequence for a fixed node must be finite, and deterministic
/// across repeated queries while a traversal is in flight; traversal results
/// are a function of the order this enumeration yields.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `node`.
    ///
    /// Unknown nodes yield an empty sequence.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Successor enumeration over an arbitrary node type.
///
/// This is the graph capability the traversal engines consume. Unlike
/// [`Successors`], the successor iterator is an owned associated type: the
/// engine stashes it, partially drained, inside the visitation store as the
/// "pending children" of a node currently under exploration.
///
/// Node identity and equality are whatever the implementation defines; the
/// engine never inspects nodes beyond cloning them and handing them to the
/// visitation store.
///
/// Implemented for `&DirectedGraph<N>`, so a plain graph reference can be
/// passed to the engines directly. Implement it for your own graph-shaped
/// types to traverse them without conversion:
///
/// ```rust
/// use postwalk::Neighbors;
/// use postwalk::traverse::finish_order;
///
/// /// Edges computed on the fly: n -> n/2 for even n.
/// struct Halving;
///
/// impl Neighbors for Halving {
///     type Node = u64;
///     type Succs = std::option::IntoIter<u64>;
///
///     fn neighbors(&self, node: &u64) -> Self::Succs {
///         (node % 2 == 0 && *node > 0).then(|| node / 2).into_iter()
///     }
/// }
///
/// assert_eq!(finish_order(Halving, [8u64]), vec![1, 2, 4, 8]);
/// ```
pub trait Neighbors {
    /// The node type of the graph.
    type Node: Clone;

    /// The owned successor iterator produced for a node.
    type Succs: Iterator<Item = Self::Node>;

    /// Returns the outgoing neighbors of `node`.
    ///
    /// Called exactly once per node over the lifetime of a traversal; the
    /// returned sequence is consumed single-pass.
    fn neighbors(&self, node: &Self::Node) -> Self::Succs;
}
