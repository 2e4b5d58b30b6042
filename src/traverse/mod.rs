//! Lazy depth-first traversal engines.
//!
//! This module is the heart of the crate: iterative, explicit-stack DFS over
//! an abstract graph, emitting nodes incrementally instead of materializing a
//! full order. Two engines share the machinery:
//!
//! - [`FinishTimeIter`] - nodes in increasing finish-time order (postorder);
//!   the building block under topological sorting, SCC detection, and
//!   dominance computation in analysis pipelines
//! - [`DiscoverTimeIter`] - nodes in increasing discover-time order (preorder)
//!
//! Both avoid native call-stack recursion (deep graphs would overflow it),
//! visit every node reachable from the root sequence exactly once, and
//! terminate on cyclic graphs.
//!
//! # Building blocks
//!
//! - [`WalkStack`] - the explicit DFS stack
//! - [`VisitState`] / [`VisitStore`] - external per-node "pending children"
//!   bookkeeping, with [`MapStore`] (arbitrary node types) and [`SlotStore`]
//!   (dense `NodeId` indexing) as the stock backings
//!
//! # Lazy vs. collected
//!
//! The engines are pull-based; [`finish_order`], [`postorder`], and
//! [`reverse_postorder`] are thin eager collectors for the common case where
//! the whole order is wanted anyway.
//!
//! # Examples
//!
//! ```rust
//! use postwalk::DirectedGraph;
//! use postwalk::traverse::FinishTimeIter;
//!
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b)?;
//! graph.add_edge(a, c)?;
//!
//! // Find the first finished node only; the walk stops there.
//! let mut it = FinishTimeIter::with_slot_store(&graph, [a].into_iter());
//! assert_eq!(it.next(), Some(b));
//! assert!(it.has_next());
//! # Ok::<(), postwalk::Error>(())
//! ```

mod discover;
mod finish;
mod stack;
mod store;

pub use discover::DiscoverTimeIter;
pub use finish::{finish_order, postorder, reverse_postorder, FinishTimeIter};
pub use stack::WalkStack;
pub use store::{MapStore, SlotStore, VisitState, VisitStore};
