//! # postwalk Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and traits of the library. Import it to get quick access to everything a
//! typical traversal needs.
//!
//! ```rust
//! use postwalk::prelude::*;
//!
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! graph.add_edge(a, b)?;
//!
//! assert_eq!(finish_order(&graph, [a]), vec![b, a]);
//! # Ok::<(), Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all postwalk operations
pub use crate::Error;

/// The result type used throughout postwalk
pub use crate::Result;

// ================================================================================================
// Graph Representation
// ================================================================================================

/// Strongly-typed node identifier
pub use crate::graph::NodeId;

/// Adjacency-list directed graph
pub use crate::graph::DirectedGraph;

/// Domain-key graph wrapper
pub use crate::graph::KeyedGraph;

/// Graph capability traits
pub use crate::graph::{GraphBase, Neighbors, Successors};

// ================================================================================================
// Traversal Engines
// ================================================================================================

/// Finish-time (postorder) traversal engine
pub use crate::traverse::FinishTimeIter;

/// Discover-time (preorder) traversal engine
pub use crate::traverse::DiscoverTimeIter;

/// Eager collectors over the finish-time engine
pub use crate::traverse::{finish_order, postorder, reverse_postorder};

// ================================================================================================
// Visitation State
// ================================================================================================

/// Per-node visitation state and its storage capability
pub use crate::traverse::{VisitState, VisitStore};

/// Stock visitation store backings
pub use crate::traverse::{MapStore, SlotStore};
