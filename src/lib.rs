// Copyright 2026 the postwalk contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]
#![deny(unsafe_code)]

//! # postwalk
//!
//! Lazy finish-time (postorder) depth-first traversal for directed graphs.
//!
//! `postwalk` provides the traversal primitive that sits underneath
//! topological sorting, strongly-connected-component detection, and dominance
//! computation in static-analysis pipelines: an iterative DFS that emits
//! nodes in strictly increasing finish-time order, pulled one node at a time
//! instead of materialized up front.
//!
//! ## Features
//!
//! - **Explicit-stack DFS** - no native recursion; graphs of arbitrary depth
//!   traverse without risking stack overflow
//! - **Lazy pull iteration** - consumers that short-circuit never pay for the
//!   full walk
//! - **Multiple root sets** - disjoint DFS trees concatenate in emission
//!   order; roots already covered by an earlier tree are skipped
//! - **Cycle safe** - back and cross edges are ignored, every node is emitted
//!   exactly once, cyclic graphs terminate
//! - **Abstract collaborators** - the graph, the root sequence, and the
//!   per-node visitation store are capabilities the caller supplies; any node
//!   type works
//!
//! ## Quick Start
//!
//! ```rust
//! use postwalk::DirectedGraph;
//! use postwalk::traverse::finish_order;
//!
//! // A -> B -> C
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//!
//! // C finishes first, the root last.
//! assert_eq!(finish_order(&graph, [a]), vec![c, b, a]);
//! # Ok::<(), postwalk::Error>(())
//! ```
//!
//! ### Lazy consumption
//!
//! ```rust
//! use postwalk::DirectedGraph;
//! use postwalk::traverse::FinishTimeIter;
//!
//! let mut graph: DirectedGraph<u32> = DirectedGraph::new();
//! let a = graph.add_node(1);
//! let b = graph.add_node(2);
//! graph.add_edge(a, b)?;
//!
//! let mut walk = FinishTimeIter::with_slot_store(&graph, [a].into_iter());
//! assert!(walk.has_next());
//! assert_eq!(walk.try_next()?, b); // first finish event only
//! # Ok::<(), postwalk::Error>(())
//! ```
//!
//! ### Domain keys
//!
//! ```rust
//! use postwalk::KeyedGraph;
//!
//! let mut deps: KeyedGraph<&str> = KeyedGraph::new();
//! deps.add_edge("app", "libc")?;
//! deps.add_edge("app", "ssl")?;
//! deps.add_edge("ssl", "libc")?;
//!
//! let order = deps.finish_order_from(&["app"])?;
//! assert_eq!(order, vec!["libc", "ssl", "app"]);
//! # Ok::<(), postwalk::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - [`DirectedGraph`], [`KeyedGraph`], [`NodeId`], and the
//!   capability traits ([`Neighbors`], [`Successors`], [`GraphBase`])
//! - [`traverse`] - the traversal engines and their building blocks
//! - [`prelude`] - convenient re-exports
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Scope
//!
//! `postwalk` is the traversal layer only. Algorithms that consume a finish
//! order (topological sort, SCC, dominators) and concurrent traversal are
//! out of scope; the graph is assumed stable for the duration of a walk.

pub mod graph;
pub mod prelude;
pub mod traverse;

mod error;

pub use error::{Error, Result};
pub use graph::{DirectedGraph, GraphBase, KeyedGraph, Neighbors, NodeId, Successors};
