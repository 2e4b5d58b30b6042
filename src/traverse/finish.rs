//! Lazy finish-time (postorder) depth-first traversal.
//!
//! [`FinishTimeIter`] enumerates graph nodes in order of strictly increasing
//! finish time: a node is emitted only once every node discovered through it
//! has already been emitted. This is the classic DFS postorder, exposed as a
//! pull-based iterator rather than a materialized list, so consumers that
//! short-circuit (say, "first finished node matching a predicate") never pay
//! for the full walk.
//!
//! The recursion of textbook DFS is replaced by an explicit [`WalkStack`];
//! per-node bookkeeping lives behind the [`VisitStore`] capability so the
//! engine itself carries nothing across `next` calls beyond the stack and the
//! root cursor.

use std::hash::Hash;
use std::iter;

use crate::{
    graph::{DirectedGraph, Neighbors, NodeId},
    traverse::{MapStore, SlotStore, VisitState, VisitStore, WalkStack},
    Error, Result,
};

/// Iterator over graph nodes in increasing finish-time order.
///
/// Composed from three caller-supplied capabilities:
///
/// - a graph `G:` [`Neighbors`] enumerating outgoing edges,
/// - a root sequence `R`, consumed single-pass, one root at a time,
/// - a visitation store `S:` [`VisitStore`] holding per-node pending-children
///   state.
///
/// Each node reachable from the roots is emitted exactly once. Roots that
/// were already reached as descendants of an earlier root are skipped. Cycles
/// are handled by ignoring edges to nodes already discovered; back and cross
/// edges never re-push a node. The emission order is deterministic given a
/// deterministic graph and root sequence, but it is a function of both, not a
/// canonical property of the graph.
///
/// The engine is single-threaded and pull-based: all state is carried between
/// `next` calls, and abandoning the iterator mid-walk is always safe. The
/// store retains whatever marks were written, so it must be reset or replaced
/// before a further independent traversal. Mutating the graph's successor
/// relation while a traversal is active is outside the contract.
///
/// # Examples
///
/// ```rust
/// use postwalk::DirectedGraph;
/// use postwalk::traverse::FinishTimeIter;
///
/// // A -> B -> C
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let order: Vec<_> = FinishTimeIter::with_slot_store(&graph, [a].into_iter()).collect();
/// assert_eq!(order, vec![c, b, a]);
/// # Ok::<(), postwalk::Error>(())
/// ```
///
/// A cycle finishes the deeper node first, because the shallower one is still
/// mid-exploration when the back edge is seen:
///
/// ```rust
/// use postwalk::DirectedGraph;
/// use postwalk::traverse::FinishTimeIter;
///
/// let mut graph: DirectedGraph<()> = DirectedGraph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, a)?;
///
/// let order: Vec<_> = FinishTimeIter::with_slot_store(&graph, [a].into_iter()).collect();
/// assert_eq!(order, vec![b, a]);
/// # Ok::<(), postwalk::Error>(())
/// ```
pub struct FinishTimeIter<G, R, S>
where
    G: Neighbors,
{
    /// The governing graph.
    graph: G,
    /// Remaining roots to search from, single-pass.
    roots: R,
    /// The next candidate root in finishing time order; `None` once the root
    /// sequence is drained.
    cursor: Option<G::Node>,
    /// Path of currently-open ancestors, root at the bottom.
    stack: WalkStack<G::Node>,
    /// Per-node pending-children state.
    store: S,
}

impl<G, R, S> FinishTimeIter<G, R, S>
where
    G: Neighbors,
    R: Iterator<Item = G::Node>,
    S: VisitStore<G::Node, G::Succs>,
{
    /// Creates an engine over an explicit visitation store.
    ///
    /// Draws the first root (if any) to seed the root cursor; no node is
    /// pushed and no successor is examined until the first pull. The store is
    /// expected to be fresh — pre-existing marks would make their nodes
    /// invisible to this traversal.
    pub fn new(graph: G, mut roots: R, store: S) -> Self {
        let cursor = roots.next();
        Self {
            graph,
            roots,
            cursor,
            stack: WalkStack::new(),
            store,
        }
    }

    /// Returns `true` if another node remains to be emitted.
    ///
    /// True iff a DFS tree is currently open (non-empty stack) or the cursor
    /// holds a root that has not yet been reached. Once false, it stays
    /// false.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
            || self
                .cursor
                .as_ref()
                .is_some_and(|root| !self.store.visited(root))
    }

    /// Pulls the next node in finishing time order, failing once exhausted.
    ///
    /// The checked companion to [`Iterator::next`]: identical traversal
    /// semantics, but a pull past the end is an [`Error::Exhausted`] instead
    /// of `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] if [`has_next`](Self::has_next) is false.
    pub fn try_next(&mut self) -> Result<G::Node> {
        self.advance().ok_or(Error::Exhausted)
    }

    /// Returns the current exploration depth: the number of nodes whose
    /// exploration has started but not finished.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Core step: find the next node whose exploration finishes.
    fn advance(&mut self) -> Option<G::Node> {
        if self.stack.is_empty() {
            // Begin a new DFS tree from the cursor root, if one remains.
            let root = match &self.cursor {
                Some(root) if !self.store.visited(root) => root.clone(),
                _ => return None,
            };
            self.open(root);
        }

        // Descend from the top of the stack until a node runs out of
        // unvisited successors; that node has finished.
        loop {
            let current = self.stack.top()?.clone();
            loop {
                // Pull one successor at a time from the pending sequence.
                let child = match self.store.state_mut(&current) {
                    Some(VisitState::Pending(succs)) => succs.next(),
                    // Nodes on the stack are always Pending.
                    _ => None,
                };

                match child {
                    Some(node) if !self.store.visited(&node) => {
                        // A new child: descend to it before scanning any of
                        // the current node's remaining successors.
                        self.open(node);
                        break;
                    }
                    Some(_) => {
                        // On an ancestor path (back edge) or already
                        // finished (cross edge): skip.
                    }
                    None => {
                        // Successor sequence drained: this is the finish
                        // event. Dropping the drained iterator for the
                        // sentinel also frees whatever it held.
                        self.store.record(&current, VisitState::Exhausted);
                        self.skip_visited_roots();
                        return self.stack.pop();
                    }
                }
            }
        }
    }

    /// Marks `node` as in progress with its full successor sequence and
    /// pushes it.
    fn open(&mut self, node: G::Node) {
        self.store
            .record(&node, VisitState::Pending(self.graph.neighbors(&node)));
        self.stack.push(node);
    }

    /// Advances the cursor past roots already consumed by earlier trees.
    ///
    /// Runs at finish events only, so the scan cost is amortized against the
    /// pops; the cursor never regresses.
    fn skip_visited_roots(&mut self) {
        while let Some(root) = &self.cursor {
            if !self.store.visited(root) {
                break;
            }
            self.cursor = self.roots.next();
        }
    }
}

impl<G, R> FinishTimeIter<G, R, MapStore<G::Node, G::Succs>>
where
    G: Neighbors,
    G::Node: Eq + Hash,
    R: Iterator<Item = G::Node>,
{
    /// Creates an engine over a fresh [`MapStore`], for arbitrary node types.
    pub fn with_map_store(graph: G, roots: R) -> Self {
        Self::new(graph, roots, MapStore::new())
    }
}

impl<G, R> FinishTimeIter<G, R, SlotStore<G::Succs>>
where
    G: Neighbors<Node = NodeId>,
    R: Iterator<Item = NodeId>,
{
    /// Creates an engine over a fresh [`SlotStore`], for `NodeId`-numbered
    /// graphs. The store grows on demand; pass a pre-sized store to
    /// [`new`](Self::new) to avoid regrowth on large graphs.
    pub fn with_slot_store(graph: G, roots: R) -> Self {
        Self::new(graph, roots, SlotStore::default())
    }
}

impl<G, R, S> Iterator for FinishTimeIter<G, R, S>
where
    G: Neighbors,
    R: Iterator<Item = G::Node>,
    S: VisitStore<G::Node, G::Succs>,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

/// Collects the full multi-root finish-time order of a graph.
///
/// Thin eager wrapper over [`FinishTimeIter`] with a [`MapStore`]; use the
/// iterator directly when lazy consumption matters.
///
/// # Examples
///
/// ```rust
/// use postwalk::DirectedGraph;
/// use postwalk::traverse::finish_order;
///
/// // Two disjoint components: A -> B and D -> E.
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let d = graph.add_node("D");
/// let e = graph.add_node("E");
/// graph.add_edge(a, b)?;
/// graph.add_edge(d, e)?;
///
/// assert_eq!(finish_order(&graph, [a, d]), vec![b, a, e, d]);
/// # Ok::<(), postwalk::Error>(())
/// ```
pub fn finish_order<G, R>(graph: G, roots: R) -> Vec<G::Node>
where
    G: Neighbors,
    G::Node: Eq + Hash,
    R: IntoIterator<Item = G::Node>,
{
    FinishTimeIter::with_map_store(graph, roots.into_iter()).collect()
}

/// Computes the postorder of nodes reachable from `start`.
///
/// In postorder, a node appears only after all nodes discovered through it.
/// Returns an empty vector if `start` does not name a node.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn postorder<N>(graph: &DirectedGraph<N>, start: NodeId) -> Vec<NodeId> {
    if start.index() >= graph.node_count() {
        return Vec::new();
    }
    FinishTimeIter::new(
        graph,
        iter::once(start),
        SlotStore::with_node_count(graph.node_count()),
    )
    .collect()
}

/// Computes the reverse postorder of nodes reachable from `start`.
///
/// Reverse postorder places a node before any of its successors (in a DAG),
/// which is the preferred iteration order for forward data flow analysis.
pub fn reverse_postorder<N>(graph: &DirectedGraph<N>, start: NodeId) -> Vec<NodeId> {
    let mut order = postorder(graph, start);
    order.reverse();
    order
}
