//! Lazy discover-time (preorder) depth-first traversal.
//!
//! [`DiscoverTimeIter`] is the preorder sibling of
//! [`FinishTimeIter`](crate::traverse::FinishTimeIter): the same explicit
//! stack, the same external visitation store, the same multi-root contract,
//! but each node is emitted at its discovery event — the moment it is first
//! pushed — instead of its finish event.

use std::hash::Hash;

use crate::{
    graph::{Neighbors, NodeId},
    traverse::{MapStore, SlotStore, VisitState, VisitStore, WalkStack},
};

/// Iterator over graph nodes in increasing discover-time order (DFS preorder).
///
/// Every node reachable from the root sequence is emitted exactly once, a
/// parent strictly before any node first discovered through it. Roots already
/// reached through an earlier tree are skipped.
///
/// Unlike the finish-time engine there is no `has_next` probe: a non-empty
/// stack does not imply a further emission (the remaining pending successors
/// may all be visited already), so the only exhaustion signal is `None` from
/// [`Iterator::next`].
///
/// # Examples
///
/// ```rust
/// use postwalk::DirectedGraph;
/// use postwalk::traverse::DiscoverTimeIter;
///
/// // A -> B -> C
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let order: Vec<_> = DiscoverTimeIter::with_slot_store(&graph, [a].into_iter()).collect();
/// assert_eq!(order, vec![a, b, c]);
/// # Ok::<(), postwalk::Error>(())
/// ```
pub struct DiscoverTimeIter<G, R, S>
where
    G: Neighbors,
{
    /// The governing graph.
    graph: G,
    /// Remaining roots, single-pass.
    roots: R,
    /// The next candidate root; `None` once the root sequence is drained.
    cursor: Option<G::Node>,
    /// Path of currently-open ancestors.
    stack: WalkStack<G::Node>,
    /// Per-node pending-children state.
    store: S,
}

impl<G, R, S> DiscoverTimeIter<G, R, S>
where
    G: Neighbors,
    R: Iterator<Item = G::Node>,
    S: VisitStore<G::Node, G::Succs>,
{
    /// Creates an engine over an explicit visitation store.
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

    /// Marks `node` in progress, pushes it, and hands it back as its own
    /// discovery event.
    fn open(&mut self, node: G::Node) -> G::Node {
        self.store
            .record(&node, VisitState::Pending(self.graph.neighbors(&node)));
        self.stack.push(node.clone());
        node
    }

    /// Takes the next root that has not already been reached.
    fn next_fresh_root(&mut self) -> Option<G::Node> {
        loop {
            let root = match self.cursor.take() {
                Some(root) => root,
                None => self.roots.next()?,
            };
            if !self.store.visited(&root) {
                return Some(root);
            }
        }
    }

    fn advance(&mut self) -> Option<G::Node> {
        loop {
            let Some(current) = self.stack.top().cloned() else {
                // Current tree done; a fresh root starts the next one and is
                // itself the next discovery.
                let root = self.next_fresh_root()?;
                return Some(self.open(root));
            };

            loop {
                let child = match self.store.state_mut(&current) {
                    Some(VisitState::Pending(succs)) => succs.next(),
                    _ => None,
                };

                match child {
                    Some(node) if !self.store.visited(&node) => {
                        return Some(self.open(node));
                    }
                    Some(_) => {
                        // Already discovered through another edge: skip.
                    }
                    None => {
                        self.store.record(&current, VisitState::Exhausted);
                        self.stack.pop();
                        break;
                    }
                }
            }
        }
    }
}

impl<G, R> DiscoverTimeIter<G, R, MapStore<G::Node, G::Succs>>
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

impl<G, R> DiscoverTimeIter<G, R, SlotStore<G::Succs>>
where
    G: Neighbors<Node = NodeId>,
    R: Iterator<Item = NodeId>,
{
    /// Creates an engine over a fresh [`SlotStore`], for `NodeId`-numbered
    /// graphs.
    pub fn with_slot_store(graph: G, roots: R) -> Self {
        Self::new(graph, roots, SlotStore::default())
    }
}

impl<G, R, S> Iterator for DiscoverTimeIter<G, R, S>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn graph_from_edges(nodes: usize, edges: &[(usize, usize)]) -> DirectedGraph<()> {
        let mut graph = DirectedGraph::with_capacity(nodes);
        for _ in 0..nodes {
            graph.add_node(());
        }
        for &(from, to) in edges {
            graph
                .add_edge(NodeId::new(from), NodeId::new(to))
                .unwrap();
        }
        graph
    }

    fn ids(indices: &[usize]) -> Vec<NodeId> {
        indices.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_preorder_linear() {
        let graph = graph_from_edges(3, &[(0, 1), (1, 2)]);
        let order: Vec<NodeId> =
            DiscoverTimeIter::with_slot_store(&graph, ids(&[0]).into_iter()).collect();
        assert_eq!(order, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_preorder_descends_before_siblings() {
        // A -> {B, C}, B -> D: preorder A, B, D, C.
        let graph = graph_from_edges(4, &[(0, 1), (0, 2), (1, 3)]);
        let order: Vec<NodeId> =
            DiscoverTimeIter::with_slot_store(&graph, ids(&[0]).into_iter()).collect();
        assert_eq!(order, ids(&[0, 1, 3, 2]));
    }

    #[test]
    fn test_preorder_cycle_terminates() {
        let graph = graph_from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let order: Vec<NodeId> =
            DiscoverTimeIter::with_slot_store(&graph, ids(&[0]).into_iter()).collect();
        assert_eq!(order, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_preorder_multiple_roots() {
        // Two components, second root already covered by neither.
        let graph = graph_from_edges(4, &[(0, 1), (2, 3)]);
        let order: Vec<NodeId> =
            DiscoverTimeIter::with_slot_store(&graph, ids(&[0, 2]).into_iter()).collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_preorder_visited_root_skipped() {
        // B is inside A's tree; root B must not re-emit.
        let graph = graph_from_edges(2, &[(0, 1)]);
        let order: Vec<NodeId> =
            DiscoverTimeIter::with_slot_store(&graph, ids(&[0, 1]).into_iter()).collect();
        assert_eq!(order, ids(&[0, 1]));
    }

    #[test]
    fn test_preorder_empty_roots() {
        let graph = graph_from_edges(2, &[(0, 1)]);
        let mut it = DiscoverTimeIter::with_slot_store(&graph, ids(&[]).into_iter());
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_preorder_map_store_generic_nodes() {
        use crate::graph::Neighbors;

        struct Pairs;
        impl Neighbors for Pairs {
            type Node = u8;
            type Succs = std::vec::IntoIter<u8>;

            fn neighbors(&self, node: &u8) -> Self::Succs {
                match *node {
                    0 => vec![1, 2],
                    1 => vec![2],
                    _ => vec![],
                }
                .into_iter()
            }
        }

        let order: Vec<u8> =
            DiscoverTimeIter::with_map_store(Pairs, [0u8].into_iter()).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
