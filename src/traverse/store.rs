//! Per-node visitation state and its storage.
//!
//! The traversal engines keep one piece of mutable state per node: the lazy
//! sequence of successors not yet examined, or a sentinel meaning "fully
//! explored". That state is deliberately external to the engine, behind the
//! [`VisitStore`] capability, so the same node type can be traversed by
//! independent engine instances, each over its own store.
//!
//! Two backings are provided:
//!
//! - [`MapStore`] - `HashMap`-keyed, for arbitrary node types
//! - [`SlotStore`] - dense `Vec`-backed, for [`NodeId`]-numbered graphs
//!
//! Both implement [`VisitStore`]; engine constructors pick one, callers with
//! unusual storage needs (inline fields, arenas) implement the trait
//! themselves.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::NodeId;

/// Visitation state of a single node.
///
/// A node absent from the store is *unvisited*. Once discovered it becomes
/// [`Pending`](VisitState::Pending), carrying the single-pass remainder of
/// its successor sequence; when that sequence drains, the node transitions to
/// [`Exhausted`](VisitState::Exhausted) and is never pushed again.
///
/// The transition chain `absent -> Pending -> Exhausted` runs at most once per
/// node over a traversal's lifetime; the engine never deletes entries or moves
/// a node backwards. Replacing the drained iterator with the `Exhausted`
/// sentinel also releases whatever the iterator was borrowing or buffering.
#[derive(Debug)]
pub enum VisitState<I> {
    /// Successors not yet examined: the node is on the stack, mid-exploration.
    Pending(I),
    /// All successors examined: the node has finished.
    Exhausted,
}

/// Get/set access to per-node visitation state.
///
/// Keyed by node identity as the graph defines it. The engine only requires
/// these three operations; the backing representation is the implementor's
/// business.
///
/// A store is single-traversal: after an engine has run (or been abandoned
/// mid-walk), the store retains `Pending`/`Exhausted` marks and must be reset
/// or replaced before another independent traversal can use it.
pub trait VisitStore<N, I> {
    /// Returns mutable access to the recorded state of `node`, or `None` if
    /// the node is unvisited.
    fn state_mut(&mut self, node: &N) -> Option<&mut VisitState<I>>;

    /// Records `state` for `node`, replacing any previous state.
    fn record(&mut self, node: &N, state: VisitState<I>);

    /// Returns `true` if `node` has any recorded state (`Pending` or
    /// `Exhausted`).
    fn visited(&self, node: &N) -> bool;
}

/// `HashMap`-backed visitation store for arbitrary node types.
///
/// The general-purpose backing: works for any `N: Eq + Hash + Clone`, at the
/// cost of hashing each access. Entries are created on first visit and only
/// ever transitioned, never removed.
#[derive(Debug)]
pub struct MapStore<N, I> {
    states: HashMap<N, VisitState<I>>,
}

impl<N, I> Default for MapStore<N, I> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
        }
    }
}

impl<N, I> MapStore<N, I>
where
    N: Eq + Hash + Clone,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Creates an empty store with capacity for `nodes` entries.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            states: HashMap::with_capacity(nodes),
        }
    }
}

impl<N, I> VisitStore<N, I> for MapStore<N, I>
where
    N: Eq + Hash + Clone,
{
    fn state_mut(&mut self, node: &N) -> Option<&mut VisitState<I>> {
        self.states.get_mut(node)
    }

    fn record(&mut self, node: &N, state: VisitState<I>) {
        self.states.insert(node.clone(), state);
    }

    fn visited(&self, node: &N) -> bool {
        self.states.contains_key(node)
    }
}

/// Dense visitation store for [`NodeId`]-numbered graphs.
///
/// One slot per node index; no hashing. The natural pairing for
/// [`DirectedGraph`](crate::graph::DirectedGraph), whose IDs are dense.
/// Slots grow on demand, so IDs beyond the initial capacity are still
/// handled correctly.
#[derive(Debug)]
pub struct SlotStore<I> {
    slots: Vec<Option<VisitState<I>>>,
}

impl<I> Default for SlotStore<I> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<I> SlotStore<I> {
    /// Creates a store with one pre-allocated slot per node.
    #[must_use]
    pub fn with_node_count(nodes: usize) -> Self {
        let mut slots = Vec::with_capacity(nodes);
        slots.resize_with(nodes, || None);
        Self { slots }
    }

    /// Grows the slot table so `index` is addressable.
    fn ensure(&mut self, index: usize) {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
    }
}

impl<I> VisitStore<NodeId, I> for SlotStore<I> {
    fn state_mut(&mut self, node: &NodeId) -> Option<&mut VisitState<I>> {
        self.slots.get_mut(node.index())?.as_mut()
    }

    fn record(&mut self, node: &NodeId, state: VisitState<I>) {
        self.ensure(node.index());
        self.slots[node.index()] = Some(state);
    }

    fn visited(&self, node: &NodeId) -> bool {
        self.slots
            .get(node.index())
            .is_some_and(Option::is_some)
    }
}
