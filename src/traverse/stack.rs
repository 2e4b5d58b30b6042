//! Explicit traversal stack.
//!
//! Depth-first search is naturally recursive; on deep graphs, native call-stack
//! recursion is a liability. [`WalkStack`] is the heap-allocated replacement:
//! an owned stack of nodes holding exactly the path of currently-open ancestors,
//! from some root at the bottom to the node under exploration on top.

/// The explicit DFS stack.
///
/// Invariant: the stack contents are, bottom to top, the path of nodes whose
/// exploration has started but not finished. A node is pushed when it is first
/// discovered and popped when its successor sequence is exhausted; an empty
/// stack means the current DFS tree is fully finished.
///
/// This is an internal-shaped type deliberately kept separate from the
/// iterator that drives it, so no list-like surface leaks to consumers.
#[derive(Debug, Clone)]
pub struct WalkStack<N> {
    entries: Vec<N>,
}

impl<N> WalkStack<N> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Pushes a newly discovered node.
    pub fn push(&mut self, node: N) {
        self.entries.push(node);
    }

    /// Pops and returns the top node, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<N> {
        self.entries.pop()
    }

    /// Returns a reference to the node currently under exploration.
    #[must_use]
    pub fn top(&self) -> Option<&N> {
        self.entries.last()
    }

    /// Returns `true` if no node is under exploration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current exploration depth (number of open ancestors).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl<N> Default for WalkStack<N> {
    fn default() -> Self {
        Self::new()
    }
}
