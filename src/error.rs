use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Traversal over caller-supplied data is a pure, deterministic walk; every failure reflects a
/// contract violation by a collaborator (or a caller pulling past the end), not a transient
/// condition. Nothing here is retried.
///
/// # Error Categories
///
/// ## Traversal Protocol Errors
/// - [`Error::Exhausted`] - A checked pull past the end of a traversal
/// - [`Error::Unsupported`] - An operation the traversal protocol does not offer
///
/// ## Graph Contract Errors
/// - [`Error::GraphError`] - Invalid graph construction or a broken graph contract
///
/// # Examples
///
/// ```rust
/// use postwalk::{DirectedGraph, Error, NodeId};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_node("A");
///
/// // Edges must reference nodes that exist
/// match graph.add_edge(a, NodeId::new(7)) {
///     Err(Error::GraphError(message)) => {
///         eprintln!("rejected: {}", message);
///     }
///     other => panic!("expected a graph error, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The traversal has no more nodes to emit.
    ///
    /// Returned by the checked pull ([`FinishTimeIter::try_next`](crate::traverse::FinishTimeIter::try_next))
    /// once [`has_next`](crate::traverse::FinishTimeIter::has_next) is false. Recoverable; callers
    /// that probe `has_next` first never see it.
    #[error("Traversal is exhausted; no nodes remain to emit")]
    Exhausted,

    /// The requested operation is not part of the traversal protocol.
    ///
    /// The pull protocol offers enumeration only. Operations that mutate the underlying
    /// sequence (element removal, in particular) are rejected with this error by any API
    /// layer that accepts them syntactically. The payload names the operation.
    #[error("Operation is not supported by this traversal: {0}")]
    Unsupported(&'static str),

    /// Graph construction or contract violation.
    ///
    /// Occurs when a graph is built inconsistently (an edge endpoint that does not exist,
    /// a key that was never added) or when a collaborator breaks the successor contract.
    /// These are programming errors in the graph implementation; they are surfaced
    /// immediately rather than silently skipped, since skipping would corrupt the
    /// postorder guarantee.
    #[error("{0}")]
    GraphError(String),
}

/// Specialized `Result` type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
