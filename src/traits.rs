use std::fmt::Debug;
use std::hash::Hash;

/// Provides an interface for graphs being traversed.
///
/// The driver never mutates caller nodes: discovery state lives in
/// side tables keyed by node identity for the duration of one run,
/// which is why implementors must be hashable and comparable. The
/// same nodes can therefore be reused across independent searches.
pub trait SearchNode: Debug + Clone + Eq + Hash + Sized {
    /// Produces the nodes reachable one step from this node.
    ///
    /// The returned order matters: it is the tie-break between
    /// siblings for every frontier policy.
    fn children(&self) -> Vec<Self>;
}
