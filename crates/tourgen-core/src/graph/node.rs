//! Node identifiers and node attribute payloads.
//!
//! A [`NodeId`] is the dense index of a node in its [`Graph`](super::Graph).
//! Nodes are never removed, so ids stay valid for the lifetime of the graph and
//! are shared verbatim by every graph projected from it.

/// Unique identifier for a node in a graph.
///
/// Node IDs are assigned sequentially from zero and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Creates a node id from a raw index.
    #[inline]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw numeric identifier.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.0 as usize
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Attributes carried by a node of a raw (generated, then labeled) graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeLabel {
    /// Whether the node is visited by the computed tour.
    ///
    /// `None` until the solver has labeled the graph.
    pub solution: Option<bool>,
}
