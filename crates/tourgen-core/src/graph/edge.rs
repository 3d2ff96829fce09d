//! Edge identifiers and edge attribute payloads.
//!
//! Edges are undirected. Endpoints are stored normalized (`source < target`),
//! so the pair `(u, v)` and `(v, u)` always resolve to the same [`EdgeId`].

use super::node::NodeId;

/// Unique identifier for an edge in a graph.
///
/// Edge IDs are assigned sequentially and never reused within a graph instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) u32);

impl EdgeId {
    /// Returns the raw numeric identifier.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// An undirected connection between two distinct nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<E> {
    /// Lower-id endpoint.
    pub source: NodeId,
    /// Higher-id endpoint.
    pub target: NodeId,
    /// Attribute payload.
    pub attrs: E,
}

impl<E> Edge<E> {
    /// Returns both endpoints as `(source, target)`.
    #[inline]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.source, self.target)
    }
}

/// Attributes carried by an edge of a raw (generated, then labeled) graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeLabel {
    /// Integer weight assigned by the generator.
    pub weight: Option<i64>,
    /// Whether the edge is part of the computed tour.
    ///
    /// `None` until the solver has labeled the graph.
    pub solution: Option<bool>,
}

impl EdgeLabel {
    /// Creates an unlabeled edge with the given weight.
    pub fn weighted(weight: i64) -> Self {
        Self {
            weight: Some(weight),
            solution: None,
        }
    }
}

/// Returns `(min, max)` of two node ids.
#[inline]
pub(crate) fn normalize(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}
