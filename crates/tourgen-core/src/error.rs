//! Error types for dataset generation.

use thiserror::Error;

use crate::graph::{EdgeId, GraphError, NodeId};

/// Graph element that an attribute lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// A node.
    Node(NodeId),
    /// An edge.
    Edge(EdgeId),
}

impl core::fmt::Display for Element {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Node(id) => write!(f, "{id}"),
            Self::Edge(id) => write!(f, "{id}"),
        }
    }
}

/// Errors that can occur while generating, solving or projecting graphs.
///
/// All variants are contract violations. Nothing in this crate retries; the
/// error is returned to the caller and the current batch is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// A numeric range is empty, inverted, or outside its allowed domain.
    #[error("invalid {name} range [{start}, {end})")]
    InvalidRange {
        /// Which range was rejected (e.g. `"node"`, `"weight"`).
        name: &'static str,
        /// Inclusive lower bound as supplied.
        start: i64,
        /// Exclusive upper bound as supplied.
        end: i64,
    },

    /// The graph handed to the solver is structurally unusable.
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    /// A required attribute was absent.
    #[error("{element} is missing attribute '{attribute}'")]
    MissingAttribute {
        /// Node or edge lacking the attribute.
        element: Element,
        /// Attribute name.
        attribute: &'static str,
    },

    /// One-hot index does not fit the class count.
    #[error("one-hot index {index} out of range for {classes} classes")]
    OneHotIndex {
        /// Requested hot index.
        index: usize,
        /// Vector length.
        classes: usize,
    },

    /// Summing edge weights left the `i64` range.
    #[error("tour weight overflows i64")]
    WeightOverflow,
}

impl DatasetError {
    /// Create a missing-attribute error for a node.
    pub fn missing_node_attr(id: NodeId, attribute: &'static str) -> Self {
        DatasetError::MissingAttribute {
            element: Element::Node(id),
            attribute,
        }
    }

    /// Create a missing-attribute error for an edge.
    pub fn missing_edge_attr(id: EdgeId, attribute: &'static str) -> Self {
        DatasetError::MissingAttribute {
            element: Element::Edge(id),
            attribute,
        }
    }
}

/// Result type for dataset operations.
pub type Result<T, E = DatasetError> = core::result::Result<T, E>;
