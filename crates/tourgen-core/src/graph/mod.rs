//! Undirected attributed graph container.
//!
//! [`Graph`] is the single topology type used throughout the pipeline. It is
//! generic over three payloads:
//!
//! - `N`: per-node attributes
//! - `E`: per-edge attributes
//! - `G`: graph-level attributes
//!
//! The generator and solver work on a [`TspGraph`] (weights and tour labels);
//! the feature projector derives [`FeatureGraph`]s from it with
//! [`try_map()`](Graph::try_map), which copies the topology and rebuilds every
//! payload without touching the source graph.
//!
//! Graphs are simple: no self-loops and at most one edge per unordered node
//! pair. Nodes are never removed, so [`NodeId`]s are stable.

pub mod edge;
pub mod node;

use std::collections::HashMap;

use thiserror::Error;

pub use edge::{Edge, EdgeId, EdgeLabel};
pub use node::{NodeId, NodeLabel};

use edge::normalize;

/// Raw graph produced by the generator and labeled by the solver.
pub type TspGraph = Graph<NodeLabel, EdgeLabel, ()>;

/// Numeric feature vector attached to a node, an edge, or a whole graph.
pub type Features = Vec<f64>;

/// Graph whose nodes, edges and graph-level slot all carry feature vectors.
pub type FeatureGraph = Graph<Features, Features, Features>;

/// Errors raised by graph construction and structural checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The specified node was not found in the graph.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
    /// Edges must connect two distinct nodes.
    #[error("self-loop on {0} is not allowed")]
    SelfLoop(NodeId),
    /// An edge already exists between these nodes.
    #[error("edge between {0} and {1} already exists")]
    DuplicateEdge(NodeId, NodeId),
    /// The graph is missing edges required for a complete graph.
    #[error("graph with {nodes} nodes has {edges} edges, complete graph needs {expected}")]
    Incomplete {
        /// Number of nodes.
        nodes: usize,
        /// Number of edges present.
        edges: usize,
        /// Number of edges a complete graph over `nodes` has.
        expected: usize,
    },
}

/// Number of edges in a complete simple graph with `n` nodes.
#[inline]
pub fn complete_edge_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Undirected simple graph with stable node ids.
#[derive(Clone, Debug)]
pub struct Graph<N, E, G = ()> {
    nodes: Vec<N>,
    edges: Vec<Edge<E>>,
    index: HashMap<(NodeId, NodeId), EdgeId>,
    attrs: G,
}

impl<N, E, G: Default> Default for Graph<N, E, G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<N, E, G> Graph<N, E, G> {
    /// Creates an empty graph with the given graph-level attributes.
    pub fn new(attrs: G) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
            attrs,
        }
    }

    // --- Mutation ---

    /// Adds a node and returns its id.
    pub fn add_node(&mut self, attrs: N) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(attrs);
        id
    }

    /// Connects two distinct nodes.
    ///
    /// Returns an error if either node is unknown, if `a == b`, or if the pair
    /// is already connected.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, attrs: E) -> Result<EdgeId, GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        let (source, target) = normalize(a, b);
        if self.index.contains_key(&(source, target)) {
            return Err(GraphError::DuplicateEdge(source, target));
        }

        Ok(self.push_edge(source, target, attrs))
    }

    /// Appends an edge whose endpoints are known to exist, be distinct,
    /// normalized, and not yet connected.
    pub(crate) fn push_edge(&mut self, source: NodeId, target: NodeId, attrs: E) -> EdgeId {
        debug_assert!(source < target && target.slot() < self.nodes.len());
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            source,
            target,
            attrs,
        });
        self.index.insert((source, target), id);
        id
    }

    /// Iterates node attributes mutably. Topology cannot change through this.
    pub fn node_attrs_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut N)> {
        self.nodes
            .iter_mut()
            .enumerate()
            .map(|(i, attrs)| (NodeId(i as u32), attrs))
    }

    /// Iterates edge endpoints with mutable edge attributes.
    pub fn edge_attrs_mut(&mut self) -> impl Iterator<Item = (NodeId, NodeId, &mut E)> {
        self.edges
            .iter_mut()
            .map(|e| (e.source, e.target, &mut e.attrs))
    }

    // --- Queries ---

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the attributes of a node.
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id.slot())
    }

    /// Returns an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id.0 as usize)
    }

    /// Looks up the edge between two nodes, in either order.
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.index.get(&normalize(a, b)).copied()
    }

    /// Iterates node ids in ascending order.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> + use<N, E, G> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Iterates `(id, attrs)` for every node.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &N)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, attrs)| (NodeId(i as u32), attrs))
    }

    /// Iterates `(id, edge)` for every edge in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge<E>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId(i as u32), edge))
    }

    /// Graph-level attributes.
    pub fn attrs(&self) -> &G {
        &self.attrs
    }

    /// Returns `true` if every pair of distinct nodes is connected.
    ///
    /// The graph is simple, so the edge count alone decides completeness.
    pub fn is_complete(&self) -> bool {
        self.edges.len() == complete_edge_count(self.nodes.len())
    }

    /// Fails with [`GraphError::Incomplete`] unless the graph is complete.
    pub fn ensure_complete(&self) -> Result<(), GraphError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(GraphError::Incomplete {
                nodes: self.nodes.len(),
                edges: self.edges.len(),
                expected: complete_edge_count(self.nodes.len()),
            })
        }
    }

    /// Builds a graph with identical topology and freshly computed payloads.
    ///
    /// Node and edge ids are preserved. The first error returned by either
    /// closure aborts the transformation.
    pub fn try_map<N2, E2, G2, Err>(
        &self,
        mut node_fn: impl FnMut(NodeId, &N) -> Result<N2, Err>,
        mut edge_fn: impl FnMut(EdgeId, &Edge<E>) -> Result<E2, Err>,
        attrs: G2,
    ) -> Result<Graph<N2, E2, G2>, Err> {
        let nodes = self
            .nodes()
            .map(|(id, n)| node_fn(id, n))
            .collect::<Result<Vec<_>, _>>()?;
        let edges = self
            .edges()
            .map(|(id, e)| {
                Ok(Edge {
                    source: e.source,
                    target: e.target,
                    attrs: edge_fn(id, e)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Graph {
            nodes,
            edges,
            index: self.index.clone(),
            attrs,
        })
    }

    fn check_node(&self, id: NodeId) -> Result<(), GraphError> {
        if id.slot() < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<(), u8> {
        let mut g = Graph::new(());
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 1).unwrap();
        g.add_edge(b, c, 2).unwrap();
        g.add_edge(c, a, 3).unwrap();
        g
    }

    #[test]
    fn test_add_nodes_sequential_ids() {
        let mut g: Graph<(), ()> = Graph::default();
        assert_eq!(g.add_node(()).index(), 0);
        assert_eq!(g.add_node(()).index(), 1);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_edge_endpoints_normalized() {
        let g = triangle();
        let (_, edge) = g.edges().nth(2).unwrap();
        assert_eq!(edge.endpoints(), (NodeId(0), NodeId(2)));
    }

    #[test]
    fn test_find_edge_either_order() {
        let g = triangle();
        let id = g.find_edge(NodeId(2), NodeId(1)).unwrap();
        assert_eq!(g.find_edge(NodeId(1), NodeId(2)), Some(id));
        assert_eq!(g.edge(id).unwrap().attrs, 2);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g: Graph<(), ()> = Graph::default();
        let a = g.add_node(());
        assert_eq!(g.add_edge(a, a, ()), Err(GraphError::SelfLoop(a)));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut g = triangle();
        assert_eq!(
            g.add_edge(NodeId(1), NodeId(0), 9),
            Err(GraphError::DuplicateEdge(NodeId(0), NodeId(1)))
        );
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_unknown_node_rejected() {
        let mut g = triangle();
        assert_eq!(
            g.add_edge(NodeId(0), NodeId(7), 0),
            Err(GraphError::NodeNotFound(NodeId(7)))
        );
    }

    #[test]
    fn test_completeness() {
        let mut g = triangle();
        assert!(g.is_complete());
        assert!(g.ensure_complete().is_ok());

        g.add_node(());
        assert!(!g.is_complete());
        assert_eq!(
            g.ensure_complete(),
            Err(GraphError::Incomplete {
                nodes: 4,
                edges: 3,
                expected: 6
            })
        );
    }

    #[test]
    fn test_complete_edge_count_small() {
        assert_eq!(complete_edge_count(0), 0);
        assert_eq!(complete_edge_count(1), 0);
        assert_eq!(complete_edge_count(2), 1);
        assert_eq!(complete_edge_count(5), 10);
    }

    #[test]
    fn test_try_map_preserves_topology() {
        let g = triangle();
        let mapped: Graph<u32, f64, &str> = g
            .try_map(
                |id, _| Ok::<_, ()>(id.index() * 10),
                |_, e| Ok(f64::from(e.attrs) / 2.0),
                "mapped",
            )
            .unwrap();

        assert_eq!(mapped.node_count(), 3);
        assert_eq!(mapped.node(NodeId(2)), Some(&20));
        let id = mapped.find_edge(NodeId(0), NodeId(2)).unwrap();
        assert_eq!(mapped.edge(id).unwrap().attrs, 1.5);
        assert_eq!(*mapped.attrs(), "mapped");
        // Source untouched.
        assert_eq!(g.edge(id).unwrap().attrs, 3);
    }

    #[test]
    fn test_try_map_propagates_error() {
        let g = triangle();
        let result: Result<Graph<(), (), ()>, &str> =
            g.try_map(|_, _| Ok(()), |id, _| if id.index() == 1 { Err("bad") } else { Ok(()) }, ());
        assert_eq!(result.unwrap_err(), "bad");
    }

    #[test]
    fn test_display_ids() {
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
        assert_eq!(EdgeId(4).to_string(), "EdgeId(4)");
    }
}
