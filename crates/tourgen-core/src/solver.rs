//! Approximate TSP tours over complete weighted graphs.
//!
//! The solver works in three stages:
//!
//! 1. **Matrix extraction**: [`DistanceMatrix::from_graph`] reads edge weights
//!    into a dense symmetric matrix, rejecting incomplete graphs and unweighted
//!    edges.
//! 2. **Greedy construction**: node pairs are scanned in ascending weight
//!    order; a pair is accepted when both nodes still have degree < 2 and
//!    belong to different path fragments. After `n - 1` joins a single
//!    Hamiltonian path remains.
//! 3. **Refinement**: a bounded number of 2-opt passes over the closed cycle
//!    apply every strictly improving segment reversal.
//!
//! The result is a [`Tour`]: a visiting order that is implicitly closed by an
//! edge from the last node back to the first. [`TourSolver::label`] writes
//! tour membership into the graph's node and edge attributes.
//!
//! # Tie-breaking
//!
//! Pairs are enumerated as `(i, j)` with `i` ascending and `j < i` ascending,
//! then stably sorted by weight. Equal-weight pairs are therefore taken in
//! that scan order. The path walk starts at the lowest-id endpoint. The whole
//! solver is deterministic for a given graph.
//!
//! # Small graphs
//!
//! - one node: tour `[0]`, closed by the self-loop `(0, 0)`; no graph edge is
//!   marked, the node is.
//! - two nodes: tour `[0, 1]`; the closing edges `(0, 1)` and `(1, 0)` are the
//!   same undirected edge, which is marked once.

use std::collections::HashSet;

use crate::error::{DatasetError, Result};
use crate::graph::{NodeId, TspGraph};

/// Dense symmetric weight matrix extracted from a complete graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<i64>,
}

impl DistanceMatrix {
    /// Reads edge weights from a complete graph. The diagonal is zero.
    ///
    /// Fails with [`DatasetError::InvalidGraph`] if the graph is not complete
    /// and with [`DatasetError::MissingAttribute`] if an edge has no weight.
    pub fn from_graph(graph: &TspGraph) -> Result<Self> {
        graph.ensure_complete()?;
        let n = graph.node_count();
        let mut data = vec![0; n * n];
        for (id, edge) in graph.edges() {
            let w = edge
                .attrs
                .weight
                .ok_or_else(|| DatasetError::missing_edge_attr(id, "weight"))?;
            let (a, b) = (edge.source.slot(), edge.target.slot());
            data[a * n + b] = w;
            data[b * n + a] = w;
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from rows. Rows must be square and symmetric.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[Vec<i64>]) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        let data: Vec<i64> = rows.iter().flatten().copied().collect();
        let matrix = Self { n, data };
        let symmetric = (0..n).all(|i| (0..i).all(|j| matrix.get(i, j) == matrix.get(j, i)));
        symmetric.then_some(matrix)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` for a matrix over zero nodes.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight between nodes `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.data[i * self.n + j]
    }
}

/// A closed tour, stored as the order in which nodes are visited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    order: Vec<NodeId>,
}

impl Tour {
    /// Wraps a visiting order.
    pub fn new(order: Vec<NodeId>) -> Self {
        Self { order }
    }

    /// Visiting order. The closing edge from the last node to the first is
    /// implicit.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no node.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates consecutive pairs including the closing pair `(last, first)`.
    ///
    /// A single-node tour yields its self-loop; a two-node tour yields both
    /// directions of its one edge.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        let n = self.order.len();
        (0..n).map(move |i| (self.order[i], self.order[(i + 1) % n]))
    }

    /// Sum of weights along the closed tour, counting each undirected edge
    /// once. Saturates at the `i64` bounds.
    pub fn cost(&self, matrix: &DistanceMatrix) -> i64 {
        self.undirected_edges()
            .into_iter()
            .map(|(a, b)| matrix.get(a.slot(), b.slot()))
            .fold(0i64, i64::saturating_add)
    }

    /// Distinct undirected tour edges as normalized `(min, max)` pairs.
    ///
    /// Self-loops are kept so single-node tours are still represented.
    pub fn undirected_edges(&self) -> HashSet<(NodeId, NodeId)> {
        self.edges()
            .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
            .collect()
    }
}

/// Greedy TSP heuristic with optional 2-opt refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourSolver {
    optimization_passes: usize,
}

impl Default for TourSolver {
    fn default() -> Self {
        Self {
            optimization_passes: Self::DEFAULT_OPTIMIZATION_PASSES,
        }
    }
}

impl TourSolver {
    /// Number of 2-opt passes run by default.
    pub const DEFAULT_OPTIMIZATION_PASSES: usize = 3;

    /// Creates a solver running at most `optimization_passes` 2-opt passes.
    /// Zero keeps the plain greedy tour.
    pub fn new(optimization_passes: usize) -> Self {
        Self {
            optimization_passes,
        }
    }

    /// Configured 2-opt pass limit.
    pub fn optimization_passes(&self) -> usize {
        self.optimization_passes
    }

    /// Computes a tour over a distance matrix.
    pub fn solve(&self, matrix: &DistanceMatrix) -> Tour {
        let mut order = greedy_path(matrix);
        for _pass in 0..self.optimization_passes {
            if !two_opt_pass(matrix, &mut order) {
                break;
            }
        }
        Tour::new(order.into_iter().map(|i| NodeId(i as u32)).collect())
    }

    /// Computes a tour for `graph` and returns the graph with tour labels.
    ///
    /// Every edge's `solution` is set to whether its endpoints are adjacent in
    /// the closed tour; every node's `solution` is set to whether it is an
    /// endpoint of some tour edge.
    pub fn label(&self, mut graph: TspGraph) -> Result<(TspGraph, Tour)> {
        let matrix = DistanceMatrix::from_graph(&graph)?;
        let tour = self.solve(&matrix);
        let tour_edges = tour.undirected_edges();

        for (source, target, attrs) in graph.edge_attrs_mut() {
            attrs.solution = Some(tour_edges.contains(&(source, target)));
        }

        let visited: HashSet<NodeId> = tour_edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        for (id, attrs) in graph.node_attrs_mut() {
            attrs.solution = Some(visited.contains(&id));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = graph.node_count(),
            cost = tour.cost(&matrix),
            "labeled tour"
        );

        Ok((graph, tour))
    }
}

/// Builds a Hamiltonian path by greedy edge matching.
fn greedy_path(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.len();
    if n <= 1 {
        return (0..n).collect();
    }

    let mut pairs: Vec<(usize, usize)> = (0..n).flat_map(|i| (0..i).map(move |j| (i, j))).collect();
    pairs.sort_by_key(|&(i, j)| matrix.get(i, j));

    let mut fragments = Fragments::new(n);
    let mut links: Vec<[Option<usize>; 2]> = vec![[None; 2]; n];
    let mut joins = 0;

    for (i, j) in pairs {
        if degree(&links[i]) < 2 && degree(&links[j]) < 2 && fragments.union(i, j) {
            attach(&mut links[i], j);
            attach(&mut links[j], i);
            joins += 1;
            if joins == n - 1 {
                break;
            }
        }
    }

    // Exactly two nodes of degree one remain; walk from the lower one.
    let start = (0..n).find(|&i| degree(&links[i]) == 1).unwrap_or(0);
    let mut path = Vec::with_capacity(n);
    let mut prev = None;
    let mut current = Some(start);
    while let Some(node) = current {
        path.push(node);
        let next = links[node].iter().flatten().copied().find(|&m| Some(m) != prev);
        prev = Some(node);
        current = next;
    }
    path
}

fn degree(links: &[Option<usize>; 2]) -> usize {
    links.iter().flatten().count()
}

fn attach(links: &mut [Option<usize>; 2], other: usize) {
    if links[0].is_none() {
        links[0] = Some(other);
    } else {
        links[1] = Some(other);
    }
}

/// One 2-opt sweep over the closed cycle. Returns `true` if anything changed.
fn two_opt_pass(matrix: &DistanceMatrix, order: &mut [usize]) -> bool {
    let n = order.len();
    if n < 4 {
        return false;
    }
    let mut improved = false;
    for i in 0..n - 2 {
        for j in i + 2..n {
            // Edges (i, i+1) and (n-1, 0) share node 0 when i == 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = (order[i], order[i + 1]);
            let (c, d) = (order[j], order[(j + 1) % n]);
            let w = |x, y| i128::from(matrix.get(x, y));
            let delta = w(a, c) + w(b, d) - w(a, b) - w(c, d);
            if delta < 0 {
                order[i + 1..=j].reverse();
                improved = true;
            }
        }
    }
    improved
}

/// Disjoint-set forest tracking which path fragment each node belongs to.
struct Fragments {
    parent: Vec<usize>,
}

impl Fragments {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the fragments of `a` and `b`. Returns `false` if they already
    /// share one.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra.max(rb)] = ra.min(rb);
        true
    }
}
