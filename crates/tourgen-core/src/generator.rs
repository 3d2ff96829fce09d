//! Random complete-graph generation.
//!
//! A [`GraphGenerator`] draws a node count uniformly from a half-open
//! [`IntRange`], connects every pair of distinct nodes, and gives each edge an
//! independent uniform weight from a second half-open range. Randomness is
//! always supplied by the caller, so seeding a [`rand::SeedableRng`] makes the
//! output reproducible.

use rand::Rng;

use crate::error::{DatasetError, Result};
use crate::graph::{EdgeLabel, NodeId, NodeLabel, TspGraph};

/// Half-open integer range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntRange {
    /// Inclusive lower bound.
    pub start: i64,
    /// Exclusive upper bound.
    pub end: i64,
}

impl IntRange {
    /// Creates a range. No validation happens here.
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    pub fn contains(self, value: i64) -> bool {
        self.start <= value && value < self.end
    }

    /// Returns `true` if no value can be drawn from the range.
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Rejects empty or inverted ranges.
    pub fn validate(self, name: &'static str) -> Result<Self> {
        if self.is_empty() {
            Err(self.invalid(name))
        } else {
            Ok(self)
        }
    }

    /// Draws a uniform value. The range must already be validated.
    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> i64 {
        rng.gen_range(self.start..self.end)
    }

    fn invalid(self, name: &'static str) -> DatasetError {
        DatasetError::InvalidRange {
            name,
            start: self.start,
            end: self.end,
        }
    }
}

impl From<(i64, i64)> for IntRange {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

impl From<core::ops::Range<i64>> for IntRange {
    fn from(range: core::ops::Range<i64>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl core::fmt::Display for IntRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Largest node count a generated graph may have.
///
/// A complete graph on `n` nodes holds `n * (n - 1) / 2` edges, and the
/// solver's distance matrix takes `n * n * 8` bytes: 128 MiB at this cap.
pub const MAX_NODES: i64 = 1 << 12;

/// Largest absolute edge weight a generator may draw.
///
/// A tour sums at most [`MAX_NODES`] weights and a 2-opt move compares sums of
/// four, so every sum the pipeline forms stays within `i64`.
pub const MAX_WEIGHT: i64 = i64::MAX / (2 * MAX_NODES);

/// Builds random complete graphs with random integer edge weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphGenerator {
    node_range: IntRange,
    weight_range: IntRange,
}

impl GraphGenerator {
    /// Node counts drawn by default: 5 to 8 nodes.
    pub const DEFAULT_NODE_RANGE: IntRange = IntRange::new(5, 9);

    /// Edge weights drawn by default: 1 to 9.
    pub const DEFAULT_WEIGHT_RANGE: IntRange = IntRange::new(1, 10);

    /// Creates a generator after validating both ranges.
    ///
    /// Fails with [`DatasetError::InvalidRange`] if either range is empty or
    /// inverted, if the node range admits fewer than one or more than
    /// [`MAX_NODES`] nodes, or if the weight range admits a weight whose
    /// magnitude exceeds [`MAX_WEIGHT`].
    pub fn new(node_range: impl Into<IntRange>, weight_range: impl Into<IntRange>) -> Result<Self> {
        let node_range = node_range.into().validate("node")?;
        if node_range.start < 1 || node_range.end > MAX_NODES + 1 {
            return Err(node_range.invalid("node"));
        }
        let weight_range = weight_range.into().validate("weight")?;
        if weight_range.start < -MAX_WEIGHT || weight_range.end > MAX_WEIGHT + 1 {
            return Err(weight_range.invalid("weight"));
        }
        Ok(Self {
            node_range,
            weight_range,
        })
    }

    /// Range node counts are drawn from.
    pub fn node_range(&self) -> IntRange {
        self.node_range
    }

    /// Range edge weights are drawn from.
    pub fn weight_range(&self) -> IntRange {
        self.weight_range
    }

    /// Generates one complete weighted graph.
    ///
    /// The node count is drawn first, then one weight per edge in
    /// `(0,1), (0,2), …, (1,2), …` order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> TspGraph {
        // Validated in `new`: 1 <= n <= MAX_NODES.
        let n = self.node_range.sample(rng) as usize;
        let graph = complete_graph(n, |_, _| self.weight_range.sample(rng));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "generated complete graph"
        );

        graph
    }
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self {
            node_range: Self::DEFAULT_NODE_RANGE,
            weight_range: Self::DEFAULT_WEIGHT_RANGE,
        }
    }
}

/// Builds an unlabeled complete graph on `n` nodes.
///
/// `weight` is called once per unordered pair, lower id first, in lexicographic
/// pair order.
pub fn complete_graph(n: usize, mut weight: impl FnMut(NodeId, NodeId) -> i64) -> TspGraph {
    let mut graph = TspGraph::default();
    for _ in 0..n {
        graph.add_node(NodeLabel::default());
    }
    for u in 0..n as u32 {
        for v in u + 1..n as u32 {
            let (a, b) = (NodeId(u), NodeId(v));
            let w = weight(a, b);
            graph.push_edge(a, b, EdgeLabel::weighted(w));
        }
    }
    graph
}

/// Generates one random complete graph.
///
/// Convenience wrapper over [`GraphGenerator::new`] and
/// [`GraphGenerator::generate`].
pub fn random_graph<R: Rng + ?Sized>(
    rng: &mut R,
    node_range: impl Into<IntRange>,
    weight_range: impl Into<IntRange>,
) -> Result<TspGraph> {
    Ok(GraphGenerator::new(node_range, weight_range)?.generate(rng))
}
