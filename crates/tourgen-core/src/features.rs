//! Projection of labeled graphs into training feature graphs.
//!
//! A labeled [`TspGraph`] yields two [`FeatureGraph`]s with the same topology
//! and ids:
//!
//! | slot  | input graph          | target graph                 |
//! |-------|----------------------|------------------------------|
//! | node  | `[solution as f64]`  | `one_hot(solution, 2)`       |
//! | edge  | `[weight as f64]`    | `one_hot(solution, 2)`       |
//! | graph | `[0.0]`              | `[tour weight]`              |
//!
//! One-hot order is fixed: `false → [1.0, 0.0]`, `true → [0.0, 1.0]`.
//!
//! Both projections only read the source graph.

use crate::error::{DatasetError, Result};
use crate::graph::{Edge, EdgeId, EdgeLabel, FeatureGraph, Features, NodeId, NodeLabel, TspGraph};

/// Number of classes for the tour-membership label.
pub const SOLUTION_CLASSES: usize = 2;

/// Graph-level features of every input graph.
pub const INPUT_GLOBAL_FEATURES: [f64; 1] = [0.0];

/// Returns a `classes`-long vector with a single `1.0` at `index`.
///
/// Fails with [`DatasetError::OneHotIndex`] if `index >= classes`.
pub fn one_hot(index: usize, classes: usize) -> Result<Features> {
    if index >= classes {
        return Err(DatasetError::OneHotIndex { index, classes });
    }
    let mut v = vec![0.0; classes];
    v[index] = 1.0;
    Ok(v)
}

fn node_solution(id: NodeId, node: &NodeLabel) -> Result<bool> {
    node.solution
        .ok_or_else(|| DatasetError::missing_node_attr(id, "solution"))
}

fn edge_solution(id: EdgeId, edge: &Edge<EdgeLabel>) -> Result<bool> {
    edge.attrs
        .solution
        .ok_or_else(|| DatasetError::missing_edge_attr(id, "solution"))
}

fn edge_weight(id: EdgeId, edge: &Edge<EdgeLabel>) -> Result<i64> {
    edge.attrs
        .weight
        .ok_or_else(|| DatasetError::missing_edge_attr(id, "weight"))
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Sum of `weight * solution` over all edges.
///
/// Fails with [`DatasetError::WeightOverflow`] if the sum leaves `i64`.
pub fn tour_weight(graph: &TspGraph) -> Result<i64> {
    graph.edges().try_fold(0i64, |acc, (id, edge)| {
        let weight = edge_weight(id, edge)?;
        if !edge_solution(id, edge)? {
            return Ok(acc);
        }
        acc.checked_add(weight).ok_or(DatasetError::WeightOverflow)
    })
}

/// Builds the input graph: tour flags on nodes, weights on edges.
pub fn input_graph(graph: &TspGraph) -> Result<FeatureGraph> {
    graph.try_map(
        |id, node| Ok(vec![flag(node_solution(id, node)?)]),
        |id, edge| Ok(vec![edge_weight(id, edge)? as f64]),
        INPUT_GLOBAL_FEATURES.to_vec(),
    )
}

/// Builds the target graph: one-hot tour labels and the tour weight.
pub fn target_graph(graph: &TspGraph) -> Result<FeatureGraph> {
    let total = tour_weight(graph)?;
    graph.try_map(
        |id, node| one_hot(usize::from(node_solution(id, node)?), SOLUTION_CLASSES),
        |id, edge| one_hot(usize::from(edge_solution(id, edge)?), SOLUTION_CLASSES),
        vec![total as f64],
    )
}

/// Builds both the input and the target graph.
pub fn project(graph: &TspGraph) -> Result<(FeatureGraph, FeatureGraph)> {
    Ok((input_graph(graph)?, target_graph(graph)?))
}
