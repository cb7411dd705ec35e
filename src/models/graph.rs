//! Directed weighted multigraph.

use serde::{Deserialize, Serialize};

use crate::error::SolveError;

use super::ImbalancedVertex;

/// A directed multigraph stored as a dense n×n matrix of weight multisets.
///
/// Cell `(u, v)` holds one weight per parallel edge `u → v`; an empty cell
/// means there is no edge. Weights are strictly positive.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
///
/// let mut g = Multigraph::new(3);
/// g.add_edge(0, 1, 4, 1);
/// g.add_edge(0, 1, 2, 1);
/// g.add_edge(1, 2, 3, 1);
/// assert_eq!(g.outdegree(0), 2);
/// assert_eq!(g.min_weight(0, 1), Some(2));
/// assert_eq!(g.infinity(), 4 * 3 + 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multigraph {
    size: usize,
    cells: Vec<Vec<u64>>,
    weight_upperbound: u64,
}

impl Multigraph {
    /// Creates an edgeless graph on `size` vertices.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Vec::new(); size * size],
            weight_upperbound: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// # Panics
    ///
    /// Panics if a vertex index is out of range.
    pub fn from_edges(size: usize, edges: &[(usize, usize, u64)]) -> Self {
        let mut g = Self::new(size);
        for &(from, to, weight) in edges {
            g.add_edge(from, to, weight, 1);
        }
        g
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest weight ever inserted.
    pub fn weight_upperbound(&self) -> u64 {
        self.weight_upperbound
    }

    /// Sentinel distance larger than the cost of any simple path.
    ///
    /// Saturates at `u64::MAX`; see [`checked_infinity`](Self::checked_infinity).
    pub fn infinity(&self) -> u64 {
        self.weight_upperbound
            .saturating_mul(self.size as u64)
            .saturating_add(1)
    }

    /// Like [`infinity`](Self::infinity), but `None` when the sentinel would
    /// not fit in `u64`, in which case real distances may reach it.
    pub fn checked_infinity(&self) -> Option<u64> {
        infinity_for(self.weight_upperbound, self.size)
    }

    /// Appends `count` parallel edges `from → to` of the given weight.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64, count: usize) {
        let cell = &mut self.cells[from * self.size + to];
        cell.extend(std::iter::repeat(weight).take(count));
        self.weight_upperbound = self.weight_upperbound.max(weight);
    }

    /// Removes one edge `from → to` with the given weight.
    pub fn remove_edge(&mut self, from: usize, to: usize, weight: u64) -> Result<(), SolveError> {
        let cell = &mut self.cells[from * self.size + to];
        match cell.iter().position(|&w| w == weight) {
            Some(pos) => {
                cell.remove(pos);
                Ok(())
            }
            None => Err(SolveError::EdgeNotFound { from, to, weight }),
        }
    }

    /// Weights of all parallel edges `from → to`, in insertion order.
    pub fn weights(&self, from: usize, to: usize) -> &[u64] {
        &self.cells[from * self.size + to]
    }

    /// Cheapest parallel edge `from → to`, if any.
    pub fn min_weight(&self, from: usize, to: usize) -> Option<u64> {
        self.weights(from, to).iter().copied().min()
    }

    /// Returns `true` if at least one edge `from → to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        !self.weights(from, to).is_empty()
    }

    /// Number of edges leaving `v`.
    pub fn outdegree(&self, v: usize) -> usize {
        self.cells[v * self.size..(v + 1) * self.size]
            .iter()
            .map(Vec::len)
            .sum()
    }

    /// Number of edges entering `v`.
    pub fn indegree(&self, v: usize) -> usize {
        (0..self.size).map(|u| self.weights(u, v).len()).sum()
    }

    /// `indegree(v) - outdegree(v)`.
    pub fn imbalance(&self, v: usize) -> i64 {
        self.indegree(v) as i64 - self.outdegree(v) as i64
    }

    /// All vertices with nonzero imbalance, in ascending index order.
    pub fn imbalanced_vertices(&self) -> Vec<ImbalancedVertex> {
        let mut ins = vec![0_i64; self.size];
        let mut outs = vec![0_i64; self.size];
        for u in 0..self.size {
            for v in 0..self.size {
                let k = self.weights(u, v).len() as i64;
                outs[u] += k;
                ins[v] += k;
            }
        }
        (0..self.size)
            .filter(|&v| ins[v] != outs[v])
            .map(|v| ImbalancedVertex::new(v, ins[v] - outs[v]))
            .collect()
    }

    /// Returns `true` if every vertex has equal in- and outdegree.
    pub fn is_balanced(&self) -> bool {
        self.imbalanced_vertices().is_empty()
    }

    /// First vertex `to >= start` with at least one edge `from → to`.
    pub fn first_target_from(&self, from: usize, start: usize) -> Option<usize> {
        (start..self.size).find(|&to| self.has_edge(from, to))
    }

    /// Total number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// Sum of all edge weights.
    ///
    /// Saturates at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.checked_total_weight().unwrap_or(u64::MAX)
    }

    /// Sum of all edge weights, or `None` on overflow.
    pub fn checked_total_weight(&self) -> Option<u64> {
        self.cells
            .iter()
            .flatten()
            .try_fold(0_u64, |acc, &w| acc.checked_add(w))
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }

    /// Iterates over every edge as `(from, to, weight)`, row by row.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(idx, cell)| {
            let (from, to) = (idx / self.size, idx % self.size);
            cell.iter().map(move |&w| (from, to, w))
        })
    }
}

/// Infinity sentinel for a graph of `size` vertices whose heaviest edge
/// weighs `weight_upperbound`, or `None` if it overflows.
pub(crate) fn infinity_for(weight_upperbound: u64, size: usize) -> Option<u64> {
    weight_upperbound
        .checked_mul(u64::try_from(size).ok()?)?
        .checked_add(1)
}
