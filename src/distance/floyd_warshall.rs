//! All-pairs shortest paths with next-hop reconstruction.
//!
//! # Algorithm
//!
//! Parallel edges collapse to their cheapest weight. For every intermediate
//! vertex `k` and pair `(i, j)`:
//!
//! ```text
//! if d[i][k] + d[k][j] < d[i][j]:
//!     d[i][j]    = d[i][k] + d[k][j]
//!     next[i][j] = next[i][k]
//! ```
//!
//! `next[i][j]` always names the first hop out of `i`, so a path is rebuilt
//! by following `next[cur][j]` until `cur == j`.
//!
//! # Complexity
//!
//! O(n³) time, O(n²) space.

use log::debug;

use crate::error::SolveError;
use crate::models::Multigraph;

use super::DistanceMatrix;

/// First hop on a shortest path: the successor vertex and the weight of the
/// edge leading to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextHop {
    /// Successor vertex.
    pub vertex: usize,
    /// Weight of the edge to `vertex`.
    pub weight: u64,
}

/// Distance and next-hop tables for every ordered vertex pair.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::distance::ShortestPaths;
///
/// let g = Multigraph::from_edges(3, &[(0, 1, 2), (1, 2, 3), (0, 2, 10), (2, 0, 1)]);
/// let sp = ShortestPaths::compute(&g, g.infinity());
/// assert_eq!(sp.distance(0, 2), 5);
/// let path: Vec<_> = sp.path(0, 2).collect();
/// assert_eq!(path, vec![(0, 1, 2), (1, 2, 3)]);
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    distances: DistanceMatrix,
    next: Vec<NextHop>,
    infinity: u64,
}

impl ShortestPaths {
    /// Runs Floyd–Warshall over `graph`, using `infinity` for missing edges.
    pub fn compute(graph: &Multigraph, infinity: u64) -> Self {
        let n = graph.size();
        let mut distances = DistanceMatrix::filled(n, infinity);
        let mut next = Vec::with_capacity(n * n);

        for i in 0..n {
            for j in 0..n {
                let d = if i == j {
                    0
                } else {
                    graph.min_weight(i, j).unwrap_or(infinity)
                };
                distances.set(i, j, d);
                next.push(NextHop { vertex: j, weight: d });
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = distances.get(i, k);
                if d_ik >= infinity {
                    continue;
                }
                for j in 0..n {
                    let cand = d_ik.saturating_add(distances.get(k, j));
                    if cand < distances.get(i, j) {
                        distances.set(i, j, cand);
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        debug!("floyd-warshall: {n} vertices");
        Self {
            distances,
            next,
            infinity,
        }
    }

    /// Like [`compute`](Self::compute), but fails if any pair is unreachable.
    pub fn compute_connected(graph: &Multigraph, infinity: u64) -> Result<Self, SolveError> {
        let sp = Self::compute(graph, infinity);
        match sp.unreachable_pair() {
            Some((from, to)) => Err(SolveError::DisconnectedGraph { from, to }),
            None => Ok(sp),
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    /// Sentinel used for unreachable pairs.
    pub fn infinity(&self) -> u64 {
        self.infinity
    }

    /// Shortest distance from `from` to `to` (`infinity()` if unreachable).
    pub fn distance(&self, from: usize, to: usize) -> u64 {
        self.distances.get(from, to)
    }

    /// The full distance table.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// First hop on the shortest path from `from` to `to`.
    pub fn next_hop(&self, from: usize, to: usize) -> NextHop {
        self.next[from * self.size() + to]
    }

    /// First unreachable pair in row-major order, if any.
    pub fn unreachable_pair(&self) -> Option<(usize, usize)> {
        self.distances.find(self.infinity)
    }

    /// Iterates the edges `(from, to, weight)` of the shortest path.
    ///
    /// Yields nothing when `from == to`. The pair must be reachable.
    pub fn path(&self, from: usize, to: usize) -> PathEdges<'_> {
        PathEdges {
            paths: self,
            current: from,
            target: to,
        }
    }
}

/// Iterator over the edges of a reconstructed shortest path.
pub struct PathEdges<'a> {
    paths: &'a ShortestPaths,
    current: usize,
    target: usize,
}

impl Iterator for PathEdges<'_> {
    type Item = (usize, usize, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.target {
            return None;
        }
        let hop = self.paths.next_hop(self.current, self.target);
        let edge = (self.current, hop.vertex, hop.weight);
        self.current = hop.vertex;
        Some(edge)
    }
}
