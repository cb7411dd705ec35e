//! Seeded random strongly connected multigraphs.
//!
//! A Hamiltonian cycle over a shuffled vertex order guarantees strong
//! connectivity; the remaining edges join uniformly random distinct vertex
//! pairs, so parallel edges are possible but self-loops are not.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::models::Multigraph;

/// Parameters for [`RandomGraphSpec::generate`].
///
/// # Examples
///
/// ```
/// use u_postman::io::RandomGraphSpec;
///
/// let g = RandomGraphSpec::new(6, 15).with_seed(7).generate().unwrap();
/// assert_eq!(g.size(), 6);
/// assert_eq!(g.edge_count(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomGraphSpec {
    vertices: usize,
    edges: usize,
    max_weight: u64,
    seed: u64,
}

impl Default for RandomGraphSpec {
    /// 10 vertices, 20 edges, weights below 100, seed 11.
    fn default() -> Self {
        Self {
            vertices: 10,
            edges: 20,
            max_weight: 100,
            seed: 11,
        }
    }
}

impl RandomGraphSpec {
    /// Creates a spec with the given size and default weights and seed.
    pub fn new(vertices: usize, edges: usize) -> Self {
        Self {
            vertices,
            edges,
            ..Self::default()
        }
    }

    /// Sets the exclusive upper bound on edge weights.
    pub fn with_max_weight(mut self, max_weight: u64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of vertices.
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Number of edges.
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Exclusive upper bound on edge weights.
    pub fn max_weight(&self) -> u64 {
        self.max_weight
    }

    /// RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds the graph. Identical specs yield identical graphs.
    pub fn generate(&self) -> Result<Multigraph, GeneratorError> {
        let n = self.vertices;
        if n < 2 {
            return Err(GeneratorError::TooFewVertices { vertices: n });
        }
        if self.edges <= n {
            return Err(GeneratorError::TooFewEdges {
                edges: self.edges,
                vertices: n,
            });
        }
        if self.max_weight < 2 {
            return Err(GeneratorError::WeightRange {
                max_weight: self.max_weight,
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut g = Multigraph::new(n);

        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);
        for (i, &u) in order.iter().enumerate() {
            let w = rng.random_range(1..self.max_weight);
            g.add_edge(u, order[(i + 1) % n], w, 1);
        }

        for _ in n..self.edges {
            let u = rng.random_range(0..n);
            let mut v = rng.random_range(0..n);
            while v == u {
                v = rng.random_range(0..n);
            }
            let w = rng.random_range(1..self.max_weight);
            g.add_edge(u, v, w, 1);
        }

        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::ShortestPaths;
    use crate::solver::solve;

    #[test]
    fn test_default_spec() {
        let spec = RandomGraphSpec::default();
        assert_eq!(spec.vertices(), 10);
        assert_eq!(spec.edges(), 20);
        assert_eq!(spec.max_weight(), 100);
        assert_eq!(spec.seed(), 11);
    }

    #[test]
    fn test_generated_graph_shape() {
        let g = RandomGraphSpec::new(12, 40).with_max_weight(10).generate().expect("valid");
        assert_eq!(g.edge_count(), 40);
        assert!(g.edges().all(|(u, v, w)| u != v && (1..10).contains(&w)));
        for v in 0..12 {
            assert!(g.outdegree(v) >= 1);
            assert!(g.indegree(v) >= 1);
        }
    }

    #[test]
    fn test_generated_graph_is_strongly_connected() {
        for seed in 0..10 {
            let g = RandomGraphSpec::new(15, 30).with_seed(seed).generate().expect("valid");
            assert!(ShortestPaths::compute_connected(&g, g.infinity()).is_ok(), "seed={seed}");
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let spec = RandomGraphSpec::new(8, 20).with_seed(42);
        assert_eq!(spec.generate().expect("valid"), spec.generate().expect("valid"));
    }

    #[test]
    fn test_generated_graphs_solve() {
        for seed in 0..10 {
            let g = RandomGraphSpec::new(10, 25).with_seed(seed).generate().expect("valid");
            let total = g.total_weight();
            let edges = g.edge_count();
            let sol = solve(g).expect("strongly connected");
            assert_eq!(sol.base_cost(), total, "seed={seed}");
            assert!(sol.tour().edge_count() >= edges, "seed={seed}");
        }
    }

    #[test]
    fn test_invalid_specs() {
        assert_eq!(
            RandomGraphSpec::new(1, 5).generate(),
            Err(GeneratorError::TooFewVertices { vertices: 1 })
        );
        assert_eq!(
            RandomGraphSpec::new(5, 5).generate(),
            Err(GeneratorError::TooFewEdges { edges: 5, vertices: 5 })
        );
        assert_eq!(
            RandomGraphSpec::new(5, 8).with_max_weight(1).generate(),
            Err(GeneratorError::WeightRange { max_weight: 1 })
        );
    }
}
