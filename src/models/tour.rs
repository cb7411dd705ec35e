//! Tour and step types.

use serde::{Deserialize, Serialize};

/// One position in a tour: the vertex reached and the weight of the edge
/// used to reach it (0 for the starting vertex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourStep {
    /// Vertex visited.
    pub vertex: usize,
    /// Weight of the incoming edge.
    pub weight: u64,
}

impl TourStep {
    /// Creates a step.
    pub fn new(vertex: usize, weight: u64) -> Self {
        Self { vertex, weight }
    }
}

/// An ordered walk through a multigraph.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Tour, TourStep};
///
/// let tour = Tour::from_steps(vec![
///     TourStep::new(0, 0),
///     TourStep::new(1, 4),
///     TourStep::new(0, 6),
/// ]);
/// assert_eq!(tour.cost(), 10);
/// assert_eq!(tour.edge_count(), 2);
/// assert!(tour.is_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    steps: Vec<TourStep>,
    cost: u64,
}

impl Tour {
    /// Builds a tour from its steps, summing the incoming weights.
    ///
    /// The cost saturates at `u64::MAX`.
    pub fn from_steps(steps: Vec<TourStep>) -> Self {
        let cost = steps
            .iter()
            .fold(0_u64, |acc, s| acc.saturating_add(s.weight));
        Self { steps, cost }
    }

    /// The steps in traversal order.
    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    /// Number of steps (edges + 1 for a nonempty tour).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total weight of traversed edges.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of edges traversed.
    pub fn edge_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Visited vertices in order.
    pub fn vertices(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.vertex).collect()
    }

    /// First vertex, if any.
    pub fn start(&self) -> Option<usize> {
        self.steps.first().map(|s| s.vertex)
    }

    /// Last vertex, if any.
    pub fn end(&self) -> Option<usize> {
        self.steps.last().map(|s| s.vertex)
    }

    /// Returns `true` if the walk ends where it started.
    ///
    /// A single-vertex tour counts as closed; an empty tour does not.
    pub fn is_closed(&self) -> bool {
        !self.steps.is_empty() && self.start() == self.end()
    }

    /// Traversed edges as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.steps
            .windows(2)
            .map(|pair| (pair[0].vertex, pair[1].vertex, pair[1].weight))
    }

    /// The same closed walk started `offset` edges later.
    ///
    /// Returns `None` for open or empty tours.
    pub fn rotated(&self, offset: usize) -> Option<Tour> {
        if !self.is_closed() {
            return None;
        }
        let k = self.edge_count();
        if k == 0 {
            return Some(self.clone());
        }
        let r = offset % k;
        let mut steps = Vec::with_capacity(self.steps.len());
        steps.push(TourStep::new(self.steps[r].vertex, 0));
        steps.extend(
            (1..=k)
                .map(|i| (r + i - 1) % k + 1)
                .map(|idx| self.steps[idx]),
        );
        Some(Tour::from_steps(steps))
    }
}
