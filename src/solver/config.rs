//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Options controlling the shape of the produced walk.
///
/// Default: an open walk is returned when exactly two vertices are
/// imbalanced, and closed walks start at the lowest vertex with an edge.
///
/// # Examples
///
/// ```
/// use u_postman::solver::SolverConfig;
///
/// let cfg = SolverConfig::new().with_closed_walk(true).with_start_vertex(3);
/// assert!(cfg.closed_walk());
/// assert_eq!(cfg.start_vertex(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    closed_walk: bool,
    start_vertex: Option<usize>,
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always return a closed walk, balancing even a single surplus/deficit pair.
    pub fn with_closed_walk(mut self, closed: bool) -> Self {
        self.closed_walk = closed;
        self
    }

    /// Preferred start for closed walks.
    ///
    /// Ignored for open walks and when the vertex has no outgoing edge.
    pub fn with_start_vertex(mut self, vertex: usize) -> Self {
        self.start_vertex = Some(vertex);
        self
    }

    /// Whether an open walk is disallowed.
    pub fn closed_walk(&self) -> bool {
        self.closed_walk
    }

    /// Preferred start vertex, if any.
    pub fn start_vertex(&self) -> Option<usize> {
        self.start_vertex
    }
}
