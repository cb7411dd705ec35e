//! Per-vertex imbalance records.

use serde::{Deserialize, Serialize};

/// A vertex whose indegree differs from its outdegree.
///
/// `imbalance = indegree - outdegree`. Negative values mark a *surplus*
/// vertex (needs extra incoming edges), positive values a *deficit* vertex
/// (needs extra outgoing edges).
///
/// # Examples
///
/// ```
/// use u_postman::models::ImbalancedVertex;
///
/// let v = ImbalancedVertex::new(3, -2);
/// assert!(v.is_surplus());
/// assert_eq!(v.magnitude(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImbalancedVertex {
    vertex: usize,
    imbalance: i64,
}

impl ImbalancedVertex {
    /// Creates a record for `vertex` with the given signed imbalance.
    pub fn new(vertex: usize, imbalance: i64) -> Self {
        Self { vertex, imbalance }
    }

    /// Vertex index.
    pub fn vertex(&self) -> usize {
        self.vertex
    }

    /// Signed imbalance (`indegree - outdegree`).
    pub fn imbalance(&self) -> i64 {
        self.imbalance
    }

    /// More outgoing than incoming edges.
    pub fn is_surplus(&self) -> bool {
        self.imbalance < 0
    }

    /// More incoming than outgoing edges.
    pub fn is_deficit(&self) -> bool {
        self.imbalance > 0
    }

    /// Number of duplicated paths that must start or end here.
    pub fn magnitude(&self) -> usize {
        self.imbalance.unsigned_abs() as usize
    }
}

/// Sum of all imbalances. Zero for every multigraph.
pub fn total_imbalance(vertices: &[ImbalancedVertex]) -> i64 {
    vertices.iter().map(ImbalancedVertex::imbalance).sum()
}
