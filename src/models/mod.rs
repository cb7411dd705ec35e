//! Domain model types for route inspection.
//!
//! Provides the directed multigraph being inspected, per-vertex imbalance
//! records, and the tour and solution produced by the solver.

mod graph;
mod imbalance;
mod solution;
mod tour;

pub(crate) use graph::infinity_for;
pub use graph::Multigraph;
pub use imbalance::{total_imbalance, ImbalancedVertex};
pub use solution::{Solution, Strategy};
pub use tour::{Tour, TourStep};
