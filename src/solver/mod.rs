//! Route inspection solver.
//!
//! - [`Solver`] / [`solve`] — imbalance analysis, balancing, Euler extraction
//! - [`SolverConfig`] — open vs. closed walk, preferred start vertex
//! - [`augment`] — duplicate shortest paths into the graph

mod augment;
mod config;
mod solve;

pub use augment::augment;
pub use config::SolverConfig;
pub use solve::{solve, Solver};
