//! Shortest-path distances.
//!
//! Provides a dense distance matrix and the Floyd–Warshall engine that fills
//! it together with a next-hop table for path reconstruction.

mod floyd_warshall;
mod matrix;

pub use floyd_warshall::{NextHop, PathEdges, ShortestPaths};
pub use matrix::DistanceMatrix;
