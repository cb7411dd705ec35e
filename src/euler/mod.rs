//! Eulerian walk extraction (Hierholzer, 1873).

mod hierholzer;

pub use hierholzer::{euler_tour, start_vertex};
