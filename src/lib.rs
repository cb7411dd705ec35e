//! # u-postman
//!
//! Route inspection (directed Chinese Postman) solver: finds a minimum-cost
//! walk that traverses every edge of a strongly connected, positively
//! weighted directed multigraph at least once.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Multigraph, ImbalancedVertex, Tour, Solution)
//! - [`distance`] — Distance matrix and Floyd–Warshall shortest paths
//! - [`assignment`] — Hungarian assignment of deficit to surplus vertices
//! - [`euler`] — Hierholzer Euler walk extraction
//! - [`solver`] — Orchestration, configuration, and path duplication
//! - [`io`] — Text format parsing/formatting and random graph generation
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_postman::io::parse_graph;
//!
//! let g = parse_graph("1: 2(1) ; 2: 3(2) ; 3: 4(3) ; 4: 5(4) ; 5: 1(5) 2(6) ;").unwrap();
//! let sol = u_postman::solve(g).unwrap();
//! assert_eq!(sol.total_cost(), 21);
//! assert_eq!(sol.overhead(), 0);
//! ```

pub mod assignment;
pub mod distance;
pub mod error;
pub mod euler;
pub mod io;
pub mod models;
pub mod solver;

pub use error::{GeneratorError, ParseError, SolveError};
pub use solver::solve;
