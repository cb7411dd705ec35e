//! Graph input and output.
//!
//! - [`parse_graph`] / [`format_graph`] — one-based textual adjacency format
//! - [`format_tour`] — one-based tour rendering
//! - [`RandomGraphSpec`] — seeded random strongly connected graphs

mod generator;
mod text;

pub use generator::RandomGraphSpec;
pub use text::{format_graph, format_tour, parse_graph};
