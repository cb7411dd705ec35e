//! Eulerian walk extraction.
//!
//! # Algorithm
//!
//! Hierholzer's algorithm with an explicit stack of `(vertex, incoming
//! weight)` pairs. While the top vertex still has an outgoing edge, the edge
//! to the lowest-indexed target is consumed and its head pushed; otherwise the
//! top is popped into the result. The result comes out in reverse traversal
//! order.
//!
//! # Complexity
//!
//! O(n² + E): each vertex keeps a cursor over its row, and targets behind the
//! cursor never regain edges during extraction.

use log::debug;

use crate::error::SolveError;
use crate::models::{Multigraph, Tour, TourStep};

/// Consumes every edge of `graph` into a walk starting at `start`.
///
/// The graph must admit an Euler walk from `start`: balanced for a closed
/// walk, or with `start` as the single surplus vertex for an open one. On
/// success the graph is left empty. If edges remain unreachable from `start`
/// the edge-induced subgraph was disconnected and
/// [`SolveError::DisconnectedGraph`] names one stranded edge.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::euler::euler_tour;
///
/// let mut g = Multigraph::from_edges(3, &[(0, 1, 1), (1, 2, 2), (2, 0, 3)]);
/// let tour = euler_tour(&mut g, 0).unwrap();
/// assert_eq!(tour.vertices(), vec![0, 1, 2, 0]);
/// assert_eq!(tour.cost(), 6);
/// assert!(g.is_empty());
/// ```
pub fn euler_tour(graph: &mut Multigraph, start: usize) -> Result<Tour, SolveError> {
    if graph.is_empty() {
        return Ok(Tour::default());
    }

    let n = graph.size();
    let mut cursor = vec![0_usize; n];
    let mut stack = vec![TourStep::new(start, 0)];
    let mut result = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&top) = stack.last() {
        let u = top.vertex;
        match graph.first_target_from(u, cursor[u]) {
            Some(v) => {
                cursor[u] = v;
                let weight = graph.weights(u, v)[0];
                graph.remove_edge(u, v, weight)?;
                stack.push(TourStep::new(v, weight));
            }
            None => {
                cursor[u] = n;
                stack.pop();
                result.push(top);
            }
        }
    }

    if let Some((stranded, _, _)) = graph.edges().next() {
        return Err(SolveError::DisconnectedGraph {
            from: start,
            to: stranded,
        });
    }

    result.reverse();
    let tour = Tour::from_steps(result);
    debug!(
        "euler: {} edges from vertex {start}, cost {}",
        tour.edge_count(),
        tour.cost()
    );
    Ok(tour)
}

/// Picks where an Euler walk must start.
///
/// The surplus vertex (more outgoing than incoming edges) if there is one,
/// otherwise the lowest-indexed vertex with an outgoing edge, otherwise 0.
pub fn start_vertex(graph: &Multigraph) -> usize {
    graph
        .imbalanced_vertices()
        .iter()
        .find(|rec| rec.is_surplus())
        .map(|rec| rec.vertex())
        .or_else(|| (0..graph.size()).find(|&v| graph.outdegree(v) > 0))
        .unwrap_or(0)
}
