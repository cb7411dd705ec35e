//! Edge duplication along shortest paths.

use log::trace;

use crate::assignment::PathDemand;
use crate::distance::ShortestPaths;
use crate::error::SolveError;
use crate::models::Multigraph;

/// Duplicates the shortest path of every demand `times` times.
///
/// Each path starts at a vertex lacking outgoing edges and ends at one lacking
/// incoming edges, so every copy moves both endpoints one step toward
/// balance while interior vertices stay unchanged. Only edges already present
/// in `graph` are copied. Returns the total weight added, or
/// [`SolveError::CostOverflow`] if it does not fit in `u64`.
///
/// # Examples
///
/// ```
/// use u_postman::assignment::PathDemand;
/// use u_postman::distance::ShortestPaths;
/// use u_postman::models::Multigraph;
/// use u_postman::solver::augment;
///
/// let mut g = Multigraph::from_edges(3, &[(0, 1, 2), (1, 2, 3), (2, 0, 4), (0, 2, 1)]);
/// let paths = ShortestPaths::compute(&g, g.infinity());
/// let overhead = augment(&mut g, &paths, &[PathDemand { from: 2, to: 0, times: 1 }]).unwrap();
/// assert_eq!(overhead, 4);
/// assert!(g.is_balanced());
/// ```
pub fn augment(
    graph: &mut Multigraph,
    paths: &ShortestPaths,
    demands: &[PathDemand],
) -> Result<u64, SolveError> {
    let mut overhead = 0_u64;
    for demand in demands {
        let times = u64::try_from(demand.times).map_err(|_| SolveError::CostOverflow)?;
        for (from, to, weight) in paths.path(demand.from, demand.to) {
            trace!(
                "duplicating {from} -> {to} (w={weight}) x{}",
                demand.times
            );
            overhead = weight
                .checked_mul(times)
                .and_then(|added| overhead.checked_add(added))
                .ok_or(SolveError::CostOverflow)?;
            graph.add_edge(from, to, weight, demand.times);
        }
    }
    Ok(overhead)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_augment_multi_hop_with_times() {
        // Path 2 -> 0 -> 1 is the only way from 2 to 1.
        let mut g = Multigraph::from_edges(3, &[(0, 1, 1), (1, 2, 5), (2, 0, 2)]);
        let paths = ShortestPaths::compute(&g, g.infinity());
        let overhead = augment(&mut g, &paths, &[PathDemand { from: 2, to: 1, times: 3 }])
            .expect("fits");
        assert_eq!(overhead, 3 * (2 + 1));
        assert_eq!(g.weights(2, 0), &[2, 2, 2, 2]);
        assert_eq!(g.weights(0, 1), &[1, 1, 1, 1]);
        assert_eq!(g.weights(1, 2), &[5]);
    }

    #[test]
    fn test_augment_nothing() {
        let mut g = Multigraph::from_edges(2, &[(0, 1, 1), (1, 0, 1)]);
        let paths = ShortestPaths::compute(&g, g.infinity());
        assert_eq!(augment(&mut g, &paths, &[]), Ok(0));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_augment_reports_overflowing_overhead() {
        let w = u64::MAX / 4;
        let mut g = Multigraph::from_edges(2, &[(0, 1, w), (1, 0, w)]);
        let paths = ShortestPaths::compute(&g, g.infinity());
        assert_eq!(
            augment(&mut g, &paths, &[PathDemand { from: 1, to: 0, times: 5 }]),
            Err(SolveError::CostOverflow)
        );
        assert_eq!(
            augment(&mut g, &paths, &[PathDemand { from: 1, to: 0, times: 3 }]),
            Ok(3 * w)
        );
    }
}
