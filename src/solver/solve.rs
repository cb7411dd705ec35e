//! Route inspection driver.
//!
//! # Pipeline
//!
//! 1. Compute per-vertex imbalance.
//! 2. Balance the graph:
//!    - no imbalanced vertices: nothing to do;
//!    - one surplus and one deficit vertex: keep an open walk, duplicating
//!      the deficit → surplus shortest path only when the imbalance exceeds 1;
//!    - otherwise: Floyd–Warshall, Hungarian assignment over imbalance slots,
//!      and path duplication.
//! 3. Extract the Euler walk, consuming the graph.

use std::time::Instant;

use log::debug;

use crate::assignment::{expand_slots, hungarian, matched_pairs, slot_cost_matrix, PathDemand};
use crate::distance::ShortestPaths;
use crate::error::SolveError;
use crate::euler::{euler_tour, start_vertex};
use crate::models::{total_imbalance, ImbalancedVertex, Multigraph, Solution, Strategy};

use super::{augment, SolverConfig};

/// Solves route inspection instances under a fixed configuration.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Multigraph, Strategy};
/// use u_postman::solver::{Solver, SolverConfig};
///
/// // 0 -> 1 -> 2 -> 0 with a shortcut 0 -> 2.
/// let g = Multigraph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (0, 2, 5)]);
///
/// let open = Solver::default().solve(g.clone()).unwrap();
/// assert_eq!(open.strategy(), Strategy::OpenWalk);
/// assert_eq!(open.total_cost(), 8);
///
/// let closed = Solver::new(SolverConfig::new().with_closed_walk(true)).solve(g).unwrap();
/// assert_eq!(closed.strategy(), Strategy::Assignment);
/// assert_eq!(closed.overhead(), 1);
/// assert!(closed.tour().is_closed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `graph`, taking ownership of it.
    pub fn solve(&self, mut graph: Multigraph) -> Result<Solution, SolveError> {
        self.solve_in_place(&mut graph)
    }

    /// Solves `graph` in place.
    ///
    /// Duplicated edges are added and then every edge is consumed, so on
    /// success the graph is left empty. On error its contents are unspecified.
    ///
    /// Fails with [`SolveError::CostOverflow`] when the infinity sentinel or
    /// the total tour cost does not fit in `u64`.
    pub fn solve_in_place(&self, graph: &mut Multigraph) -> Result<Solution, SolveError> {
        let started = Instant::now();
        let imbalanced = graph.imbalanced_vertices();
        let strategy = self.strategy_for(&imbalanced)?;
        debug!(
            "solve: {} vertices, {} edges, {} imbalanced, {strategy:?}",
            graph.size(),
            graph.edge_count(),
            imbalanced.len()
        );

        // Snapshot before augmentation; duplicated edges never raise the bound.
        let infinity = graph.checked_infinity().ok_or(SolveError::CostOverflow)?;
        let base = graph
            .checked_total_weight()
            .ok_or(SolveError::CostOverflow)?;
        let overhead = match strategy {
            Strategy::Balanced => 0,
            Strategy::OpenWalk => balance_pair(graph, &imbalanced, infinity)?,
            Strategy::Assignment => balance_by_assignment(graph, &imbalanced, infinity)?,
        };
        base.checked_add(overhead).ok_or(SolveError::CostOverflow)?;

        let start = match (strategy, self.config.start_vertex()) {
            (Strategy::OpenWalk, _) | (_, None) => start_vertex(graph),
            (_, Some(v)) if v < graph.size() && graph.outdegree(v) > 0 => v,
            (_, Some(_)) => start_vertex(graph),
        };
        let tour = euler_tour(graph, start)?;

        debug!(
            "solve: cost {}, overhead {overhead}, {:?} elapsed",
            tour.cost(),
            started.elapsed()
        );
        Ok(Solution::new(tour, overhead).with_strategy(strategy))
    }

    /// Chooses the balancing strategy for a set of imbalanced vertices.
    ///
    /// Fails with [`SolveError::ImbalanceInvariant`] for a set that no
    /// multigraph can produce (nonzero total or a single vertex).
    pub fn strategy_for(&self, imbalanced: &[ImbalancedVertex]) -> Result<Strategy, SolveError> {
        let total = total_imbalance(imbalanced);
        if total != 0 || imbalanced.len() == 1 {
            return Err(SolveError::ImbalanceInvariant {
                count: imbalanced.len(),
                total,
            });
        }
        Ok(match imbalanced.len() {
            0 => Strategy::Balanced,
            2 if !self.config.closed_walk() => Strategy::OpenWalk,
            _ => Strategy::Assignment,
        })
    }
}

/// Solves `graph` with the default configuration.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
///
/// let g = Multigraph::from_edges(2, &[(0, 1, 3), (1, 0, 4)]);
/// let sol = u_postman::solve(g).unwrap();
/// assert_eq!(sol.total_cost(), 7);
/// assert_eq!(sol.overhead(), 0);
/// ```
pub fn solve(graph: Multigraph) -> Result<Solution, SolveError> {
    Solver::default().solve(graph)
}

/// Reduces a surplus/deficit pair of magnitude `k` to magnitude 1 by
/// duplicating the deficit → surplus shortest path `k - 1` times.
fn balance_pair(
    graph: &mut Multigraph,
    imbalanced: &[ImbalancedVertex],
    infinity: u64,
) -> Result<u64, SolveError> {
    let (deficit, surplus) = match imbalanced {
        [a, b] if a.is_deficit() => (*a, *b),
        [a, b] => (*b, *a),
        _ => {
            return Err(SolveError::ImbalanceInvariant {
                count: imbalanced.len(),
                total: total_imbalance(imbalanced),
            })
        }
    };
    let times = deficit.magnitude() - 1;
    if times == 0 {
        return Ok(0);
    }

    let paths = ShortestPaths::compute(graph, infinity);
    if paths.distance(deficit.vertex(), surplus.vertex()) >= infinity {
        return Err(SolveError::DisconnectedGraph {
            from: deficit.vertex(),
            to: surplus.vertex(),
        });
    }
    let demand = PathDemand {
        from: deficit.vertex(),
        to: surplus.vertex(),
        times,
    };
    augment(graph, &paths, &[demand])
}

fn balance_by_assignment(
    graph: &mut Multigraph,
    imbalanced: &[ImbalancedVertex],
    infinity: u64,
) -> Result<u64, SolveError> {
    let paths = ShortestPaths::compute_connected(graph, infinity)?;
    let slots = expand_slots(imbalanced);
    let costs = slot_cost_matrix(&slots, &paths)?;
    let assignment = hungarian(&costs)?;
    let demands = matched_pairs(&slots, &assignment)?;
    augment(graph, &paths, &demands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::models::Strategy;

    fn sorted_edges(g: &Multigraph) -> Vec<(usize, usize, u64)> {
        let mut e: Vec<_> = g.edges().collect();
        e.sort_unstable();
        e
    }

    /// Checks that `sol` walks every edge of `g` at least once and only real edges.
    fn assert_covers(g: &Multigraph, sol: &Solution) {
        let walked = sorted_edges_of(sol);
        for (u, v, w) in g.edges() {
            assert!(walked.contains(&(u, v, w)), "edge {u}->{v} ({w}) not walked");
        }
        for &(u, v, w) in &walked {
            assert!(g.weights(u, v).contains(&w), "walked fake edge {u}->{v} ({w})");
        }
        assert_eq!(sol.base_cost(), g.total_weight());
    }

    fn sorted_edges_of(sol: &Solution) -> Vec<(usize, usize, u64)> {
        let mut e: Vec<_> = sol.tour().edges().collect();
        e.sort_unstable();
        e
    }

    #[test]
    fn test_balanced_graph_skips_assignment() {
        let g = Multigraph::from_edges(3, &[(0, 1, 1), (1, 2, 2), (2, 0, 3), (0, 0, 4)]);
        let sol = solve(g.clone()).expect("eulerian");
        assert_eq!(sol.strategy(), Strategy::Balanced);
        assert_eq!(sol.overhead(), 0);
        assert_eq!(sol.total_cost(), 10);
        assert!(sol.tour().is_closed());
        assert_eq!(sorted_edges_of(&sol), sorted_edges(&g));
    }

    #[test]
    fn test_balanced_graph_ignores_connectivity_of_isolated_vertices() {
        // Vertex 2 has no edges at all; the circuit still exists.
        let g = Multigraph::from_edges(3, &[(0, 1, 1), (1, 0, 1)]);
        let sol = solve(g).expect("eulerian");
        assert_eq!(sol.tour().edge_count(), 2);
    }

    #[test]
    fn test_empty_graph() {
        let sol = solve(Multigraph::new(4)).expect("trivial");
        assert!(sol.tour().is_empty());
        assert_eq!(sol.total_cost(), 0);
    }

    #[test]
    fn test_open_walk_single_pair() {
        let g = Multigraph::from_edges(
            5,
            &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 4, 4), (4, 0, 5), (4, 1, 6)],
        );
        let sol = solve(g.clone()).expect("open walk");
        assert_eq!(sol.strategy(), Strategy::OpenWalk);
        assert_eq!(sol.overhead(), 0);
        assert_eq!(sol.total_cost(), 21);
        assert_eq!(sol.tour().start(), Some(4));
        assert_eq!(sol.tour().end(), Some(1));
        assert_eq!(sorted_edges_of(&sol), sorted_edges(&g));
    }

    #[test]
    fn test_open_walk_pair_with_magnitude_two() {
        // 0 -> 1 three times, 1 -> 0 once: vertex 0 is -2, vertex 1 is +2.
        let g = Multigraph::from_edges(2, &[(0, 1, 2), (0, 1, 2), (0, 1, 2), (1, 0, 5)]);
        let sol = solve(g.clone()).expect("open walk");
        assert_eq!(sol.strategy(), Strategy::OpenWalk);
        assert_eq!(sol.overhead(), 5);
        assert_eq!(sol.total_cost(), 16);
        assert_eq!(sol.tour().vertices(), vec![0, 1, 0, 1, 0, 1]);
        assert_covers(&g, &sol);
    }

    #[test]
    fn test_closed_walk_config_routes_pair_through_assignment() {
        let g = Multigraph::from_edges(
            5,
            &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 4, 4), (4, 0, 5), (4, 1, 6)],
        );
        let solver = Solver::new(SolverConfig::new().with_closed_walk(true));
        let sol = solver.solve(g.clone()).expect("closed walk");
        assert_eq!(sol.strategy(), Strategy::Assignment);
        // Shortest 1 -> 4 is 1 -> 2 -> 3 -> 4.
        assert_eq!(sol.overhead(), 9);
        assert_eq!(sol.total_cost(), 30);
        assert!(sol.tour().is_closed());
        assert_covers(&g, &sol);
    }

    #[test]
    fn test_start_vertex_preference() {
        let g = Multigraph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        let sol = Solver::new(SolverConfig::new().with_start_vertex(2))
            .solve(g.clone())
            .expect("eulerian");
        assert_eq!(sol.tour().vertices(), vec![2, 0, 1, 2]);

        let sol = Solver::new(SolverConfig::new().with_start_vertex(9))
            .solve(g)
            .expect("eulerian");
        assert_eq!(sol.tour().start(), Some(0));
    }

    #[test]
    fn test_four_imbalanced_vertices() {
        // 1: 2 (1) ; 2: 3 (2) ; 3: 4 (3) 5 (5) ; 4: 5 (4) ; 5: 6 (6) ; 6: 1 (7) 2 (8) ;
        let g = Multigraph::from_edges(
            6,
            &[
                (0, 1, 1),
                (1, 2, 2),
                (2, 3, 3),
                (2, 4, 5),
                (3, 4, 4),
                (4, 5, 6),
                (5, 0, 7),
                (5, 1, 8),
            ],
        );
        assert_eq!(g.imbalanced_vertices().len(), 4);
        let sol = solve(g.clone()).expect("connected");
        assert_eq!(sol.strategy(), Strategy::Assignment);
        assert_eq!(sol.overhead(), 8);
        assert_eq!(sol.total_cost(), 44);
        assert!(sol.tour().is_closed());
        assert_covers(&g, &sol);
    }

    #[test]
    fn test_regression_seven_vertices() {
        // 1: 2(1) 6(10);2: 3(2) 4(4) 5(5);3: 4(3);4: 5(6);5: 6(7);6: 7(8);7: 1(9);
        let g = Multigraph::from_edges(
            7,
            &[
                (0, 1, 1),
                (0, 5, 10),
                (1, 2, 2),
                (1, 3, 4),
                (1, 4, 5),
                (2, 3, 3),
                (3, 4, 6),
                (4, 5, 7),
                (5, 6, 8),
                (6, 0, 9),
            ],
        );
        assert_eq!(g.imbalanced_vertices().len(), 5);
        let sol = solve(g.clone()).expect("connected");
        assert_eq!(sol.strategy(), Strategy::Assignment);
        assert_eq!(sol.overhead(), 73);
        assert_eq!(sol.total_cost(), 128);
        assert_eq!(sol.tour().edge_count(), 21);
        assert!(sol.tour().is_closed());
        assert_covers(&g, &sol);
    }

    #[test]
    fn test_weights_near_u64_max_report_overflow() {
        let g = Multigraph::from_edges(2, &[(0, 1, u64::MAX), (1, 0, 1)]);
        assert_eq!(solve(g), Err(SolveError::CostOverflow));

        // The sentinel fits, but the duplicated 1 -> 0 edge pushes the tour
        // cost past u64::MAX.
        let w = u64::MAX / 4;
        let g = Multigraph::from_edges(2, &[(0, 1, w), (0, 1, w), (0, 1, w), (1, 0, w)]);
        assert!(g.checked_infinity().is_some());
        assert_eq!(solve(g), Err(SolveError::CostOverflow));
    }

    #[test]
    fn test_sentinel_beyond_i64_still_assigns() {
        // The heavy self-loop lifts the sentinel to 6 * 2^61 + 1 without
        // changing any imbalance or shortest path.
        let heavy = 1_u64 << 61;
        let g = Multigraph::from_edges(
            6,
            &[
                (0, 0, heavy),
                (0, 1, 1),
                (1, 2, 2),
                (2, 3, 3),
                (2, 4, 5),
                (3, 4, 4),
                (4, 5, 6),
                (5, 0, 7),
                (5, 1, 8),
            ],
        );
        assert!(g.infinity() > i64::MAX as u64);
        let sol = solve(g.clone()).expect("connected");
        assert_eq!(sol.strategy(), Strategy::Assignment);
        assert_eq!(sol.overhead(), 8);
        assert_eq!(sol.total_cost(), 44 + heavy);
        assert_covers(&g, &sol);

        let g = Multigraph::from_edges(3, &[(0, 1, 1 << 62), (1, 2, 1), (2, 0, 1), (0, 2, 1)]);
        let sol = Solver::new(SolverConfig::new().with_closed_walk(true))
            .solve(g.clone())
            .expect("connected");
        assert_eq!(sol.overhead(), 1);
        assert!(sol.tour().is_closed());
        assert_covers(&g, &sol);
    }

    #[test]
    fn test_disconnected_graph_fails() {
        // Two separate 2-cycles joined by one-way edges: 1 -> 2 only.
        let g = Multigraph::from_edges(
            4,
            &[(0, 1, 1), (1, 0, 1), (2, 3, 1), (3, 2, 1), (1, 2, 1), (1, 3, 1), (0, 3, 1)],
        );
        let err = solve(g).unwrap_err();
        assert!(matches!(err, SolveError::DisconnectedGraph { .. }));
    }

    #[test]
    fn test_disconnected_balanced_components_fail() {
        let g = Multigraph::from_edges(4, &[(0, 1, 1), (1, 0, 1), (2, 3, 1), (3, 2, 1)]);
        assert!(matches!(
            solve(g).unwrap_err(),
            SolveError::DisconnectedGraph { .. }
        ));
    }

    #[test]
    fn test_strategy_rejects_impossible_sets() {
        let solver = Solver::default();
        assert_eq!(
            solver.strategy_for(&[ImbalancedVertex::new(0, 2)]),
            Err(SolveError::ImbalanceInvariant { count: 1, total: 2 })
        );
        assert_eq!(
            solver.strategy_for(&[ImbalancedVertex::new(0, 2), ImbalancedVertex::new(1, -1)]),
            Err(SolveError::ImbalanceInvariant { count: 2, total: 1 })
        );
        assert_eq!(solver.strategy_for(&[]), Ok(Strategy::Balanced));
    }

    proptest! {
        #[test]
        fn prop_solution_covers_every_edge(
            n in 2usize..7,
            raw in prop::collection::vec((0usize..7, 0usize..7, 1u64..20), 0..15),
            closed in any::<bool>(),
        ) {
            let mut edges: Vec<_> = raw.into_iter().map(|(u, v, w)| (u % n, v % n, w)).collect();
            edges.extend((0..n).map(|v| (v, (v + 1) % n, 10)));
            let g = Multigraph::from_edges(n, &edges);

            let solver = Solver::new(SolverConfig::new().with_closed_walk(closed));
            let sol = solver.solve(g.clone()).expect("ring is strongly connected");

            let walked = sorted_edges_of(&sol);
            for (u, v, w) in g.edges() {
                prop_assert!(walked.contains(&(u, v, w)));
            }
            for &(u, v, w) in &walked {
                prop_assert!(g.weights(u, v).contains(&w));
            }
            prop_assert_eq!(sol.base_cost(), g.total_weight());
            prop_assert_eq!(sol.total_cost(), sol.tour().cost());
            if closed || sol.strategy() != Strategy::OpenWalk {
                prop_assert!(sol.tour().is_closed());
            }
        }

        #[test]
        fn prop_augmentation_balances_graph(
            n in 2usize..7,
            raw in prop::collection::vec((0usize..7, 0usize..7, 1u64..20), 0..15),
        ) {
            let mut edges: Vec<_> = raw.into_iter().map(|(u, v, w)| (u % n, v % n, w)).collect();
            edges.extend((0..n).map(|v| (v, (v + 1) % n, 10)));
            let mut g = Multigraph::from_edges(n, &edges);
            let imbalanced = g.imbalanced_vertices();
            let before = g.total_weight();
            let infinity = g.infinity();

            let overhead = balance_by_assignment(&mut g, &imbalanced, infinity)
                .expect("ring is strongly connected");
            prop_assert!(g.is_balanced());
            prop_assert_eq!(g.total_weight(), before + overhead);
        }
    }
}
