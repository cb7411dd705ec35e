//! Solver output.

use serde::{Deserialize, Serialize};

use super::Tour;

/// Which balancing path the solver took.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Every vertex was already balanced; the walk is a closed circuit.
    #[default]
    Balanced,
    /// Exactly one surplus and one deficit vertex; the walk is open and
    /// runs from the surplus to the deficit vertex.
    OpenWalk,
    /// Shortest paths were duplicated according to an optimal assignment.
    Assignment,
}

/// A solved route inspection instance.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Solution, Tour, TourStep};
///
/// let tour = Tour::from_steps(vec![TourStep::new(0, 0), TourStep::new(1, 3)]);
/// let sol = Solution::new(tour, 0);
/// assert_eq!(sol.total_cost(), 3);
/// assert_eq!(sol.base_cost(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    tour: Tour,
    overhead: u64,
    strategy: Strategy,
}

impl Solution {
    /// Creates a solution from a tour and the cost of its duplicated edges.
    pub fn new(tour: Tour, overhead: u64) -> Self {
        Self {
            tour,
            overhead,
            strategy: Strategy::default(),
        }
    }

    /// Records the balancing strategy that produced this solution.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The balancing strategy used.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The covering walk.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Consumes the solution, returning the walk.
    pub fn into_tour(self) -> Tour {
        self.tour
    }

    /// Cost of all traversed edges, duplicates included.
    pub fn total_cost(&self) -> u64 {
        self.tour.cost()
    }

    /// Extra cost introduced by duplicated edges.
    pub fn overhead(&self) -> u64 {
        self.overhead
    }

    /// Cost of the original edges alone, floored at zero.
    pub fn base_cost(&self) -> u64 {
        self.total_cost().saturating_sub(self.overhead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TourStep;

    #[test]
    fn test_base_cost_with_overhead_above_tour_cost() {
        let tour = Tour::from_steps(vec![TourStep::new(0, 0), TourStep::new(1, 3)]);
        let sol = Solution::new(tour, 10);
        assert_eq!(sol.base_cost(), 0);
    }

    #[test]
    fn test_solution_costs() {
        let tour = Tour::from_steps(vec![
            TourStep::new(0, 0),
            TourStep::new(1, 2),
            TourStep::new(0, 5),
            TourStep::new(1, 2),
        ]);
        let sol = Solution::new(tour, 2);
        assert_eq!(sol.total_cost(), 9);
        assert_eq!(sol.overhead(), 2);
        assert_eq!(sol.base_cost(), 7);
        assert_eq!(sol.tour().edge_count(), 3);
    }

    #[test]
    fn test_solution_default() {
        let sol = Solution::default();
        assert!(sol.tour().is_empty());
        assert_eq!(sol.total_cost(), 0);
    }

    #[test]
    fn test_solution_json() {
        let tour = Tour::from_steps(vec![TourStep::new(2, 0), TourStep::new(0, 4)]);
        let sol = Solution::new(tour, 0).with_strategy(Strategy::OpenWalk);
        let json = serde_json::to_value(&sol).expect("serialize");
        assert_eq!(json["overhead"], 0);
        assert_eq!(json["strategy"], "OpenWalk");
        assert_eq!(json["tour"]["cost"], 4);
        assert_eq!(json["tour"]["steps"][1]["vertex"], 0);
    }
}
