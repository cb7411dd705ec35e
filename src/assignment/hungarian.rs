//! Kuhn–Munkres (Hungarian) minimum-cost assignment.
//!
//! # Algorithm
//!
//! Rows are inserted one at a time. For each new row a Dijkstra-like scan over
//! the columns tracks the minimal reduced cost `c[i][j] - u[i] - v[j]` and the
//! column it was reached from (`way`). The smallest slack `delta` shifts the
//! potentials of every visited row/column, creating a new tight edge; once a
//! free column is reached the path traced through `way` is flipped, growing
//! the matching by one row. Index 0 is a sentinel "virtual column" holding the
//! row being inserted.
//!
//! # Complexity
//!
//! O(m³) for an m×m matrix.
//!
//! # Reference
//!
//! Kuhn, H.W. (1955). "The Hungarian method for the assignment problem",
//! *Naval Research Logistics Quarterly* 2, 83-97.

use log::trace;

use crate::error::SolveError;

use super::CostMatrix;

/// An optimal assignment of rows to columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    row_to_col: Vec<usize>,
    cost: i128,
}

impl Assignment {
    /// Column assigned to each row.
    pub fn row_to_col(&self) -> &[usize] {
        &self.row_to_col
    }

    /// Column assigned to `row`.
    pub fn col_of(&self, row: usize) -> usize {
        self.row_to_col[row]
    }

    /// Total cost of the assignment.
    pub fn cost(&self) -> i128 {
        self.cost
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.row_to_col.len()
    }

    /// Returns `true` for the empty assignment.
    pub fn is_empty(&self) -> bool {
        self.row_to_col.is_empty()
    }
}

/// Solves the square assignment problem, minimizing total cost.
///
/// # Examples
///
/// ```
/// use u_postman::assignment::{hungarian, CostMatrix};
///
/// let c = CostMatrix::from_rows(vec![
///     vec![4, 1, 3],
///     vec![2, 0, 5],
///     vec![3, 2, 2],
/// ]).unwrap();
/// let a = hungarian(&c).unwrap();
/// assert_eq!(a.cost(), 5);
/// assert_eq!(a.row_to_col(), &[1, 0, 2]);
/// ```
pub fn hungarian(costs: &CostMatrix) -> Result<Assignment, SolveError> {
    let m = costs.size();
    let mut row_pot = vec![0_i128; m + 1];
    let mut col_pot = vec![0_i128; m + 1];
    // col_row[j] = row matched to column j, 0 when free.
    let mut col_row = vec![0_usize; m + 1];
    let mut way = vec![0_usize; m + 1];

    for i in 1..=m {
        col_row[0] = i;
        let mut j0 = 0;
        let mut min_slack = vec![i128::MAX; m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[j0] = true;
            let i0 = col_row[j0];
            let mut delta = i128::MAX;
            let mut j1 = 0;

            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let cur = costs
                    .get(i0 - 1, j - 1)
                    .saturating_sub(row_pot[i0])
                    .saturating_sub(col_pot[j]);
                if cur < min_slack[j] {
                    min_slack[j] = cur;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            if j1 == 0 {
                return Err(SolveError::AssignmentInfeasible { row: i - 1 });
            }

            for j in 0..=m {
                if used[j] {
                    row_pot[col_row[j]] = row_pot[col_row[j]].saturating_add(delta);
                    col_pot[j] = col_pot[j].saturating_sub(delta);
                } else {
                    min_slack[j] = min_slack[j].saturating_sub(delta);
                }
            }

            j0 = j1;
            if col_row[j0] == 0 {
                break;
            }
        }

        loop {
            let j1 = way[j0];
            col_row[j0] = col_row[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
        trace!("hungarian: row {} inserted", i - 1);
    }

    let mut row_to_col = vec![0; m];
    for j in 1..=m {
        row_to_col[col_row[j] - 1] = j - 1;
    }
    let cost = row_to_col
        .iter()
        .enumerate()
        .fold(0_i128, |acc, (i, &j)| acc.saturating_add(costs.get(i, j)));

    Ok(Assignment { row_to_col, cost })
}
