//! Cost matrices over imbalance slots.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::distance::ShortestPaths;
use crate::error::SolveError;
use crate::models::ImbalancedVertex;

use super::Assignment;

/// A dense square matrix of assignment costs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    data: Vec<i128>,
    size: usize,
}

impl CostMatrix {
    /// Creates a `size × size` matrix with every cell set to `value`.
    pub fn filled(size: usize, value: i128) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Builds a matrix from rows.
    ///
    /// Returns `None` unless every row has exactly `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<i128>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.into_iter().flatten().collect(),
            size,
        })
    }

    /// Cost of assigning `row` to `col`.
    pub fn get(&self, row: usize, col: usize) -> i128 {
        self.data[row * self.size + col]
    }

    /// Sets the cost of assigning `row` to `col`.
    pub fn set(&mut self, row: usize, col: usize, cost: i128) {
        self.data[row * self.size + col] = cost;
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Whether a slot must emit or absorb one duplicated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Needs an extra outgoing edge; duplicated paths start here.
    Deficit,
    /// Needs an extra incoming edge; duplicated paths end here.
    Surplus,
}

/// One unit of imbalance at a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Vertex owning the slot.
    pub vertex: usize,
    /// Direction of the missing edge.
    pub kind: SlotKind,
}

/// Expands each imbalanced vertex into `|imbalance|` slots, keeping vertex order.
///
/// # Examples
///
/// ```
/// use u_postman::assignment::{expand_slots, SlotKind};
/// use u_postman::models::ImbalancedVertex;
///
/// let slots = expand_slots(&[ImbalancedVertex::new(0, -2), ImbalancedVertex::new(4, 2)]);
/// assert_eq!(slots.len(), 4);
/// assert_eq!(slots[1].kind, SlotKind::Surplus);
/// assert_eq!(slots[2].vertex, 4);
/// ```
pub fn expand_slots(imbalanced: &[ImbalancedVertex]) -> Vec<Slot> {
    imbalanced
        .iter()
        .flat_map(|rec| {
            let kind = if rec.is_deficit() {
                SlotKind::Deficit
            } else {
                SlotKind::Surplus
            };
            std::iter::repeat(Slot {
                vertex: rec.vertex(),
                kind,
            })
            .take(rec.magnitude())
        })
        .collect()
}

/// Builds the deficit × surplus cost matrix.
///
/// Row `r` is the `r`-th deficit slot and column `c` the `c`-th surplus slot,
/// both in `slots` order. Each cell is the shortest distance between the two
/// vertices. Same-kind pairs have no cell, so no infinity sentinel is needed.
///
/// Fails with [`SolveError::ImbalanceInvariant`] unless both kinds are
/// equally many.
pub fn slot_cost_matrix(slots: &[Slot], paths: &ShortestPaths) -> Result<CostMatrix, SolveError> {
    let (deficits, surpluses) = split_slots(slots);
    if deficits.len() != surpluses.len() {
        let vertices: BTreeSet<usize> = slots.iter().map(|s| s.vertex).collect();
        return Err(SolveError::ImbalanceInvariant {
            count: vertices.len(),
            total: deficits.len() as i64 - surpluses.len() as i64,
        });
    }

    let mut costs = CostMatrix::filled(deficits.len(), 0);
    for (i, row) in deficits.iter().enumerate() {
        for (j, col) in surpluses.iter().enumerate() {
            costs.set(i, j, i128::from(paths.distance(row.vertex, col.vertex)));
        }
    }
    Ok(costs)
}

fn split_slots(slots: &[Slot]) -> (Vec<Slot>, Vec<Slot>) {
    slots
        .iter()
        .copied()
        .partition(|s| s.kind == SlotKind::Deficit)
}

/// A shortest path to duplicate `times` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathDemand {
    /// Deficit vertex the path leaves.
    pub from: usize,
    /// Surplus vertex the path enters.
    pub to: usize,
    /// Number of copies.
    pub times: usize,
}

/// Collects the deficit → surplus pairs chosen by an assignment over
/// [`slot_cost_matrix`].
///
/// Fails with [`SolveError::AssignmentInfeasible`] if the assignment leaves a
/// deficit row unmatched or names a column past the surplus slots.
pub fn matched_pairs(slots: &[Slot], assignment: &Assignment) -> Result<Vec<PathDemand>, SolveError> {
    let (deficits, surpluses) = split_slots(slots);
    if assignment.len() > deficits.len() {
        return Err(SolveError::AssignmentInfeasible {
            row: deficits.len(),
        });
    }
    let mut counts: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for (row, slot) in deficits.iter().enumerate() {
        let target = assignment
            .row_to_col()
            .get(row)
            .and_then(|&col| surpluses.get(col))
            .ok_or(SolveError::AssignmentInfeasible { row })?;
        *counts.entry((slot.vertex, target.vertex)).or_insert(0) += 1;
    }
    debug!("assignment: {} slots, {} distinct paths", slots.len(), counts.len());
    Ok(counts
        .into_iter()
        .map(|((from, to), times)| PathDemand { from, to, times })
        .collect())
}
