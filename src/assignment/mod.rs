//! Minimum-cost pairing of imbalanced vertices.
//!
//! - [`hungarian`] — Kuhn–Munkres assignment with potentials, O(m³)
//! - [`expand_slots`] / [`slot_cost_matrix`] — deficit × surplus cost matrix
//! - [`matched_pairs`] — turns an assignment into paths to duplicate

mod cost;
mod hungarian;

pub use cost::{
    expand_slots, matched_pairs, slot_cost_matrix, CostMatrix, PathDemand, Slot, SlotKind,
};
pub use hungarian::{hungarian, Assignment};
