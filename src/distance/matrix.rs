//! Dense distance matrix.

use serde::{Deserialize, Serialize};

/// A dense n×n matrix of integer path costs stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_postman::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::filled(3, 100);
/// dm.set(0, 1, 7);
/// assert_eq!(dm.get(0, 1), 7);
/// assert_eq!(dm.get(1, 0), 100);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self::filled(size, 0)
    }

    /// Creates a distance matrix with every cell set to `value`.
    pub fn filled(size: usize, value: u64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<u64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: u64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of vertices in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First `(from, to)` pair in row-major order whose distance is `value`.
    pub fn find(&self, value: u64) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|&d| d == value)
            .map(|idx| (idx / self.size, idx % self.size))
    }

    /// Returns `true` if `d(i, j) <= d(i, k) + d(k, j)` for every triple.
    pub fn satisfies_triangle_inequality(&self) -> bool {
        for k in 0..self.size {
            for i in 0..self.size {
                for j in 0..self.size {
                    if self.get(i, j) > self.get(i, k).saturating_add(self.get(k, j)) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
