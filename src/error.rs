//! Error types shared by the solver stages.

use thiserror::Error;

/// A terminal failure of a route inspection solve.
///
/// Only [`SolveError::DisconnectedGraph`] is expected from well-formed
/// input; the remaining variants signal a broken internal invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Some vertex pair has no connecting path, so no covering walk exists.
    #[error("graph is not strongly connected: no path from vertex {from} to vertex {to}")]
    DisconnectedGraph {
        /// Source vertex of the unreachable pair.
        from: usize,
        /// Target vertex of the unreachable pair.
        to: usize,
    },

    /// An edge removal referenced a weight not present between two vertices.
    #[error("edge {from} -> {to} with weight {weight} not found")]
    EdgeNotFound {
        /// Edge tail.
        from: usize,
        /// Edge head.
        to: usize,
        /// Requested weight.
        weight: u64,
    },

    /// The assignment solver found no augmenting path for a row.
    #[error("no augmenting path for assignment row {row}")]
    AssignmentInfeasible {
        /// Zero-based row index that could not be matched.
        row: usize,
    },

    /// The imbalanced vertex set cannot come from a valid multigraph.
    #[error("inconsistent imbalance: {count} imbalanced vertices with total {total}")]
    ImbalanceInvariant {
        /// Number of imbalanced vertices found.
        count: usize,
        /// Sum of all imbalances (zero for any valid graph).
        total: i64,
    },

    /// Edge weights are too large for path or tour costs to fit in `u64`.
    #[error("edge weights too large: path or tour cost exceeds u64::MAX")]
    CostOverflow,
}

/// A failure to read the textual graph format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A record has no `:` separating the vertex index from its edges.
    #[error("record {record}: missing ':' after vertex index")]
    MissingColon {
        /// One-based record position.
        record: usize,
    },

    /// A vertex index or weight is not a number.
    #[error("record {record}: invalid number {text:?}")]
    InvalidNumber {
        /// One-based record position.
        record: usize,
        /// Offending text.
        text: String,
    },

    /// A `(` or `)` around an edge weight is missing.
    #[error("record {record}: expected '{expected}' near {found:?}")]
    Unexpected {
        /// One-based record position.
        record: usize,
        /// Character that should have appeared.
        expected: char,
        /// Remaining text where it was looked for.
        found: String,
    },

    /// A one-based vertex index outside `1..=size`.
    #[error("vertex {vertex} out of range 1..={size}")]
    VertexOutOfRange {
        /// One-based vertex index as written.
        vertex: usize,
        /// Number of records in the input.
        size: usize,
    },

    /// Two records describe the same vertex.
    #[error("vertex {vertex} described more than once")]
    DuplicateRecord {
        /// One-based vertex index as written.
        vertex: usize,
    },

    /// An edge weight so large that path costs on this graph cannot be
    /// represented.
    #[error("record {record}: weight {weight} too large for {size} vertices")]
    WeightTooLarge {
        /// One-based record position.
        record: usize,
        /// Offending weight.
        weight: u64,
        /// Number of records in the input.
        size: usize,
    },

    /// An edge weight of zero.
    #[error("record {record}: edge weights must be positive")]
    ZeroWeight {
        /// One-based record position.
        record: usize,
    },

    /// Text after the last `;`.
    #[error("unterminated record {text:?}")]
    Unterminated {
        /// The trailing text.
        text: String,
    },
}

/// Invalid parameters for the random graph generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Fewer than two vertices leave no room for a non-loop edge.
    #[error("need at least 2 vertices, got {vertices}")]
    TooFewVertices {
        /// Requested vertex count.
        vertices: usize,
    },

    /// The spanning cycle alone already uses `vertices` edges.
    #[error("edge count {edges} must exceed vertex count {vertices}")]
    TooFewEdges {
        /// Requested edge count.
        edges: usize,
        /// Requested vertex count.
        vertices: usize,
    },

    /// Weights are drawn from `1..max_weight`, which must be nonempty.
    #[error("max weight must be at least 2, got {max_weight}")]
    WeightRange {
        /// Requested exclusive upper bound.
        max_weight: u64,
    },
}
