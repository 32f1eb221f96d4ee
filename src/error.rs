use thiserror::Error;

/// Errors reported by [`clean_pslg`](crate::clean_pslg).
///
/// The input errors are detected before any mutation takes place, so the
/// caller's data is untouched when one of them is returned.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SnapRoundError {
    /// An edge references a point index outside the point table.
    #[error("edge {edge} references point {index}, but there are only {num_points} points")]
    EdgeIndexOutOfRange {
        edge: usize,
        index: usize,
        num_points: usize,
    },
    /// An input edge joins a point to itself.
    #[error("edge {edge} joins point {index} to itself")]
    DegenerateEdge { edge: usize, index: usize },
    /// The color array does not line up with the edge array.
    #[error("expected {edges} colors, got {colors}")]
    ColorLengthMismatch { edges: usize, colors: usize },
    /// A point coordinate is NaN or infinite.
    #[error("point {point} has a non-finite coordinate")]
    NonFiniteCoordinate { point: usize },
    /// The snap-rounding loop hit its defensive round cap without converging.
    /// The caller's data may be partially modified.
    #[error("snap rounding did not converge after {rounds} rounds")]
    IterationLimitExceeded { rounds: usize },
}
