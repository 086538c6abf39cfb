//! Error type shared by every fallible operation in the crate.

/// Structured error type for apsp-dp APIs.
///
/// Every variant is raised synchronously at the call that broke the
/// contract; nothing is retried and no partial state is left behind.
/// Negative-weight cycles are *not* errors, see
/// [`ShortestPathData::has_negative_cycle`](crate::ShortestPathData::has_negative_cycle).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApspError {
    /// Malformed argument: a NaN arc cost, or a node count whose `n * n`
    /// storage cannot be addressed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A node index outside `[0, num_nodes)`.
    #[error("node index {index} out of range; the graph has {num_nodes} nodes")]
    IndexOutOfRange { index: usize, num_nodes: usize },

    /// The predecessor chain from `target` never reached `origin`.
    ///
    /// Only produced when the computation flagged a negative-weight cycle.
    #[error("predecessor chain from {origin} to {target} is cyclic or broken")]
    PredecessorCycle { origin: usize, target: usize },
}

impl ApspError {
    /// Creates an `ApspError::InvalidArgument`.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ApspError>;
