use thiserror::Error;

/// Why a claimed cut failed [`crate::cut::validate_cut`].
///
/// Mirrors the five reason codes a cut-validation helper must distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutInvalidReason {
    /// The cut does not have exactly `k` partitions.
    WrongPartitionCount,
    /// A vertex of the hypergraph is missing from every partition.
    MissingVertex,
    /// A vertex appears in more than one partition.
    DuplicateVertex,
    /// One of the partitions is empty.
    EmptyPartition,
    /// The recomputed cut value disagrees with the value stored on the cut.
    ValueMismatch,
}

impl std::fmt::Display for CutInvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            CutInvalidReason::WrongPartitionCount => "number of partitions does not match k",
            CutInvalidReason::MissingVertex => "a hypergraph vertex is missing from every partition",
            CutInvalidReason::DuplicateVertex => "a vertex appears in more than one partition",
            CutInvalidReason::EmptyPartition => "one of the partitions is empty",
            CutInvalidReason::ValueMismatch => "recomputed cut value disagrees with the stored value",
        };
        write!(f, "{msg}")
    }
}

/// The error kinds surfaced by the hypergraph core (spec §7).
///
/// `FormatError` is intentionally absent: it belongs to the hMETIS
/// reader/writer, which is an external collaborator of this crate, not part
/// of it (see `DESIGN.md`).
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was out of range: k out of `[2, n]`, a non-positive
    /// epsilon, an unknown vertex/edge id, or an empty vertex set at
    /// construction.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A selector/parameter combination that an external algorithm
    /// dispatcher rejected (e.g. epsilon supplied for a contraction
    /// algorithm, or k != 2 for an ordering-based algorithm). The core
    /// itself never builds this variant; it exists for callers that wrap
    /// this crate with their own algorithm-selection layer.
    #[error("algorithm misconfigured: {message}")]
    AlgorithmMisconfigured { message: String },

    /// Returned only by [`crate::cut::validate_cut`].
    #[error("cut is invalid: {reason}")]
    CutInvalid { reason: CutInvalidReason },
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
