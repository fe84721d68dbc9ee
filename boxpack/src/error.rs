use thiserror::Error;

use crate::algorithms::AlgorithmType;

/// Errors that abort a packing request.
///
/// Items that do not fit are never reported through this type, they end up in the unpacked items of a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackingError {
    /// The identifier does not correspond to any known algorithm.
    #[error("invalid algorithm type: {0}")]
    InvalidAlgorithm(u32),

    /// The algorithm is known, but no implementation was registered for it.
    #[error("algorithm {0} is not available")]
    UnsupportedAlgorithm(AlgorithmType),
}
