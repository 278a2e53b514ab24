use thiserror::Error;

/// The ways a selection request can be rejected.
///
/// Both are detected before the slice is touched, so a failed call leaves it as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The slice has no elements.
    #[error("cannot select from an empty slice")]
    EmptyInput,

    /// The requested rank is not an index of the slice.
    #[error("rank {rank} is out of bounds for a slice of length {len}")]
    RankOutOfBounds {
        /// The zero-based rank that was requested.
        rank: usize,
        /// The length of the slice.
        len: usize,
    },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Checks that `rank` can be selected from a slice of length `len`.
pub(crate) fn check_rank(len: usize, rank: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptyInput);
    }
    if rank >= len {
        return Err(Error::RankOutOfBounds { rank, len });
    }
    Ok(())
}
