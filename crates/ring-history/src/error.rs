use thiserror::Error;

/// Error type shared by [`crate::RingCore`], [`crate::HistoryBuffer`],
/// [`crate::RandomAccessCursor`] and [`crate::IdRing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// Construction argument was out of the type's valid domain (e.g. capacity
    /// of zero).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What made the argument invalid.
        reason: &'static str,
    },

    /// `front`/`back` called on a buffer with no elements.
    #[error("buffer is empty")]
    EmptyBuffer,

    /// A requested age or index has no corresponding element and was not
    /// eligible for clamping.
    #[error("index or age out of range")]
    OutOfRange,

    /// A cursor operation combined cursors or offsets in a way that violates
    /// the cursor algebra (e.g. subtracting a cleared cursor from a valid
    /// one).
    #[error("invalid cursor operation: {reason}")]
    LogicError {
        /// What invariant the operation would have broken.
        reason: &'static str,
    },
}
