use thiserror::Error;

/// Errors raised while constructing or operating a [`crate::WorkerPool`].
#[derive(Debug, Error)]
pub enum PoolError {
    /// A construction argument was outside its valid domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What made the argument invalid.
        reason: &'static str,
    },

    /// The OS refused to spawn one of the pool's worker threads. Any
    /// threads already spawned for this pool are shut down before this
    /// error is returned, so construction never leaves half a pool behind.
    #[error("failed to spawn worker thread")]
    Spawn(#[source] std::io::Error),
}
