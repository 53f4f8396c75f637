//! Error type shared by the library.

use std::io;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value typed at a prompt (or passed on the command line) was not a
    /// positive integer.
    #[error("invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    /// Standard input hit end-of-file while a value was still required.
    #[error("input closed before a valid value was entered")]
    InputClosed,

    #[error("thread count must be at least 1")]
    ZeroThreads,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
