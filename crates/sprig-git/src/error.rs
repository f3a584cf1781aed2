//! Error types for sprig-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during git operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository")]
    NotARepository,

    /// A local branch with this name already exists.
    #[error("branch already exists: {0}")]
    BranchExists(String),

    /// Reference not found.
    #[error("reference not found: {0}")]
    RefNotFound(String),

    /// Remote not found.
    #[error("remote not found: {0}")]
    RemoteNotFound(String),

    /// Connecting to a remote failed.
    #[error("could not connect to remote '{remote}': {message}")]
    ConnectFailed {
        /// Name of the remote.
        remote: String,
        /// Transport error reported by libgit2.
        message: String,
    },

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
