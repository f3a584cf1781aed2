//! Error types for sprig-core.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sprig-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid branch name.
    #[error("invalid branch name '{name}': {reason}")]
    InvalidBranchName {
        /// The invalid name.
        name: String,
        /// Why the name is invalid.
        reason: String,
    },

    /// Repository has an operation in progress (merge, rebase, ...).
    #[error("repository is in unexpected state {name} ({code})")]
    UnexpectedState {
        /// State name, e.g. `merge`.
        name: &'static str,
        /// libgit2 numeric state code.
        code: i32,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Git operation error.
    #[error("git error: {0}")]
    Git(#[from] sprig_git::Error),
}

impl Error {
    /// Build an [`Error::UnexpectedState`] from a git2 repository state.
    #[must_use]
    pub const fn unexpected_state(state: sprig_git::RepositoryState) -> Self {
        Self::UnexpectedState {
            name: sprig_git::state_name(state),
            code: sprig_git::state_code(state),
        }
    }
}
