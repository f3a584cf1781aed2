//! Trait abstractions for git operations.
//!
//! This module defines the `GitOps` trait which abstracts the git operations
//! sprig performs, enabling dependency injection and testability.

use git2::{Direction, Oid, RepositoryState};

use crate::{RemoteInfo, RemoteRefspecs, Result};

/// Trait for git repository operations.
///
/// This trait abstracts git operations, allowing for:
/// - Dependency injection in commands/services
/// - Mock implementations for testing
///
/// All operations are synchronous since git2 is a synchronous library.
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    // === Repository Info ===

    /// Get the current repository state (merge, rebase, ...).
    fn state(&self) -> RepositoryState;

    // === Commits and References ===

    /// Resolve `HEAD` to the commit it currently points at.
    fn head_commit(&self) -> Result<Oid>;

    /// Create a local branch pointing at `target` without overwriting.
    ///
    /// Returns the full reference name of the new branch.
    fn create_branch_at(&self, name: &str, target: Oid) -> Result<String>;

    /// Point `HEAD` symbolically at `refname`, recording `log_message`
    /// in the reflog.
    fn set_head_symbolic(&self, refname: &str, log_message: &str) -> Result<()>;

    // === Remote Operations ===

    /// Look up a configured remote.
    fn find_remote(&self, name: &str) -> Result<RemoteInfo>;

    /// Open (and close) a transport connection to a remote.
    fn connect_remote(&self, name: &str, direction: Direction) -> Result<()>;

    /// Add a push refspec to a remote's configuration.
    fn add_push_refspec(&self, remote: &str, refspec: &str) -> Result<()>;

    /// Add a fetch refspec to a remote's configuration.
    fn add_fetch_refspec(&self, remote: &str, refspec: &str) -> Result<()>;

    /// Read the push and fetch refspecs configured for a remote.
    fn remote_refspecs(&self, name: &str) -> Result<RemoteRefspecs>;
}
