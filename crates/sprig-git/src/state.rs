//! Repository state codes.
//!
//! libgit2 reports in-progress operations as `git_repository_state_t`.
//! git2 exposes the enum but not its numeric value, which is what users
//! of the C API see in diagnostics.

use git2::RepositoryState;

/// Numeric libgit2 code for a repository state.
#[must_use]
pub const fn state_code(state: RepositoryState) -> i32 {
    match state {
        RepositoryState::Clean => 0,
        RepositoryState::Merge => 1,
        RepositoryState::Revert => 2,
        RepositoryState::RevertSequence => 3,
        RepositoryState::CherryPick => 4,
        RepositoryState::CherryPickSequence => 5,
        RepositoryState::Bisect => 6,
        RepositoryState::Rebase => 7,
        RepositoryState::RebaseInteractive => 8,
        RepositoryState::RebaseMerge => 9,
        RepositoryState::ApplyMailbox => 10,
        RepositoryState::ApplyMailboxOrRebase => 11,
    }
}

/// Human-readable name for a repository state.
#[must_use]
pub const fn state_name(state: RepositoryState) -> &'static str {
    match state {
        RepositoryState::Clean => "none",
        RepositoryState::Merge => "merge",
        RepositoryState::Revert => "revert",
        RepositoryState::RevertSequence => "revert-sequence",
        RepositoryState::CherryPick => "cherry-pick",
        RepositoryState::CherryPickSequence => "cherry-pick-sequence",
        RepositoryState::Bisect => "bisect",
        RepositoryState::Rebase => "rebase",
        RepositoryState::RebaseInteractive => "rebase-interactive",
        RepositoryState::RebaseMerge => "rebase-merge",
        RepositoryState::ApplyMailbox => "apply-mailbox",
        RepositoryState::ApplyMailboxOrRebase => "apply-mailbox-or-rebase",
    }
}
