//! Repository wrapper providing high-level git operations.

use std::path::Path;

use git2::{Direction, ErrorCode, Oid, RepositoryState};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::traits::GitOps;

/// A configured remote as seen at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    /// Remote name, e.g. `origin`.
    pub name: String,
    /// Fetch URL, if one is configured.
    pub url: Option<String>,
}

/// Refspecs configured for a remote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteRefspecs {
    /// `remote.<name>.push` entries.
    pub push: Vec<String>,
    /// `remote.<name>.fetch` entries.
    pub fetch: Vec<String>,
}

impl RemoteRefspecs {
    /// Total number of configured refspecs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.push.len() + self.fetch.len()
    }

    /// Whether the remote has no refspecs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.push.is_empty() && self.fetch.is_empty()
    }
}

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open a repository at the given path.
    ///
    /// # Errors
    /// Returns error if no repository found at path or any parent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                Error::NotARepository
            } else {
                Error::Git2(e)
            }
        })?;
        Ok(Self { inner })
    }

    /// Open the repository containing the current directory.
    ///
    /// # Errors
    /// Returns error if not inside a git repository.
    pub fn open_current() -> Result<Self> {
        Self::open(".")
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get the current repository state.
    #[must_use]
    pub fn state(&self) -> RepositoryState {
        self.inner.state()
    }

    // === Commits and references ===

    /// Resolve `HEAD` to a commit id and make sure that commit exists.
    ///
    /// # Errors
    /// Returns `RefNotFound` if HEAD is unborn, or a git error if the
    /// target is not a commit.
    pub fn head_commit(&self) -> Result<Oid> {
        let oid = self.inner.refname_to_id("HEAD").map_err(|e| {
            if matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch) {
                Error::RefNotFound("HEAD".into())
            } else {
                Error::Git2(e)
            }
        })?;
        let commit = self.inner.find_commit(oid)?;
        trace!("HEAD resolved to {}", commit.id());
        Ok(commit.id())
    }

    /// Create a new branch at `target` without forcing.
    ///
    /// # Errors
    /// Returns `BranchExists` if a branch with this name is already present.
    pub fn create_branch_at(&self, name: &str, target: Oid) -> Result<String> {
        let commit = self.inner.find_commit(target)?;
        let branch = self.inner.branch(name, &commit, false).map_err(|e| {
            if e.code() == ErrorCode::Exists {
                Error::BranchExists(name.into())
            } else {
                Error::Git2(e)
            }
        })?;

        let refname = branch
            .get()
            .name()
            .map(String::from)
            .ok_or_else(|| Error::RefNotFound(name.into()))?;
        debug!("created {refname} at {target}");
        Ok(refname)
    }

    /// Point `HEAD` symbolically at a reference, overwriting the current value.
    ///
    /// # Errors
    /// Returns error if the reference store rejects the update.
    pub fn set_head_symbolic(&self, refname: &str, log_message: &str) -> Result<()> {
        self.inner
            .reference_symbolic("HEAD", refname, true, log_message)?;
        debug!("HEAD -> {refname}");
        Ok(())
    }

    // === Remote operations ===

    /// Look up a remote by name.
    ///
    /// # Errors
    /// Returns `RemoteNotFound` if no such remote is configured.
    pub fn find_remote(&self, name: &str) -> Result<RemoteInfo> {
        let remote = self.find_git2_remote(name)?;
        Ok(RemoteInfo {
            name: remote.name().unwrap_or(name).to_string(),
            url: remote.url().map(String::from),
        })
    }

    /// Connect to a remote and disconnect again.
    ///
    /// No callbacks are installed, so remotes that require credentials fail.
    ///
    /// # Errors
    /// Returns `RemoteNotFound` or `ConnectFailed`.
    pub fn connect_remote(&self, name: &str, direction: Direction) -> Result<()> {
        let mut remote = self.find_git2_remote(name)?;
        remote
            .connect(direction)
            .map_err(|e| Error::ConnectFailed {
                remote: name.into(),
                message: e.message().to_string(),
            })?;
        debug!(
            "connected to '{name}' ({})",
            remote.url().unwrap_or("<no url>")
        );
        remote.disconnect()?;
        Ok(())
    }

    /// Add a push refspec to a remote.
    ///
    /// # Errors
    /// Returns error if the refspec is rejected or config can't be written.
    pub fn add_push_refspec(&self, remote: &str, refspec: &str) -> Result<()> {
        self.inner.remote_add_push(remote, refspec)?;
        trace!("remote.{remote}.push += {refspec}");
        Ok(())
    }

    /// Add a fetch refspec to a remote.
    ///
    /// # Errors
    /// Returns error if the refspec is rejected or config can't be written.
    pub fn add_fetch_refspec(&self, remote: &str, refspec: &str) -> Result<()> {
        self.inner.remote_add_fetch(remote, refspec)?;
        trace!("remote.{remote}.fetch += {refspec}");
        Ok(())
    }

    /// Read back the refspecs configured for a remote.
    ///
    /// # Errors
    /// Returns `RemoteNotFound` if no such remote is configured.
    pub fn remote_refspecs(&self, name: &str) -> Result<RemoteRefspecs> {
        let remote = self.find_git2_remote(name)?;
        let push = remote
            .push_refspecs()?
            .iter()
            .flatten()
            .map(String::from)
            .collect();
        let fetch = remote
            .fetch_refspecs()?
            .iter()
            .flatten()
            .map(String::from)
            .collect();
        Ok(RemoteRefspecs { push, fetch })
    }

    fn find_git2_remote(&self, name: &str) -> Result<git2::Remote<'_>> {
        self.inner.find_remote(name).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                Error::RemoteNotFound(name.into())
            } else {
                Error::Git2(e)
            }
        })
    }
}

impl GitOps for Repository {
    fn state(&self) -> RepositoryState {
        Self::state(self)
    }

    fn head_commit(&self) -> Result<Oid> {
        Self::head_commit(self)
    }

    fn create_branch_at(&self, name: &str, target: Oid) -> Result<String> {
        Self::create_branch_at(self, name, target)
    }

    fn set_head_symbolic(&self, refname: &str, log_message: &str) -> Result<()> {
        Self::set_head_symbolic(self, refname, log_message)
    }

    fn find_remote(&self, name: &str) -> Result<RemoteInfo> {
        Self::find_remote(self, name)
    }

    fn connect_remote(&self, name: &str, direction: Direction) -> Result<()> {
        Self::connect_remote(self, name, direction)
    }

    fn add_push_refspec(&self, remote: &str, refspec: &str) -> Result<()> {
        Self::add_push_refspec(self, remote, refspec)
    }

    fn add_fetch_refspec(&self, remote: &str, refspec: &str) -> Result<()> {
        Self::add_fetch_refspec(self, remote, refspec)
    }

    fn remote_refspecs(&self, name: &str) -> Result<RemoteRefspecs> {
        Self::remote_refspecs(self, name)
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish()
    }
}
