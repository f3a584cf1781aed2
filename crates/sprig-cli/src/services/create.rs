//! Create service: branch at HEAD, switch HEAD, wire refspecs on a remote.
//!
//! Each step fails fast. Nothing is rolled back, so a failure at the remote
//! steps leaves the new branch in place with HEAD pointing at it.

use anyhow::{Context, Result};
use log::debug;
use sprig_core::{BranchName, Config, Error as CoreError, Refspec, RefspecStyle};
use sprig_git::{Direction, GitOps, Oid, RemoteInfo, RepositoryState};

/// Per-invocation settings for [`CreateBranchService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    /// Remote that receives the push/fetch refspecs.
    pub remote: String,
    /// How the refspec joins source and destination.
    pub refspec_style: RefspecStyle,
    /// Reflog message for the HEAD update.
    pub reflog_message: String,
}

impl From<&Config> for CreateOptions {
    fn from(config: &Config) -> Self {
        Self {
            remote: config.general.remote.clone(),
            refspec_style: config.refspec.style,
            reflog_message: config.general.reflog_message.clone(),
        }
    }
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Result of a successful branch creation.
#[derive(Debug)]
pub struct CreateOutcome {
    /// Full reference name of the new branch.
    pub refname: String,
    /// Commit the branch points at (HEAD before the switch).
    pub target: Oid,
    /// `<remote>/<branch>`.
    pub upstream_name: String,
    /// Remote that was configured.
    pub remote: RemoteInfo,
    /// Refspec registered for push and fetch.
    pub refspec: Refspec,
    /// Refspecs on the remote after registration, if they could be read back.
    pub remote_refspec_count: Option<usize>,
}

/// Service for creating a branch and wiring it to a remote.
pub struct CreateBranchService<'a, G: GitOps> {
    repo: &'a G,
}

impl<'a, G: GitOps> CreateBranchService<'a, G> {
    /// Create a new create service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    /// Fail unless no merge, rebase, cherry-pick or similar is in progress.
    ///
    /// # Errors
    /// Returns [`CoreError::UnexpectedState`] carrying the state name and
    /// its libgit2 code.
    pub fn ensure_clean_state(&self) -> Result<()> {
        let state = self.repo.state();
        if matches!(state, RepositoryState::Clean) {
            Ok(())
        } else {
            Err(CoreError::unexpected_state(state).into())
        }
    }

    /// Create `branch` at HEAD, point HEAD at it, check the remote is
    /// reachable for push, then register the branch refspec for push and
    /// fetch on that remote.
    ///
    /// # Errors
    /// Returns the first failing step, with context naming it. Steps that
    /// already ran are not undone.
    pub fn create(&self, branch: &BranchName, options: &CreateOptions) -> Result<CreateOutcome> {
        self.ensure_clean_state()?;

        let upstream_name = branch.upstream_name(&options.remote);

        let target = self
            .repo
            .head_commit()
            .context("Could not get HEAD commit from repo")?;
        debug!("parent commit for {branch}: {target}");

        let refname = self
            .repo
            .create_branch_at(branch.as_str(), target)
            .context("Failed creating branch")?;

        self.repo
            .set_head_symbolic(&refname, &options.reflog_message)
            .context("Failed pointing HEAD at new branch")?;
        debug!("HEAD now points at {refname}");

        let remote = self
            .repo
            .find_remote(&options.remote)
            .context("Failed looking up remote")?;

        self.repo
            .connect_remote(&remote.name, Direction::Push)
            .context("Failed connecting to remote")?;

        let refspec = Refspec::for_branch(branch, options.refspec_style);
        self.repo
            .add_push_refspec(&remote.name, refspec.as_str())
            .context("Failed adding remote repo")?;
        self.repo
            .add_fetch_refspec(&remote.name, refspec.as_str())
            .context("Failed adding remote repo")?;
        debug!("registered {refspec} on {}", remote.name);

        let remote_refspec_count = match self.repo.remote_refspecs(&remote.name) {
            Ok(refspecs) => Some(refspecs.len()),
            Err(e) => {
                debug!("could not read back refspecs for {}: {e}", remote.name);
                None
            }
        };

        Ok(CreateOutcome {
            refname,
            target,
            upstream_name,
            remote,
            refspec,
            remote_refspec_count,
        })
    }
}
