//! Mock implementations for testing services.
//!
//! `MockGitOps` implements the `GitOps` trait from sprig-git over in-memory
//! maps and records every call so tests can check ordering.

use std::cell::RefCell;
use std::collections::HashMap;

use sprig_git::{
    Direction, GitOps, Oid, RemoteInfo, RemoteRefspecs, RepositoryState, Result as GitResult,
};

/// Build a deterministic object id from a single byte.
#[allow(clippy::unwrap_used)]
pub fn oid(byte: u8) -> Oid {
    Oid::from_bytes(&[byte; 20]).unwrap()
}

/// Mock implementation of `GitOps` for testing.
pub struct MockGitOps {
    pub state: RepositoryState,
    pub head: Option<Oid>,
    pub head_ref: RefCell<Option<String>>,
    pub reflog: RefCell<Vec<String>>,
    pub branches: RefCell<HashMap<String, Oid>>,
    pub remotes: RefCell<HashMap<String, RemoteRefspecs>>,
    pub connect_should_fail: bool,
    pub calls: RefCell<Vec<String>>,
}

impl Default for MockGitOps {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitOps {
    pub fn new() -> Self {
        Self {
            state: RepositoryState::Clean,
            head: None,
            head_ref: RefCell::new(None),
            reflog: RefCell::new(Vec::new()),
            branches: RefCell::new(HashMap::new()),
            remotes: RefCell::new(HashMap::new()),
            connect_should_fail: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_state(mut self, state: RepositoryState) -> Self {
        self.state = state;
        self
    }

    pub fn with_head(mut self, oid: Oid) -> Self {
        self.head = Some(oid);
        self
    }

    pub fn with_branch(self, name: &str, oid: Oid) -> Self {
        self.branches.borrow_mut().insert(name.to_string(), oid);
        self
    }

    pub fn with_remote(self, name: &str) -> Self {
        self.remotes
            .borrow_mut()
            .insert(name.to_string(), RemoteRefspecs::default());
        self
    }

    pub fn with_connect_failure(mut self) -> Self {
        self.connect_should_fail = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn branch_target(&self, name: &str) -> Option<Oid> {
        self.branches.borrow().get(name).copied()
    }

    pub fn head_ref(&self) -> Option<String> {
        self.head_ref.borrow().clone()
    }

    pub fn reflog(&self) -> Vec<String> {
        self.reflog.borrow().clone()
    }

    pub fn refspecs(&self, remote: &str) -> RemoteRefspecs {
        self.remotes
            .borrow()
            .get(remote)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn with_remote_mut(
        &self,
        name: &str,
        f: impl FnOnce(&mut RemoteRefspecs),
    ) -> GitResult<()> {
        let mut remotes = self.remotes.borrow_mut();
        let refspecs = remotes
            .get_mut(name)
            .ok_or_else(|| sprig_git::Error::RemoteNotFound(name.to_string()))?;
        f(refspecs);
        Ok(())
    }
}

impl GitOps for MockGitOps {
    fn state(&self) -> RepositoryState {
        self.record("state");
        self.state
    }

    fn head_commit(&self) -> GitResult<Oid> {
        self.record("head_commit");
        self.head
            .ok_or_else(|| sprig_git::Error::RefNotFound("HEAD".to_string()))
    }

    fn create_branch_at(&self, name: &str, target: Oid) -> GitResult<String> {
        self.record(format!("create_branch_at {name}"));
        if self.branches.borrow().contains_key(name) {
            return Err(sprig_git::Error::BranchExists(name.to_string()));
        }
        self.branches.borrow_mut().insert(name.to_string(), target);
        Ok(format!("refs/heads/{name}"))
    }

    fn set_head_symbolic(&self, refname: &str, log_message: &str) -> GitResult<()> {
        self.record(format!("set_head_symbolic {refname}"));
        *self.head_ref.borrow_mut() = Some(refname.to_string());
        self.reflog.borrow_mut().push(log_message.to_string());
        Ok(())
    }

    fn find_remote(&self, name: &str) -> GitResult<RemoteInfo> {
        self.record(format!("find_remote {name}"));
        if self.remotes.borrow().contains_key(name) {
            Ok(RemoteInfo {
                name: name.to_string(),
                url: Some(format!("https://example.com/{name}.git")),
            })
        } else {
            Err(sprig_git::Error::RemoteNotFound(name.to_string()))
        }
    }

    fn connect_remote(&self, name: &str, direction: Direction) -> GitResult<()> {
        let label = match direction {
            Direction::Fetch => "fetch",
            Direction::Push => "push",
        };
        self.record(format!("connect_remote {name} {label}"));
        if self.connect_should_fail {
            return Err(sprig_git::Error::ConnectFailed {
                remote: name.to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }

    fn add_push_refspec(&self, remote: &str, refspec: &str) -> GitResult<()> {
        self.record(format!("add_push_refspec {remote}"));
        self.with_remote_mut(remote, |r| r.push.push(refspec.to_string()))
    }

    fn add_fetch_refspec(&self, remote: &str, refspec: &str) -> GitResult<()> {
        self.record(format!("add_fetch_refspec {remote}"));
        self.with_remote_mut(remote, |r| r.fetch.push(refspec.to_string()))
    }

    fn remote_refspecs(&self, name: &str) -> GitResult<RemoteRefspecs> {
        self.record(format!("remote_refspecs {name}"));
        self.remotes
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| sprig_git::Error::RemoteNotFound(name.to_string()))
    }
}
