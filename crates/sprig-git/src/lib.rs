//! # sprig-git
//!
//! Git operations layer for sprig, built on git2-rs.
//! Wraps the handful of libgit2 calls sprig needs: HEAD resolution,
//! branch creation, symbolic HEAD updates and remote refspec configuration.

mod error;
mod repository;
mod state;
mod traits;

pub use error::{Error, Result};
pub use git2::{Direction, Oid, RepositoryState};
pub use repository::{RemoteInfo, RemoteRefspecs, Repository};
pub use state::{state_code, state_name};
pub use traits::GitOps;
