//! # sprig-core
//!
//! Domain types for sprig: validated branch names, refspec construction
//! and the on-disk configuration.

pub mod branch_name;
pub mod config;
pub mod error;
pub mod refspec;

pub use branch_name::BranchName;
pub use config::Config;
pub use error::{Error, Result};
pub use refspec::{Refspec, RefspecStyle};
