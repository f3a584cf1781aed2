//! Refspec construction for newly created branches.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::branch_name::BranchName;

/// How the source and destination halves of a branch refspec are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefspecStyle {
    /// `refs/heads/<b>refs/heads/<b>`, no separator.
    #[default]
    Concatenated,
    /// `refs/heads/<b>:refs/heads/<b>`, a proper `src:dst` mapping.
    Mapped,
}

impl RefspecStyle {
    const fn separator(self) -> &'static str {
        match self {
            Self::Concatenated => "",
            Self::Mapped => ":",
        }
    }
}

/// A refspec string registered on a remote for one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refspec(String);

impl Refspec {
    /// Build the refspec mapping `branch` onto the same name on the remote.
    #[must_use]
    pub fn for_branch(branch: &BranchName, style: RefspecStyle) -> Self {
        let refname = branch.ref_name();
        Self(format!("{refname}{}{refname}", style.separator()))
    }

    /// Get the refspec as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Refspec {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Refspec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
