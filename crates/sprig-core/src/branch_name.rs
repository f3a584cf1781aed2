//! Branch name validation and newtype.
//!
//! [`BranchName`] rejects names git would refuse as a branch before
//! anything touches the repository.

use std::fmt;

use crate::error::Error;

/// Characters git forbids anywhere in a ref name.
const GIT_FORBIDDEN: &[char] = &[' ', '~', '^', ':', '?', '*', '[', '\\'];

/// Two-character sequences that may not appear in a branch name.
const FORBIDDEN_PAIRS: &[(&str, &str)] = &[
    ("..", "branch name cannot contain '..'"),
    ("//", "branch name cannot contain '//'"),
    ("@{", "branch name cannot contain '@{'"),
    ("/.", "branch name component cannot start with '.'"),
];

/// A validated local branch name such as `feature-x` or `fix/login`.
///
/// # Examples
///
/// ```
/// use sprig_core::BranchName;
///
/// let name = BranchName::new("feature-x").unwrap();
/// assert_eq!(name.ref_name(), "refs/heads/feature-x");
/// assert_eq!(name.upstream_name("origin"), "origin/feature-x");
///
/// assert!(BranchName::new("bad..name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBranchName`] if the name violates git's
    /// ref naming rules.
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        match rejection(&name) {
            Some(reason) => Err(Error::InvalidBranchName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    /// Get the branch name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full reference name, `refs/heads/<name>`.
    #[must_use]
    pub fn ref_name(&self) -> String {
        format!("refs/heads/{}", self.0)
    }

    /// Remote-qualified name, `<remote>/<name>`.
    #[must_use]
    pub fn upstream_name(&self, remote: &str) -> String {
        format!("{remote}/{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Return why `name` is not an acceptable branch name, if it isn't.
fn rejection(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("branch name cannot be empty".into());
    }
    if name == "@" {
        return Some("branch name cannot be '@'".into());
    }
    if name == "HEAD" {
        return Some("branch name cannot be 'HEAD'".into());
    }
    if name.starts_with('.') || name.ends_with('.') {
        return Some("branch name cannot start or end with '.'".into());
    }
    if name.starts_with('-') {
        return Some("branch name cannot start with '-'".into());
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Some("branch name cannot start or end with '/'".into());
    }
    // git's rule is case-sensitive
    #[allow(clippy::case_sensitive_file_extension_comparisons)]
    if name.ends_with(".lock") {
        return Some("branch name cannot end with '.lock'".into());
    }

    if let Some(c) = name.chars().find(char::is_ascii_control) {
        return Some(format!(
            "branch name cannot contain control character {:#04x}",
            u32::from(c)
        ));
    }
    if let Some(c) = name.chars().find(|c| GIT_FORBIDDEN.contains(c)) {
        return Some(format!("branch name cannot contain '{c}'"));
    }

    FORBIDDEN_PAIRS
        .iter()
        .find(|(pair, _)| name.contains(pair))
        .map(|(_, reason)| (*reason).to_string())
}
