//! Configuration management for sprig.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::refspec::RefspecStyle;

/// sprig configuration loaded from .git/sprig/config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Refspec settings.
    #[serde(default)]
    pub refspec: RefspecConfig,
}

impl Config {
    /// Location of the config file inside a git directory.
    #[must_use]
    pub fn path_in(git_dir: &Path) -> PathBuf {
        git_dir.join("sprig").join("config.toml")
    }

    /// Load config from a TOML file.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config belonging to the repository at `git_dir`.
    ///
    /// # Errors
    /// Returns error if the file exists but can't be read or parsed.
    pub fn load_for(git_dir: &Path) -> Result<Self> {
        Self::load(Self::path_in(git_dir))
    }

    /// Save config to a TOML file, creating parent directories.
    ///
    /// # Errors
    /// Returns error if serialization or write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| std::io::Error::other(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General sprig settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Remote that receives the new branch's refspecs.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Reflog message recorded when HEAD moves to the new branch.
    #[serde(default = "default_reflog_message")]
    pub reflog_message: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            reflog_message: default_reflog_message(),
        }
    }
}

fn default_remote() -> String {
    "origin".into()
}

fn default_reflog_message() -> String {
    "Switching to new branch".into()
}

/// Refspec settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefspecConfig {
    /// How source and destination are joined.
    #[serde(default)]
    pub style: RefspecStyle,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.remote, "origin");
        assert_eq!(config.general.reflog_message, "Switching to new branch");
        assert_eq!(config.refspec.style, RefspecStyle::Concatenated);
    }

    #[test]
    fn test_config_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = Config::path_in(temp.path());

        let config = Config {
            general: GeneralConfig {
                remote: "upstream".into(),
                reflog_message: "sprig: new branch".into(),
            },
            refspec: RefspecConfig {
                style: RefspecStyle::Mapped,
            },
        };

        config.save(&path).unwrap();
        let loaded = Config::load_for(temp.path()).unwrap();

        assert_eq!(loaded.general.remote, "upstream");
        assert_eq!(loaded.general.reflog_message, "sprig: new branch");
        assert_eq!(loaded.refspec.style, RefspecStyle::Mapped);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[refspec]\nstyle = \"mapped\"\n").unwrap();
        assert_eq!(config.general.remote, "origin");
        assert_eq!(config.refspec.style, RefspecStyle::Mapped);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[refspec]\nstyle = \"colon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_returns_default() {
        let config = Config::load("/nonexistent/path/config.toml").unwrap();
        assert_eq!(config.general.remote, "origin");
    }
}
