//! Command-line definition and command implementations.

pub mod create;

use clap::{Parser, ValueEnum};
use sprig_core::RefspecStyle;

/// Create a branch at HEAD, switch to it, and register its refspecs on a remote.
#[derive(Debug, Parser)]
#[command(name = "sprig", version, about)]
pub struct Cli {
    /// Name of the branch to create.
    pub branch: String,

    /// Remote to configure instead of the configured one (default: origin).
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// How the push/fetch refspec joins source and destination.
    #[arg(long, value_enum, value_name = "STYLE")]
    pub refspec_style: Option<StyleArg>,

    /// Only print errors.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Command-line spelling of [`RefspecStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// `refs/heads/<b>refs/heads/<b>`
    Concatenated,
    /// `refs/heads/<b>:refs/heads/<b>`
    Mapped,
}

impl From<StyleArg> for RefspecStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Concatenated => Self::Concatenated,
            StyleArg::Mapped => Self::Mapped,
        }
    }
}
