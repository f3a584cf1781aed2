//! `sprig <branch>` - create a branch at HEAD and wire it to a remote.

use anyhow::{Context, Result};
use log::debug;
use sprig_core::{BranchName, Config};
use sprig_git::Repository;

use super::Cli;
use crate::output;
use crate::services::{CreateBranchService, CreateOptions};

/// Run the create command.
pub fn run(cli: &Cli) -> Result<()> {
    let branch = BranchName::new(cli.branch.as_str())?;

    // Open repository
    let repo = Repository::open_current().context("Not inside a git repository")?;
    debug!("opened {repo:?}");

    let config = Config::load_for(repo.git_dir()).context("Failed to load sprig config")?;
    let options = resolve_options(cli, &config);
    debug!("options: {options:?}");

    let service = CreateBranchService::new(&repo);
    let outcome = service.create(&branch, &options)?;

    output::info(&format!(
        "{} at {}, tracking name {}",
        outcome.refname,
        output::short_oid(outcome.target),
        outcome.upstream_name
    ));
    let url = outcome.remote.url.as_deref().unwrap_or("<no url>");
    match outcome.remote_refspec_count {
        Some(count) => output::info(&format!(
            "Added {} to '{}' ({url}), {count} refspecs configured",
            outcome.refspec, outcome.remote.name
        )),
        None => output::info(&format!(
            "Added {} to '{}' ({url})",
            outcome.refspec, outcome.remote.name
        )),
    }
    output::success("Branch created");

    Ok(())
}

/// Command-line flags win over the config file, which wins over defaults.
fn resolve_options(cli: &Cli, config: &Config) -> CreateOptions {
    let mut options = CreateOptions::from(config);
    if let Some(remote) = &cli.remote {
        options.remote.clone_from(remote);
    }
    if let Some(style) = cli.refspec_style {
        options.refspec_style = style.into();
    }
    options
}
