//! sprig CLI - create a branch at HEAD and register its refspecs on a remote.

use clap::Parser;

mod commands;
mod output;
mod services;

use commands::Cli;

fn main() {
    env_logger::builder().parse_env("SPRIG_LOG").init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version keep clap's behaviour; usage errors exit 1
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            e.print().ok();
            std::process::exit(1);
        }
    };

    output::set_quiet(cli.quiet);

    if let Err(e) = commands::create::run(&cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
