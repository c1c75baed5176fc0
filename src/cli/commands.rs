//! Command execution: load settings, wire services, run the dispatcher

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }

    let path = cli
        .path
        .as_deref()
        .ok_or_else(|| CliError::Usage("missing <PATH> argument".into()))?;

    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);

    let container = ServiceContainer::new(settings);
    let outcome = container.dispatcher().run(path)?;
    debug!("outcome: {:?}", outcome);
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
