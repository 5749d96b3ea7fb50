mod cli;
mod error;
mod git;
mod logging;
mod menu;
mod process;
mod prompt;
mod ssh;
mod storage;
mod switcher;
#[cfg(test)]
mod test_support;
mod user;
mod validation;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use tracing::debug;

use crate::{
    cli::Cli,
    error::AppError,
    git::Scope,
    logging::init_logging,
    menu::{choose_action, run_action},
    process::SystemRunner,
    prompt::InquirePrompter,
    storage::UserStore,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err((context, err)) => {
            eprintln!("{}", format!("{context}: {err}").red());
            ExitCode::FAILURE
        }
    }
}

/// Opens the store, asks for an action and runs it, pairing any error with its context
fn run(cli: Cli) -> Result<(), (&'static str, AppError)> {
    let scope = Scope::from_global_flag(cli.global);
    let mut prompter = InquirePrompter;
    let mut runner = SystemRunner;

    let store = match cli.config_dir {
        Some(dir) => UserStore::open_in(dir),
        None => UserStore::open(),
    };
    let mut store = store.map_err(|err| ("could not open user store", err))?;
    debug!("{} users stored in {}", store.len(), store.path().display());

    let action = choose_action(&mut prompter).map_err(|err| ("could not perform action", err))?;
    let home_dir: Option<PathBuf> = dirs::home_dir();

    run_action(
        action,
        &mut store,
        &mut prompter,
        &mut runner,
        scope,
        home_dir.as_deref(),
    )
    .map_err(|err| (action.failure_context(), err))
}
