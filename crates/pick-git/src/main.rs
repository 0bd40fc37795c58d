//! `pick-git` -- use a fuzzy finder to turbocharge your Git workflow.
//!
//! Parses the command line, loads configuration, wires the git, selector,
//! clipboard and shell collaborators into a [`Session`], and dispatches to
//! the requested operation.

mod cli;
mod commands;
mod context;
mod session;
mod shell;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use pickgit_config::{config_path, load_config};
use pickgit_core::function::Function;
use pickgit_git::GitCli;
use pickgit_ui::clipboard::Clipboard;
use pickgit_ui::interrupt;
use pickgit_ui::selector::ExternalSelector;
use pickgit_ui::styles::render_fail;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use commands::Outcome;
use context::RuntimeContext;
use session::Session;
use shell::ShellExecutor;

/// Log filter used by `--verbose` unless `PICK_GIT_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "pick_git=debug,pickgit_git=debug,pickgit_ui=debug,pickgit_config=debug";

fn main() {
    // First Ctrl+C cancels the running pick; a second one forces exit.
    let _ = ctrlc::set_handler(|| {
        if interrupt::raise() {
            std::process::exit(1);
        }
    });

    let cli = Cli::parse();

    if cli.verbose {
        let filter = EnvFilter::try_from_env("PICK_GIT_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.completions {
        Some(shell) => commands::completion::run(shell, &mut std::io::stdout()).map(|()| Outcome::Completed),
        None => run(&cli),
    };

    match result {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Cancelled) => debug!("cancelled"),
        Err(e) => {
            eprintln!("{} {:#}", render_fail("Error:"), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let function: Function = cli.function.as_deref().unwrap_or_default().parse()?;

    let config = load_config(config_path().as_deref())?;
    let ctx = RuntimeContext::new(cli, function, &config);
    debug!(?ctx, "runtime context");

    let selector = ExternalSelector::from_command_line(&ctx.selector)?;
    selector.ensure_installed()?;

    let mut clipboard = Clipboard::probe(ctx.copy_enabled);
    let mut executor = ShellExecutor::new(ctx.environment.clone());
    let cwd = std::env::current_dir().context("failed to read the current directory")?;

    let git = GitCli;
    let mut session = Session::new(&git, &selector, &mut clipboard, &mut executor, cwd);
    commands::run(&ctx, &mut session)
}
