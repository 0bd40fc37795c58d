//! The Shell Executor: prints a composed command and runs it.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use pickgit_core::template::ShellCommand;
use pickgit_ui::styles::render_command;
use tracing::{debug, info};

use crate::context::ExecutionEnvironment;

/// Runs [`ShellCommand::Literal`] lines when no shell is configured.
const FALLBACK_SHELL: &str = "sh";

/// Something that runs composed commands.
pub trait Execute {
    /// Run `command` with `cwd` as working directory and wait for it.
    ///
    /// The child's exit status is not inspected.
    fn execute(&mut self, command: &ShellCommand, cwd: &Path) -> Result<()>;
}

/// Runs commands through an interactive shell, so aliases and functions
/// from the user's startup files are available. Without a shell, word
/// commands are launched directly and literal lines go to `sh -c`.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    environment: ExecutionEnvironment,
}

impl ShellExecutor {
    pub fn new(environment: ExecutionEnvironment) -> Self {
        Self { environment }
    }

    /// Build the child process for `command` without starting it.
    pub fn build(&self, command: &ShellCommand, cwd: &Path) -> Result<Command> {
        let mut child = match &self.environment.shell {
            Some(shell) => {
                let mut child = Command::new(shell);
                if let Some(rcfile) = &self.environment.rcfile {
                    child.arg("--rcfile").arg(rcfile);
                }
                child.arg("-i").arg("-c").arg(command.render());
                child
            }
            None => match command {
                ShellCommand::Words(words) => {
                    let Some((program, args)) = words.split_first() else {
                        bail!("refusing to run an empty command");
                    };
                    let mut child = Command::new(program);
                    child.args(args);
                    child
                }
                // Shell syntax such as `&&` still needs a shell.
                ShellCommand::Literal(line) => {
                    let mut child = Command::new(FALLBACK_SHELL);
                    child.arg("-c").arg(line);
                    child
                }
            },
        };
        child.current_dir(cwd);
        Ok(child)
    }
}

impl Execute for ShellExecutor {
    fn execute(&mut self, command: &ShellCommand, cwd: &Path) -> Result<()> {
        let line = command.render();
        println!("{}", render_command(&line));

        let mut child = self.build(command, cwd)?;
        info!(command = %line, shell = ?self.environment.shell, "executing");

        let status = child
            .status()
            .with_context(|| format!("failed to run `{line}`"))?;
        debug!(code = ?status.code(), "command finished");
        Ok(())
    }
}
