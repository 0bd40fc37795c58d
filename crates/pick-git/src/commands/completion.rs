//! `pick-git --completions <SHELL>` -- generate shell completions.

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write the completion script for `shell` to `out`.
pub fn run(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "pick-git", out);
    out.flush()?;
    Ok(())
}
