//! Clap CLI definitions for the `pick-git` command.

use clap::{ArgAction, Parser};
use clap_complete::Shell;
use pickgit_core::function::Function;

/// pick-git -- use a fuzzy finder to turbocharge your Git workflow.
///
/// Pick a branch, tag, commit, reflog entry or file, then copy it or pass it
/// to a command.
#[derive(Parser, Debug)]
#[command(
    name = "pick-git",
    about = "Use a fuzzy finder to turbocharge your Git workflow",
    long_about = "Pick a branch, tag, commit, reflog entry or file with a fuzzy finder. \
                  Without ARGS the selection is copied to the clipboard; with ARGS the \
                  selection is appended to them and the command is run in your shell.",
    version,
    disable_version_flag = true,
    after_help = functions_help()
)]
pub struct Cli {
    /// Function to invoke (see FUNCTIONS below).
    #[arg(
        short = 'f',
        long,
        value_name = "NAME",
        required_unless_present = "completions"
    )]
    pub function: Option<String>,

    /// Pick both branches, tags, commits, or files, where appropriate.
    #[arg(short = 'b', long)]
    pub both: bool,

    /// Show file instead of diffing it, where appropriate.
    #[arg(short = 'S', long)]
    pub show: bool,

    /// Diff staged files, where appropriate.
    #[arg(short = 's', long)]
    pub staged: bool,

    /// Show detail of commits instead of just count, when invoking branch_compare.
    #[arg(short = 'd', long)]
    pub detailed: bool,

    /// Disable automatic copying of branch names, commit hashes, file names, etc.
    #[arg(short = 'n', long = "nocopy")]
    pub no_copy: bool,

    /// Shell invoked interactively to run commands (default: $SHELL).
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<String>,

    /// Startup file passed to the shell with --rcfile.
    #[arg(long, value_name = "RCFILE")]
    pub rcfile: Option<String>,

    /// Enable debug logging on stderr.
    #[arg(long)]
    pub verbose: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL", value_enum, exclusive = true)]
    pub completions: Option<Shell>,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Command template, or extra git arguments for the *_file functions.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// The FUNCTIONS section appended to `--help`.
fn functions_help() -> String {
    let width = Function::ALL
        .iter()
        .map(|f| f.name().len())
        .max()
        .unwrap_or(0);
    let mut help = String::from("FUNCTIONS:\n");
    for function in Function::ALL {
        help.push_str(&format!(
            "  {:<width$}  {}\n",
            function.name(),
            function.description()
        ));
    }
    help
}
