//! Runtime context for one invocation.
//!
//! The [`RuntimeContext`] holds everything an operation needs besides its
//! collaborators: the resolved function, pick flags, the command template,
//! and the [`ExecutionEnvironment`] used by the shell executor.

use std::env;

use pickgit_config::PickGitConfig;
use pickgit_core::context::PickContext;
use pickgit_core::function::Function;
use pickgit_core::template::CommandTemplate;

use crate::cli::Cli;

/// Shell and startup file used to run composed commands.
///
/// Resolved once in `main` and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionEnvironment {
    /// Shell run as `<shell> [--rcfile <rcfile>] -i -c <command>`. `None`
    /// launches the command directly.
    pub shell: Option<String>,
    /// Startup file, only used when a shell is set.
    pub rcfile: Option<String>,
}

impl ExecutionEnvironment {
    /// Resolve the environment from flags, configuration and `$SHELL`.
    ///
    /// Shell priority: `--shell` flag > configured shell > `SHELL` env > none.
    /// Rc file priority: `--rcfile` flag > configured rc file.
    pub fn resolve(
        flag_shell: Option<&str>,
        configured_shell: Option<&str>,
        flag_rcfile: Option<&str>,
        configured_rcfile: Option<&str>,
    ) -> Self {
        let env_shell = env::var("SHELL").ok();
        Self {
            shell: first_non_empty(&[flag_shell, configured_shell, env_shell.as_deref()]),
            rcfile: first_non_empty(&[flag_rcfile, configured_rcfile]),
        }
    }
}

/// Runtime context passed to every operation.
///
/// Constructed once in `main` after CLI parsing, before dispatch.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// The operation being run.
    pub function: Function,

    /// Pick flags (`--both`, `--show`, `--staged`, `--detailed`).
    pub pick: PickContext,

    /// Trailing command-line arguments.
    pub template: CommandTemplate,

    /// Shell used to execute composed commands.
    pub environment: ExecutionEnvironment,

    /// Whether copies may reach the system clipboard.
    pub copy_enabled: bool,

    /// Separator between tokens copied together.
    pub copy_separator: String,

    /// List reflog entries of all refs.
    pub reflog_all: bool,

    /// Selector command line.
    pub selector: String,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed arguments and loaded config.
    /// Flags win over configuration.
    pub fn new(cli: &Cli, function: Function, config: &PickGitConfig) -> Self {
        Self {
            function,
            pick: PickContext {
                both: cli.both,
                show: cli.show,
                staged: cli.staged,
                detailed: cli.detailed,
            },
            template: CommandTemplate::new(cli.args.clone()),
            environment: ExecutionEnvironment::resolve(
                cli.shell.as_deref(),
                config.shell.as_deref(),
                cli.rcfile.as_deref(),
                config.rcfile.as_deref(),
            ),
            copy_enabled: !(cli.no_copy || config.no_copy),
            copy_separator: config.copy_separator.clone(),
            reflog_all: config.reflog_all,
            selector: config.selector.clone(),
        }
    }
}

fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(|value| value.to_string())
}
