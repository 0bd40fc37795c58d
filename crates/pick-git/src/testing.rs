//! In-memory collaborators for exercising operations without git, a
//! terminal or a clipboard.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use clap::Parser;
use pickgit_config::PickGitConfig;
use pickgit_core::candidates::CandidateList;
use pickgit_core::function::Function;
use pickgit_core::template::ShellCommand;
use pickgit_git::{Git, GitError};
use pickgit_ui::clipboard::Clip;
use pickgit_ui::interrupt;
use pickgit_ui::selector::Select;

use crate::cli::Cli;
use crate::commands::{self, Outcome};
use crate::context::RuntimeContext;
use crate::session::Session;
use crate::shell::Execute;

/// Directory the harness starts in; `rev-parse --show-toplevel` fixtures
/// usually answer `/repo`.
pub const START_DIR: &str = "/repo/sub";

static INTERRUPT_FLAG: Mutex<()> = Mutex::new(());

/// Serializes tests whose git calls fail or get interrupted: both read or
/// raise the process-wide interrupt flag.
pub fn lock_interrupt_flag() -> MutexGuard<'static, ()> {
    INTERRUPT_FLAG.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ---------------------------------------------------------------------------
// Git
// ---------------------------------------------------------------------------

/// Answers git commands from canned output keyed by the space-joined
/// argument list. Unknown commands fail like a real non-zero git exit.
#[derive(Default)]
pub struct FakeGit {
    responses: HashMap<String, String>,
    interrupts: HashSet<String>,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, args: &str, output: &str) -> Self {
        self.responses.insert(args.to_string(), output.to_string());
        self
    }

    pub fn with_args<S: AsRef<str>>(self, args: &[S], output: &str) -> Self {
        let key = args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        self.with(&key, output)
    }

    /// Make `args` behave like git killed by Ctrl+C: the interrupt flag is
    /// raised and the command fails without an exit code.
    pub fn interrupt_on(mut self, args: &str) -> Self {
        self.interrupts.insert(args.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }

    pub fn calls_matching(&self, args: &str) -> usize {
        self.calls.borrow().iter().filter(|(a, _)| a == args).count()
    }
}

impl Git for FakeGit {
    fn output(&self, args: &[String], cwd: &Path) -> pickgit_git::Result<String> {
        let key = args.join(" ");
        self.calls.borrow_mut().push((key.clone(), cwd.to_path_buf()));
        if self.interrupts.contains(&key) {
            interrupt::raise();
            return Err(GitError::CommandFailed {
                args: key,
                code: None,
                stderr: String::new(),
            });
        }
        self.responses
            .get(&key)
            .cloned()
            .ok_or(GitError::CommandFailed {
                args: key,
                code: Some(128),
                stderr: "fatal: unexpected command".to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// One scripted selector run.
#[derive(Debug, Clone, Copy)]
pub enum Choice {
    /// Pick the first candidate line containing this text.
    Line(&'static str),
    /// Abort the selector.
    Cancel,
}

/// Plays back a fixed sequence of choices and records what it was shown.
#[derive(Default)]
pub struct ScriptedSelector {
    script: RefCell<VecDeque<Choice>>,
    seen: RefCell<Vec<String>>,
}

impl ScriptedSelector {
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: RefCell::new(choices.into_iter().collect()),
            seen: RefCell::default(),
        }
    }

    /// Candidate lists shown so far, in order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl Select for ScriptedSelector {
    fn select(&self, candidates: &CandidateList) -> pickgit_ui::selector::Result<Option<String>> {
        self.seen.borrow_mut().push(candidates.as_str().to_string());
        let choice = self
            .script
            .borrow_mut()
            .pop_front()
            .expect("selector ran more often than scripted");
        Ok(match choice {
            Choice::Cancel => None,
            Choice::Line(needle) => {
                let line = candidates
                    .lines()
                    .find(|line| line.contains(needle))
                    .unwrap_or_else(|| panic!("no candidate contains {needle:?}"));
                Some(format!("{line}\n"))
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Clipboard and executor
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub copies: Vec<String>,
}

impl Clip for RecordingClipboard {
    fn copy(&mut self, text: &str) {
        self.copies.push(text.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub commands: Vec<(ShellCommand, PathBuf)>,
}

impl Execute for RecordingExecutor {
    fn execute(&mut self, command: &ShellCommand, cwd: &Path) -> anyhow::Result<()> {
        self.commands.push((command.clone(), cwd.to_path_buf()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

/// Runs a full command line against the fakes above.
#[derive(Default)]
pub struct Harness {
    git: FakeGit,
    selector: ScriptedSelector,
    clipboard: RecordingClipboard,
    executor: RecordingExecutor,
    config: PickGitConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn git(mut self, args: &str, output: &str) -> Self {
        self.git = self.git.with(args, output);
        self
    }

    pub fn git_args(mut self, args: &[&str], output: &str) -> Self {
        self.git = self.git.with_args(args, output);
        self
    }

    pub fn interrupt_on(mut self, args: &str) -> Self {
        self.git = self.git.interrupt_on(args);
        self
    }

    pub fn choose(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.selector = ScriptedSelector::new(choices);
        self
    }

    pub fn reflog_all(mut self) -> Self {
        self.config.reflog_all = true;
        self
    }

    /// Parse `argv` (without the program name) and run the operation.
    pub fn run(&mut self, argv: &[&str]) -> anyhow::Result<Outcome> {
        let cli = Cli::try_parse_from(std::iter::once("pick-git").chain(argv.iter().copied()))?;
        let function: Function = cli.function.as_deref().unwrap_or_default().parse()?;
        let ctx = RuntimeContext::new(&cli, function, &self.config);

        let mut session = Session::new(
            &self.git,
            &self.selector,
            &mut self.clipboard,
            &mut self.executor,
            START_DIR,
        );
        commands::run(&ctx, &mut session)
    }

    pub fn copied(&self) -> Vec<String> {
        self.clipboard.copies.clone()
    }

    /// Rendered command lines, in execution order.
    pub fn executed(&self) -> Vec<String> {
        self.executor.commands.iter().map(|(c, _)| c.render()).collect()
    }

    /// Working directory of each executed command.
    pub fn executed_in(&self) -> Vec<PathBuf> {
        self.executor.commands.iter().map(|(_, cwd)| cwd.clone()).collect()
    }

    pub fn git_calls(&self) -> Vec<(String, PathBuf)> {
        self.git.calls()
    }

    pub fn git_calls_matching(&self, args: &str) -> usize {
        self.git.calls_matching(args)
    }

    pub fn git_cwds(&self) -> Vec<PathBuf> {
        self.git.calls().into_iter().map(|(_, cwd)| cwd).collect()
    }
}
