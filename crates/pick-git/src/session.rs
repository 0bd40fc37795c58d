//! The per-invocation session: collaborators, working directory, and the
//! Selection Functions built on top of them.
//!
//! Every pick goes through [`Session::pick`]: list candidates with git,
//! hand them to the selector, and parse the chosen line into a token.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pickgit_core::template::ShellCommand;
use pickgit_core::token::PickOutcome;
use pickgit_git::Git;
use pickgit_git::gitdir::{current_branch, repository_root};
use pickgit_git::listers::{DiffRange, Lister};
use pickgit_ui::clipboard::Clip;
use pickgit_ui::interrupt;
use pickgit_ui::selector::Select;
use tracing::{debug, info};

use crate::shell::Execute;

// ---------------------------------------------------------------------------
// Working directory
// ---------------------------------------------------------------------------

/// Directory in which git and the final command run.
///
/// Starts as the invoking directory; [`Workdir::enter_repository_root`]
/// moves it to the repository root at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workdir {
    path: PathBuf,
    at_root: bool,
}

impl Workdir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            at_root: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move to the repository root. Later calls are no-ops.
    ///
    /// Returns `None`, leaving the directory unchanged, when Ctrl+C
    /// interrupted the lookup.
    pub fn enter_repository_root(&mut self, git: &dyn Git) -> Result<Option<&Path>> {
        if !self.at_root {
            let Some(root) = unless_interrupted(repository_root(git, &self.path))
                .context("failed to locate the repository root")?
            else {
                return Ok(None);
            };
            info!(from = %self.path.display(), to = %root.display(), "entering repository root");
            self.path = root;
            self.at_root = true;
        }
        Ok(Some(&self.path))
    }
}

/// Treat a git failure caused by Ctrl+C as a cancellation.
///
/// The interrupt also reaches git, which then dies from the signal; the
/// raised flag tells that apart from a genuine failure.
fn unless_interrupted<T>(result: pickgit_git::Result<T>) -> pickgit_git::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if interrupt::take() => {
            debug!(error = %e, "git interrupted");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Collaborators and state for one invocation.
pub struct Session<'a> {
    git: &'a dyn Git,
    selector: &'a dyn Select,
    clipboard: &'a mut dyn Clip,
    executor: &'a mut dyn Execute,
    workdir: Workdir,
}

impl<'a> Session<'a> {
    pub fn new(
        git: &'a dyn Git,
        selector: &'a dyn Select,
        clipboard: &'a mut dyn Clip,
        executor: &'a mut dyn Execute,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            git,
            selector,
            clipboard,
            executor,
            workdir: Workdir::new(cwd),
        }
    }

    /// See [`Workdir::enter_repository_root`]. Returns `false` if the
    /// lookup was interrupted.
    pub fn enter_repository_root(&mut self) -> Result<bool> {
        Ok(self.workdir.enter_repository_root(self.git)?.is_some())
    }

    /// Name of the checked-out branch, or `None` if interrupted.
    pub fn current_branch(&self) -> Result<Option<String>> {
        unless_interrupted(current_branch(self.git, self.workdir.path()))
            .context("failed to read the current branch")
    }

    /// Copy `text` to the clipboard (a no-op when it is unavailable).
    pub fn copy(&mut self, text: &str) {
        self.clipboard.copy(text);
    }

    /// Hand `command` to the shell executor.
    pub fn execute(&mut self, command: &ShellCommand) -> Result<()> {
        self.executor.execute(command, self.workdir.path())
    }

    // -----------------------------------------------------------------------
    // Interactive Picker
    // -----------------------------------------------------------------------

    /// List candidates with `lister`, let the user choose one, and extract
    /// the Selection Token.
    ///
    /// # Errors
    ///
    /// A failing git command or selector is fatal. A cancelled selection,
    /// or a listing cut short by Ctrl+C, is not an error; it comes back as
    /// [`PickOutcome::Cancelled`].
    pub fn pick(&self, lister: &Lister) -> Result<PickOutcome> {
        let kind = lister.kind();
        let Some(candidates) = unless_interrupted(lister.list(self.git, self.workdir.path()))
            .with_context(|| format!("failed to list {kind} candidates"))?
        else {
            return Ok(PickOutcome::Cancelled);
        };

        let outcome = match self.selector.select(&candidates)? {
            Some(selected) => kind.parse_selection(&selected),
            None => PickOutcome::Cancelled,
        };
        debug!(%kind, ?outcome, "pick finished");
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Selection Functions
    // -----------------------------------------------------------------------

    /// Pick a branch, local or remote.
    pub fn pick_branch(&self) -> Result<PickOutcome> {
        self.pick(&Lister::Branches { extra: Vec::new() })
    }

    /// Pick a local tag.
    pub fn pick_tag(&self) -> Result<PickOutcome> {
        self.pick(&Lister::Tags { extra: Vec::new() })
    }

    /// Pick a commit hash from `git log`, narrowed by `extra` log arguments.
    pub fn pick_commit(&self, extra: &[&str]) -> Result<PickOutcome> {
        self.pick(&Lister::Commits {
            extra: extra.iter().map(|a| a.to_string()).collect(),
        })
    }

    /// Pick a commit hash from the reflog.
    pub fn pick_commit_reflog(&self, all: bool) -> Result<PickOutcome> {
        self.pick(&Lister::Reflog {
            all,
            extra: Vec::new(),
        })
    }

    /// Pick a file whose state differs between zero, one or two
    /// `endpoints` (working tree, one revision, or two revisions).
    pub fn pick_modified_file(&self, staged: bool, endpoints: &[&str]) -> Result<PickOutcome> {
        self.pick(&Lister::ModifiedFiles {
            staged,
            range: DiffRange::from_endpoints(endpoints),
        })
    }

    /// Pick a file tracked on the current branch.
    pub fn pick_file(&self) -> Result<PickOutcome> {
        let Some(branch) = self.current_branch()? else {
            return Ok(PickOutcome::Cancelled);
        };
        self.pick(&Lister::TrackedFiles {
            branch,
            extra: Vec::new(),
        })
    }
}
