//! Entity Listers: the read-only git commands that produce candidates.
//!
//! A [`Lister`] only describes a command; [`Lister::list`] runs it through a
//! [`Git`] implementation and normalizes the output into a
//! [`CandidateList`].

use std::path::Path;

use pickgit_core::candidates::CandidateList;
use pickgit_core::entity::EntityKind;

use crate::commands::{Git, Result};

/// Format of one commit line: short hash first, so the hash is the first
/// whitespace-delimited field.
pub const COMMIT_FORMAT: &str = "--pretty=format:%h %ad | %s%d [%an]";

/// The revisions a modified-file listing compares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiffRange {
    /// The working tree against the index (or HEAD against the index with
    /// `--staged`).
    #[default]
    WorkingTree,
    /// One revision against the working tree.
    Against(String),
    /// Two revisions against each other.
    Between(String, String),
}

impl DiffRange {
    /// Build a range from zero, one or two endpoints. Endpoints past the
    /// second are ignored.
    pub fn from_endpoints<S: AsRef<str>>(endpoints: &[S]) -> Self {
        match endpoints {
            [] => Self::WorkingTree,
            [a] => Self::Against(a.as_ref().to_string()),
            [a, b, ..] => Self::Between(a.as_ref().to_string(), b.as_ref().to_string()),
        }
    }

    fn endpoints(&self) -> Vec<String> {
        match self {
            Self::WorkingTree => Vec::new(),
            Self::Against(a) => vec![a.clone()],
            Self::Between(a, b) => vec![a.clone(), b.clone()],
        }
    }
}

/// A git command that lists one kind of entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lister {
    /// `git branch -a`
    Branches { extra: Vec<String> },
    /// `git tag -l`
    Tags { extra: Vec<String> },
    /// `git log --pretty=format:"%h %ad | %s%d [%an]" --date=short`
    Commits { extra: Vec<String> },
    /// `git reflog [--all] --date=short`
    Reflog { all: bool, extra: Vec<String> },
    /// `git diff --name-only [--staged] [a] [b]`
    ModifiedFiles { staged: bool, range: DiffRange },
    /// `git ls-tree -r <branch> --name-only`
    TrackedFiles { branch: String, extra: Vec<String> },
}

impl Lister {
    /// The kind of entity this listing produces.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Branches { .. } => EntityKind::Branch,
            Self::Tags { .. } => EntityKind::Tag,
            Self::Commits { .. } => EntityKind::Commit,
            Self::Reflog { .. } => EntityKind::ReflogCommit,
            Self::ModifiedFiles { .. } => EntityKind::ModifiedFile,
            Self::TrackedFiles { .. } => EntityKind::TrackedFile,
        }
    }

    /// The full git argument list, without the leading `git`.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();
        match self {
            Self::Branches { extra } => {
                args.extend(["branch".into(), "-a".into()]);
                args.extend(extra.iter().cloned());
            }
            Self::Tags { extra } => {
                args.extend(["tag".into(), "-l".into()]);
                args.extend(extra.iter().cloned());
            }
            Self::Commits { extra } => {
                args.extend(["log".into(), COMMIT_FORMAT.into(), "--date=short".into()]);
                args.extend(extra.iter().cloned());
            }
            Self::Reflog { all, extra } => {
                args.push("reflog".into());
                if *all {
                    args.push("--all".into());
                }
                args.push("--date=short".into());
                args.extend(extra.iter().cloned());
            }
            Self::ModifiedFiles { staged, range } => {
                args.extend(["diff".into(), "--name-only".into()]);
                if *staged {
                    args.push("--staged".into());
                }
                args.extend(range.endpoints());
            }
            Self::TrackedFiles { branch, extra } => {
                args.extend(["ls-tree".into(), "-r".into(), branch.clone(), "--name-only".into()]);
                args.extend(extra.iter().cloned());
            }
        }
        args
    }

    /// Run the listing.
    ///
    /// # Errors
    ///
    /// Any git failure is returned as is; a failed listing never yields a
    /// partial candidate list.
    pub fn list(&self, git: &dyn Git, cwd: &Path) -> Result<CandidateList> {
        let output = git.output(&self.args(), cwd)?;
        Ok(CandidateList::from_output(output))
    }
}
